use std::time::{Duration, UNIX_EPOCH};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::{SborError, SborResult};
use crate::parsed::{Parsed, ParsedEntry, ParsedEnum, ParsedField};
use crate::path::{Path, PathSegment};
use crate::schema::{Field, Schema};
use crate::value::{Kind, SborBody, SborValue};

/// Knobs for a single parse invocation.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Maximum nesting depth accepted before parsing fails with
    /// [`SborError::TooDeep`]. Bounds stack growth on untrusted trees.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

impl ParseOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Schema {
    /// Validate `value` against this schema and produce the parsed result.
    ///
    /// Descent is fail-fast: the first mismatch aborts and reports the path
    /// to the offending node. There is no partial or best-effort output;
    /// callers needing tolerance for absent subtrees mark them with
    /// [`crate::s::option`] in the schema instead.
    pub fn parse(&self, value: &SborValue) -> SborResult<Parsed> {
        self.parse_with_options(value, ParseOptions::default())
    }

    pub fn parse_with_options(
        &self,
        value: &SborValue,
        options: ParseOptions,
    ) -> SborResult<Parsed> {
        let mut walker = Walker {
            path: Vec::new(),
            options,
        };
        walker.parse(self, value, 0)
    }

    /// Parse a value that may be absent, as when a consumer unwraps
    /// optional upstream data. `None` fails with [`SborError::Empty`].
    pub fn parse_optional(&self, value: Option<&SborValue>) -> SborResult<Parsed> {
        match value {
            Some(value) => self.parse(value),
            None => Err(SborError::Empty),
        }
    }
}

/// Recursive-descent state: the accumulating error path and the depth
/// bound. No backtracking happens, so segments pushed before a failure are
/// simply abandoned with the walker.
struct Walker {
    path: Vec<PathSegment>,
    options: ParseOptions,
}

impl Walker {
    fn current_path(&self) -> Path {
        Path::from(self.path.clone())
    }

    fn kind_mismatch(&self, expected: &'static [Kind], actual: Kind) -> SborError {
        SborError::KindMismatch {
            expected,
            actual,
            path: self.current_path(),
        }
    }

    fn parse(&mut self, schema: &Schema, value: &SborValue, depth: usize) -> SborResult<Parsed> {
        if depth > self.options.max_depth {
            return Err(SborError::TooDeep {
                limit: self.options.max_depth,
                path: self.current_path(),
            });
        }
        match (schema, &value.body) {
            (Schema::String, SborBody::String { value }) => Ok(Parsed::String(value.clone())),
            (Schema::Bool, SborBody::Bool { value }) => Ok(Parsed::Bool(*value)),
            (Schema::Number, body) => {
                let Some(literal) = body.integer_literal() else {
                    return Err(self.kind_mismatch(schema.accepted_kinds(), body.kind()));
                };
                let big = self.parse_integer(literal)?;
                match big.to_i64() {
                    Some(narrow) => Ok(Parsed::Number(narrow)),
                    None => Err(SborError::NumberOutOfRange {
                        value: literal.to_string(),
                        path: self.current_path(),
                    }),
                }
            }
            (Schema::BigNumber, body) => {
                let Some(literal) = body.integer_literal() else {
                    return Err(self.kind_mismatch(schema.accepted_kinds(), body.kind()));
                };
                Ok(Parsed::BigNumber(self.parse_integer(literal)?))
            }
            (
                Schema::Decimal,
                SborBody::Decimal { value } | SborBody::PreciseDecimal { value },
            ) => Ok(Parsed::Decimal(value.clone())),
            (Schema::Address, SborBody::Reference { value }) => {
                Ok(Parsed::Address(value.clone()))
            }
            (Schema::InternalAddress, SborBody::Own { value }) => {
                Ok(Parsed::InternalAddress(value.clone()))
            }
            (Schema::NonFungibleLocalId, SborBody::NonFungibleLocalId { value }) => {
                Ok(Parsed::NonFungibleLocalId(value.clone()))
            }
            (Schema::Instant, SborBody::I64 { value }) => {
                let seconds =
                    value
                        .parse::<i64>()
                        .map_err(|_| SborError::InvalidNumber {
                            value: value.clone(),
                            path: self.current_path(),
                        })?;
                let instant = if seconds >= 0 {
                    UNIX_EPOCH.checked_add(Duration::from_secs(seconds as u64))
                } else {
                    UNIX_EPOCH.checked_sub(Duration::from_secs(seconds.unsigned_abs()))
                };
                match instant {
                    Some(instant) => Ok(Parsed::Instant(instant)),
                    None => Err(SborError::NumberOutOfRange {
                        value: value.clone(),
                        path: self.current_path(),
                    }),
                }
            }
            (Schema::Bytes, SborBody::Bytes { hex: payload, .. }) => match hex::decode(payload) {
                Ok(bytes) => Ok(Parsed::Bytes(bytes)),
                Err(source) => Err(SborError::InvalidHex {
                    path: self.current_path(),
                    source,
                }),
            },
            (Schema::Any, _) => Ok(Parsed::Raw(value.clone())),
            (Schema::Tuple(items), SborBody::Tuple { fields }) => {
                Ok(Parsed::Tuple(self.parse_ordered(items, fields, depth)?))
            }
            (Schema::Struct(decl), SborBody::Tuple { fields }) => {
                Ok(Parsed::Struct(self.parse_named(decl, fields, depth)?))
            }
            (Schema::Array(element), SborBody::Array { elements, .. }) => {
                let mut out = Vec::with_capacity(elements.len());
                for (index, node) in elements.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    let parsed = self.parse(element, node, depth + 1)?;
                    self.path.pop();
                    out.push(parsed);
                }
                Ok(Parsed::Array(out))
            }
            (Schema::Map { key, value: val }, SborBody::Map { entries, .. }) => {
                // Source order preserved; duplicate keys are the caller's
                // schema-level concern.
                let mut out = Vec::with_capacity(entries.len());
                for (index, entry) in entries.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    let parsed_key = self.parse(key, &entry.key, depth + 1)?;
                    let parsed_value = self.parse(val, &entry.value, depth + 1)?;
                    self.path.pop();
                    out.push(ParsedEntry {
                        key: parsed_key,
                        value: parsed_value,
                    });
                }
                Ok(Parsed::Map(out))
            }
            (
                Schema::Enum(variants),
                SborBody::Enum {
                    variant_name,
                    fields,
                    ..
                },
            ) => {
                // Dispatch is strictly by variant name, never by ordinal.
                let Some(variant) = variants.iter().find(|v| v.name == *variant_name) else {
                    return Err(SborError::UnknownVariant {
                        variant: variant_name.clone(),
                        expected: variants.iter().map(|v| v.name.clone()).collect(),
                        path: self.current_path(),
                    });
                };
                self.path.push(PathSegment::Field(variant.name.clone()));
                let payload = match &variant.payload {
                    Schema::Tuple(items) => {
                        Parsed::Tuple(self.parse_ordered(items, fields, depth)?)
                    }
                    Schema::Struct(decl) => {
                        Parsed::Struct(self.parse_named(decl, fields, depth)?)
                    }
                    other => {
                        return Err(SborError::InvalidSchema(format!(
                            "variant '{}' payload must be a tuple or struct schema, got {other:?}",
                            variant.name
                        )))
                    }
                };
                self.path.pop();
                Ok(Parsed::Enum(ParsedEnum {
                    variant: variant.name.clone(),
                    value: Box::new(payload),
                }))
            }
            (
                Schema::Option(inner),
                SborBody::Enum {
                    variant_name,
                    fields,
                    ..
                },
            ) => match variant_name.as_str() {
                "None" => {
                    if !fields.is_empty() {
                        return Err(SborError::ArityMismatch {
                            expected: 0,
                            actual: fields.len(),
                            path: self.current_path(),
                        });
                    }
                    Ok(Parsed::Option(None))
                }
                "Some" => {
                    if fields.len() != 1 {
                        return Err(SborError::ArityMismatch {
                            expected: 1,
                            actual: fields.len(),
                            path: self.current_path(),
                        });
                    }
                    let parsed = self.parse(inner, &fields[0], depth + 1)?;
                    Ok(Parsed::Option(Some(Box::new(parsed))))
                }
                other => Err(SborError::UnknownVariant {
                    variant: other.to_string(),
                    expected: vec!["None".to_string(), "Some".to_string()],
                    path: self.current_path(),
                }),
            },
            (schema, body) => Err(self.kind_mismatch(schema.accepted_kinds(), body.kind())),
        }
    }

    fn parse_integer(&self, literal: &str) -> SborResult<BigInt> {
        literal.parse::<BigInt>().map_err(|_| SborError::InvalidNumber {
            value: literal.to_string(),
            path: self.current_path(),
        })
    }

    fn parse_ordered(
        &mut self,
        items: &[Schema],
        fields: &[SborValue],
        depth: usize,
    ) -> SborResult<Vec<Parsed>> {
        if items.len() != fields.len() {
            return Err(SborError::ArityMismatch {
                expected: items.len(),
                actual: fields.len(),
                path: self.current_path(),
            });
        }
        let mut out = Vec::with_capacity(items.len());
        for (index, (schema, field)) in items.iter().zip(fields).enumerate() {
            self.path.push(PathSegment::Index(index));
            let parsed = self.parse(schema, field, depth + 1)?;
            self.path.pop();
            out.push(parsed);
        }
        Ok(out)
    }

    fn parse_named(
        &mut self,
        decl: &[Field],
        fields: &[SborValue],
        depth: usize,
    ) -> SborResult<Vec<ParsedField>> {
        // Phase one: resolve every declared name so all missing fields are
        // reported in a single error. Undeclared extras are ignored.
        let mut missing = Vec::new();
        let mut matched = Vec::with_capacity(decl.len());
        for field in decl {
            let node = fields
                .iter()
                .find(|f| f.field_name.as_deref() == Some(field.name.as_str()));
            match node {
                Some(node) => matched.push((field, node)),
                None => missing.push(field.name.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(SborError::MissingFields {
                missing,
                path: self.current_path(),
            });
        }
        let mut out = Vec::with_capacity(matched.len());
        for (field, node) in matched {
            self.path.push(PathSegment::Field(field.name.clone()));
            let parsed = self.parse(&field.schema, node, depth + 1)?;
            self.path.pop();
            out.push(ParsedField {
                name: field.name.clone(),
                value: parsed,
            });
        }
        Ok(out)
    }
}
