use crate::value::Kind;

/// Immutable description of one accepted value shape.
///
/// Schemas compose strictly by value and are built bottom-up, so a schema
/// constructed once may be shared freely across threads and reused for any
/// number of parse invocations.
#[derive(Clone, Debug)]
pub enum Schema {
    String,
    Bool,
    Number,
    BigNumber,
    Decimal,
    Address,
    InternalAddress,
    NonFungibleLocalId,
    Instant,
    Bytes,
    /// Accepts any node and returns it unparsed.
    Any,
    /// Positional matching: field names on the source tuple are ignored.
    Tuple(Vec<Schema>),
    /// Name-keyed matching over the same physical tuple shape.
    Struct(Vec<Field>),
    Array(Box<Schema>),
    Map {
        key: Box<Schema>,
        value: Box<Schema>,
    },
    Enum(Vec<Variant>),
    /// Two-variant enum sugar: `None` with an empty payload, `Some`
    /// wrapping a single inner value.
    Option(Box<Schema>),
}

#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
}

/// One declared alternative of an enum schema. The payload must be a tuple
/// or struct schema; the matched variant's field list is parsed against it.
#[derive(Clone, Debug)]
pub struct Variant {
    pub name: String,
    pub payload: Schema,
}

const INTEGER_KINDS: &[Kind] = &[
    Kind::I8,
    Kind::I16,
    Kind::I32,
    Kind::I64,
    Kind::I128,
    Kind::U8,
    Kind::U16,
    Kind::U32,
    Kind::U64,
    Kind::U128,
];

const ALL_KINDS: &[Kind] = &[
    Kind::Bool,
    Kind::I8,
    Kind::I16,
    Kind::I32,
    Kind::I64,
    Kind::I128,
    Kind::U8,
    Kind::U16,
    Kind::U32,
    Kind::U64,
    Kind::U128,
    Kind::String,
    Kind::Enum,
    Kind::Array,
    Kind::Bytes,
    Kind::Map,
    Kind::Tuple,
    Kind::Reference,
    Kind::Own,
    Kind::Decimal,
    Kind::PreciseDecimal,
    Kind::NonFungibleLocalId,
];

impl Schema {
    /// The set of node kinds this schema accepts at its root.
    pub fn accepted_kinds(&self) -> &'static [Kind] {
        match self {
            Schema::String => &[Kind::String],
            Schema::Bool => &[Kind::Bool],
            Schema::Number | Schema::BigNumber => INTEGER_KINDS,
            Schema::Decimal => &[Kind::Decimal, Kind::PreciseDecimal],
            Schema::Address => &[Kind::Reference],
            Schema::InternalAddress => &[Kind::Own],
            Schema::NonFungibleLocalId => &[Kind::NonFungibleLocalId],
            Schema::Instant => &[Kind::I64],
            Schema::Bytes => &[Kind::Bytes],
            Schema::Any => ALL_KINDS,
            Schema::Tuple(_) | Schema::Struct(_) => &[Kind::Tuple],
            Schema::Array(_) => &[Kind::Array],
            Schema::Map { .. } => &[Kind::Map],
            Schema::Enum(_) | Schema::Option(_) => &[Kind::Enum],
        }
    }
}

/// Factory namespace assembling schemas ergonomically.
///
/// ```
/// use sbor_schema::s;
///
/// let schema = s::struct_of([
///     ("owner", s::address()),
///     ("amount", s::decimal()),
///     ("memo", s::option(s::string())),
/// ]);
/// ```
pub mod s {
    use super::{Field, Schema, Variant};

    pub fn string() -> Schema {
        Schema::String
    }

    pub fn boolean() -> Schema {
        Schema::Bool
    }

    /// Integer schema narrowing to `i64`; out-of-range values fail.
    pub fn number() -> Schema {
        Schema::Number
    }

    /// Lossless integer schema for values beyond `i64`, e.g. `I128`/`U128`.
    pub fn big_number() -> Schema {
        Schema::BigNumber
    }

    /// Accepts `Decimal` and `PreciseDecimal`; the digit string is kept
    /// verbatim and never routed through floating point.
    pub fn decimal() -> Schema {
        Schema::Decimal
    }

    pub fn address() -> Schema {
        Schema::Address
    }

    pub fn internal_address() -> Schema {
        Schema::InternalAddress
    }

    pub fn non_fungible_local_id() -> Schema {
        Schema::NonFungibleLocalId
    }

    /// `I64` epoch seconds (type-named `Instant` upstream) as a
    /// `SystemTime`.
    pub fn instant() -> Schema {
        Schema::Instant
    }

    pub fn bytes() -> Schema {
        Schema::Bytes
    }

    /// Passthrough schema accepting any node and returning it unparsed.
    pub fn value() -> Schema {
        Schema::Any
    }

    pub fn tuple<I>(items: I) -> Schema
    where
        I: IntoIterator<Item = Schema>,
    {
        Schema::Tuple(items.into_iter().collect())
    }

    pub fn struct_of<N, I>(fields: I) -> Schema
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Schema)>,
    {
        Schema::Struct(
            fields
                .into_iter()
                .map(|(name, schema)| Field {
                    name: name.into(),
                    schema,
                })
                .collect(),
        )
    }

    pub fn array(element: Schema) -> Schema {
        Schema::Array(Box::new(element))
    }

    pub fn map(key: Schema, value: Schema) -> Schema {
        Schema::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn enum_of<N, I>(variants: I) -> Schema
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Schema)>,
    {
        Schema::Enum(
            variants
                .into_iter()
                .map(|(name, payload)| Variant {
                    name: name.into(),
                    payload,
                })
                .collect(),
        )
    }

    pub fn option(inner: Schema) -> Schema {
        Schema::Option(Box::new(inner))
    }
}
