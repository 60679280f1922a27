use std::time::SystemTime;

use num_bigint::BigInt;

use crate::value::SborValue;

/// Output of a successful parse.
///
/// The tree mirrors the schema composition exactly: tuples and arrays
/// become ordered sequences, structs become name-keyed field lists, enums
/// become a variant tag plus payload, maps keep their source entry order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    String(String),
    Bool(bool),
    Number(i64),
    BigNumber(BigInt),
    /// Fixed-point decimal kept as its source digit string.
    Decimal(String),
    Address(String),
    InternalAddress(String),
    NonFungibleLocalId(String),
    Instant(SystemTime),
    Bytes(Vec<u8>),
    /// Unparsed node from a passthrough schema.
    Raw(SborValue),
    Tuple(Vec<Parsed>),
    Struct(Vec<ParsedField>),
    Array(Vec<Parsed>),
    Map(Vec<ParsedEntry>),
    Enum(ParsedEnum),
    Option(Option<Box<Parsed>>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedField {
    pub name: String,
    pub value: Parsed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEntry {
    pub key: Parsed,
    pub value: Parsed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEnum {
    pub variant: String,
    pub value: Box<Parsed>,
}

impl Parsed {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Parsed::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Parsed::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Parsed::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_big(&self) -> Option<&BigInt> {
        match self {
            Parsed::BigNumber(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&str> {
        match self {
            Parsed::Decimal(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&str> {
        match self {
            Parsed::Address(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_internal_address(&self) -> Option<&str> {
        match self {
            Parsed::InternalAddress(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_non_fungible_local_id(&self) -> Option<&str> {
        match self {
            Parsed::NonFungibleLocalId(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<SystemTime> {
        match self {
            Parsed::Instant(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Parsed::Bytes(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&SborValue> {
        match self {
            Parsed::Raw(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Parsed]> {
        match self {
            Parsed::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&[ParsedField]> {
        match self {
            Parsed::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a struct field by name.
    pub fn field(&self, name: &str) -> Option<&Parsed> {
        self.as_struct()?
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    pub fn as_array(&self) -> Option<&[Parsed]> {
        match self {
            Parsed::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[ParsedEntry]> {
        match self {
            Parsed::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&ParsedEnum> {
        match self {
            Parsed::Enum(value) => Some(value),
            _ => None,
        }
    }

    /// `Some(Some(_))` for a `Some` payload, `Some(None)` for `None`, and
    /// `None` when this is not an option at all.
    pub fn as_option(&self) -> Option<Option<&Parsed>> {
        match self {
            Parsed::Option(inner) => Some(inner.as_deref()),
            _ => None,
        }
    }
}
