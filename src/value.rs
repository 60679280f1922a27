use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::SborResult;

/// Discriminant tag identifying a value node's shape.
///
/// The set is closed and exhaustive: every consumer matches on it totally,
/// so adding a kind is a deliberate breaking change that forces all call
/// sites to be revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    String,
    Enum,
    Array,
    Bytes,
    Map,
    Tuple,
    Reference,
    Own,
    Decimal,
    PreciseDecimal,
    NonFungibleLocalId,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "Bool",
            Kind::I8 => "I8",
            Kind::I16 => "I16",
            Kind::I32 => "I32",
            Kind::I64 => "I64",
            Kind::I128 => "I128",
            Kind::U8 => "U8",
            Kind::U16 => "U16",
            Kind::U32 => "U32",
            Kind::U64 => "U64",
            Kind::U128 => "U128",
            Kind::String => "String",
            Kind::Enum => "Enum",
            Kind::Array => "Array",
            Kind::Bytes => "Bytes",
            Kind::Map => "Map",
            Kind::Tuple => "Tuple",
            Kind::Reference => "Reference",
            Kind::Own => "Own",
            Kind::Decimal => "Decimal",
            Kind::PreciseDecimal => "PreciseDecimal",
            Kind::NonFungibleLocalId => "NonFungibleLocalId",
        }
    }

    /// True for the ten string-encoded integer kinds.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Kind::I8
                | Kind::I16
                | Kind::I32
                | Kind::I64
                | Kind::I128
                | Kind::U8
                | Kind::U16
                | Kind::U32
                | Kind::U64
                | Kind::U128
        )
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key/value pair of a `Map` node. Entries keep their source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SborMapEntry {
    pub key: SborValue,
    pub value: SborValue,
}

/// A decoded programmatic SBOR JSON node.
///
/// Every node carries optional upstream metadata (`type_name` from the
/// ledger's type annotations, `field_name` when the node sits inside a
/// struct-like tuple) and a kind-tagged body. The serde representation
/// matches the wire JSON exactly: metadata keys live next to `kind` on the
/// same object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SborValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(flatten)]
    pub body: SborBody,
}

/// Kind-tagged payload of a node.
///
/// `kind` fully determines which payload shape is present; the enum makes a
/// disagreement unrepresentable. All numeric and decimal payloads are
/// string-encoded to preserve arbitrary precision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SborBody {
    Bool {
        value: bool,
    },
    I8 {
        value: String,
    },
    I16 {
        value: String,
    },
    I32 {
        value: String,
    },
    I64 {
        value: String,
    },
    I128 {
        value: String,
    },
    U8 {
        value: String,
    },
    U16 {
        value: String,
    },
    U32 {
        value: String,
    },
    U64 {
        value: String,
    },
    U128 {
        value: String,
    },
    String {
        value: String,
    },
    Enum {
        variant_id: String,
        variant_name: String,
        #[serde(default)]
        fields: Vec<SborValue>,
    },
    Array {
        element_kind: Kind,
        #[serde(default)]
        elements: Vec<SborValue>,
    },
    Bytes {
        element_kind: Kind,
        hex: String,
    },
    Map {
        key_kind: Kind,
        value_kind: Kind,
        #[serde(default)]
        entries: Vec<SborMapEntry>,
    },
    Tuple {
        #[serde(default)]
        fields: Vec<SborValue>,
    },
    Reference {
        value: String,
    },
    Own {
        value: String,
    },
    Decimal {
        value: String,
    },
    PreciseDecimal {
        value: String,
    },
    NonFungibleLocalId {
        value: String,
    },
}

impl SborValue {
    /// Deserialize a node from its wire JSON representation.
    pub fn from_json_str(input: &str) -> SborResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn kind(&self) -> Kind {
        self.body.kind()
    }
}

impl SborBody {
    pub fn kind(&self) -> Kind {
        match self {
            SborBody::Bool { .. } => Kind::Bool,
            SborBody::I8 { .. } => Kind::I8,
            SborBody::I16 { .. } => Kind::I16,
            SborBody::I32 { .. } => Kind::I32,
            SborBody::I64 { .. } => Kind::I64,
            SborBody::I128 { .. } => Kind::I128,
            SborBody::U8 { .. } => Kind::U8,
            SborBody::U16 { .. } => Kind::U16,
            SborBody::U32 { .. } => Kind::U32,
            SborBody::U64 { .. } => Kind::U64,
            SborBody::U128 { .. } => Kind::U128,
            SborBody::String { .. } => Kind::String,
            SborBody::Enum { .. } => Kind::Enum,
            SborBody::Array { .. } => Kind::Array,
            SborBody::Bytes { .. } => Kind::Bytes,
            SborBody::Map { .. } => Kind::Map,
            SborBody::Tuple { .. } => Kind::Tuple,
            SborBody::Reference { .. } => Kind::Reference,
            SborBody::Own { .. } => Kind::Own,
            SborBody::Decimal { .. } => Kind::Decimal,
            SborBody::PreciseDecimal { .. } => Kind::PreciseDecimal,
            SborBody::NonFungibleLocalId { .. } => Kind::NonFungibleLocalId,
        }
    }

    /// String payload of the integer kinds; `None` for anything else.
    pub fn integer_literal(&self) -> Option<&str> {
        match self {
            SborBody::I8 { value }
            | SborBody::I16 { value }
            | SborBody::I32 { value }
            | SborBody::I64 { value }
            | SborBody::I128 { value }
            | SborBody::U8 { value }
            | SborBody::U16 { value }
            | SborBody::U32 { value }
            | SborBody::U64 { value }
            | SborBody::U128 { value } => Some(value),
            _ => None,
        }
    }
}
