/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Schema-driven parsing for programmatic SBOR JSON value trees.
//!
//! This crate exposes a composable schema algebra describing expected value
//! shapes (primitives, tuples, named-field structs, arrays, maps, enums,
//! options) and a validating parser that walks a decoded, dynamically-typed
//! SBOR JSON tree against a schema, producing either a structurally-typed
//! [`Parsed`] result or a [`SborError`] pinpointing the exact path that
//! failed.
//!
//! # Examples
//! ```
//! use sbor_schema::{s, Parsed, SborValue};
//!
//! let node = SborValue::from_json_str(
//!     r#"{
//!         "kind": "Tuple",
//!         "fields": [
//!             { "kind": "String", "value": "hello", "field_name": "greeting" },
//!             { "kind": "U32", "value": "5", "field_name": "count" }
//!         ]
//!     }"#,
//! )
//! .expect("decode");
//!
//! let schema = s::struct_of([
//!     ("greeting", s::string()),
//!     ("count", s::number()),
//! ]);
//!
//! let parsed = schema.parse(&node).expect("parse");
//! assert_eq!(parsed.field("greeting").and_then(Parsed::as_str), Some("hello"));
//! assert_eq!(parsed.field("count").and_then(Parsed::as_i64), Some(5));
//! ```

mod error;

pub mod parse;
pub mod parsed;
pub mod path;
pub mod schema;
pub mod value;

pub use error::{SborError, SborResult};
pub use parse::ParseOptions;
pub use parsed::{Parsed, ParsedEntry, ParsedEnum, ParsedField};
pub use path::{Path, PathSegment};
pub use schema::{s, Field, Schema, Variant};
pub use value::{Kind, SborBody, SborMapEntry, SborValue};
