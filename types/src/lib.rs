//! Shared type definitions for automapper
//!
//! This crate provides the data model consumed by the statement generator:
//!
//! - [`ColumnDescriptor`] - One column as reported by the Oracle data dictionary
//! - [`Table`] - A table name plus its columns in dictionary order
//! - [`GenerationFlags`] and [`ParamStyle`] - Per-call generation switches
//! - [`TypeClass`] - Textual / non-textual classification of a column data type
//!
//! # Features
//!
//! - `serde` - Deserialize columns and tables from exported column catalogs

mod column;
mod flags;
pub mod serde_helpers;
mod table;
mod type_class;

pub use column::ColumnDescriptor;
pub use flags::{GenerationFlags, ParamStyle, ParamStyleParseError};
pub use table::Table;
pub use type_class::TypeClass;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{ColumnDescriptor, GenerationFlags, ParamStyle, Table, TypeClass};
}
