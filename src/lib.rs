//! # automapper
//!
//! Generates MyBatis mapper statements (SELECT / INSERT / UPDATE / DELETE) from the
//! column metadata of an Oracle table.
//!
//! ## Quick Start
//!
//! ```rust
//! use automapper::prelude::*;
//!
//! let table = Table::new(
//!     "EMP",
//!     vec![
//!         ColumnDescriptor::new("EMP_ID", "NUMBER").primary(),
//!         ColumnDescriptor::new("EMP_NAME", "VARCHAR2(50)").with_comment("name"),
//!         ColumnDescriptor::new("INSERT_DTS", "DATE"),
//!     ],
//! );
//!
//! let flags = GenerationFlags::default().with_where_guards(true);
//! let mapper = MapperGenerator::new(flags).generate(&table);
//!
//! assert!(mapper.contains("<if test=\"emp_id != null\">"));
//! assert!(mapper.contains("FN_TODATE(#{P_CM_SYSDATE})"));
//! ```
//!
//! ## Audit columns
//!
//! | Column | INSERT | UPDATE |
//! |--------|--------|--------|
//! | `INSERT_IP`, `INSERT_MCADDR_NM`, `UPDATE_IP`, `UPDATE_MCADDR_NM` | omitted | omitted |
//! | `INSERT_ID` | `#{P_INSERT_ID}` | omitted |
//! | `*INSERT_DTS` | `FN_TODATE(#{P_CM_SYSDATE})` | omitted |
//! | `UPDATE_ID` | `#{P_UPDATE_ID}` | always `#{P_UPDATE_ID}` |
//! | `UPDATE_DTS` | `FN_TODATE(#{P_CM_SYSDATE})` | always `FN_TODATE(#{P_CM_SYSDATE})` |
//!
//! ## Features
//!
//! - `serde` - deserialize tables from exported column catalogs
//! - `tracing` - emit generation events through `tracing`

pub use automapper_core as engine;
pub use automapper_types as types;

pub use automapper_core::{
    Delete, Insert, MapperGenerator, Select, Statement, StatementKind, Update, audit, generate,
    guard, layout, naming,
};
pub use automapper_types::{ColumnDescriptor, GenerationFlags, ParamStyle, Table, TypeClass};

/// Commonly used items.
pub mod prelude {
    pub use automapper_core::{MapperGenerator, Statement, StatementKind, generate};
    pub use automapper_types::prelude::*;
}
