//! Statement generation engine for MyBatis mapper XML.
//!
//! Turns a table's column metadata into SELECT / INSERT / UPDATE / DELETE statement
//! elements. Everything here is a pure function of its input: no I/O, no shared state.
//!
//! - [`naming`] - column name to bind token
//! - [`audit`] - the audit-column rule table
//! - [`guard`] - `<if>` presence guards
//! - [`layout`] - fixed-width list layout
//! - [`statement`] - the four assemblers and the shared primary-key predicate
//! - [`mapper`] - composition of the four statements

pub mod audit;
pub mod guard;
pub mod layout;
pub mod mapper;
pub mod naming;
pub mod statement;
mod trace;

pub use mapper::{MapperGenerator, generate};
pub use statement::{Delete, Insert, Select, Statement, StatementKind, Update};
