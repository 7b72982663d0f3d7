//! CLI command implementations
//!
//! Each command module implements a specific automapper CLI command.

pub mod check;
pub mod generate;
pub mod tables;
