use automapper_types::{GenerationFlags, Table};

use super::{BODY_INDENT, Statement, StatementKind, predicate_block};

/// `DELETE` by primary key.
pub struct Delete;

impl Statement for Delete {
    const KIND: StatementKind = StatementKind::Delete;

    fn write_body(out: &mut String, table: &Table, flags: GenerationFlags) {
        out.push_str(&format!("{BODY_INDENT}DELETE FROM {}\n", table.name));
        out.push_str(&predicate_block(table, flags));
    }
}
