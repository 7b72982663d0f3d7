use automapper_types::{GenerationFlags, Table};

use super::{BODY_INDENT, Statement, StatementKind, predicate_block};
use crate::audit;
use crate::guard::ConditionalClause;
use crate::layout::LIST_INDENT;
use crate::naming;

/// Width the column name is padded to in a SET assignment.
pub const ASSIGNMENT_COLUMN_WIDTH: usize = 20;

/// Indent of the `<set>` element and its assignments.
pub const SET_INDENT: &str = LIST_INDENT;

/// `UPDATE` ordinary columns by primary key, stamping the update audit columns.
pub struct Update;

impl Statement for Update {
    const KIND: StatementKind = StatementKind::Update;

    fn write_body(out: &mut String, table: &Table, flags: GenerationFlags) {
        out.push_str(&format!("{BODY_INDENT}UPDATE {}\n", table.name));
        out.push_str(BODY_INDENT);
        out.push('\n');
        out.push_str(&set_block(table, flags));
        out.push_str(BODY_INDENT);
        out.push('\n');
        out.push_str(&predicate_block(table, flags));
    }
}

fn set_block(table: &Table, flags: GenerationFlags) -> String {
    let guard = ConditionalClause::new(flags.update_guards);
    let mut out = format!("{SET_INDENT}<set>\n");

    let updatable = table
        .columns
        .iter()
        .filter(|c| !c.primary_key && audit::classify(&c.name).is_updatable());

    for column in updatable {
        let token = naming::resolve(&column.name, flags.param_style);
        let body = assignment(&column.name, &naming::placeholder(&token));
        out.push_str(SET_INDENT);
        out.push_str(&guard.inline(&token, &column.data_type, &body));
        out.push('\n');
    }

    for (column, value) in audit::forced_update_assignments() {
        out.push_str(SET_INDENT);
        out.push_str(&assignment(column, &value.to_string()));
        out.push('\n');
    }

    out.push_str(SET_INDENT);
    out.push_str("</set>\n");
    out
}

fn assignment(column: &str, value: &str) -> String {
    format!(
        "{column:<width$}= {value},",
        width = ASSIGNMENT_COLUMN_WIDTH
    )
}
