use automapper_types::{ColumnDescriptor, GenerationFlags, Table};

use super::{BODY_INDENT, Statement, StatementKind, predicate_block};

/// Width the column name is padded to in the select list.
pub const SELECT_COLUMN_WIDTH: usize = 25;

/// `SELECT` every column by primary key.
pub struct Select;

impl Statement for Select {
    const KIND: StatementKind = StatementKind::Select;

    fn write_body(out: &mut String, table: &Table, flags: GenerationFlags) {
        for (i, column) in table.columns.iter().enumerate() {
            let lead = if i == 0 { "SELECT " } else { "     , " };
            out.push_str(BODY_INDENT);
            out.push_str(lead);
            out.push_str(&format!(
                "{:<width$}",
                column.name,
                width = SELECT_COLUMN_WIDTH
            ));
            if let Some(comment) = inline_comment(column) {
                out.push_str(" --");
                out.push_str(&comment);
            }
            out.push('\n');
        }

        out.push_str(&format!("{BODY_INDENT}  FROM {}\n", table.name));
        out.push_str(&predicate_block(table, flags));
    }
}

/// Column comment made safe for a single-line SQL comment inside XML text.
fn inline_comment(column: &ColumnDescriptor) -> Option<String> {
    let comment = column.comment()?;
    let flat = comment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if flat.is_empty() {
        return None;
    }
    Some(flat.replace('&', "&amp;").replace('<', "&lt;"))
}
