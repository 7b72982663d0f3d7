use automapper_types::{GenerationFlags, Table};

use super::{BODY_INDENT, Statement, StatementKind};
use crate::audit;
use crate::layout::LineLayout;

/// `INSERT` every non-exempt column.
pub struct Insert;

impl Statement for Insert {
    const KIND: StatementKind = StatementKind::Insert;

    fn write_body(out: &mut String, table: &Table, flags: GenerationFlags) {
        let (columns, values): (Vec<&str>, Vec<String>) = table
            .columns
            .iter()
            .filter_map(|column| {
                audit::classify(&column.name)
                    .insert_value(&column.name, flags.param_style)
                    .map(|value| (column.name.as_str(), value.to_string()))
            })
            .unzip();

        let layout = LineLayout::default();

        out.push_str(&format!("{BODY_INDENT}INSERT INTO {}\n", table.name));
        out.push_str(&format!("{BODY_INDENT}( \n"));
        out.push_str(&layout.render(&columns));
        out.push('\n');
        out.push_str(&format!("{BODY_INDENT})\n"));
        out.push_str(&format!("{BODY_INDENT}VALUES\n"));
        out.push_str(&format!("{BODY_INDENT}(\n"));
        out.push_str(&layout.render(&values));
        out.push('\n');
        out.push_str(&format!("{BODY_INDENT})\n"));
    }
}
