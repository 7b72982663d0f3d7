//! Mapper composition.

use automapper_types::{GenerationFlags, Table};

use crate::statement::StatementKind;

/// Generates the four CRUD statements for a table.
///
/// Holds nothing but the flags; safe to share across threads and reuse for any
/// number of tables.
///
/// # Examples
///
/// ```
/// use automapper_core::MapperGenerator;
/// use automapper_types::{ColumnDescriptor, GenerationFlags, Table};
///
/// let table = Table::new("EMP", vec![ColumnDescriptor::new("EMP_ID", "NUMBER").primary()]);
/// let mapper = MapperGenerator::new(GenerationFlags::default()).generate(&table);
///
/// assert!(mapper.starts_with("    <select id=\"select\""));
/// assert!(mapper.ends_with("    </delete>\n"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapperGenerator {
    flags: GenerationFlags,
}

/// Separator between statements: one blank line.
const STATEMENT_SEPARATOR: &str = "\n\n";

impl MapperGenerator {
    pub const fn new(flags: GenerationFlags) -> Self {
        Self { flags }
    }

    #[inline]
    pub const fn flags(&self) -> GenerationFlags {
        self.flags
    }

    /// SELECT, INSERT, UPDATE and DELETE, in that order.
    ///
    /// An empty column list or a table without primary key is not rejected. Callers
    /// should refuse to generate for the former; the latter produces UPDATE and DELETE
    /// statements without predicates.
    pub fn statements(&self, table: &Table) -> [String; 4] {
        crate::automapper_trace_generate!(table.name, table.columns.len(), self.flags);
        if table.primary_keys().next().is_none() {
            crate::automapper_trace_unkeyed!(table.name);
        }
        StatementKind::ALL.map(|kind| kind.render(table, self.flags))
    }

    /// All four statements joined by blank lines, with a trailing newline.
    pub fn generate(&self, table: &Table) -> String {
        let mut out = self.statements(table).join(STATEMENT_SEPARATOR);
        out.push('\n');
        out
    }
}

/// Shorthand for [`MapperGenerator::generate`].
pub fn generate(table: &Table, flags: GenerationFlags) -> String {
    MapperGenerator::new(flags).generate(table)
}
