//! Statement assemblers.
//!
//! Each assembler turns a [`Table`] and [`GenerationFlags`] into one MyBatis statement
//! element. Assemblers are independent pure functions; none depends on another having
//! run first.

mod delete;
mod insert;
mod predicate;
mod select;
mod update;

use core::fmt;

use automapper_types::{GenerationFlags, ParamStyle, Table};

pub use delete::Delete;
pub use insert::Insert;
pub use predicate::{PREDICATE_COLUMN_WIDTH, predicate_block};
pub use select::{SELECT_COLUMN_WIDTH, Select};
pub use update::{ASSIGNMENT_COLUMN_WIDTH, SET_INDENT, Update};

/// Indent of the statement element tags.
pub const TAG_INDENT: &str = "    ";
/// Indent of statement body lines.
pub const BODY_INDENT: &str = "        ";

/// The four generated statement kinds, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub const ALL: [StatementKind; 4] = [Self::Select, Self::Insert, Self::Update, Self::Delete];

    /// Element name, also used as the statement `id`.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Only `<select>` maps a result.
    #[inline]
    pub const fn has_result_type(self) -> bool {
        matches!(self, Self::Select)
    }

    /// Render this kind of statement.
    pub fn render(self, table: &Table, flags: GenerationFlags) -> String {
        match self {
            Self::Select => Select::render(table, flags),
            Self::Insert => Insert::render(table, flags),
            Self::Update => Update::render(table, flags),
            Self::Delete => Delete::render(table, flags),
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statement assembler.
pub trait Statement {
    const KIND: StatementKind;

    /// Append the body lines between the opening and closing tags.
    fn write_body(out: &mut String, table: &Table, flags: GenerationFlags);

    /// Render the complete element, without leading or trailing newline.
    fn render(table: &Table, flags: GenerationFlags) -> String {
        let mut out = String::new();
        open_element(&mut out, Self::KIND, flags.param_style);
        Self::write_body(&mut out, table, flags);
        close_element(&mut out, Self::KIND);
        crate::automapper_trace_statement!(Self::KIND, out.len());
        out
    }
}

/// Result type mapped by `<select>`.
const RESULT_TYPE: &str = "Model";

fn open_element(out: &mut String, kind: StatementKind, style: ParamStyle) {
    let name = kind.as_str();
    out.push_str(&format!(
        "{TAG_INDENT}<{name} id=\"{name}\" parameterType=\"{}\"",
        style.parameter_type()
    ));
    if kind.has_result_type() {
        out.push_str(&format!(" resultType=\"{RESULT_TYPE}\""));
    }
    out.push_str(">\n");
    out.push_str(BODY_INDENT);
    out.push('\n');
}

fn close_element(out: &mut String, kind: StatementKind) {
    out.push_str(BODY_INDENT);
    out.push('\n');
    out.push_str(&format!("{TAG_INDENT}</{}>", kind.as_str()));
}
