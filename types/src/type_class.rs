//! Data type classification
//!
//! Oracle reports data types as free text (`VARCHAR2(50)`, `NUMBER(10,2)`, `DATE`, ...).
//! The generator only needs to know whether a value can be an empty string.

/// Data type prefixes treated as character data.
const TEXTUAL_PREFIXES: &[&str] = &["VARCHAR", "CHAR", "NVARCHAR"];

/// Classification of a column data type.
///
/// # Examples
///
/// ```
/// use automapper_types::TypeClass;
///
/// assert_eq!(TypeClass::of("VARCHAR2(50)"), TypeClass::Textual);
/// assert_eq!(TypeClass::of("NUMBER"), TypeClass::NonTextual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Character data: may be null or empty.
    Textual,
    /// Anything else, including unknown or malformed type names.
    NonTextual,
}

impl TypeClass {
    /// Classify a data type by case-sensitive prefix.
    #[must_use]
    pub fn of(data_type: &str) -> Self {
        if TEXTUAL_PREFIXES
            .iter()
            .any(|prefix| data_type.starts_with(prefix))
        {
            Self::Textual
        } else {
            Self::NonTextual
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Textual)
    }
}
