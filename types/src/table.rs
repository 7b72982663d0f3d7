use crate::ColumnDescriptor;

/// A table name plus its columns in metadata order.
///
/// Rendering order always equals the order of [`Table::columns`]; nothing in the
/// generator reorders columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Table {
    #[cfg_attr(feature = "serde", serde(alias = "tableName", alias = "table_nm"))]
    pub name: String,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "tableComments",
            alias = "table_comments",
            deserialize_with = "crate::serde_helpers::empty_as_none"
        )
    )]
    pub comment: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub columns: Vec<ColumnDescriptor>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            columns,
        }
    }

    /// Primary-key columns, in column order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
