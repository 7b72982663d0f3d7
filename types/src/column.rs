use crate::TypeClass;

#[cfg(feature = "serde")]
use crate::serde_helpers::{empty_as_none, primary_key_flag};

/// One table column as reported by the metadata provider.
///
/// Immutable once built; the generator only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColumnDescriptor {
    /// Column name, unique within its table.
    #[cfg_attr(feature = "serde", serde(alias = "columnName", alias = "column_name"))]
    pub name: String,

    /// Column comment, if any.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "columnComments",
            alias = "column_comments",
            deserialize_with = "empty_as_none"
        )
    )]
    pub comment: Option<String>,

    /// Data type text, e.g. `VARCHAR2(50)`.
    #[cfg_attr(feature = "serde", serde(default, alias = "data_type"))]
    pub data_type: String,

    /// Is the column part of the primary key?
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "primary_key", deserialize_with = "primary_key_flag")
    )]
    pub primary_key: bool,
}

impl ColumnDescriptor {
    /// Create a non-key column without a comment.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            data_type: data_type.into(),
            primary_key: false,
        }
    }

    /// Mark the column as part of the primary key.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Attach a comment. Empty comments are dropped.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.comment = (!comment.is_empty()).then_some(comment);
        self
    }

    /// The comment, if present and non-empty.
    #[inline]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    #[inline]
    pub fn type_class(&self) -> TypeClass {
        TypeClass::of(&self.data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let col = ColumnDescriptor::new("EMP_ID", "NUMBER")
            .primary()
            .with_comment("employee id");
        assert!(col.primary_key);
        assert_eq!(col.comment(), Some("employee id"));
        assert_eq!(col.type_class(), TypeClass::NonTextual);
    }

    #[test]
    fn empty_comment_is_absent() {
        let col = ColumnDescriptor::new("EMP_NAME", "VARCHAR2(50)").with_comment("");
        assert_eq!(col.comment, None);

        let raw = ColumnDescriptor {
            comment: Some(String::new()),
            ..col
        };
        assert_eq!(raw.comment(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_dictionary_row() {
        let col: ColumnDescriptor = serde_json::from_str(
            r#"{
                "columnName": "EMP_ID",
                "columnComments": "",
                "dataType": "NUMBER",
                "primaryKey": "Y"
            }"#,
        )
        .unwrap();
        assert_eq!(col.name, "EMP_ID");
        assert_eq!(col.comment, None);
        assert!(col.primary_key);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_snake_case_and_bool_key() {
        let col: ColumnDescriptor = serde_json::from_str(
            r#"{ "column_name": "EMP_NAME", "data_type": "VARCHAR2(50)", "primary_key": false }"#,
        )
        .unwrap();
        assert_eq!(col.name, "EMP_NAME");
        assert!(!col.primary_key);

        let col: ColumnDescriptor =
            serde_json::from_str(r#"{ "name": "X", "primaryKey": "N" }"#).unwrap();
        assert!(!col.primary_key);
        assert_eq!(col.data_type, "");
    }
}
