#![allow(dead_code)]

use automapper::prelude::*;

/// `EMP`: numeric key, one textual column, one insert timestamp.
pub fn emp() -> Table {
    Table::new(
        "EMP",
        vec![
            ColumnDescriptor::new("EMP_ID", "NUMBER").primary(),
            ColumnDescriptor::new("EMP_NAME", "VARCHAR2(50)").with_comment("성명"),
            ColumnDescriptor::new("INSERT_DTS", "DATE"),
        ],
    )
}

/// `CM_CODE`: composite textual key plus every audit column.
pub fn cm_code() -> Table {
    Table::new(
        "CM_CODE",
        vec![
            ColumnDescriptor::new("GRP_CD", "VARCHAR2(10)").primary(),
            ColumnDescriptor::new("CD", "CHAR(3)").primary(),
            ColumnDescriptor::new("CD_NM", "NVARCHAR2(100)"),
            ColumnDescriptor::new("SORT_ORD", "NUMBER(3)"),
            ColumnDescriptor::new("INSERT_ID", "VARCHAR2(20)"),
            ColumnDescriptor::new("INSERT_IP", "VARCHAR2(40)"),
            ColumnDescriptor::new("INSERT_MCADDR_NM", "VARCHAR2(40)"),
            ColumnDescriptor::new("INSERT_DTS", "DATE"),
            ColumnDescriptor::new("UPDATE_ID", "VARCHAR2(20)"),
            ColumnDescriptor::new("UPDATE_IP", "VARCHAR2(40)"),
            ColumnDescriptor::new("UPDATE_MCADDR_NM", "VARCHAR2(40)"),
            ColumnDescriptor::new("UPDATE_DTS", "DATE"),
        ],
    )
}

/// Every combination of the three generation switches.
pub fn all_flags() -> Vec<GenerationFlags> {
    let mut out = Vec::new();
    for update_guards in [false, true] {
        for where_guards in [false, true] {
            for style in [ParamStyle::Model, ParamStyle::HashMap] {
                out.push(GenerationFlags::new(update_guards, where_guards, style));
            }
        }
    }
    out
}

/// Text between `open` and `close` (exclusive) in `haystack`.
pub fn section<'a>(haystack: &'a str, open: &str, close: &str) -> &'a str {
    let start = haystack.find(open).expect("open marker") + open.len();
    let end = start + haystack[start..].find(close).expect("close marker");
    &haystack[start..end]
}

/// Every `#{...}` token in `text`, in order.
pub fn bind_tokens(text: &str) -> Vec<&str> {
    text.split("#{")
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(token, _)| token))
        .collect()
}
