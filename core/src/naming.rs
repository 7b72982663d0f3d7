//! Bind-parameter naming.

use automapper_types::ParamStyle;

/// Prefix used for parameter map keys.
pub const MAP_KEY_PREFIX: &str = "P_";

/// Resolve the bind token for a column.
///
/// - [`ParamStyle::Model`]: the lowercased column name (`EMP_ID` -> `emp_id`).
/// - [`ParamStyle::HashMap`]: `P_` plus the column name, case preserved (`EMP_ID` -> `P_EMP_ID`).
///
/// # Examples
///
/// ```
/// use automapper_core::naming::resolve;
/// use automapper_types::ParamStyle;
///
/// assert_eq!(resolve("COMPANY_CD", ParamStyle::Model), "company_cd");
/// assert_eq!(resolve("COMPANY_CD", ParamStyle::HashMap), "P_COMPANY_CD");
/// ```
pub fn resolve(column: &str, style: ParamStyle) -> String {
    match style {
        ParamStyle::Model => column.to_lowercase(),
        ParamStyle::HashMap => format!("{MAP_KEY_PREFIX}{column}"),
    }
}

/// Render a bind placeholder: `#{token}`.
#[inline]
pub fn placeholder(token: &str) -> String {
    format!("#{{{token}}}")
}
