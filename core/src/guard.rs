//! Conditional clause builder.
//!
//! Wraps a predicate or assignment in a MyBatis `<if>` presence test so that it only
//! applies when the parameter is supplied at runtime. The same builder serves WHERE
//! predicates and SET assignments; each statement owns its own enable flag.

use automapper_types::TypeClass;

/// Presence test for a bind token.
///
/// Textual values must be non-null and non-empty; anything else only non-null.
///
/// # Examples
///
/// ```
/// use automapper_core::guard::presence_test;
/// use automapper_types::TypeClass;
///
/// assert_eq!(presence_test("emp_nm", TypeClass::Textual), "emp_nm != null and emp_nm != ''");
/// assert_eq!(presence_test("emp_id", TypeClass::NonTextual), "emp_id != null");
/// ```
pub fn presence_test(token: &str, class: TypeClass) -> String {
    match class {
        TypeClass::Textual => format!("{token} != null and {token} != ''"),
        TypeClass::NonTextual => format!("{token} != null"),
    }
}

/// Builder for guarded clauses, active only when `enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalClause {
    enabled: bool,
}

impl ConditionalClause {
    #[inline]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[inline]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Append `body` as its own line, wrapped in `<if>` / `</if>` lines when enabled.
    ///
    /// Every emitted line starts with `indent` and ends with `\n`.
    pub fn block(self, out: &mut String, indent: &str, token: &str, data_type: &str, body: &str) {
        if self.enabled {
            out.push_str(indent);
            out.push_str(&open_tag(token, data_type));
            out.push('\n');
        }
        out.push_str(indent);
        out.push_str(body);
        out.push('\n');
        if self.enabled {
            out.push_str(indent);
            out.push_str("</if>\n");
        }
    }

    /// Return `body` wrapped on a single line: `<if test="...">body </if>`.
    pub fn inline(self, token: &str, data_type: &str, body: &str) -> String {
        if self.enabled {
            format!("{}{body} </if>", open_tag(token, data_type))
        } else {
            body.to_string()
        }
    }
}

fn open_tag(token: &str, data_type: &str) -> String {
    format!(
        "<if test=\"{}\">",
        presence_test(token, TypeClass::of(data_type))
    )
}
