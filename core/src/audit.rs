//! Audit-column policy.
//!
//! Audit columns record who created or changed a row, when, and from where. They are
//! filled by the application framework rather than by the caller, so INSERT and UPDATE
//! treat them specially. The whole policy lives in [`AUDIT_RULES`]; the statement
//! assemblers never compare column names themselves.

use core::fmt;

use automapper_types::ParamStyle;

use crate::naming;

/// System token bound to the creating user.
pub const INSERT_ID_TOKEN: &str = "P_INSERT_ID";
/// System token bound to the modifying user.
pub const UPDATE_ID_TOKEN: &str = "P_UPDATE_ID";
/// System token holding the request timestamp.
pub const SYSDATE_TOKEN: &str = "P_CM_SYSDATE";
/// Server-side conversion applied to [`SYSDATE_TOKEN`].
pub const NOW_FUNCTION: &str = "FN_TODATE";

/// Column that always receives the modifying user in UPDATE.
pub const UPDATE_ID_COLUMN: &str = "UPDATE_ID";
/// Column that always receives the modification timestamp in UPDATE.
pub const UPDATE_DTS_COLUMN: &str = "UPDATE_DTS";

/// How an audit rule matches a column name. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Exact(&'static str),
    Suffix(&'static str),
}

impl NameMatch {
    #[inline]
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => name == expected,
            Self::Suffix(suffix) => name.ends_with(suffix),
        }
    }
}

/// Classification of a column name under the audit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditClass {
    /// Network origin (IP / MAC address): never written by generated statements.
    Exempt,
    /// Creating user: bound to [`INSERT_ID_TOKEN`] on insert, never updated.
    InsertActor,
    /// Creation timestamp: now-function on insert, never updated.
    InsertTimestamp,
    /// Modifying user: bound to [`UPDATE_ID_TOKEN`], forced into every UPDATE.
    UpdateActor,
    /// Modification timestamp: now-function, forced into every UPDATE.
    UpdateTimestamp,
    /// Everything else.
    Ordinary,
}

/// One entry of the audit rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditRule {
    pub matcher: NameMatch,
    pub class: AuditClass,
}

impl AuditRule {
    const fn exact(name: &'static str, class: AuditClass) -> Self {
        Self {
            matcher: NameMatch::Exact(name),
            class,
        }
    }

    const fn suffix(suffix: &'static str, class: AuditClass) -> Self {
        Self {
            matcher: NameMatch::Suffix(suffix),
            class,
        }
    }
}

/// The audit rule table. First match wins; unmatched names are [`AuditClass::Ordinary`].
pub static AUDIT_RULES: &[AuditRule] = &[
    AuditRule::exact("INSERT_IP", AuditClass::Exempt),
    AuditRule::exact("INSERT_MCADDR_NM", AuditClass::Exempt),
    AuditRule::exact("UPDATE_IP", AuditClass::Exempt),
    AuditRule::exact("UPDATE_MCADDR_NM", AuditClass::Exempt),
    AuditRule::exact("INSERT_ID", AuditClass::InsertActor),
    AuditRule::exact(UPDATE_ID_COLUMN, AuditClass::UpdateActor),
    AuditRule::exact(UPDATE_DTS_COLUMN, AuditClass::UpdateTimestamp),
    AuditRule::suffix("INSERT_DTS", AuditClass::InsertTimestamp),
];

/// Classify a column name.
///
/// # Examples
///
/// ```
/// use automapper_core::audit::{classify, AuditClass};
///
/// assert_eq!(classify("INSERT_IP"), AuditClass::Exempt);
/// assert_eq!(classify("ORDER_INSERT_DTS"), AuditClass::InsertTimestamp);
/// assert_eq!(classify("EMP_NAME"), AuditClass::Ordinary);
/// ```
pub fn classify(name: &str) -> AuditClass {
    AUDIT_RULES
        .iter()
        .find(|rule| rule.matcher.matches(name))
        .map_or(AuditClass::Ordinary, |rule| rule.class)
}

impl AuditClass {
    /// Does the column appear in INSERT column/value lists?
    #[inline]
    pub const fn in_insert(self) -> bool {
        !matches!(self, Self::Exempt)
    }

    /// May the column appear as an ordinary (guardable) SET assignment?
    ///
    /// Update audit columns are excluded here because they are appended as forced
    /// assignments instead.
    #[inline]
    pub const fn is_updatable(self) -> bool {
        matches!(self, Self::Ordinary)
    }

    /// INSERT value for a column of this class, or `None` when the column is omitted.
    pub fn insert_value(self, column: &str, style: ParamStyle) -> Option<BindExpr> {
        match self {
            Self::Exempt => None,
            Self::InsertActor => Some(BindExpr::System(INSERT_ID_TOKEN)),
            Self::UpdateActor => Some(BindExpr::System(UPDATE_ID_TOKEN)),
            Self::InsertTimestamp | Self::UpdateTimestamp => Some(BindExpr::Now),
            Self::Ordinary => Some(BindExpr::Param(naming::resolve(column, style))),
        }
    }
}

/// A value expression in generated statements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindExpr {
    /// Caller-supplied parameter, resolved through the naming style.
    Param(String),
    /// Fixed system token, independent of the naming style.
    System(&'static str),
    /// Server-side current timestamp: `FN_TODATE(#{P_CM_SYSDATE})`.
    Now,
}

impl fmt::Display for BindExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(token) => f.write_str(&naming::placeholder(token)),
            Self::System(token) => f.write_str(&naming::placeholder(token)),
            Self::Now => write!(f, "{NOW_FUNCTION}({})", naming::placeholder(SYSDATE_TOKEN)),
        }
    }
}

/// Assignments appended to every SET clause, in order, never guarded.
pub fn forced_update_assignments() -> [(&'static str, BindExpr); 2] {
    [
        (UPDATE_ID_COLUMN, BindExpr::System(UPDATE_ID_TOKEN)),
        (UPDATE_DTS_COLUMN, BindExpr::Now),
    ]
}
