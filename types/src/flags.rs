use core::fmt;
use core::str::FromStr;

/// Bind-parameter naming style, which is also the statement `parameterType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParamStyle {
    /// `#{column_name}`: properties of a model object.
    #[default]
    Model,
    /// `#{P_COLUMN_NAME}`: keys of a parameter map.
    #[cfg_attr(feature = "serde", serde(alias = "map"))]
    HashMap,
}

impl ParamStyle {
    pub const ALL: &'static [&'static str] = &["model", "hashmap"];

    /// The `parameterType` attribute value.
    #[inline]
    pub const fn parameter_type(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::HashMap => "HashMap",
        }
    }

    #[inline]
    pub const fn is_model(self) -> bool {
        matches!(self, Self::Model)
    }
}

impl From<bool> for ParamStyle {
    /// `true` selects the model style.
    fn from(use_model: bool) -> Self {
        if use_model { Self::Model } else { Self::HashMap }
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Model => "model",
            Self::HashMap => "hashmap",
        })
    }
}

/// Error returned when parsing an unknown parameter style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamStyleParseError(String);

impl fmt::Display for ParamStyleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown parameter type '{}', expected one of: {}",
            self.0,
            ParamStyle::ALL.join(", ")
        )
    }
}

impl std::error::Error for ParamStyleParseError {}

impl FromStr for ParamStyle {
    type Err = ParamStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("model") {
            Ok(Self::Model)
        } else if s.eq_ignore_ascii_case("hashmap") || s.eq_ignore_ascii_case("map") {
            Ok(Self::HashMap)
        } else {
            Err(ParamStyleParseError(s.to_string()))
        }
    }
}

/// Switches for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GenerationFlags {
    /// Wrap ordinary SET assignments in presence guards.
    pub update_guards: bool,
    /// Wrap WHERE predicates in presence guards.
    pub where_guards: bool,
    pub param_style: ParamStyle,
}

impl GenerationFlags {
    pub const fn new(update_guards: bool, where_guards: bool, param_style: ParamStyle) -> Self {
        Self {
            update_guards,
            where_guards,
            param_style,
        }
    }

    #[must_use]
    pub const fn with_update_guards(mut self, on: bool) -> Self {
        self.update_guards = on;
        self
    }

    #[must_use]
    pub const fn with_where_guards(mut self, on: bool) -> Self {
        self.where_guards = on;
        self
    }

    #[must_use]
    pub const fn with_param_style(mut self, style: ParamStyle) -> Self {
        self.param_style = style;
        self
    }
}
