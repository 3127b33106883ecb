//! Token values: concrete colors and aliases.

/// A token value that is either a concrete color or an alias to another
/// token name.
///
/// Plain strings convert to concrete colors; aliases are created explicitly
/// (or inferred by the theme-file parser when a bare value names another
/// token in the same document).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenValue {
    /// A concrete color value, kept as an opaque string (`#276ef1`, `red`).
    Color(String),
    /// An alias to another token name, enabling layered palettes.
    Alias(String),
}

impl TokenValue {
    /// Creates a concrete color value.
    pub fn color(value: impl Into<String>) -> Self {
        TokenValue::Color(value.into())
    }

    /// Creates an alias to another token.
    pub fn alias(target: impl Into<String>) -> Self {
        TokenValue::Alias(target.into())
    }

    /// True if this value is an alias.
    pub fn is_alias(&self) -> bool {
        matches!(self, TokenValue::Alias(_))
    }

    /// The concrete color, if this value is one.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            TokenValue::Color(color) => Some(color),
            TokenValue::Alias(_) => None,
        }
    }

    /// The alias target, if this value is an alias.
    pub fn alias_target(&self) -> Option<&str> {
        match self {
            TokenValue::Alias(target) => Some(target),
            TokenValue::Color(_) => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Color(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Color(value)
    }
}
