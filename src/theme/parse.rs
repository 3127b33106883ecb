//! YAML theme file parsing.
//!
//! Theme files declare tokens as a flat map of name to value, with
//! optional `light:` and `dark:` sections layered over the base map per
//! mode. `light` and `dark` are reserved section names, not token names.
//!
//! # Value Format
//!
//! - A bare value that names another token in the document becomes an
//!   alias to that token.
//! - Any other string is taken as a concrete color. Hex colors need
//!   quoting, since a bare `#` starts a YAML comment.
//! - Non-string values are rejected.
//!
//! # Example
//!
//! ```yaml
//! blue400: "#276ef1"
//! contentAccent: blue400
//! accent: contentAccent
//!
//! dark:
//!   blue400: "#2c549d"
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use super::adaptive::AdaptiveTheme;
use super::theme::Theme;
use crate::token::{TokenError, Tokens};

/// Error from parsing a theme file.
#[derive(Debug, Error)]
pub enum ThemeParseError {
    #[error("invalid theme yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("token '{name}' must be a string value, got {kind}")]
    BadValue { name: String, kind: &'static str },
    #[error(transparent)]
    Token(#[from] TokenError),
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    #[serde(default)]
    light: IndexMap<String, serde_yaml::Value>,
    #[serde(default)]
    dark: IndexMap<String, serde_yaml::Value>,
    #[serde(flatten)]
    base: IndexMap<String, serde_yaml::Value>,
}

/// Parses a YAML theme document into an adaptive theme.
///
/// The base map feeds both variants; the `light:` and `dark:` sections
/// override it for their mode. Both variants are validated before
/// returning, so alias cycles are caught here rather than at lookup time.
///
/// # Example
///
/// ```rust
/// use standin::parse_theme;
///
/// let adaptive = parse_theme(
///     r##"
/// blue400: "#276ef1"
/// accent: blue400
///
/// dark:
///   blue400: "#2c549d"
/// "##,
/// )
/// .unwrap();
/// ```
pub fn parse_theme(source: &str) -> Result<AdaptiveTheme, ThemeParseError> {
    let raw: RawTheme = serde_yaml::from_str(source)?;

    let light = build_theme(&raw.base, &raw.light)?;
    let dark = build_theme(&raw.base, &raw.dark)?;

    Ok(AdaptiveTheme::new(light, dark))
}

/// Layers a mode section over the base map and converts to a theme.
fn build_theme(
    base: &IndexMap<String, serde_yaml::Value>,
    mode: &IndexMap<String, serde_yaml::Value>,
) -> Result<Theme, ThemeParseError> {
    let mut merged = base.clone();
    for (name, value) in mode {
        merged.insert(name.clone(), value.clone());
    }

    let mut tokens = Tokens::new();
    for (name, value) in &merged {
        let text = value
            .as_str()
            .ok_or_else(|| ThemeParseError::BadValue {
                name: name.clone(),
                kind: yaml_kind(value),
            })?;

        // A value naming another token in the document is an alias.
        // A value naming itself would never resolve, so it stays a color.
        if text != name && merged.contains_key(text) {
            tokens = tokens.alias(name, text);
        } else {
            tokens = tokens.add(name, text);
        }
    }
    tokens.validate()?;

    Ok(Theme::from_tokens(tokens))
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::adaptive::{set_mode_detector, ColorMode};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_parse_theme_aliases_known_names() {
        let adaptive = parse_theme(
            r##"
blue400: "#276ef1"
contentAccent: blue400
accent: contentAccent
"##,
        )
        .unwrap();

        set_mode_detector(|| ColorMode::Light);
        let theme = adaptive.resolve();
        assert_eq!(theme.token("accent"), Some("#276ef1"));
    }

    #[test]
    #[serial]
    fn test_parse_theme_mode_sections_override_base() {
        let adaptive = parse_theme(
            r##"
blue400: "#276ef1"

dark:
  blue400: "#2c549d"
"##,
        )
        .unwrap();

        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(adaptive.resolve().token("blue400"), Some("#2c549d"));

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().token("blue400"), Some("#276ef1"));
    }

    #[test]
    #[serial]
    fn test_parse_theme_unknown_name_is_a_color() {
        let adaptive = parse_theme("accent: red\n").unwrap();

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().token("accent"), Some("red"));
    }

    #[test]
    #[serial]
    fn test_parse_theme_self_reference_is_a_color() {
        let adaptive = parse_theme("red: red\n").unwrap();

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().token("red"), Some("red"));
    }

    #[test]
    fn test_parse_theme_rejects_non_string_value() {
        let err = parse_theme("size: 42\n").unwrap_err();
        assert!(matches!(err, ThemeParseError::BadValue { .. }));
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_parse_theme_rejects_alias_cycle() {
        let err = parse_theme("a: b\nb: a\n").unwrap_err();
        assert!(matches!(
            err,
            ThemeParseError::Token(TokenError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_parse_theme_invalid_yaml() {
        let err = parse_theme(": : :").unwrap_err();
        assert!(matches!(err, ThemeParseError::Yaml(_)));
    }
}
