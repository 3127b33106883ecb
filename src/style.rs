//! Style maps and style overrides.
//!
//! A [`StyleMap`] is an ordered mapping of style property to value. Override
//! descriptors can carry style either as a literal map or as a
//! [`StyleOverride::Derive`] function evaluated against a [`StyleContext`]
//! (the current theme plus the props merged so far) at resolve time.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::props::Props;
use crate::theme::Theme;

/// The prop key style output is merged under.
pub const STYLE_PROP: &str = "$style";

/// An ordered style property map.
///
/// # Example
///
/// ```rust
/// use standin::StyleMap;
///
/// let style = StyleMap::new()
///     .set("color", "red")
///     .set("paddingTop", 0);
///
/// assert_eq!(style.get("color"), Some(&"red".into()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: IndexMap<String, Value>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a style property, returning the updated map for chaining.
    pub fn set(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.entries.insert(property.to_string(), value.into());
        self
    }

    /// Inserts a style property in place.
    pub fn insert(&mut self, property: &str, value: impl Into<Value>) {
        self.entries.insert(property.to_string(), value.into());
    }

    /// Looks up a style property.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.entries.get(property)
    }

    /// Merges `over` onto this map, returning the union.
    ///
    /// Values from `over` win on key collision.
    pub fn merge(mut self, over: StyleMap) -> StyleMap {
        for (property, value) in over.entries {
            self.entries.insert(property, value);
        }
        self
    }

    /// Number of style properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no style properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Context handed to style functions at resolve time.
///
/// `props` holds the props merged so far (slot base props plus the
/// descriptor's own props), so state flags like `$hasTitle` are visible to
/// the function.
pub struct StyleContext<'a> {
    pub theme: &'a Theme,
    pub props: &'a Props,
}

/// A style function: theme and props in, style map out.
pub type StyleFn = Arc<dyn Fn(&StyleContext<'_>) -> StyleMap + Send + Sync>;

/// Style carried by an override descriptor: a literal map, or a function
/// deriving one from the current context.
#[derive(Clone)]
pub enum StyleOverride {
    /// A literal style map, used as-is.
    Literal(StyleMap),
    /// A function invoked with the current [`StyleContext`].
    Derive(StyleFn),
}

impl StyleOverride {
    /// Creates a literal style override.
    pub fn literal(style: StyleMap) -> Self {
        StyleOverride::Literal(style)
    }

    /// Creates a derived style override from a function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standin::{StyleMap, StyleOverride};
    ///
    /// let style = StyleOverride::derive(|ctx| {
    ///     StyleMap::new().set("color", ctx.theme.token("accent").unwrap_or("inherit"))
    /// });
    /// ```
    pub fn derive<F>(f: F) -> Self
    where
        F: Fn(&StyleContext<'_>) -> StyleMap + Send + Sync + 'static,
    {
        StyleOverride::Derive(Arc::new(f))
    }

    /// Produces the effective style map for the given context.
    pub fn resolve(&self, ctx: &StyleContext<'_>) -> StyleMap {
        match self {
            StyleOverride::Literal(style) => style.clone(),
            StyleOverride::Derive(f) => f(ctx),
        }
    }

    /// Composes this override on top of `base`.
    ///
    /// Two literals merge immediately with this side winning per property.
    /// If either side is a function, the result is a function that resolves
    /// both and merges, so composition stays lazy until a context exists.
    pub fn merged_over(self, base: StyleOverride) -> StyleOverride {
        match (base, self) {
            (StyleOverride::Literal(under), StyleOverride::Literal(over)) => {
                StyleOverride::Literal(under.merge(over))
            }
            (base, over) => {
                StyleOverride::derive(move |ctx| base.resolve(ctx).merge(over.resolve(ctx)))
            }
        }
    }
}

impl From<StyleMap> for StyleOverride {
    fn from(style: StyleMap) -> Self {
        StyleOverride::Literal(style)
    }
}

impl fmt::Debug for StyleOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleOverride::Literal(style) => f.debug_tuple("Literal").field(style).finish(),
            StyleOverride::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_parts() -> (Theme, Props) {
        let theme = Theme::new().add("accent", "red");
        let props = Props::new().add("$hasTitle", true);
        (theme, props)
    }

    #[test]
    fn test_style_map_set_and_merge() {
        let base = StyleMap::new().set("color", "blue").set("marginTop", 0);
        let over = StyleMap::new().set("color", "red");

        let merged = base.merge(over);
        assert_eq!(merged.get("color"), Some(&"red".into()));
        assert_eq!(merged.get("marginTop"), Some(&0.into()));
    }

    #[test]
    fn test_literal_resolve_ignores_context() {
        let (theme, props) = ctx_parts();
        let ctx = StyleContext {
            theme: &theme,
            props: &props,
        };

        let style = StyleOverride::literal(StyleMap::new().set("color", "blue"));
        assert_eq!(style.resolve(&ctx).get("color"), Some(&"blue".into()));
    }

    #[test]
    fn test_derive_reads_theme_and_props() {
        let (theme, props) = ctx_parts();
        let ctx = StyleContext {
            theme: &theme,
            props: &props,
        };

        let style = StyleOverride::derive(|ctx| {
            let mut map = StyleMap::new();
            map.insert("color", ctx.theme.token("accent").unwrap_or("inherit"));
            if ctx.props.get("$hasTitle").and_then(|v| v.as_bool()) == Some(true) {
                map.insert("fontWeight", "bold");
            }
            map
        });

        let resolved = style.resolve(&ctx);
        assert_eq!(resolved.get("color"), Some(&"red".into()));
        assert_eq!(resolved.get("fontWeight"), Some(&"bold".into()));
    }

    #[test]
    fn test_merged_over_literals() {
        let (theme, props) = ctx_parts();
        let ctx = StyleContext {
            theme: &theme,
            props: &props,
        };

        let base = StyleOverride::literal(StyleMap::new().set("color", "blue").set("margin", 8));
        let over = StyleOverride::literal(StyleMap::new().set("color", "red"));

        let merged = over.merged_over(base);
        assert!(matches!(merged, StyleOverride::Literal(_)));

        let resolved = merged.resolve(&ctx);
        assert_eq!(resolved.get("color"), Some(&"red".into()));
        assert_eq!(resolved.get("margin"), Some(&8.into()));
    }

    #[test]
    fn test_merged_over_composes_functions() {
        let (theme, props) = ctx_parts();
        let ctx = StyleContext {
            theme: &theme,
            props: &props,
        };

        let base = StyleOverride::derive(|_| StyleMap::new().set("color", "blue").set("margin", 8));
        let over = StyleOverride::literal(StyleMap::new().set("color", "red"));

        let merged = over.merged_over(base);
        assert!(matches!(merged, StyleOverride::Derive(_)));

        let resolved = merged.resolve(&ctx);
        assert_eq!(resolved.get("color"), Some(&"red".into()));
        assert_eq!(resolved.get("margin"), Some(&8.into()));
    }

    #[test]
    fn test_deserialize_literal_map() {
        let style: StyleMap =
            serde_json::from_str(r#"{"transform": "translate(-50%, -50%)"}"#).unwrap();
        assert_eq!(style.get("transform"), Some(&"translate(-50%, -50%)".into()));
    }
}
