//! Override descriptors for component slots.
//!
//! Every slot a component exposes can carry one [`Override`]. The
//! descriptor is deliberately lenient: configuration beats validation
//! here, so shapes that make no sense degrade to no-ops with a
//! development-time advisory instead of failing the whole document.

use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

use crate::advisory::dev_warn;
use crate::props::Props;
use crate::renderable::Renderable;
use crate::style::{StyleContext, StyleMap, StyleOverride};

/// A structured slot override: swap the renderable, add props, restyle.
///
/// All parts are optional. An empty record inherits everything from the
/// slot default.
///
/// # Example
///
/// ```rust
/// use standin::{Override, OverrideRecord};
///
/// let descriptor: Override = OverrideRecord::new()
///     .component("CustomRoot")
///     .prop("aria-label", "Settings")
///     .style_with(|ctx| {
///         let mut style = standin::StyleMap::new();
///         if let Some(accent) = ctx.theme.token("accent") {
///             style = style.set("color", accent);
///         }
///         style
///     })
///     .into();
/// ```
#[derive(Clone, Debug, Default)]
pub struct OverrideRecord {
    pub(crate) component: Option<Renderable>,
    pub(crate) props: Props,
    pub(crate) style: Option<StyleOverride>,
}

impl OverrideRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot's renderable.
    pub fn component(mut self, renderable: impl Into<Renderable>) -> Self {
        self.component = Some(renderable.into());
        self
    }

    /// Adds a single prop, returning an updated record for chaining.
    pub fn prop(mut self, key: &str, value: impl Into<crate::props::PropValue>) -> Self {
        self.props = self.props.add(key, value);
        self
    }

    /// Merges a full prop set into the record.
    pub fn props(mut self, props: Props) -> Self {
        self.props = self.props.merge(props);
        self
    }

    /// Sets a literal style override.
    pub fn style(mut self, style: impl Into<StyleOverride>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets a style override derived from theme and props at mount time.
    pub fn style_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&StyleContext<'_>) -> StyleMap + Send + Sync + 'static,
    {
        self.style = Some(StyleOverride::derive(f));
        self
    }
}

/// A slot override descriptor.
///
/// Resolution treats the variants as:
///
/// - [`Override::Inherit`]: keep the slot default untouched.
/// - [`Override::Replace`]: swap the renderable, keep the base props.
/// - [`Override::Custom`]: apply a structured [`OverrideRecord`].
/// - [`Override::Unrecognized`]: a malformed descriptor; behaves like
///   `Inherit`.
#[derive(Clone, Debug, Default)]
pub enum Override {
    #[default]
    Inherit,
    Replace(Renderable),
    Custom(OverrideRecord),
    Unrecognized,
}

impl Override {
    /// Shorthand for a bare renderable replacement.
    pub fn replace(renderable: impl Into<Renderable>) -> Self {
        Override::Replace(renderable.into())
    }

    /// True when resolution would leave the slot default untouched.
    pub fn is_inherit(&self) -> bool {
        matches!(self, Override::Inherit | Override::Unrecognized)
    }

    /// Interprets a loose configuration value as a descriptor.
    ///
    /// - `null` inherits.
    /// - A string is a bare replacement; leading case picks element vs
    ///   component, as in [`Renderable::from_name`].
    /// - A mapping is a structured record. `component`, `props` and
    ///   `style` are recognized; unknown keys are ignored.
    /// - Anything else is unrecognized and behaves like `null`, with an
    ///   advisory in debug builds.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Override::Inherit,
            Value::String(name) => Override::Replace(Renderable::from_name(&name)),
            Value::Object(map) => {
                let mut record = OverrideRecord::new();
                for (key, entry) in map {
                    match key.as_str() {
                        "component" => match entry {
                            Value::String(name) => {
                                record.component = Some(Renderable::from_name(&name));
                            }
                            other => {
                                dev_warn!(
                                    "override component must be a string, got {}; ignoring it",
                                    json_kind(&other)
                                );
                            }
                        },
                        "props" => match entry {
                            Value::Object(entries) => {
                                for (name, value) in entries {
                                    record.props.insert(&name, value);
                                }
                            }
                            other => {
                                dev_warn!(
                                    "override props must be a mapping, got {}; ignoring them",
                                    json_kind(&other)
                                );
                            }
                        },
                        "style" => match entry {
                            Value::Object(entries) => {
                                let mut style = StyleMap::new();
                                for (name, value) in entries {
                                    style.insert(&name, value);
                                }
                                record.style = Some(StyleOverride::Literal(style));
                            }
                            Value::Null => {}
                            other => {
                                dev_warn!(
                                    "override style must be a mapping, got {}; ignoring it",
                                    json_kind(&other)
                                );
                            }
                        },
                        _ => {}
                    }
                }
                Override::Custom(record)
            }
            other => {
                dev_warn!(
                    "override descriptor must be null, a string, or a mapping, got {}; inheriting the default",
                    json_kind(&other)
                );
                Override::Unrecognized
            }
        }
    }
}

impl From<OverrideRecord> for Override {
    fn from(record: OverrideRecord) -> Self {
        Override::Custom(record)
    }
}

impl From<Renderable> for Override {
    fn from(renderable: Renderable) -> Self {
        Override::Replace(renderable)
    }
}

impl<'de> Deserialize<'de> for Override {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Override::from_value(value))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-zA-Z][a-zA-Z0-9-]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::hash_map("[a-z]{1,8}", inner, 0..4)
                    .prop_map(|entries| Value::Object(entries.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_every_json_value_parses_to_a_variant(value in arb_json()) {
            let parsed = Override::from_value(value.clone());
            match value {
                Value::Null => prop_assert!(matches!(parsed, Override::Inherit)),
                Value::String(_) => prop_assert!(matches!(parsed, Override::Replace(_))),
                Value::Object(_) => prop_assert!(matches!(parsed, Override::Custom(_))),
                _ => prop_assert!(matches!(parsed, Override::Unrecognized)),
            }
        }

        #[test]
        fn prop_record_props_never_exceed_source_entries(
            entries in prop::collection::hash_map("[a-z]{1,6}", "[a-z0-9]{0,6}", 0..8)
        ) {
            let source: Value = entries
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect::<serde_json::Map<_, _>>()
                .into();
            let parsed = Override::from_value(serde_json::json!({ "props": source }));
            match parsed {
                Override::Custom(record) => prop_assert_eq!(record.props.len(), entries.len()),
                other => prop_assert!(false, "expected Custom, got {:?}", other),
            }
        }
    }
}
