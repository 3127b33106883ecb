//! Prop maps carried by renderables.
//!
//! A [`Props`] map is an ordered mapping from prop name to [`PropValue`].
//! Values are plain data (any JSON value), a style map, or a named handler
//! binding. Insertion order is preserved so merged output is deterministic.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::style::{StyleMap, STYLE_PROP};

/// A single prop value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// Plain data: strings, numbers, booleans, nested JSON.
    Data(Value),
    /// A style map, usually living under the [`STYLE_PROP`] key.
    Style(StyleMap),
    /// A named event-handler binding. The host wires the name to behavior;
    /// this library only carries the binding.
    Handler(String),
}

impl PropValue {
    /// Creates a handler binding.
    pub fn handler(name: impl Into<String>) -> Self {
        PropValue::Handler(name.into())
    }

    /// The value as a string slice, if it is string data.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Data(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The value as a bool, if it is boolean data.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Data(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// The value as a float, if it is numeric data.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Data(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// The value as a style map, if it is one.
    pub fn as_style(&self) -> Option<&StyleMap> {
        match self {
            PropValue::Style(style) => Some(style),
            _ => None,
        }
    }

    /// The handler name, if the value is a handler binding.
    pub fn as_handler(&self) -> Option<&str> {
        match self {
            PropValue::Handler(name) => Some(name),
            _ => None,
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        PropValue::Data(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Data(Value::String(value.to_string()))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Data(Value::String(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Data(Value::Bool(value))
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Data(Value::from(value))
    }
}

impl From<u64> for PropValue {
    fn from(value: u64) -> Self {
        PropValue::Data(Value::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Data(Value::from(value))
    }
}

impl From<StyleMap> for PropValue {
    fn from(style: StyleMap) -> Self {
        PropValue::Style(style)
    }
}

// Config channels carry plain data only; styles and handlers cannot arrive
// through deserialization.
impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(PropValue::Data(Value::deserialize(deserializer)?))
    }
}

/// An ordered prop map.
///
/// # Example
///
/// ```rust
/// use standin::Props;
///
/// let props = Props::new()
///     .add("id", "root-1")
///     .add("aria-label", "Close");
///
/// assert_eq!(props.get_str("id"), Some("root-1"));
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Props {
    entries: IndexMap<String, PropValue>,
}

impl Props {
    /// Creates an empty prop map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prop, returning the updated map for chaining.
    pub fn add(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Inserts a prop in place.
    pub fn insert(&mut self, name: &str, value: impl Into<PropValue>) {
        self.entries.insert(name.to_string(), value.into());
    }

    /// Looks up a prop by name.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    /// Looks up a string prop by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    /// True if the prop is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The style map under the [`STYLE_PROP`] key, if any.
    pub fn style(&self) -> Option<&StyleMap> {
        self.get(STYLE_PROP).and_then(PropValue::as_style)
    }

    /// Merges `over` onto this map, returning the union.
    ///
    /// Values from `over` win on key collision; keys already present keep
    /// their position, new keys are appended in `over`'s order.
    pub fn merge(mut self, over: Props) -> Props {
        for (name, value) in over.entries {
            self.entries.insert(name, value);
        }
        self
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no props.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates prop names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
