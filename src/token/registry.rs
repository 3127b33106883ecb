//! Registry of named tokens.

use indexmap::IndexMap;

use super::error::TokenError;
use super::value::TokenValue;

/// An ordered registry of named tokens.
///
/// Tokens are either concrete colors or aliases to other tokens, enabling
/// layered palettes: primitive values at the bottom, semantic names
/// aliasing them above.
///
/// # Example
///
/// ```rust
/// use standin::token::Tokens;
///
/// let tokens = Tokens::new()
///     .add("blue400", "#276ef1")
///     .alias("accentBase", "blue400")
///     .alias("contentAccent", "accentBase");
///
/// assert_eq!(tokens.resolve("contentAccent"), Some("#276ef1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    entries: IndexMap<String, TokenValue>,
}

impl Tokens {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated registry for chaining.
    ///
    /// Plain strings become concrete colors; pass [`TokenValue::Alias`] or
    /// use [`Tokens::alias`] for aliases.
    pub fn add(mut self, name: &str, value: impl Into<TokenValue>) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Adds an alias to another token, returning the updated registry.
    pub fn alias(mut self, name: &str, target: &str) -> Self {
        self.entries
            .insert(name.to_string(), TokenValue::alias(target));
        self
    }

    /// True if the token is present.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Looks up a token's raw value without following aliases.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.entries.get(name)
    }

    /// Resolves a token to its concrete color, following alias chains.
    ///
    /// Returns `None` for missing tokens and for chains that do not reach
    /// a concrete color (broken links, cycles). Use [`Tokens::validate`]
    /// to surface those as errors instead.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut current = name;
        loop {
            match self.entries.get(current)? {
                TokenValue::Color(color) => return Some(color),
                TokenValue::Alias(target) => {
                    if seen.contains(&current) {
                        return None;
                    }
                    seen.push(current);
                    current = target;
                }
            }
        }
    }

    /// Merges `over` onto this registry, returning the union.
    ///
    /// Values from `over` win on name collision. This is how mode sections
    /// of a theme file layer over the base token map.
    pub fn merge(mut self, over: Tokens) -> Tokens {
        for (name, value) in over.entries {
            self.entries.insert(name, value);
        }
        self
    }

    /// Validates that every alias resolves to a concrete color.
    pub fn validate(&self) -> Result<(), TokenError> {
        for (name, value) in &self.entries {
            if value.is_alias() {
                self.check_chain(name)?;
            }
        }
        Ok(())
    }

    fn check_chain(&self, start: &str) -> Result<(), TokenError> {
        let mut path = vec![start.to_string()];
        let mut current = start;
        while let Some(TokenValue::Alias(target)) = self.entries.get(current) {
            if path.iter().any(|p| p == target) {
                path.push(target.clone());
                return Err(TokenError::CycleDetected { path });
            }
            if !self.entries.contains_key(target.as_str()) {
                return Err(TokenError::UnresolvedAlias {
                    from: current.to_string(),
                    to: target.clone(),
                });
            }
            path.push(target.clone());
            current = target;
        }
        Ok(())
    }

    /// Iterates token names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
