//! Theme struct for building token collections.

use crate::palette;
use crate::token::{TokenError, TokenValue, Tokens};

/// A named collection of design tokens consulted when resolving styles.
///
/// Themes wrap a [`Tokens`] registry and provide a fluent builder API
/// for constructing token collections.
///
/// # Example
///
/// ```rust
/// use standin::Theme;
///
/// let theme = Theme::new()
///     // Primitive layer - concrete colors
///     .add("blue400", "#276ef1")
///     .add("gray200", "#e2e2e2")
///     // Semantic layer - aliases
///     .alias("contentAccent", "blue400")
///     .alias("borderOpaque", "gray200")
///     // Shorthand layer - aliases to semantics
///     .alias("accent", "contentAccent");
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    pub(crate) tokens: Tokens,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self {
            tokens: Tokens::new(),
        }
    }

    /// Creates a theme from an existing [`Tokens`] collection.
    pub fn from_tokens(tokens: Tokens) -> Self {
        Self { tokens }
    }

    /// Adds a named token, returning an updated theme for chaining.
    ///
    /// Bare `&str`/`String` values are treated as concrete colors. Use
    /// [`Theme::alias`] to point one token at another.
    pub fn add<V: Into<TokenValue>>(mut self, name: &str, value: V) -> Self {
        self.tokens = self.tokens.add(name, value);
        self
    }

    /// Adds a token that aliases another token by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standin::Theme;
    ///
    /// let theme = Theme::new()
    ///     .add("blue400", "#276ef1")
    ///     .alias("accent", "blue400");
    ///
    /// assert_eq!(theme.token("accent"), Some("#276ef1"));
    /// ```
    pub fn alias(mut self, name: &str, target: &str) -> Self {
        self.tokens = self.tokens.alias(name, target);
        self
    }

    /// Returns the underlying tokens.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Looks up a token and follows aliases to its concrete color.
    ///
    /// Returns `None` for unknown names and for alias chains that never
    /// reach a concrete value.
    pub fn token(&self, name: &str) -> Option<&str> {
        self.tokens.resolve(name)
    }

    /// Validates that all token aliases in this theme resolve correctly.
    ///
    /// This is called automatically when parsing theme files, but can be
    /// called explicitly for early error detection.
    pub fn validate(&self) -> Result<(), TokenError> {
        self.tokens.validate()
    }

    /// Built-in light theme with the standard semantic token set.
    pub fn default_light() -> Self {
        Self::new()
            .add("backgroundPrimary", palette::WHITE)
            .add("backgroundSecondary", palette::GRAY_50)
            .add("backgroundTertiary", palette::GRAY_100)
            .add("backgroundInversePrimary", palette::BLACK)
            .add("backgroundAccent", palette::BLUE_400)
            .add("backgroundPositive", palette::GREEN_400)
            .add("backgroundWarning", palette::YELLOW_200)
            .add("backgroundNegative", palette::RED_400)
            .add("contentPrimary", palette::BLACK)
            .add("contentSecondary", palette::GRAY_600)
            .add("contentTertiary", palette::GRAY_500)
            .add("contentInversePrimary", palette::WHITE)
            .add("contentAccent", palette::BLUE_400)
            .add("contentPositive", palette::GREEN_600)
            .add("contentWarning", palette::YELLOW_600)
            .add("contentNegative", palette::RED_600)
            .add("contentOnColor", palette::WHITE)
            .add("contentOnColorInverse", palette::BLACK)
            .add("borderOpaque", palette::GRAY_200)
            .add("borderSelected", palette::BLACK)
            .alias("accent", "contentAccent")
    }

    /// Built-in dark theme with the standard semantic token set.
    pub fn default_dark() -> Self {
        Self::new()
            .add("backgroundPrimary", palette::BLACK)
            .add("backgroundSecondary", palette::dark::GRAY_50)
            .add("backgroundTertiary", palette::dark::GRAY_100)
            .add("backgroundInversePrimary", palette::dark::GRAY_900)
            .add("backgroundAccent", palette::dark::BLUE_400)
            .add("backgroundPositive", palette::dark::GREEN_500)
            .add("backgroundWarning", palette::dark::YELLOW_500)
            .add("backgroundNegative", palette::dark::RED_500)
            .add("contentPrimary", palette::WHITE)
            .add("contentSecondary", palette::dark::GRAY_700)
            .add("contentTertiary", palette::dark::GRAY_600)
            .add("contentInversePrimary", palette::BLACK)
            .add("contentAccent", palette::dark::BLUE_700)
            .add("contentPositive", palette::dark::GREEN_700)
            .add("contentWarning", palette::dark::YELLOW_700)
            .add("contentNegative", palette::dark::RED_700)
            .add("contentOnColor", palette::WHITE)
            .add("contentOnColorInverse", palette::BLACK)
            .add("borderOpaque", palette::dark::GRAY_200)
            .add("borderSelected", palette::dark::GRAY_900)
            .alias("accent", "contentAccent")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
