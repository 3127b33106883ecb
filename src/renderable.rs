//! Renderable identity for elements and components.

use serde::Deserialize;

/// Identity of a unit of UI that can be mounted: either a host element
/// (a lowercase tag like `div`) or a library component (a capitalized
/// name like `SheetRoot`).
///
/// The distinction matters to hosts, not to override resolution; the
/// resolver treats both uniformly.
///
/// # Example
///
/// ```rust
/// use standin::Renderable;
///
/// let element = Renderable::element("div");
/// let component = Renderable::component("SheetRoot");
///
/// assert!(element.is_element());
/// assert_eq!(component.name(), "SheetRoot");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Renderable {
    /// A host element, addressed by tag name.
    Element(String),
    /// A library component, addressed by component name.
    Component(String),
}

impl Renderable {
    /// Creates a host element renderable.
    pub fn element(tag: impl Into<String>) -> Self {
        Renderable::Element(tag.into())
    }

    /// Creates a component renderable.
    pub fn component(name: impl Into<String>) -> Self {
        Renderable::Component(name.into())
    }

    /// Creates a renderable from a bare name, deciding element vs component
    /// by case convention: a leading uppercase letter means component,
    /// anything else means host element.
    ///
    /// This is the convention config files use, mirroring how markup
    /// languages distinguish `<div>` from `<Widget>`.
    pub fn from_name(name: &str) -> Self {
        let is_component = name.chars().next().is_some_and(|c| c.is_uppercase());
        if is_component {
            Renderable::Component(name.to_string())
        } else {
            Renderable::Element(name.to_string())
        }
    }

    /// The tag or component name.
    pub fn name(&self) -> &str {
        match self {
            Renderable::Element(name) => name,
            Renderable::Component(name) => name,
        }
    }

    /// True for host elements.
    pub fn is_element(&self) -> bool {
        matches!(self, Renderable::Element(_))
    }

    /// True for library components.
    pub fn is_component(&self) -> bool {
        matches!(self, Renderable::Component(_))
    }
}

impl From<&str> for Renderable {
    fn from(name: &str) -> Self {
        Renderable::from_name(name)
    }
}

impl From<String> for Renderable {
    fn from(name: String) -> Self {
        Renderable::from_name(&name)
    }
}

impl std::fmt::Display for Renderable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_accessors() {
        let r = Renderable::element("div");
        assert_eq!(r.name(), "div");
        assert!(r.is_element());
        assert!(!r.is_component());
    }

    #[test]
    fn test_component_accessors() {
        let r = Renderable::component("SheetRoot");
        assert_eq!(r.name(), "SheetRoot");
        assert!(r.is_component());
    }

    #[test]
    fn test_from_name_case_convention() {
        assert!(Renderable::from_name("div").is_element());
        assert!(Renderable::from_name("span").is_element());
        assert!(Renderable::from_name("CustomRoot").is_component());
        assert!(Renderable::from_name("X").is_component());
    }

    #[test]
    fn test_from_name_empty_is_element() {
        assert!(Renderable::from_name("").is_element());
    }

    #[test]
    fn test_from_str_conversion() {
        let r: Renderable = "Grabber".into();
        assert_eq!(r, Renderable::component("Grabber"));
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(Renderable::element("div").to_string(), "div");
        assert_eq!(Renderable::component("Tag").to_string(), "Tag");
    }

    #[test]
    fn test_deserialize_from_string() {
        let r: Renderable = serde_json::from_str("\"CustomRoot\"").unwrap();
        assert_eq!(r, Renderable::component("CustomRoot"));

        let r: Renderable = serde_json::from_str("\"section\"").unwrap();
        assert_eq!(r, Renderable::element("section"));
    }
}
