//! Tag: a small labelled chip with semantic, primitive, and custom
//! color kinds.

use serde::Deserialize;

use super::mount_slot;
use crate::advisory::dev_warn;
use crate::mount::Mounted;
use crate::overrides::Override;
use crate::palette;
use crate::props::{PropValue, Props};
use crate::theme::{Theme, ThemeChoice};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TagSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagSize::Small => "small",
            TagSize::Medium => "medium",
            TagSize::Large => "large",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagHierarchy {
    #[default]
    Primary,
    Secondary,
}

impl TagHierarchy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagHierarchy::Primary => "primary",
            TagHierarchy::Secondary => "secondary",
        }
    }
}

/// Tag color kind.
///
/// Semantic kinds read their color from the theme, primitive kinds use a
/// fixed palette stop, and `Custom` takes the color from
/// [`Tag::color`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagKind {
    Custom,
    #[default]
    Neutral,
    Primary,
    Accent,
    Positive,
    Warning,
    Negative,
    Black,
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
    Purple,
    Brown,
    Teal,
    Lime,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Custom => "custom",
            TagKind::Neutral => "neutral",
            TagKind::Primary => "primary",
            TagKind::Accent => "accent",
            TagKind::Positive => "positive",
            TagKind::Warning => "warning",
            TagKind::Negative => "negative",
            TagKind::Black => "black",
            TagKind::Blue => "blue",
            TagKind::Green => "green",
            TagKind::Red => "red",
            TagKind::Yellow => "yellow",
            TagKind::Orange => "orange",
            TagKind::Purple => "purple",
            TagKind::Brown => "brown",
            TagKind::Teal => "teal",
            TagKind::Lime => "lime",
        }
    }
}

/// Per-slot overrides for [`Tag`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagOverrides {
    pub root: Override,
    pub text: Override,
    pub action: Override,
    pub action_icon: Override,
}

impl TagOverrides {
    /// Composes these overrides on top of `base`, slot by slot.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            root: self.root.merged_over(base.root),
            text: self.text.merged_over(base.text),
            action: self.action.merged_over(base.action),
            action_icon: self.action_icon.merged_over(base.action_icon),
        }
    }
}

/// Tag configuration.
///
/// # Example
///
/// ```rust
/// use standin::{Tag, TagKind, Theme};
///
/// let tree = Tag::new("Beta")
///     .kind(TagKind::Accent)
///     .closeable(true)
///     .mount(&Theme::default_light());
///
/// assert_eq!(tree.find("Text").unwrap().text_content(), "Beta");
/// assert!(tree.find("Action").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Tag {
    label: String,
    kind: TagKind,
    hierarchy: TagHierarchy,
    size: TagSize,
    closeable: bool,
    disabled: bool,
    color: Option<String>,
    on_close: Option<String>,
    overrides: TagOverrides,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: TagKind::default(),
            hierarchy: TagHierarchy::default(),
            size: TagSize::default(),
            closeable: false,
            disabled: false,
            color: None,
            on_close: None,
            overrides: TagOverrides::default(),
        }
    }

    pub fn kind(mut self, kind: TagKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn hierarchy(mut self, hierarchy: TagHierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    pub fn size(mut self, size: TagSize) -> Self {
        self.size = size;
        self
    }

    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the color used by [`TagKind::Custom`]. Ignored for other kinds.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Names the handler invoked when the close action is pressed.
    pub fn on_close(mut self, handler: impl Into<String>) -> Self {
        self.on_close = Some(handler.into());
        self
    }

    pub fn overrides(mut self, overrides: TagOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves every slot and assembles the mounted tree.
    pub fn mount<'a>(&self, theme: impl Into<ThemeChoice<'a>>) -> Mounted {
        let theme = theme.into().resolve();

        let mut root_props = Props::new()
            .add("$kind", self.kind.as_str())
            .add("$hierarchy", self.hierarchy.as_str())
            .add("$size", self.size.as_str())
            .add("$closeable", self.closeable)
            .add("$disabled", self.disabled);
        if let Some(color) = self.kind_color(&theme) {
            root_props.insert("$color", color.as_str());
        }

        let mut root = mount_slot("Root", &self.overrides.root, root_props, &theme);

        root = root.child(
            mount_slot("Text", &self.overrides.text, Props::new(), &theme).text(&self.label),
        );

        if self.closeable {
            let mut action_props = Props::new().add("aria-label", "close tag");
            if let Some(handler) = &self.on_close {
                action_props.insert("onClick", PropValue::handler(handler.as_str()));
            }
            let action = mount_slot("Action", &self.overrides.action, action_props, &theme);
            let icon = mount_slot("ActionIcon", &self.overrides.action_icon, Props::new(), &theme);
            root = root.child(action.child(icon));
        }

        root
    }

    fn kind_color(&self, theme: &Theme) -> Option<String> {
        let token = match self.kind {
            TagKind::Custom => {
                return match &self.color {
                    Some(color) => Some(color.clone()),
                    None => {
                        dev_warn!("custom tag has no color set");
                        None
                    }
                };
            }
            TagKind::Neutral => "contentSecondary",
            TagKind::Primary => "contentPrimary",
            TagKind::Accent => "contentAccent",
            TagKind::Positive => "contentPositive",
            TagKind::Warning => "contentWarning",
            TagKind::Negative => "contentNegative",
            TagKind::Black => return Some(palette::BLACK.to_owned()),
            TagKind::Blue => return Some(palette::BLUE_400.to_owned()),
            TagKind::Green => return Some(palette::GREEN_400.to_owned()),
            TagKind::Red => return Some(palette::RED_400.to_owned()),
            TagKind::Yellow => return Some(palette::YELLOW_400.to_owned()),
            TagKind::Orange => return Some(palette::ORANGE_400.to_owned()),
            TagKind::Purple => return Some(palette::PURPLE_400.to_owned()),
            TagKind::Brown => return Some(palette::BROWN_400.to_owned()),
            TagKind::Lime => return Some(palette::LIME_400.to_owned()),
            TagKind::Teal => return Some(palette::TEAL_400.to_owned()),
        };
        theme.token(token).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideRecord;
    use crate::theme::Theme;

    #[test]
    fn test_root_carries_variant_flags() {
        let tree = Tag::new("Beta")
            .hierarchy(TagHierarchy::Secondary)
            .size(TagSize::Large)
            .disabled(true)
            .mount(&Theme::default_light());

        let root = tree.find("Root").unwrap();
        assert_eq!(root.props().get_str("$kind"), Some("neutral"));
        assert_eq!(root.props().get_str("$hierarchy"), Some("secondary"));
        assert_eq!(root.props().get_str("$size"), Some("large"));
        assert_eq!(
            root.props().get("$disabled").and_then(PropValue::as_bool),
            Some(true)
        );
    }

    #[test]
    fn test_semantic_kind_reads_theme_token() {
        let theme = Theme::default_light();
        let tree = Tag::new("Beta").kind(TagKind::Warning).mount(&theme);

        let root = tree.find("Root").unwrap();
        assert_eq!(root.props().get_str("$color"), theme.token("contentWarning"));
    }

    #[test]
    fn test_primitive_kind_uses_palette_stop() {
        let tree = Tag::new("Beta").kind(TagKind::Purple).mount(&Theme::new());

        let root = tree.find("Root").unwrap();
        assert_eq!(root.props().get_str("$color"), Some(palette::PURPLE_400));
    }

    #[test]
    fn test_custom_kind_takes_configured_color() {
        let tree = Tag::new("Beta")
            .kind(TagKind::Custom)
            .color("#bada55")
            .mount(&Theme::new());

        let root = tree.find("Root").unwrap();
        assert_eq!(root.props().get_str("$color"), Some("#bada55"));
    }

    #[test]
    fn test_custom_kind_without_color_omits_prop() {
        let tree = Tag::new("Beta").kind(TagKind::Custom).mount(&Theme::new());

        let root = tree.find("Root").unwrap();
        assert!(!root.props().contains("$color"));
    }

    #[test]
    fn test_closeable_tag_mounts_action() {
        let tree = Tag::new("Beta")
            .closeable(true)
            .on_close("dismissTag")
            .mount(&Theme::default_light());

        let action = tree.find("Action").unwrap();
        assert_eq!(action.props().get_str("aria-label"), Some("close tag"));
        assert_eq!(
            action.props().get("onClick").and_then(PropValue::as_handler),
            Some("dismissTag")
        );
        assert!(action.find("ActionIcon").is_some());
    }

    #[test]
    fn test_action_absent_when_not_closeable() {
        let tree = Tag::new("Beta").mount(&Theme::default_light());

        assert!(tree.find("Action").is_none());
        assert!(tree.find("ActionIcon").is_none());
    }

    #[test]
    fn test_action_icon_slot_swap() {
        let overrides = TagOverrides {
            action_icon: Override::replace("XSmallIcon"),
            ..Default::default()
        };
        let tree = Tag::new("Beta")
            .closeable(true)
            .overrides(overrides)
            .mount(&Theme::default_light());

        assert!(tree.find("ActionIcon").is_none());
        assert!(tree.find("XSmallIcon").is_some());
    }

    #[test]
    fn test_root_override_props_merge_over_flags() {
        let overrides = TagOverrides {
            root: OverrideRecord::new().prop("$size", "small").into(),
            ..Default::default()
        };
        let tree = Tag::new("Beta")
            .size(TagSize::Large)
            .overrides(overrides)
            .mount(&Theme::default_light());

        let root = tree.find("Root").unwrap();
        assert_eq!(root.props().get_str("$size"), Some("small"));
    }

    #[test]
    fn test_overrides_deserialize_with_slot_names() {
        let overrides: TagOverrides = serde_json::from_str(
            r#"{ "Root": { "style": { "borderRadius": "4px" } }, "ActionIcon": "XSmallIcon" }"#,
        )
        .unwrap();

        assert!(matches!(overrides.root, Override::Custom(_)));
        assert!(matches!(overrides.action_icon, Override::Replace(_)));
    }
}
