//! Message card: a promotional surface with heading, paragraph, image,
//! and an optional call-to-action button.

use serde::Deserialize;

use super::mount_slot;
use crate::contrast::{background_color_kind, BackgroundColorKind};
use crate::mount::Mounted;
use crate::overrides::Override;
use crate::props::{PropValue, Props};
use crate::theme::ThemeChoice;

/// Artwork shown at the top of the card.
#[derive(Clone, Debug)]
pub struct CardImage {
    src: String,
    alt: Option<String>,
}

impl CardImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Per-slot overrides for [`MessageCard`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MessageCardOverrides {
    pub root: Override,
    pub image: Override,
    pub content_container: Override,
    pub heading: Override,
    pub paragraph: Override,
    pub button: Override,
}

impl MessageCardOverrides {
    /// Composes these overrides on top of `base`, slot by slot.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            root: self.root.merged_over(base.root),
            image: self.image.merged_over(base.image),
            content_container: self.content_container.merged_over(base.content_container),
            heading: self.heading.merged_over(base.heading),
            paragraph: self.paragraph.merged_over(base.paragraph),
            button: self.button.merged_over(base.button),
        }
    }
}

/// Message card configuration.
///
/// When an explicit background color is set, the card classifies it as a
/// light or dark surface so hosts can pick readable content colors. The
/// classification can be forced with [`MessageCard::background_kind`].
///
/// # Example
///
/// ```rust
/// use standin::{palette, MessageCard, Theme};
///
/// let tree = MessageCard::new()
///     .heading("Ride pass")
///     .paragraph("Save 15% on your next ten rides")
///     .button_label("Activate")
///     .background_color(palette::BLUE_100)
///     .mount(&Theme::default_light());
///
/// let root = tree.find("Root").unwrap();
/// assert_eq!(root.props().get_str("$backgroundColorType"), Some("light"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MessageCard {
    heading: Option<String>,
    paragraph: Option<String>,
    button_label: Option<String>,
    image: Option<CardImage>,
    background_color: Option<String>,
    background_kind: Option<BackgroundColorKind>,
    on_click: Option<String>,
    overrides: MessageCardOverrides,
}

impl MessageCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn paragraph(mut self, paragraph: impl Into<String>) -> Self {
        self.paragraph = Some(paragraph.into());
        self
    }

    pub fn button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }

    pub fn image(mut self, image: CardImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Forces the surface kind instead of classifying the background color.
    pub fn background_kind(mut self, kind: BackgroundColorKind) -> Self {
        self.background_kind = Some(kind);
        self
    }

    /// Makes the whole card tappable through the named handler.
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    pub fn overrides(mut self, overrides: MessageCardOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves every slot and assembles the mounted tree.
    pub fn mount<'a>(&self, theme: impl Into<ThemeChoice<'a>>) -> Mounted {
        let theme = theme.into().resolve();

        let kind = self.background_kind.or_else(|| {
            self.background_color
                .as_deref()
                .and_then(background_color_kind)
        });

        let mut root_props = Props::new();
        if let Some(handler) = &self.on_click {
            root_props.insert("onClick", PropValue::handler(handler.as_str()));
        }
        if let Some(color) = &self.background_color {
            root_props.insert("$backgroundColor", color.as_str());
        }
        if let Some(kind) = kind {
            root_props.insert("$backgroundColorType", kind.as_str());
        }

        let mut root = mount_slot("Root", &self.overrides.root, root_props, &theme);

        if let Some(image) = &self.image {
            root = root.child(mount_slot(
                "Image",
                &self.overrides.image,
                Props::new()
                    .add("src", image.src.as_str())
                    .add("alt", image.alt.as_deref().unwrap_or("")),
                &theme,
            ));
        }

        let mut content = mount_slot(
            "ContentContainer",
            &self.overrides.content_container,
            Props::new(),
            &theme,
        );
        if let Some(heading) = &self.heading {
            content = content
                .child(mount_slot("Heading", &self.overrides.heading, Props::new(), &theme).text(heading));
        }
        if let Some(paragraph) = &self.paragraph {
            content = content.child(
                mount_slot("Paragraph", &self.overrides.paragraph, Props::new(), &theme)
                    .text(paragraph),
            );
        }
        if let Some(label) = &self.button_label {
            content = content
                .child(mount_slot("Button", &self.overrides.button, Props::new(), &theme).text(label));
        }

        root.child(content)
    }
}
