//! Mobile header: a compact navigation bar with an optional nav button,
//! a title, and up to two trailing action buttons.

use serde::Deserialize;

use super::mount_slot;
use crate::advisory::dev_warn;
use crate::mount::Mounted;
use crate::overrides::Override;
use crate::props::{PropValue, Props};
use crate::theme::{Theme, ThemeChoice};

/// How the header sits over the page content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderType {
    #[default]
    Fixed,
    Floating,
}

impl HeaderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderType::Fixed => "fixed",
            HeaderType::Floating => "floating",
        }
    }
}

/// An icon button in the header: nav on the left, actions on the right.
#[derive(Clone, Debug)]
pub struct HeaderButton {
    icon: String,
    label: String,
    handler: String,
}

impl HeaderButton {
    pub fn new(
        icon: impl Into<String>,
        label: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            handler: handler.into(),
        }
    }
}

/// Per-slot overrides for [`MobileHeader`].
///
/// The `IconButton` slot applies to the nav button and every additional
/// button alike.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MobileHeaderOverrides {
    pub root: Override,
    pub title: Override,
    pub nav_container: Override,
    pub icon_button: Override,
    pub additional_buttons_container: Override,
}

impl MobileHeaderOverrides {
    /// Composes these overrides on top of `base`, slot by slot.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            root: self.root.merged_over(base.root),
            title: self.title.merged_over(base.title),
            nav_container: self.nav_container.merged_over(base.nav_container),
            icon_button: self.icon_button.merged_over(base.icon_button),
            additional_buttons_container: self
                .additional_buttons_container
                .merged_over(base.additional_buttons_container),
        }
    }
}

/// Mobile header configuration.
///
/// # Example
///
/// ```rust
/// use standin::{HeaderButton, MobileHeader, Theme};
///
/// let tree = MobileHeader::new()
///     .title("Trip details")
///     .nav_button(HeaderButton::new("ChevronLeft", "Back", "goBack"))
///     .mount(&Theme::default_light());
///
/// assert_eq!(tree.find("Title").unwrap().text_content(), "Trip details");
/// assert!(tree.find("NavContainer").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MobileHeader {
    title: Option<String>,
    header_type: HeaderType,
    expanded: bool,
    nav_button: Option<HeaderButton>,
    additional_buttons: Vec<HeaderButton>,
    overrides: MobileHeaderOverrides,
}

impl MobileHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn header_type(mut self, header_type: HeaderType) -> Self {
        self.header_type = header_type;
        self
    }

    /// Expands a floating header to full width.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn nav_button(mut self, button: HeaderButton) -> Self {
        self.nav_button = Some(button);
        self
    }

    /// Appends a trailing action button. The header keeps at most two.
    pub fn additional_button(mut self, button: HeaderButton) -> Self {
        self.additional_buttons.push(button);
        self
    }

    pub fn overrides(mut self, overrides: MobileHeaderOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves every slot and assembles the mounted tree.
    pub fn mount<'a>(&self, theme: impl Into<ThemeChoice<'a>>) -> Mounted {
        let theme = theme.into().resolve();

        let mut root = mount_slot(
            "Root",
            &self.overrides.root,
            Props::new()
                .add("$type", self.header_type.as_str())
                .add("$expanded", self.expanded),
            &theme,
        );

        if let Some(nav) = &self.nav_button {
            let container = mount_slot(
                "NavContainer",
                &self.overrides.nav_container,
                Props::new(),
                &theme,
            );
            root = root.child(container.child(self.icon_button(nav, &theme)));
        }

        if let Some(title) = &self.title {
            root = root
                .child(mount_slot("Title", &self.overrides.title, Props::new(), &theme).text(title));
        }

        let mut buttons = self.additional_buttons.as_slice();
        if buttons.len() > 2 {
            dev_warn!("mobile header supports at most two additional buttons; extra buttons are dropped");
            buttons = &buttons[..2];
        }
        if !buttons.is_empty() {
            let mut container = mount_slot(
                "AdditionalButtonsContainer",
                &self.overrides.additional_buttons_container,
                Props::new(),
                &theme,
            );
            for button in buttons {
                container = container.child(self.icon_button(button, &theme));
            }
            root = root.child(container);
        }

        root
    }

    fn icon_button(&self, button: &HeaderButton, theme: &Theme) -> Mounted {
        let base = Props::new()
            .add("aria-label", button.label.as_str())
            .add("onClick", PropValue::handler(button.handler.as_str()));
        mount_slot("IconButton", &self.overrides.icon_button, base, theme)
            .child(Mounted::new(button.icon.as_str(), Props::new()))
    }
}
