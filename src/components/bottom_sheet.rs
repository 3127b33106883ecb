//! Bottom sheet: a surface anchored to the bottom edge, optionally
//! draggable between positions.

use serde::Deserialize;

use super::mount_slot;
use crate::advisory::dev_warn;
use crate::mount::Mounted;
use crate::overrides::Override;
use crate::props::{PropValue, Props};
use crate::renderable::Renderable;
use crate::theme::{Theme, ThemeChoice};

/// Resting positions a draggable sheet cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPosition {
    Collapsed,
    Half,
    Expanded,
}

impl SheetPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            SheetPosition::Collapsed => "collapsed",
            SheetPosition::Half => "half",
            SheetPosition::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for SheetPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A header action: an accessible label, an optional icon, and the
/// handler binding the host wires up.
#[derive(Clone, Debug)]
pub struct SheetAction {
    label: String,
    icon: Option<String>,
    handler: String,
}

impl SheetAction {
    pub fn new(label: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            handler: handler.into(),
        }
    }

    /// Renders the named icon instead of the label text. The label still
    /// flows as `aria-label`.
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }
}

/// Per-slot overrides for [`BottomSheet`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BottomSheetOverrides {
    pub root: Override,
    pub bottom_container: Override,
    pub header: Override,
    pub header_inner: Override,
    pub title: Override,
    pub description: Override,
    pub content: Override,
    pub grabber: Override,
    pub divider: Override,
    pub action_button: Override,
}

impl BottomSheetOverrides {
    /// Composes these overrides on top of `base`, slot by slot.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            root: self.root.merged_over(base.root),
            bottom_container: self.bottom_container.merged_over(base.bottom_container),
            header: self.header.merged_over(base.header),
            header_inner: self.header_inner.merged_over(base.header_inner),
            title: self.title.merged_over(base.title),
            description: self.description.merged_over(base.description),
            content: self.content.merged_over(base.content),
            grabber: self.grabber.merged_over(base.grabber),
            divider: self.divider.merged_over(base.divider),
            action_button: self.action_button.merged_over(base.action_button),
        }
    }
}

/// Bottom sheet configuration.
///
/// A sheet with configured positions is draggable: it mounts a grabber
/// whose cycle handler advances through them, and tags the container
/// with the active position.
///
/// # Example
///
/// ```rust
/// use standin::{BottomSheet, SheetAction, SheetPosition, Theme};
///
/// let sheet = BottomSheet::new()
///     .title("Nearby drivers")
///     .description("12 drivers in your area")
///     .content("List goes here")
///     .positions([SheetPosition::Collapsed, SheetPosition::Expanded])
///     .leading_action(SheetAction::new("Back", "goBack").icon("ArrowLeft"));
///
/// let tree = sheet.mount(&Theme::default_light());
/// assert!(tree.find("Grabber").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BottomSheet {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    positions: Vec<SheetPosition>,
    active_position: usize,
    progress: Option<f64>,
    leading_action: Option<SheetAction>,
    trailing_action: Option<SheetAction>,
    overrides: BottomSheetOverrides,
}

impl BottomSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Makes the sheet draggable between the given resting positions.
    pub fn positions(mut self, positions: impl IntoIterator<Item = SheetPosition>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    /// Index into the configured positions. The grabber's cycle handler
    /// is expected to advance this on each activation.
    pub fn active_position(mut self, index: usize) -> Self {
        self.active_position = index;
        self
    }

    /// Shows a progress bar in place of the header divider.
    pub fn progress(mut self, value: f64) -> Self {
        self.progress = Some(value);
        self
    }

    pub fn leading_action(mut self, action: SheetAction) -> Self {
        self.leading_action = Some(action);
        self
    }

    pub fn trailing_action(mut self, action: SheetAction) -> Self {
        self.trailing_action = Some(action);
        self
    }

    pub fn overrides(mut self, overrides: BottomSheetOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves every slot and assembles the mounted tree.
    pub fn mount<'a>(&self, theme: impl Into<ThemeChoice<'a>>) -> Mounted {
        let theme = theme.into().resolve();

        let has_title = self.title.is_some();
        let draggable = !self.positions.is_empty();

        let mut header_inner = mount_slot(
            "HeaderInner",
            &self.overrides.header_inner,
            Props::new()
                .add("$isDraggable", draggable)
                .add("$hasTitle", has_title)
                .add("$hasDescription", self.description.is_some()),
            &theme,
        );
        if draggable {
            header_inner = header_inner.child(mount_slot(
                "Grabber",
                &self.overrides.grabber,
                Props::new().add("onClick", PropValue::handler("cyclePosition")),
                &theme,
            ));
        }
        if let Some(title) = &self.title {
            header_inner = header_inner
                .child(mount_slot("Title", &self.overrides.title, Props::new(), &theme).text(title));
        }
        if let Some(description) = &self.description {
            header_inner = header_inner.child(
                mount_slot(
                    "Description",
                    &self.overrides.description,
                    Props::new(),
                    &theme,
                )
                .text(description),
            );
        }

        let mut header = mount_slot(
            "Header",
            &self.overrides.header,
            Props::new()
                .add("$hasLeadingAction", self.leading_action.is_some())
                .add("$hasTrailingAction", self.trailing_action.is_some()),
            &theme,
        );
        if let Some(action) = &self.leading_action {
            header = header.child(self.action_button(action, has_title, &theme));
        }
        header = header.child(header_inner);
        if let Some(action) = &self.trailing_action {
            header = header.child(self.action_button(action, has_title, &theme));
        }

        let mut container_props = Props::new();
        if let Some(position) = self.current_position() {
            container_props.insert("$position", position.as_str());
        }
        let mut container = mount_slot(
            "BottomContainer",
            &self.overrides.bottom_container,
            container_props,
            &theme,
        )
        .child(header);

        container = match self.progress {
            Some(value) => container.child(Mounted::new(
                Renderable::component("ProgressBar"),
                Props::new().add("size", "small").add("value", value),
            )),
            None => container.child(mount_slot(
                "Divider",
                &self.overrides.divider,
                Props::new().add("$size", "section"),
                &theme,
            )),
        };

        let mut content = mount_slot("Content", &self.overrides.content, Props::new(), &theme);
        if let Some(text) = &self.content {
            content = content.text(text);
        }
        container = container.child(content);

        mount_slot("Root", &self.overrides.root, Props::new(), &theme).child(container)
    }

    fn current_position(&self) -> Option<SheetPosition> {
        if self.positions.is_empty() {
            return None;
        }
        match self.positions.get(self.active_position) {
            Some(position) => Some(*position),
            None => {
                dev_warn!(
                    "active position {} is out of range for {} configured positions",
                    self.active_position,
                    self.positions.len()
                );
                Some(self.positions[0])
            }
        }
    }

    fn action_button(&self, action: &SheetAction, has_title: bool, theme: &Theme) -> Mounted {
        // A titled header gets the larger touch target.
        let size = if has_title { "large" } else { "default" };
        let button = mount_slot(
            "ActionButton",
            &self.overrides.action_button,
            Props::new()
                .add("onClick", PropValue::handler(action.handler.as_str()))
                .add("aria-label", action.label.as_str())
                .add("size", size),
            theme,
        );
        match &action.icon {
            Some(icon) => button.child(Mounted::new(
                Renderable::component(icon.as_str()),
                Props::new(),
            )),
            None => button.text(action.label.as_str()),
        }
    }
}
