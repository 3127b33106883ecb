//! Location puck: the map marker that shows the device position, its
//! heading, and a confidence halo.

use serde::Deserialize;

use super::mount_slot;
use crate::advisory::dev_warn;
use crate::mount::Mounted;
use crate::overrides::Override;
use crate::palette;
use crate::props::Props;
use crate::theme::ThemeChoice;

/// Which rider the puck represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PuckType {
    #[default]
    Consumer,
    Earner,
}

/// Puck footprint. Sizes other than medium only apply to earner pucks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PuckSize {
    #[default]
    Medium,
    Large,
    XLarge,
}

impl PuckSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PuckSize::Medium => "medium",
            PuckSize::Large => "large",
            PuckSize::XLarge => "x-large",
        }
    }
}

/// How tight the position fix is. Drives the approximation halo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PuckConfidence {
    Low,
    #[default]
    Medium,
    High,
}

impl PuckConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            PuckConfidence::Low => "low",
            PuckConfidence::Medium => "medium",
            PuckConfidence::High => "high",
        }
    }
}

/// Per-slot overrides for [`LocationPuck`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LocationPuckOverrides {
    pub root: Override,
    pub consumer_location_puck_core: Override,
    pub earner_location_puck_core: Override,
    pub location_puck_approximation: Override,
}

impl LocationPuckOverrides {
    /// Composes these overrides on top of `base`, slot by slot.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            root: self.root.merged_over(base.root),
            consumer_location_puck_core: self
                .consumer_location_puck_core
                .merged_over(base.consumer_location_puck_core),
            earner_location_puck_core: self
                .earner_location_puck_core
                .merged_over(base.earner_location_puck_core),
            location_puck_approximation: self
                .location_puck_approximation
                .merged_over(base.location_puck_approximation),
        }
    }
}

/// Location puck configuration.
///
/// The puck tints itself with the theme's `contentAccent` token so it
/// stays on brand in both light and dark mode.
///
/// # Example
///
/// Map hosts typically re-anchor the puck on its center point:
///
/// ```rust
/// use standin::{LocationPuck, LocationPuckOverrides, OverrideRecord, StyleMap, Theme};
///
/// let overrides = LocationPuckOverrides {
///     root: OverrideRecord::new()
///         .style(StyleMap::new().set("transform", "translate(-50%, -50%)"))
///         .into(),
///     ..Default::default()
/// };
/// let tree = LocationPuck::new()
///     .bearing(45.0)
///     .overrides(overrides)
///     .mount(&Theme::default_light());
///
/// assert!(tree.find("Root").unwrap().props().contains("$style"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LocationPuck {
    puck_type: PuckType,
    size: PuckSize,
    confidence: PuckConfidence,
    bearing: f64,
    overrides: LocationPuckOverrides,
}

impl LocationPuck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn puck_type(mut self, puck_type: PuckType) -> Self {
        self.puck_type = puck_type;
        self
    }

    pub fn size(mut self, size: PuckSize) -> Self {
        self.size = size;
        self
    }

    pub fn confidence(mut self, confidence: PuckConfidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Heading in degrees clockwise from north.
    pub fn bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    pub fn overrides(mut self, overrides: LocationPuckOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves every slot and assembles the mounted tree.
    pub fn mount<'a>(&self, theme: impl Into<ThemeChoice<'a>>) -> Mounted {
        let theme = theme.into().resolve();
        let accent = theme.token("contentAccent").unwrap_or(palette::BLUE_400);

        let approximation = mount_slot(
            "LocationPuckApproximation",
            &self.overrides.location_puck_approximation,
            Props::new()
                .add("$color", accent)
                .add("$confidence", self.confidence.as_str()),
            &theme,
        );

        let root = mount_slot("Root", &self.overrides.root, Props::new(), &theme);

        match self.puck_type {
            PuckType::Consumer => {
                if self.size != PuckSize::Medium {
                    dev_warn!("puck size only applies to earner pucks");
                }
                let core = mount_slot(
                    "ConsumerLocationPuckCore",
                    &self.overrides.consumer_location_puck_core,
                    Props::new().add("$color", accent),
                    &theme,
                );
                let heading = Mounted::new(
                    "LocationPuckHeading",
                    Props::new().add("$bearing", self.bearing),
                );
                root.child(approximation).child(core).child(heading)
            }
            PuckType::Earner => {
                let core = mount_slot(
                    "EarnerLocationPuckCore",
                    &self.overrides.earner_location_puck_core,
                    Props::new()
                        .add("$color", accent)
                        .add("$size", self.size.as_str()),
                    &theme,
                );
                let heading = Mounted::new(
                    "LocationPuckHeading",
                    Props::new()
                        .add("$bearing", self.bearing)
                        .add("$size", self.size.as_str()),
                );
                root.child(approximation).child(core).child(heading)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideRecord;
    use crate::props::PropValue;
    use crate::theme::Theme;

    #[test]
    fn test_consumer_puck_structure() {
        let tree = LocationPuck::new().mount(&Theme::default_light());

        assert!(tree.find("ConsumerLocationPuckCore").is_some());
        assert!(tree.find("EarnerLocationPuckCore").is_none());
        assert!(tree.find("LocationPuckApproximation").is_some());
        assert!(tree.find("LocationPuckHeading").is_some());
    }

    #[test]
    fn test_puck_tinted_with_theme_accent() {
        let theme = Theme::new().add("contentAccent", "#7356bf");
        let tree = LocationPuck::new().mount(&theme);

        let halo = tree.find("LocationPuckApproximation").unwrap();
        assert_eq!(halo.props().get_str("$color"), Some("#7356bf"));
        let core = tree.find("ConsumerLocationPuckCore").unwrap();
        assert_eq!(core.props().get_str("$color"), Some("#7356bf"));
    }

    #[test]
    fn test_accent_falls_back_to_default_blue() {
        let tree = LocationPuck::new().mount(&Theme::new());

        let halo = tree.find("LocationPuckApproximation").unwrap();
        assert_eq!(halo.props().get_str("$color"), Some(palette::BLUE_400));
    }

    #[test]
    fn test_earner_puck_carries_size() {
        let tree = LocationPuck::new()
            .puck_type(PuckType::Earner)
            .size(PuckSize::XLarge)
            .mount(&Theme::default_light());

        let core = tree.find("EarnerLocationPuckCore").unwrap();
        assert_eq!(core.props().get_str("$size"), Some("x-large"));
        let heading = tree.find("LocationPuckHeading").unwrap();
        assert_eq!(heading.props().get_str("$size"), Some("x-large"));
    }

    #[test]
    fn test_bearing_flows_to_heading() {
        let tree = LocationPuck::new().bearing(270.0).mount(&Theme::default_light());

        let heading = tree.find("LocationPuckHeading").unwrap();
        assert_eq!(
            heading.props().get("$bearing").and_then(PropValue::as_f64),
            Some(270.0)
        );
    }

    #[test]
    fn test_confidence_flows_to_halo() {
        let tree = LocationPuck::new()
            .confidence(PuckConfidence::Low)
            .mount(&Theme::default_light());

        let halo = tree.find("LocationPuckApproximation").unwrap();
        assert_eq!(halo.props().get_str("$confidence"), Some("low"));
    }

    #[test]
    fn test_core_slot_swap() {
        let overrides = LocationPuckOverrides {
            consumer_location_puck_core: Override::replace("PulsingDot"),
            ..Default::default()
        };
        let tree = LocationPuck::new()
            .overrides(overrides)
            .mount(&Theme::default_light());

        assert!(tree.find("ConsumerLocationPuckCore").is_none());
        let dot = tree.find("PulsingDot").unwrap();
        assert_eq!(dot.props().get_str("$color"), Some(palette::BLUE_400));
    }

    #[test]
    fn test_overrides_merge_slot_wise() {
        let base = LocationPuckOverrides {
            root: OverrideRecord::new().prop("data-testid", "puck").into(),
            ..Default::default()
        };
        let over = LocationPuckOverrides {
            location_puck_approximation: OverrideRecord::new().prop("$animated", true).into(),
            ..Default::default()
        };
        let merged = over.merged_over(base);

        let tree = LocationPuck::new()
            .overrides(merged)
            .mount(&Theme::default_light());
        assert_eq!(tree.find("Root").unwrap().props().get_str("data-testid"), Some("puck"));
        let halo = tree.find("LocationPuckApproximation").unwrap();
        assert_eq!(halo.props().get("$animated").and_then(PropValue::as_bool), Some(true));
    }
}
