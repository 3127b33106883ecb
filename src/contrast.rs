//! Background color classification for content contrast.
//!
//! Given an explicit background color, components need to know whether to
//! lay light or dark content over it. Classification is by membership in
//! the palette ramps: stops 50 through 400 read as light surfaces, 600
//! through 900 as dark. The 500 stops of most hues sit in between and
//! fail contrast with both content colors, so they are rejected outright.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::advisory::dev_warn;
use crate::palette;

/// Whether a background reads as a light or a dark surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundColorKind {
    Light,
    Dark,
}

impl BackgroundColorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundColorKind::Light => "light",
            BackgroundColorKind::Dark => "dark",
        }
    }
}

impl std::fmt::Display for BackgroundColorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static LIGHT_BACKGROUNDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    use palette::*;
    [
        WHITE,
        GRAY_50, GRAY_100, GRAY_200, GRAY_300, GRAY_400,
        RED_50, RED_100, RED_200, RED_300, RED_400,
        ORANGE_50, ORANGE_100, ORANGE_200, ORANGE_300, ORANGE_400,
        YELLOW_50, YELLOW_100, YELLOW_200, YELLOW_300, YELLOW_400,
        LIME_50, LIME_100, LIME_200, LIME_300, LIME_400,
        GREEN_50, GREEN_100, GREEN_200, GREEN_300, GREEN_400,
        TEAL_50, TEAL_100, TEAL_200, TEAL_300, TEAL_400,
        BLUE_50, BLUE_100, BLUE_200, BLUE_300, BLUE_400,
        COBALT_50, COBALT_100, COBALT_200,
        PURPLE_50, PURPLE_100, PURPLE_200, PURPLE_300, PURPLE_400,
        MAGENTA_50, MAGENTA_100, MAGENTA_200, MAGENTA_300, MAGENTA_400,
        BROWN_50, BROWN_100, BROWN_200, BROWN_300,
        PLATINUM_50, PLATINUM_100, PLATINUM_200, PLATINUM_300, PLATINUM_400,
    ]
    .into_iter()
    .collect()
});

static DARK_BACKGROUNDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    use palette::*;
    [
        BLACK,
        GRAY_600, GRAY_700, GRAY_800, GRAY_900,
        RED_600, RED_700, RED_800, RED_900,
        ORANGE_600, ORANGE_700, ORANGE_800, ORANGE_900,
        YELLOW_600, YELLOW_700, YELLOW_800, YELLOW_900,
        LIME_600, LIME_700, LIME_800, LIME_900,
        GREEN_600, GREEN_700, GREEN_800, GREEN_900,
        TEAL_600, TEAL_700, TEAL_800, TEAL_900,
        BLUE_600, BLUE_700, BLUE_800, BLUE_900,
        COBALT_300, COBALT_400, COBALT_500, COBALT_600, COBALT_700,
        PURPLE_600, PURPLE_700, PURPLE_800, PURPLE_900,
        MAGENTA_600, MAGENTA_700, MAGENTA_800, MAGENTA_900,
        BROWN_400, BROWN_500, BROWN_600, BROWN_700,
        PLATINUM_500, PLATINUM_600, PLATINUM_700, PLATINUM_800,
    ]
    .into_iter()
    .collect()
});

static POOR_CONTRAST_BACKGROUNDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    use palette::*;
    [
        GRAY_500, RED_500, ORANGE_500, AMBER_500, YELLOW_600,
        LIME_500, GREEN_500, TEAL_500, BLUE_500, PURPLE_500,
        MAGENTA_500,
    ]
    .into_iter()
    .collect()
});

static DARK_PALETTE_VALUES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| palette::dark::VALUES.iter().copied().collect());

/// Classifies an explicit background color as a light or dark surface.
///
/// Returns `None` for colors outside the palette ramps and for the
/// poor-contrast stops, which no content color can safely sit on. Dark
/// palette values trigger an advisory: callers should pass the light-mode
/// color and let the theme supply the dark variant.
///
/// # Example
///
/// ```rust
/// use standin::{background_color_kind, palette, BackgroundColorKind};
///
/// assert_eq!(
///     background_color_kind(palette::BLUE_100),
///     Some(BackgroundColorKind::Light)
/// );
/// assert_eq!(
///     background_color_kind(palette::BLUE_800),
///     Some(BackgroundColorKind::Dark)
/// );
/// assert_eq!(background_color_kind(palette::BLUE_500), None);
/// ```
pub fn background_color_kind(color: &str) -> Option<BackgroundColorKind> {
    if POOR_CONTRAST_BACKGROUNDS.contains(color) {
        dev_warn!(
            "background color {} fails contrast with both light and dark content and is ignored",
            color
        );
        return None;
    }

    if DARK_PALETTE_VALUES.contains(color) && color != palette::WHITE && color != palette::BLACK {
        dev_warn!(
            "background color {} is a dark palette value; pass the light-mode color and let the theme adapt it",
            color
        );
    }

    if LIGHT_BACKGROUNDS.contains(color) {
        return Some(BackgroundColorKind::Light);
    }
    if DARK_BACKGROUNDS.contains(color) {
        return Some(BackgroundColorKind::Dark);
    }

    None
}
