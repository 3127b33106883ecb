//! Adaptive themes that respond to system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A theme that adapts based on the user's display mode.
///
/// Contains separate themes for light and dark modes, automatically
/// selecting the appropriate one based on OS settings.
///
/// # Example
///
/// ```rust
/// use standin::{AdaptiveTheme, MessageCard, Theme};
///
/// let adaptive = AdaptiveTheme::new(Theme::default_light(), Theme::default_dark());
///
/// // Mounts with whichever variant matches the user's OS mode.
/// let card = MessageCard::new()
///     .heading("Update available")
///     .mount(&adaptive);
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Resolves to the appropriate theme based on the current color mode.
    pub(crate) fn resolve(&self) -> Theme {
        match detect_color_mode() {
            ColorMode::Light => self.light.clone(),
            ColorMode::Dark => self.dark.clone(),
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
