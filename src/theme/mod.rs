//! Theme system for organizing and selecting token collections.
//!
//! This module provides:
//!
//! - [`Theme`]: A named collection of design tokens with fluent builder API
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: Reference type for selecting themes at mount time
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`parse_theme`]: YAML theme file loading
//!
//! Themes wrap the token system and provide a higher-level API for
//! building and selecting token collections.

mod adaptive;
mod choice;
mod parse;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_mode_detector, AdaptiveTheme, ColorMode};
pub use choice::ThemeChoice;
pub use parse::{parse_theme, ThemeParseError};
pub use theme::Theme;
