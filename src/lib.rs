//! Override resolution and theming for mountable component trees.
//!
//! Components in this crate are declarative descriptions of UI surfaces.
//! Every internal element a component mounts is a named slot, and every
//! slot accepts an override that can leave it alone, replace what gets
//! mounted there, or customize its props and style. Overrides are plain
//! data: they can be built fluently in Rust or deserialized from JSON and
//! YAML config, which makes per-deployment skinning a data problem rather
//! than a code problem.
//!
//! The main pieces:
//!
//! - [`Override`] and [`OverrideRecord`]: per-slot override descriptors
//! - [`resolve`]: applies one descriptor to one slot
//! - [`Theme`], [`AdaptiveTheme`], and [`parse_theme`]: color token themes
//!   with light/dark pairs and OS mode detection
//! - [`Mounted`]: the resolved tree components produce
//! - Components: [`BottomSheet`], [`FileUploader`], [`LocationPuck`],
//!   [`MessageCard`], [`MobileHeader`], and [`Tag`]
//!
//! # Example
//!
//! Overrides typically arrive as config. Slot names are recognized keys;
//! a string swaps the mounted renderable, an object customizes it:
//!
//! ```rust
//! use standin::{BottomSheet, BottomSheetOverrides, SheetPosition, Theme};
//!
//! let overrides: BottomSheetOverrides = serde_json::from_str(
//!     r#"{
//!         "Title": { "props": { "$level": 2 } },
//!         "Grabber": "ThickGrabber"
//!     }"#,
//! )
//! .unwrap();
//!
//! let tree = BottomSheet::new()
//!     .title("Trip details")
//!     .positions([SheetPosition::Collapsed, SheetPosition::Expanded])
//!     .overrides(overrides)
//!     .mount(&Theme::default_light());
//!
//! assert!(tree.find("ThickGrabber").is_some());
//! assert_eq!(tree.find("Title").unwrap().text_content(), "Trip details");
//! ```
//!
//! # Style functions
//!
//! A style override can be a function of the active theme and the props
//! the slot resolved to, so one override adapts across themes:
//!
//! ```rust
//! use standin::{resolve, Override, OverrideRecord, Props, Renderable, StyleMap, Theme};
//!
//! let descriptor = Override::from(OverrideRecord::new().style_with(|ctx| {
//!     let accent = ctx.theme.token("contentAccent").unwrap_or("#000000");
//!     StyleMap::new().set("borderColor", accent)
//! }));
//!
//! let resolved = resolve(
//!     Renderable::component("Badge"),
//!     &descriptor,
//!     Props::new(),
//!     &Theme::default_light(),
//! );
//! assert!(resolved.props.contains("$style"));
//! ```

mod advisory;
mod components;
mod contrast;
mod mount;
mod overrides;
pub mod palette;
mod props;
mod renderable;
mod style;
mod theme;
pub mod token;

pub use components::{
    BottomSheet, BottomSheetOverrides, CardImage, FileRow, FileStatus, FileUploader,
    FileUploaderOverrides, HeaderButton, HeaderType, LocationPuck, LocationPuckOverrides,
    MessageCard, MessageCardOverrides, MobileHeader, MobileHeaderOverrides, PuckConfidence,
    PuckSize, PuckType, SheetAction, SheetPosition, Tag, TagHierarchy, TagKind, TagOverrides,
    TagSize,
};
pub use contrast::{background_color_kind, BackgroundColorKind};
pub use mount::{Child, Mounted};
pub use overrides::{resolve, Override, OverrideRecord, Resolved};
pub use props::{PropValue, Props};
pub use renderable::Renderable;
pub use style::{StyleContext, StyleFn, StyleMap, StyleOverride, STYLE_PROP};
pub use theme::{
    parse_theme, set_mode_detector, AdaptiveTheme, ColorMode, Theme, ThemeChoice, ThemeParseError,
};
