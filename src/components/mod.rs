//! The component kit: six components built on slot override resolution.
//!
//! Every component follows the same shape: a fluent config builder, a
//! typed override set with one [`Override`](crate::Override) field per
//! slot (deserializable with PascalCase slot names), and a `mount`
//! method that resolves each slot and assembles the mounted tree.

mod bottom_sheet;
mod file_uploader;
mod location_puck;
mod message_card;
mod mobile_header;
mod tag;

pub use bottom_sheet::{BottomSheet, BottomSheetOverrides, SheetAction, SheetPosition};
pub use file_uploader::{FileRow, FileStatus, FileUploader, FileUploaderOverrides};
pub use location_puck::{LocationPuck, LocationPuckOverrides, PuckConfidence, PuckSize, PuckType};
pub use message_card::{CardImage, MessageCard, MessageCardOverrides};
pub use mobile_header::{HeaderButton, HeaderType, MobileHeader, MobileHeaderOverrides};
pub use tag::{Tag, TagHierarchy, TagKind, TagOverrides, TagSize};

use crate::mount::Mounted;
use crate::overrides::{resolve, Override};
use crate::props::Props;
use crate::renderable::Renderable;
use crate::theme::Theme;

/// Resolves one named slot against its descriptor and wraps it for mounting.
pub(crate) fn mount_slot(
    name: &'static str,
    descriptor: &Override,
    base: Props,
    theme: &Theme,
) -> Mounted {
    Mounted::from(resolve(
        Renderable::component(name),
        descriptor,
        base,
        theme,
    ))
}
