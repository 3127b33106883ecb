//! Slot override descriptors, composition, and resolution.
//!
//! Components expose their internals as named slots, each carrying a
//! default renderable and base props. This module provides:
//!
//! - [`Override`]: the per-slot descriptor (inherit, replace, or record)
//! - [`OverrideRecord`]: the structured form with component, props, style
//! - [`Override::merged_over`]: pairwise composition across layers
//! - [`resolve`]: turning default plus descriptor into a [`Resolved`] slot

mod descriptor;
mod merge;
mod resolve;

pub use descriptor::{Override, OverrideRecord};
pub use resolve::{resolve, Resolved};
