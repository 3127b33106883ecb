//! Token system for named colors and aliases.
//!
//! This module provides the color-token primitives themes are built from:
//!
//! - [`TokenValue`]: A token that is either a concrete color or an alias
//! - [`Tokens`]: A registry of named tokens
//! - [`TokenError`]: Errors from token validation
//!
//! Tokens support a layered pattern where semantic names alias presentation
//! names, which in turn alias primitive palette values.

mod error;
mod registry;
mod value;

pub use error::TokenError;
pub use registry::Tokens;
pub use value::TokenValue;
