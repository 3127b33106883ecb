//! Development-time advisory warnings.
//!
//! Advisories flag consumer mistakes that are tolerated at runtime:
//! unsupported color tokens, size/type combinations that have no effect,
//! override shapes that were ignored. They are emitted through the [`log`]
//! facade at `warn` level and compile down to nothing outside debug
//! builds. Nothing here ever fails a render.

/// Emits a `log::warn!` record in debug builds; a no-op in release builds.
macro_rules! dev_warn {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            log::warn!(target: "standin", $($arg)*);
        }
    };
}

pub(crate) use dev_warn;

#[cfg(test)]
mod tests {
    #[test]
    fn test_dev_warn_is_infallible() {
        // No logger installed; the record is dropped on the floor.
        dev_warn!("advisory with {} argument", 1);
    }
}
