//! Conditional logging macros.
//!
//! With the `tracing` feature on, these are the `tracing` macros. Without it
//! they expand to nothing, so the geometry helpers stay free of any logging
//! cost in browser builds.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
