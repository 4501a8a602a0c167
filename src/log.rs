//! Logging shims for the degenerate-geometry fallbacks.
//!
//! `debug!` and `trace!` forward to `tracing` when the `tracing` feature is on.
//! Without it they swallow their arguments, so call sites need no `cfg`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
