//! Feature-gated logging macros.
//!
//! With the `tracing` feature on, `debug!` and `warn!` are the real
//! `tracing` macros; with it off they expand to nothing, so call sites cost
//! nothing in the default build.

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
