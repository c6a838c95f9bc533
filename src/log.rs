//! Logging for the layout pipeline.
//!
//! With the `tracing` feature, `debug!` and `warn!` are the `tracing` macros
//! and layout reports derived metrics and rejected configurations through
//! them. Without it they swallow their arguments.

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
