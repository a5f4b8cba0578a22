#![forbid(unsafe_code)]

//! Core: geometry value types and the logging facade shared by the tooltip
//! placement and caret computations.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span};
