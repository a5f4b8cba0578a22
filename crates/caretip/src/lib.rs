#![forbid(unsafe_code)]

//! Anchored tooltip geometry.
//!
//! This crate computes the two pieces of a caret tooltip that do not depend
//! on any UI toolkit:
//!
//! - [`compute_position`] - where the popup goes, given the anchor bounds,
//!   the window size and the measured popup size, clamped to the window.
//! - [`compute_caret_path`] - the three vertices of the caret triangle in
//!   bubble-local coordinates.
//!
//! [`Tooltip`] binds both to a single configured instance. Hosts plug the
//! placement into their popup system through [`PopupPositionProvider`] and
//! fill the [`CaretPath`] with their own renderer.
//!
//! # Example
//!
//! ```
//! use caretip::{Position, Tooltip, TooltipConfig};
//! use caretip_core::geometry::{IntOffset, IntRect, IntSize};
//!
//! let tooltip = Tooltip::new(Position::BottomRight).config(TooltipConfig::default());
//! let layout = tooltip.layout(
//!     IntRect::new(10, 10, 50, 30),
//!     IntSize::new(200, 200),
//!     IntSize::new(30, 20),
//! );
//! assert_eq!(layout.origin, IntOffset::new(10, 30));
//! ```

pub mod caret;
pub mod config;
pub mod placement;
pub mod position;
pub mod tooltip;

pub use caret::{CaretPath, compute_caret_path};
pub use caretip_core::geometry::{IntOffset, IntRect, IntSize, Offset, Size};
pub use config::{CaretInsets, ConfigError, Density, TooltipConfig, TooltipRadius};
pub use placement::{PopupPositionProvider, TooltipPositionProvider, compute_position};
pub use position::{Alignment, LayoutDirection, Position, alignment_for};
pub use tooltip::{Tooltip, TooltipLayout};
