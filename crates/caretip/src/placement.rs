#![forbid(unsafe_code)]

//! Popup placement relative to an anchor.
//!
//! # Invariants
//!
//! 1. The returned x lies in `[0, max(0, window.width - popup.width)]` and
//!    y in `[0, max(0, window.height - popup.height)]`.
//! 2. Clamping saturates only; there is no flip to the opposite side, so a
//!    clamped popup may overlap its anchor.
//! 3. `Left`/`Right` add `spacing.y` on the x axis as well as `spacing.x`.

use caretip_core::geometry::{IntOffset, IntRect, IntSize};
use caretip_core::trace;

use crate::position::{LayoutDirection, Position};

/// Placement seam implemented for host popup systems.
pub trait PopupPositionProvider {
    /// Absolute top-left coordinate of the popup in window space.
    fn calculate_position(
        &self,
        anchor_bounds: IntRect,
        window_size: IntSize,
        layout_direction: LayoutDirection,
        popup_content_size: IntSize,
    ) -> IntOffset;
}

/// Compute the clamped top-left coordinate of a popup.
///
/// | Position    | x                                    | y                                  |
/// |-------------|--------------------------------------|------------------------------------|
/// | BottomLeft  | `right - w + sx`                     | `bottom + sy`                      |
/// | BottomRight | `left + sx`                          | `bottom + sy`                      |
/// | TopLeft     | `right - w + sx`                     | `top - h - sy`                     |
/// | TopRight    | `left + sx`                          | `top - h - sy`                     |
/// | Left        | `left - w - sy + sx`                 | `top + (anchor.h - h) / 2`         |
/// | Right       | `right + sy + sx`                    | `top + (anchor.h - h) / 2`         |
#[must_use]
pub fn compute_position(
    anchor: IntRect,
    viewport: IntSize,
    popup_size: IntSize,
    position: Position,
    spacing: IntOffset,
) -> IntOffset {
    // Truncates toward zero, matching the host's integer layout.
    let vertical_center = anchor.height().saturating_sub(popup_size.height) / 2;

    let (x, y) = match position {
        Position::BottomLeft => (
            anchor
                .right
                .saturating_sub(popup_size.width)
                .saturating_add(spacing.x),
            anchor.bottom.saturating_add(spacing.y),
        ),
        Position::BottomRight => (
            anchor.left.saturating_add(spacing.x),
            anchor.bottom.saturating_add(spacing.y),
        ),
        Position::TopLeft => (
            anchor
                .right
                .saturating_sub(popup_size.width)
                .saturating_add(spacing.x),
            anchor
                .top
                .saturating_sub(popup_size.height)
                .saturating_sub(spacing.y),
        ),
        Position::TopRight => (
            anchor.left.saturating_add(spacing.x),
            anchor
                .top
                .saturating_sub(popup_size.height)
                .saturating_sub(spacing.y),
        ),
        Position::Left => (
            anchor
                .left
                .saturating_sub(popup_size.width)
                .saturating_sub(spacing.y)
                .saturating_add(spacing.x),
            anchor.top.saturating_add(vertical_center),
        ),
        Position::Right => (
            anchor
                .right
                .saturating_add(spacing.y)
                .saturating_add(spacing.x),
            anchor.top.saturating_add(vertical_center),
        ),
    };

    let max_x = viewport.width.saturating_sub(popup_size.width).max(0);
    let max_y = viewport.height.saturating_sub(popup_size.height).max(0);
    let clamped = IntOffset::new(x.clamp(0, max_x), y.clamp(0, max_y));

    trace!(
        position = %position,
        unclamped_x = x,
        unclamped_y = y,
        x = clamped.x,
        y = clamped.y,
        "computed popup position"
    );

    clamped
}

/// [`PopupPositionProvider`] for a fixed [`Position`] and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipPositionProvider {
    position: Position,
    spacing: IntOffset,
}

impl TooltipPositionProvider {
    #[must_use]
    pub const fn new(position: Position, spacing: IntOffset) -> Self {
        Self { position, spacing }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn spacing(&self) -> IntOffset {
        self.spacing
    }
}

impl PopupPositionProvider for TooltipPositionProvider {
    /// Layout direction does not affect placement; positions are absolute.
    fn calculate_position(
        &self,
        anchor_bounds: IntRect,
        window_size: IntSize,
        _layout_direction: LayoutDirection,
        popup_content_size: IntSize,
    ) -> IntOffset {
        compute_position(
            anchor_bounds,
            window_size,
            popup_content_size,
            self.position,
            self.spacing,
        )
    }
}
