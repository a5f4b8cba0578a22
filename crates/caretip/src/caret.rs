#![forbid(unsafe_code)]

//! Caret outline generation.
//!
//! The caret is a triangle drawn in the bubble's local space (origin at the
//! bubble's top-left, y down). Its base lies on one bubble edge and its apex
//! points out of the bubble toward the anchor:
//!
//! ```text
//!   BottomLeft / BottomRight      TopLeft / TopRight      Left         Right
//!          /\                     +-----------+        +-----+          +-----+
//!   +-----/  \--+                 |           |        |     |>       <|     |
//!   |           |                 +-----\  /--+        +-----+          +-----+
//!   +-----------+                        \/
//! ```
//!
//! Top/bottom carets use fixed insets from [`CaretInsets`]: left-named
//! positions measure `spacing90` back from the right edge, right-named ones
//! measure `spacing60` forward from the left edge. Side carets are centered
//! on the bubble's height. `caret_spacing` shifts every vertex along the
//! base axis.

use caretip_core::geometry::{Offset, Size};
use caretip_core::trace;

use crate::config::{CaretInsets, TooltipConfig};
use crate::position::Position;

/// Caret triangle in path order: move to `start`, line to `apex`, line to
/// `end`. The host closes and fills it together with the bubble outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPath {
    pub start: Offset,
    pub apex: Offset,
    pub end: Offset,
}

impl CaretPath {
    /// Vertices in path order.
    #[must_use]
    pub const fn vertices(&self) -> [Offset; 3] {
        [self.start, self.apex, self.end]
    }

    /// The two base corners lying on the bubble edge.
    #[must_use]
    pub const fn base(&self) -> (Offset, Offset) {
        (self.start, self.end)
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> (Offset, Offset) {
        let [a, b, c] = self.vertices();
        (
            Offset::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Offset::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }
}

/// Compute the caret triangle for a bubble of `bubble_size`.
#[must_use]
pub fn compute_caret_path(
    position: Position,
    config: &TooltipConfig,
    bubble_size: Size,
    insets: CaretInsets,
) -> CaretPath {
    let Size { width, height } = bubble_size;
    let path = match position {
        Position::BottomLeft => horizontal_caret(config, width - insets.spacing90, 0.0, -1.0),
        Position::BottomRight => horizontal_caret(config, insets.spacing60, 0.0, -1.0),
        Position::TopLeft => horizontal_caret(config, width - insets.spacing90, height, 1.0),
        Position::TopRight => horizontal_caret(config, insets.spacing60, height, 1.0),
        Position::Left => vertical_caret(config, width, height, 1.0),
        Position::Right => vertical_caret(config, 0.0, height, -1.0),
    };

    trace!(
        position = %position,
        width,
        height,
        start = ?path.start,
        apex = ?path.apex,
        end = ?path.end,
        "computed caret path"
    );

    path
}

/// Caret whose base runs along the x axis at `edge_y`, starting at `left`.
/// `direction` is -1 for an apex above the edge, +1 for below.
fn horizontal_caret(config: &TooltipConfig, left: f32, edge_y: f32, direction: f32) -> CaretPath {
    CaretPath {
        start: Offset::new(left + config.caret_spacing, edge_y),
        apex: Offset::new(
            left + config.caret_width / 2.0 + config.caret_spacing,
            edge_y + direction * config.caret_height,
        ),
        end: Offset::new(left + config.caret_width + config.caret_spacing, edge_y),
    }
}

/// Caret whose base runs along the y axis at `edge_x`, centered on `height`.
/// `direction` is +1 for an apex right of the edge, -1 for left.
fn vertical_caret(config: &TooltipConfig, edge_x: f32, height: f32, direction: f32) -> CaretPath {
    let mid = height / 2.0;
    CaretPath {
        start: Offset::new(
            edge_x,
            mid - config.caret_width / 2.0 + config.caret_spacing,
        ),
        apex: Offset::new(
            edge_x + direction * config.caret_height,
            mid + config.caret_spacing,
        ),
        end: Offset::new(
            edge_x,
            mid + config.caret_width / 2.0 + config.caret_spacing,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUBBLE: Size = Size::new(100.0, 40.0);

    fn caret(position: Position) -> CaretPath {
        compute_caret_path(
            position,
            &TooltipConfig::default(),
            BUBBLE,
            CaretInsets::default(),
        )
    }

    fn at(x: f32, y: f32) -> Offset {
        Offset::new(x, y)
    }

    #[test]
    fn bottom_left_default() {
        let path = caret(Position::BottomLeft);
        assert_eq!(path.start, at(75.0, 0.0));
        assert_eq!(path.end, at(115.0, 0.0));
        assert_eq!(path.apex, at(95.0, -20.0));
    }

    #[test]
    fn bottom_right_default() {
        let path = caret(Position::BottomRight);
        assert_eq!(path.vertices(), [at(15.0, 0.0), at(35.0, -20.0), at(55.0, 0.0)]);
    }

    #[test]
    fn top_left_default() {
        let path = caret(Position::TopLeft);
        assert_eq!(path.vertices(), [at(75.0, 40.0), at(95.0, 60.0), at(115.0, 40.0)]);
    }

    #[test]
    fn top_right_default() {
        let path = caret(Position::TopRight);
        assert_eq!(path.vertices(), [at(15.0, 40.0), at(35.0, 60.0), at(55.0, 40.0)]);
    }

    #[test]
    fn left_default() {
        let path = caret(Position::Left);
        assert_eq!(path.vertices(), [at(100.0, 0.0), at(120.0, 20.0), at(100.0, 40.0)]);
    }

    #[test]
    fn right_default() {
        let path = caret(Position::Right);
        assert_eq!(path.vertices(), [at(0.0, 0.0), at(-20.0, 20.0), at(0.0, 40.0)]);
    }

    #[test]
    fn right_caret_overhangs_short_bubble() {
        // Base is wider than a 20-high bubble, so it pokes past both edges.
        let path = compute_caret_path(
            Position::Right,
            &TooltipConfig::default(),
            Size::new(100.0, 20.0),
            CaretInsets::default(),
        );
        assert_eq!(path.start, at(0.0, -10.0));
        assert_eq!(path.end, at(0.0, 30.0));
        assert_eq!(path.apex, at(-20.0, 10.0));
    }

    #[test]
    fn bottom_carets_ignore_bubble_height() {
        for position in [Position::BottomLeft, Position::BottomRight] {
            let short = compute_caret_path(
                position,
                &TooltipConfig::default(),
                Size::new(100.0, 10.0),
                CaretInsets::default(),
            );
            assert_eq!(short, caret(position));
        }
    }

    #[test]
    fn insets_scale_top_and_bottom_carets() {
        let insets = CaretInsets::new(50.0, 30.0);
        let config = TooltipConfig::default();
        let left = compute_caret_path(Position::TopLeft, &config, BUBBLE, insets);
        assert_eq!(left.start, at(50.0, 40.0));
        let right = compute_caret_path(Position::BottomRight, &config, BUBBLE, insets);
        assert_eq!(right.start, at(30.0, 0.0));
        // Side carets do not use insets.
        let side = compute_caret_path(Position::Left, &config, BUBBLE, insets);
        assert_eq!(side, caret(Position::Left));
    }

    #[test]
    fn caret_spacing_shifts_along_base_axis() {
        let config = TooltipConfig::default().caret_spacing(7.0);
        let shifted = compute_caret_path(Position::BottomLeft, &config, BUBBLE, CaretInsets::default());
        assert_eq!(shifted.start, at(82.0, 0.0));
        assert_eq!(shifted.apex, at(102.0, -20.0));

        let shifted = compute_caret_path(Position::Right, &config, BUBBLE, CaretInsets::default());
        assert_eq!(shifted.start, at(0.0, 7.0));
        assert_eq!(shifted.apex, at(-20.0, 27.0));
        assert_eq!(shifted.end, at(0.0, 47.0));
    }

    #[test]
    fn custom_dimensions() {
        let config = TooltipConfig::default().caret_width(10.0).caret_height(6.0);
        let path = compute_caret_path(Position::TopRight, &config, BUBBLE, CaretInsets::default());
        assert_eq!(path.vertices(), [at(15.0, 40.0), at(20.0, 46.0), at(25.0, 40.0)]);
    }

    #[test]
    fn negative_dimensions_invert_without_failing() {
        let config = TooltipConfig::default().caret_width(-40.0).caret_height(-20.0);
        let path = compute_caret_path(Position::BottomRight, &config, BUBBLE, CaretInsets::default());
        assert_eq!(path.start, at(15.0, 0.0));
        assert_eq!(path.end, at(-25.0, 0.0));
        // Apex now points into the bubble.
        assert_eq!(path.apex, at(-5.0, 20.0));
    }

    #[test]
    fn zero_size_caret_collapses_to_point() {
        let config = TooltipConfig::default().caret_width(0.0).caret_height(0.0);
        let path = compute_caret_path(Position::Left, &config, BUBBLE, CaretInsets::default());
        assert_eq!(path.start, path.end);
        assert_eq!(path.start, path.apex);
    }

    #[test]
    fn bounds_and_base() {
        let path = caret(Position::BottomLeft);
        assert_eq!(path.bounds(), (at(75.0, -20.0), at(115.0, 0.0)));
        assert_eq!(path.base(), (at(75.0, 0.0), at(115.0, 0.0)));

        let path = caret(Position::Right);
        assert_eq!(path.bounds(), (at(-20.0, 0.0), at(0.0, 40.0)));
    }
}
