#![forbid(unsafe_code)]

//! Tooltip positions and their host alignment tokens.
//!
//! Variant names describe where the caret sits on the bubble, not where the
//! bubble sits relative to the anchor: a `BottomLeft` tooltip is placed below
//! the anchor with its right edge aligned to the anchor's right edge.

use std::fmt;

use caretip_core::geometry::{IntOffset, IntSize};

/// Relative placement of a tooltip against its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Left,
    Right,
}

impl Position {
    /// Every position, in declaration order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::Left,
        Position::Right,
    ];

    /// Parse a position name.
    ///
    /// Case-insensitive; `-` and `_` separators are ignored, so
    /// `bottom-left`, `bottom_left` and `BottomLeft` are all accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "topleft" => Some(Self::TopLeft),
            "topright" => Some(Self::TopRight),
            "bottomleft" => Some(Self::BottomLeft),
            "bottomright" => Some(Self::BottomRight),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// True when the caret sits on a vertical edge of the bubble
    /// (its base runs along the y axis).
    #[inline]
    #[must_use]
    pub const fn is_vertical_caret(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Host alignment token for this position. See [`alignment_for`].
    #[inline]
    #[must_use]
    pub const fn alignment(self) -> Alignment {
        alignment_for(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal layout direction of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Two-axis alignment token handed to host popup systems.
///
/// Start/End follow the layout direction; Top/Center/Bottom are absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    TopStart,
    TopEnd,
    BottomStart,
    BottomEnd,
    CenterStart,
    CenterEnd,
}

impl Alignment {
    const fn is_start(self) -> bool {
        matches!(self, Self::TopStart | Self::BottomStart | Self::CenterStart)
    }

    /// Offset of a box of `size` aligned inside `space`.
    ///
    /// Exact integer arithmetic. Centering an odd remainder rounds half up,
    /// favouring the far edge; an oversized box yields a negative offset.
    #[must_use]
    pub fn align(self, size: IntSize, space: IntSize, direction: LayoutDirection) -> IntOffset {
        let rem_x = space.width.saturating_sub(size.width);
        let rem_y = space.height.saturating_sub(size.height);
        let at_start = match direction {
            LayoutDirection::Ltr => self.is_start(),
            LayoutDirection::Rtl => !self.is_start(),
        };
        let x = if at_start { 0 } else { rem_x };
        let y = match self {
            Self::TopStart | Self::TopEnd => 0,
            Self::CenterStart | Self::CenterEnd => rem_y.saturating_add(1).div_euclid(2),
            Self::BottomStart | Self::BottomEnd => rem_y,
        };
        IntOffset::new(x, y)
    }
}

/// Map a [`Position`] to the alignment token a host popup uses for it.
#[must_use]
pub const fn alignment_for(position: Position) -> Alignment {
    match position {
        Position::BottomLeft => Alignment::BottomStart,
        Position::BottomRight => Alignment::BottomEnd,
        Position::TopLeft => Alignment::TopStart,
        Position::TopRight => Alignment::TopEnd,
        Position::Left => Alignment::CenterStart,
        Position::Right => Alignment::CenterEnd,
    }
}
