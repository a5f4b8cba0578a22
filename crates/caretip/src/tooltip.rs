#![forbid(unsafe_code)]

//! A configured tooltip instance.
//!
//! [`Tooltip`] holds everything fixed for the lifetime of one tooltip
//! (position, spacing, caret dimensions, corner radius, density) and runs
//! both computations for each layout pass. It keeps no state between
//! passes; identical inputs always give identical layouts.
//!
//! # Example
//!
//! ```
//! use caretip::{Density, Position, Tooltip, TooltipConfig, TooltipRadius};
//! use caretip_core::geometry::{IntRect, IntSize};
//!
//! let tooltip = Tooltip::new(Position::TopLeft)
//!     .config(TooltipConfig::default().vertical_spacing(4))
//!     .radius(TooltipRadius::Small)
//!     .density(Density::new(2.0));
//!
//! let layout = tooltip.layout(
//!     IntRect::new(100, 100, 140, 120),
//!     IntSize::new(400, 300),
//!     IntSize::new(60, 24),
//! );
//! assert_eq!(layout.bounds.bottom, 96);
//! assert_eq!(layout.corner_radius, 16.0);
//! ```

use caretip_core::debug_span;
use caretip_core::geometry::{IntOffset, IntRect, IntSize, Size};

use crate::caret::{CaretPath, compute_caret_path};
use crate::config::{CaretInsets, Density, TooltipConfig, TooltipRadius};
use crate::placement::{TooltipPositionProvider, compute_position};
use crate::position::{Alignment, Position};

/// Tooltip geometry for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    /// Absolute top-left of the popup, clamped to the window.
    pub origin: IntOffset,
    /// Popup rectangle in window coordinates.
    pub bounds: IntRect,
    /// Caret triangle in bubble-local coordinates.
    pub caret: CaretPath,
    /// Bubble corner radius in rendering units.
    pub corner_radius: f32,
}

/// Placement and caret settings for a single tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooltip {
    position: Position,
    config: TooltipConfig,
    radius: TooltipRadius,
    density: Density,
    insets: CaretInsets,
}

impl Tooltip {
    /// Create a tooltip with default config, medium radius and density 1.
    #[must_use]
    pub fn new(position: Position) -> Self {
        let density = Density::default();
        Self {
            position,
            config: TooltipConfig::default(),
            radius: TooltipRadius::default(),
            density,
            insets: CaretInsets::from_density(density),
        }
    }

    #[must_use]
    pub fn config(mut self, config: TooltipConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: TooltipRadius) -> Self {
        self.radius = radius;
        self
    }

    /// Set the display density. Also recomputes the caret insets; call
    /// [`Tooltip::insets`] afterwards to override them.
    #[must_use]
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self.insets = CaretInsets::from_density(density);
        self
    }

    #[must_use]
    pub fn insets(mut self, insets: CaretInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn tooltip_config(&self) -> &TooltipConfig {
        &self.config
    }

    #[must_use]
    pub const fn corner_radius(&self) -> TooltipRadius {
        self.radius
    }

    #[must_use]
    pub const fn caret_insets(&self) -> CaretInsets {
        self.insets
    }

    #[must_use]
    pub const fn alignment(&self) -> Alignment {
        self.position.alignment()
    }

    /// Provider to hand to a host popup system.
    #[must_use]
    pub const fn position_provider(&self) -> TooltipPositionProvider {
        TooltipPositionProvider::new(self.position, self.config.spacing())
    }

    /// Absolute popup origin for the given anchor, window and popup size.
    #[must_use]
    pub fn popup_origin(&self, anchor: IntRect, window: IntSize, popup_size: IntSize) -> IntOffset {
        compute_position(
            anchor,
            window,
            popup_size,
            self.position,
            self.config.spacing(),
        )
    }

    /// Caret triangle for a measured bubble.
    #[must_use]
    pub fn caret_path(&self, bubble_size: Size) -> CaretPath {
        compute_caret_path(self.position, &self.config, bubble_size, self.insets)
    }

    /// Run placement and caret generation for one layout pass.
    ///
    /// The caret is computed against the popup size, which is also the
    /// bubble size when the popup holds nothing but the bubble.
    #[must_use]
    pub fn layout(&self, anchor: IntRect, window: IntSize, popup_size: IntSize) -> TooltipLayout {
        let _span = debug_span!(
            "tooltip_layout",
            position = %self.position,
            anchor_left = anchor.left,
            anchor_top = anchor.top,
            window_w = window.width,
            window_h = window.height,
            popup_w = popup_size.width,
            popup_h = popup_size.height
        )
        .entered();

        let origin = self.popup_origin(anchor, window, popup_size);
        TooltipLayout {
            origin,
            bounds: IntRect::from_origin_size(origin, popup_size),
            caret: self.caret_path(Size::from(popup_size)),
            corner_radius: self.radius.to_px(self.density),
        }
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new(Position::default())
    }
}
