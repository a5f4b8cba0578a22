#![forbid(unsafe_code)]

//! Tooltip configuration values.
//!
//! Every value here is caller-provided and copied into each computation.
//! Nothing is validated implicitly: negative caret dimensions produce an
//! inverted triangle rather than an error. Callers that want to reject such
//! input can run [`TooltipConfig::validate`] themselves.

use std::fmt;

use caretip_core::geometry::IntOffset;

/// Caret inset used for `BottomLeft`/`TopLeft` carets, in dp.
pub const SPACING_90_DP: f32 = 25.0;
/// Caret inset used for `BottomRight`/`TopRight` carets, in dp.
pub const SPACING_60_DP: f32 = 15.0;

/// Per-tooltip spacing and caret dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    /// Horizontal offset added to the popup position (default: 0).
    pub horizontal_spacing: i32,
    /// Gap between anchor and popup on the placement axis (default: 0).
    pub vertical_spacing: i32,
    /// Caret base length (default: 40).
    pub caret_width: f32,
    /// Caret height from base to apex (default: 20).
    pub caret_height: f32,
    /// Extra shift along the caret base axis (default: 0).
    pub caret_spacing: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 0,
            vertical_spacing: 0,
            caret_width: 40.0,
            caret_height: 20.0,
            caret_spacing: 0.0,
        }
    }
}

impl TooltipConfig {
    #[must_use]
    pub fn horizontal_spacing(mut self, spacing: i32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    #[must_use]
    pub fn vertical_spacing(mut self, spacing: i32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    #[must_use]
    pub fn caret_width(mut self, width: f32) -> Self {
        self.caret_width = width;
        self
    }

    #[must_use]
    pub fn caret_height(mut self, height: f32) -> Self {
        self.caret_height = height;
        self
    }

    #[must_use]
    pub fn caret_spacing(mut self, spacing: f32) -> Self {
        self.caret_spacing = spacing;
        self
    }

    /// Placement spacing as an `(x, y)` offset.
    #[inline]
    #[must_use]
    pub const fn spacing(&self) -> IntOffset {
        IntOffset::new(self.horizontal_spacing, self.vertical_spacing)
    }

    /// Validate caret dimensions and return all violations.
    ///
    /// Never called by the placement or caret computations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        validate_dimension("caret_width", self.caret_width, &mut errors);
        validate_dimension("caret_height", self.caret_height, &mut errors);
        if !self.caret_spacing.is_finite() {
            errors.push(ConfigError::new(
                "caret_spacing",
                self.caret_spacing.to_string(),
                "must be finite",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_dimension(field: &'static str, value: f32, errors: &mut Vec<ConfigError>) {
    if !value.is_finite() {
        errors.push(ConfigError::new(field, value.to_string(), "must be finite"));
    } else if value < 0.0 {
        errors.push(ConfigError::new(field, value.to_string(), "must be >= 0"));
    }
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Display density: physical pixels per density-independent unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    pub density: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl Density {
    #[inline]
    pub const fn new(density: f32) -> Self {
        Self { density }
    }

    #[inline]
    #[must_use]
    pub fn dp_to_px(self, dp: f32) -> f32 {
        dp * self.density
    }
}

/// Fixed caret insets from the bubble edge, in rendering units.
///
/// `spacing90` is measured back from the right edge for left carets,
/// `spacing60` forward from the left edge for right carets. Computed once
/// from the display density so the caret geometry stays density-agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretInsets {
    pub spacing90: f32,
    pub spacing60: f32,
}

impl CaretInsets {
    #[inline]
    pub const fn new(spacing90: f32, spacing60: f32) -> Self {
        Self {
            spacing90,
            spacing60,
        }
    }

    /// Convert the 25dp / 15dp insets at the given density.
    #[must_use]
    pub fn from_density(density: Density) -> Self {
        Self::new(
            density.dp_to_px(SPACING_90_DP),
            density.dp_to_px(SPACING_60_DP),
        )
    }
}

impl Default for CaretInsets {
    fn default() -> Self {
        Self::from_density(Density::default())
    }
}

/// Corner radius presets for the bubble outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TooltipRadius {
    Small,
    #[default]
    Medium,
    /// Large enough to produce a pill shape at any bubble height.
    Full,
}

impl TooltipRadius {
    /// Radius in dp.
    #[must_use]
    pub const fn dp(self) -> u32 {
        match self {
            Self::Small => 8,
            Self::Medium => 12,
            Self::Full => 1000,
        }
    }

    #[must_use]
    pub fn to_px(self, density: Density) -> f32 {
        density.dp_to_px(self.dp() as f32)
    }
}
