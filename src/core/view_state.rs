use serde::{Deserialize, Serialize};

use crate::core::types::Axis;
use crate::error::{RulerError, RulerResult};

/// Largest pan offset magnitude; beyond it pixel positions lose integer
/// precision.
pub const MAX_OFFSET_PX: f64 = 9_007_199_254_740_992.0;

/// Allowed range for `ViewState::scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.05,
            max_scale: 20.0,
        }
    }
}

impl ZoomLimits {
    pub fn new(min_scale: f64, max_scale: f64) -> RulerResult<Self> {
        let limits = Self {
            min_scale,
            max_scale,
        };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(self) -> RulerResult<()> {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(RulerError::InvalidConfig(
                "zoom min scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(RulerError::InvalidConfig(
                "zoom max scale must be finite and >= min scale".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    #[must_use]
    pub fn contains(self, scale: f64) -> bool {
        (self.min_scale..=self.max_scale).contains(&scale)
    }
}

/// Shared pan/zoom state broadcast to the rulers and the grid.
///
/// Offsets are the pixel position of the logical origin inside the content
/// area; `scale` is the number of pixels per logical unit, so
/// `pixel = offset + logical * scale` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewState {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> RulerResult<Self> {
        let state = Self {
            scale,
            offset_x,
            offset_y,
        };
        state.validate()?;
        Ok(state)
    }

    pub fn validate(self) -> RulerResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RulerError::InvalidData(
                "view scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(RulerError::InvalidData(
                "view offsets must be finite".to_owned(),
            ));
        }
        if self.offset_x.abs() > MAX_OFFSET_PX || self.offset_y.abs() > MAX_OFFSET_PX {
            return Err(RulerError::InvalidData(format!(
                "view offsets must be within +/-{MAX_OFFSET_PX}px"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn offset(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.offset_x,
            Axis::Vertical => self.offset_y,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => self.offset_x = value,
            Axis::Vertical => self.offset_y = value,
        }
        self
    }

    pub fn panned_by(self, dx: f64, dy: f64) -> RulerResult<Self> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(RulerError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        Self::new(self.scale, self.offset_x + dx, self.offset_y + dy)
    }

    /// Zooms by `factor` keeping the logical point under the anchor fixed.
    ///
    /// The anchor is expressed in content pixels (the same space as the
    /// offsets). The resulting scale is clamped into `limits`.
    pub fn zoomed_at(
        self,
        factor: f64,
        anchor_x: f64,
        anchor_y: f64,
        limits: ZoomLimits,
    ) -> RulerResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(RulerError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_x.is_finite() || !anchor_y.is_finite() {
            return Err(RulerError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        limits.validate()?;

        let scale = limits.clamp(self.scale * factor);
        let logical_x = (anchor_x - self.offset_x) / self.scale;
        let logical_y = (anchor_y - self.offset_y) / self.scale;
        Self::new(
            scale,
            anchor_x - logical_x * scale,
            anchor_y - logical_y * scale,
        )
    }

    #[must_use]
    pub fn logical_to_pixel(self, axis: Axis, value: f64) -> f64 {
        self.offset(axis) + value * self.scale
    }

    #[must_use]
    pub fn pixel_to_logical(self, axis: Axis, pixel: f64) -> f64 {
        (pixel - self.offset(axis)) / self.scale
    }
}
