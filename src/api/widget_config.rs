use serde::{Deserialize, Serialize};

use crate::core::{LabelSign, ViewState, Viewport, ZoomLimits};
use crate::error::{RulerError, RulerResult};

use super::RulerStyle;
use super::validation::validate_widget_config;

/// Ruler band geometry in pixels, and tick steps in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerGeometry {
    /// Breadth of both rulers; also the size of the corner box.
    pub thickness_px: f64,
    pub major_step: f64,
    pub minor_step: f64,
    pub minor_tick_length_px: f64,
    /// Major ticks are spread out (1-2-5 steps) when closer than this.
    pub min_major_spacing_px: f64,
    /// Horizontal ruler: label x distance from its tick.
    pub label_offset_px: f64,
    /// Horizontal ruler: label baseline. Vertical ruler: baseline of the
    /// stacked label relative to its tick.
    pub label_baseline_px: f64,
    /// Vertical ruler: x of the stacked label characters.
    pub vertical_label_x_px: f64,
    /// Vertical ruler: gap between the last stacked character and the tick.
    pub vertical_label_gap_px: f64,
}

impl Default for RulerGeometry {
    fn default() -> Self {
        Self {
            thickness_px: 20.0,
            major_step: 50.0,
            minor_step: 10.0,
            minor_tick_length_px: 5.0,
            min_major_spacing_px: 30.0,
            label_offset_px: 5.0,
            label_baseline_px: 10.0,
            vertical_label_x_px: 4.0,
            vertical_label_gap_px: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub visible: bool,
    /// Logical distance between grid lines.
    pub step: f64,
    pub min_spacing_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            visible: true,
            step: 10.0,
            min_spacing_px: 6.0,
        }
    }
}

/// Public widget bootstrap configuration.
///
/// Serializable so host applications can persist/load the ruler setup as JSON.
/// Every field except the viewport falls back to its default when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerWidgetConfig {
    /// Size of the whole widget container, rulers included.
    pub viewport: Viewport,
    #[serde(default)]
    pub initial_view: ViewState,
    #[serde(default)]
    pub geometry: RulerGeometry,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub zoom_limits: ZoomLimits,
    #[serde(default)]
    pub label_sign: LabelSign,
    #[serde(default = "default_crisp_lines")]
    pub crisp_lines: bool,
    #[serde(default)]
    pub style: RulerStyle,
}

impl RulerWidgetConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            initial_view: ViewState::default(),
            geometry: RulerGeometry::default(),
            grid: GridConfig::default(),
            zoom_limits: ZoomLimits::default(),
            label_sign: LabelSign::default(),
            crisp_lines: default_crisp_lines(),
            style: RulerStyle::default(),
        }
    }

    #[must_use]
    pub fn with_initial_view(mut self, view: ViewState) -> Self {
        self.initial_view = view;
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: RulerGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, limits: ZoomLimits) -> Self {
        self.zoom_limits = limits;
        self
    }

    #[must_use]
    pub fn with_label_sign(mut self, sign: LabelSign) -> Self {
        self.label_sign = sign;
        self
    }

    /// Enables or disables half-pixel snapping of every primitive.
    #[must_use]
    pub fn with_crisp_lines(mut self, crisp_lines: bool) -> Self {
        self.crisp_lines = crisp_lines;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RulerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> RulerResult<()> {
        validate_widget_config(self)
    }

    pub fn from_json_str(input: &str) -> RulerResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            RulerError::InvalidConfig(format!("failed to parse widget config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> RulerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            RulerError::InvalidConfig(format!("failed to serialize widget config: {e}"))
        })
    }
}

fn default_crisp_lines() -> bool {
    true
}
