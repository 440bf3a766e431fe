use serde::{Deserialize, Serialize};

use crate::error::{RulerError, RulerResult};
use crate::render::{Color, LineStrokeStyle};

/// Colors, fonts and stroke settings shared by the rulers and the grid.
///
/// Colors are serialized as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerStyle {
    pub background_color: Color,
    pub frame_color: Color,
    pub tick_color: Color,
    pub label_color: Color,
    pub marker_color: Color,
    pub grid_line_color: Color,
    pub line_width: f64,
    pub label_font_size_px: f64,
    pub label_bold: bool,
    pub marker_stroke_style: LineStrokeStyle,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb8(0x33, 0x33, 0x33),
            frame_color: Color::rgb8(0x60, 0x60, 0x60),
            tick_color: Color::rgb8(0x60, 0x60, 0x60),
            label_color: Color::rgb8(0x9e, 0x9e, 0x9e),
            marker_color: Color::rgb8(0x60, 0x60, 0x60),
            grid_line_color: Color::rgb8(0x70, 0x70, 0x70),
            line_width: 1.0,
            label_font_size_px: 10.0,
            label_bold: false,
            marker_stroke_style: LineStrokeStyle::Dashed {
                dash_px: 3.0,
                gap_px: 2.0,
            },
        }
    }
}

impl RulerStyle {
    pub fn validate(self) -> RulerResult<()> {
        for color in [
            self.background_color,
            self.frame_color,
            self.tick_color,
            self.label_color,
            self.marker_color,
            self.grid_line_color,
        ] {
            color.validate()?;
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(RulerError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(RulerError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        self.marker_stroke_style.validate()
    }
}
