use serde::{Deserialize, Serialize};

use crate::core::{Axis, Viewport};
use crate::error::{RulerError, RulerResult};

/// Half-pixel shift that centers 1px strokes on device pixels.
pub(super) const CRISP_LINE_OFFSET_PX: f64 = 0.5;

/// Canvas sizes of the three widget surfaces for one container size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceViewports {
    /// `container_width x thickness`, placed at the container's top-left.
    pub horizontal_ruler: Viewport,
    /// `thickness x container_height`, placed at the container's top-left.
    pub vertical_ruler: Viewport,
    /// Content area right of / below the rulers, placed at `(thickness, thickness)`.
    pub grid: Viewport,
}

pub(super) fn surface_viewports(
    container: Viewport,
    thickness_px: f64,
) -> RulerResult<SurfaceViewports> {
    if !container.is_valid() {
        return Err(RulerError::InvalidViewport {
            width: container.width,
            height: container.height,
        });
    }

    let band = thickness_px.ceil().max(1.0) as u32;
    let content = |extent: u32| (f64::from(extent) - thickness_px).floor().max(1.0) as u32;
    Ok(SurfaceViewports {
        horizontal_ruler: Viewport::new(container.width, band),
        vertical_ruler: Viewport::new(band, container.height),
        grid: Viewport::new(content(container.width), content(container.height)),
    })
}

/// Maps `(along, across)` ruler coordinates to canvas `(x, y)`.
pub(super) fn ruler_point(axis: Axis, along: f64, across: f64) -> (f64, f64) {
    match axis {
        Axis::Horizontal => (along, across),
        Axis::Vertical => (across, along),
    }
}
