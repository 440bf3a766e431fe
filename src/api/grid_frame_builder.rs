use crate::core::{ViewState, Viewport, grid_lines};
use crate::error::RulerResult;
use crate::render::{LinePrimitive, RenderFrame};

use super::RulerWidgetConfig;
use super::layout_helpers::{CRISP_LINE_OFFSET_PX, surface_viewports};

/// Builds the background grid of the content area.
///
/// Grid lines are anchored at the view offsets, which are content-space
/// pixels, so the grid lines up with the ruler ticks shifted by the ruler
/// thickness.
pub(super) fn build_grid_frame(
    container: Viewport,
    view: ViewState,
    config: &RulerWidgetConfig,
) -> RulerResult<RenderFrame> {
    let canvas = surface_viewports(container, config.geometry.thickness_px)?.grid;
    let mut frame = RenderFrame::new(canvas);
    if !config.grid.visible {
        return Ok(frame);
    }

    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let grid = config.grid;
    let style = config.style;

    let columns = grid_lines(
        view.offset_x,
        view.scale,
        grid.step,
        grid.min_spacing_px,
        0.0,
        width,
    )?;
    for x in columns {
        frame.push_line(LinePrimitive::new(
            x,
            0.0,
            x,
            height,
            style.line_width,
            style.grid_line_color,
        ));
    }

    let rows = grid_lines(
        view.offset_y,
        view.scale,
        grid.step,
        grid.min_spacing_px,
        0.0,
        height,
    )?;
    for y in rows {
        frame.push_line(LinePrimitive::new(
            0.0,
            y,
            width,
            y,
            style.line_width,
            style.grid_line_color,
        ));
    }

    if config.crisp_lines {
        return Ok(frame.translated(CRISP_LINE_OFFSET_PX, CRISP_LINE_OFFSET_PX));
    }
    Ok(frame)
}
