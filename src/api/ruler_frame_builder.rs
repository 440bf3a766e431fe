use crate::core::{Axis, RulerTickSpec, TickKind, ViewState, Viewport, ruler_ticks};
use crate::error::RulerResult;
use crate::interaction::CursorState;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::RulerWidgetConfig;
use super::layout_helpers::{CRISP_LINE_OFFSET_PX, ruler_point, surface_viewports};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct RulerFrameInput {
    pub container: Viewport,
    pub view: ViewState,
    pub cursor: CursorState,
}

/// Builds the ruler band for `axis`.
///
/// Paint order: band background, ticks, labels, cursor marker, corner box.
/// The corner box goes last so nothing panned past the origin bleeds into it.
pub(super) fn build_ruler_frame(
    axis: Axis,
    input: RulerFrameInput,
    config: &RulerWidgetConfig,
) -> RulerResult<RenderFrame> {
    let geometry = config.geometry;
    let style = config.style;
    let thickness = geometry.thickness_px;
    let length = input.container.extent(axis);
    let surfaces = surface_viewports(input.container, thickness)?;
    let canvas = match axis {
        Axis::Horizontal => surfaces.horizontal_ruler,
        Axis::Vertical => surfaces.vertical_ruler,
    };
    let mut frame = RenderFrame::new(canvas);

    let (band_x, band_y) = ruler_point(axis, thickness, 0.0);
    let (band_w, band_h) = ruler_point(axis, (length - thickness).max(0.0), thickness);
    frame.push_rect(
        RectPrimitive::new(band_x, band_y, band_w, band_h, style.background_color)
            .with_border(style.line_width, style.frame_color),
    );

    let ticks = ruler_ticks(
        RulerTickSpec {
            origin_px: thickness + input.view.offset(axis),
            scale: input.view.scale,
            major_step: geometry.major_step,
            minor_step: geometry.minor_step,
            min_major_spacing_px: geometry.min_major_spacing_px,
            label_sign: config.label_sign,
        },
        0.0,
        length,
    )?;

    for tick in &ticks {
        let across_start = match tick.kind {
            TickKind::Major => 0.0,
            TickKind::Minor => thickness - geometry.minor_tick_length_px,
        };
        let (x1, y1) = ruler_point(axis, tick.position_px, across_start);
        let (x2, y2) = ruler_point(axis, tick.position_px, thickness);
        frame.push_line(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            style.line_width,
            style.tick_color,
        ));
    }

    for tick in &ticks {
        let Some(label) = tick.label.as_deref() else {
            continue;
        };
        match axis {
            Axis::Horizontal => frame.push_text(
                TextPrimitive::new(
                    label,
                    tick.position_px + geometry.label_offset_px,
                    geometry.label_baseline_px,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Left,
                )
                .bold(style.label_bold),
            ),
            Axis::Vertical => push_stacked_label(&mut frame, label, tick.position_px, config),
        }
    }

    if input.cursor.visible {
        let along = match axis {
            Axis::Horizontal => input.cursor.x,
            Axis::Vertical => input.cursor.y,
        };
        if (0.0..length).contains(&along) {
            let (x1, y1) = ruler_point(axis, along, 0.0);
            let (x2, y2) = ruler_point(axis, along, thickness);
            frame.push_line(
                LinePrimitive::new(x1, y1, x2, y2, style.line_width, style.marker_color)
                    .with_stroke_style(style.marker_stroke_style),
            );
        }
    }

    frame.push_rect(
        RectPrimitive::new(0.0, 0.0, thickness, thickness, style.background_color)
            .with_border(style.line_width, style.frame_color),
    );

    if config.crisp_lines {
        return Ok(frame.translated(CRISP_LINE_OFFSET_PX, CRISP_LINE_OFFSET_PX));
    }
    Ok(frame)
}

/// Vertical ruler labels: one character per line, stacked so the last
/// character sits just above the tick.
fn push_stacked_label(
    frame: &mut RenderFrame,
    label: &str,
    tick_px: f64,
    config: &RulerWidgetConfig,
) {
    let geometry = config.geometry;
    let style = config.style;
    let line_height = style.label_font_size_px;
    let count = label.chars().count() as f64;
    let top = tick_px + geometry.label_baseline_px
        - line_height * count
        - geometry.vertical_label_gap_px;

    for (index, character) in label.chars().enumerate() {
        frame.push_text(
            TextPrimitive::new(
                character.to_string(),
                geometry.vertical_label_x_px,
                top + line_height * index as f64,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Left,
            )
            .bold(style.label_bold),
        );
    }
}
