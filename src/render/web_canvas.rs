use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{RulerError, RulerResult};
use crate::render::{
    DrawCommand, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Browser canvas backend drawing through a `CanvasRenderingContext2d`.
///
/// Each frame resizes the canvas element to the frame viewport first. Setting
/// the canvas size resets the context state, so no state leaks between frames.
pub struct WebCanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    font_family: String,
}

impl WebCanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> RulerResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| map_js_error("failed to query 2d context", &err))?
            .ok_or_else(|| RulerError::Backend("canvas has no 2d context".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RulerError::Backend("2d context has unexpected type".to_owned()))?;
        Ok(Self {
            canvas,
            ctx,
            font_family: "sans-serif".to_owned(),
        })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    fn draw_line(&self, line: &LinePrimitive) -> RulerResult<()> {
        let dash = Array::new();
        for segment in line.stroke_style.segments() {
            dash.push(&JsValue::from_f64(segment));
        }
        self.ctx
            .set_line_dash(&dash)
            .map_err(|err| map_js_error("failed to set line dash", &err))?;

        self.ctx.begin_path();
        self.ctx.move_to(line.x1, line.y1);
        self.ctx.line_to(line.x2, line.y2);
        self.ctx.set_stroke_style_str(&line.color.to_css());
        self.ctx.set_line_width(line.stroke_width);
        self.ctx.stroke();
        Ok(())
    }

    fn draw_rect(&self, rect: &RectPrimitive) -> RulerResult<()> {
        self.ctx.set_fill_style_str(&rect.fill_color.to_css());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        if rect.border_width > 0.0 {
            self.ctx
                .set_line_dash(&Array::new())
                .map_err(|err| map_js_error("failed to reset line dash", &err))?;
            self.ctx.set_stroke_style_str(&rect.border_color.to_css());
            self.ctx.set_line_width(rect.border_width);
            self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
        }
        Ok(())
    }

    fn draw_text(&self, text: &TextPrimitive) -> RulerResult<()> {
        let weight = if text.bold { "bold " } else { "" };
        self.ctx.set_font(&format!(
            "{weight}{}px {}",
            text.font_size_px, self.font_family
        ));
        self.ctx.set_text_align(match text.h_align {
            TextHAlign::Left => "left",
            TextHAlign::Center => "center",
            TextHAlign::Right => "right",
        });
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.set_fill_style_str(&text.color.to_css());
        self.ctx
            .fill_text(&text.text, text.x, text.y)
            .map_err(|err| map_js_error("failed to fill text", &err))
    }
}

impl Renderer for WebCanvasRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()> {
        frame.validate()?;

        self.canvas.set_width(frame.viewport.width);
        self.canvas.set_height(frame.viewport.height);
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(frame.viewport.width),
            f64::from(frame.viewport.height),
        );

        for command in &frame.commands {
            match command {
                DrawCommand::Line(line) => self.draw_line(line)?,
                DrawCommand::Rect(rect) => self.draw_rect(rect)?,
                DrawCommand::Text(text) => self.draw_text(text)?,
            }
        }
        Ok(())
    }
}

fn map_js_error(prefix: &str, err: &JsValue) -> RulerError {
    RulerError::Backend(format!("{prefix}: {err:?}"))
}
