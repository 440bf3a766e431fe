mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::RulerResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from view-state and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};

#[cfg(all(feature = "web-canvas", target_arch = "wasm32"))]
mod web_canvas;
#[cfg(all(feature = "web-canvas", target_arch = "wasm32"))]
pub use web_canvas::WebCanvasRenderer;
