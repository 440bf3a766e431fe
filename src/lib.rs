//! canvas-ruler: pannable, zoomable ruler and grid widget.
//!
//! The crate computes tick layouts and draw commands for a horizontal ruler,
//! a vertical ruler and a background grid that share one view state, and
//! hands the resulting frames to pluggable rendering backends.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RulerWidget, RulerWidgetConfig};
pub use error::{RulerError, RulerResult};
