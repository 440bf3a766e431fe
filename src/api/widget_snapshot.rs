use serde::{Deserialize, Serialize};

use crate::core::{Axis, ViewState, Viewport};
use crate::error::{RulerError, RulerResult};
use crate::interaction::{CursorState, InteractionMode};
use crate::render::Renderer;

use super::{RulerWidget, SurfaceViewports};

pub const WIDGET_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable picture of the widget state, for diagnostics and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub container: Viewport,
    pub surfaces: SurfaceViewports,
    pub view: ViewState,
    pub interaction_mode: InteractionMode,
    pub cursor: CursorState,
    /// Logical coordinates at the left and right edge of the content area.
    pub visible_logical_x: (f64, f64),
    /// Logical coordinates at the top and bottom edge of the content area.
    pub visible_logical_y: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: WidgetSnapshot,
}

impl<R: Renderer> RulerWidget<R> {
    pub fn snapshot(&self) -> RulerResult<WidgetSnapshot> {
        let surfaces = self.surface_viewports()?;
        let view = self.view;
        let width = f64::from(surfaces.grid.width);
        let height = f64::from(surfaces.grid.height);
        Ok(WidgetSnapshot {
            container: self.container,
            surfaces,
            view,
            interaction_mode: self.drag.mode(),
            cursor: self.drag.cursor(),
            visible_logical_x: (
                view.pixel_to_logical(Axis::Horizontal, 0.0),
                view.pixel_to_logical(Axis::Horizontal, width),
            ),
            visible_logical_y: (
                view.pixel_to_logical(Axis::Vertical, 0.0),
                view.pixel_to_logical(Axis::Vertical, height),
            ),
        })
    }
}

impl WidgetSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> RulerResult<String> {
        let payload = WidgetSnapshotJsonContractV1 {
            schema_version: WIDGET_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RulerError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> RulerResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<WidgetSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: WidgetSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            RulerError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != WIDGET_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(RulerError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
