use serde::{Deserialize, Serialize};

use crate::core::{ViewState, Viewport};
use crate::interaction::{CursorState, InteractionMode};

/// Set of widget canvases: horizontal ruler, vertical ruler and grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurfaceSet {
    pub horizontal_ruler: bool,
    pub vertical_ruler: bool,
    pub grid: bool,
}

impl SurfaceSet {
    pub const NONE: Self = Self {
        horizontal_ruler: false,
        vertical_ruler: false,
        grid: false,
    };

    pub const ALL: Self = Self {
        horizontal_ruler: true,
        vertical_ruler: true,
        grid: true,
    };

    pub const RULERS: Self = Self {
        horizontal_ruler: true,
        vertical_ruler: true,
        grid: false,
    };

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            horizontal_ruler: self.horizontal_ruler || other.horizontal_ruler,
            vertical_ruler: self.vertical_ruler || other.vertical_ruler,
            grid: self.grid || other.grid,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

/// Read-only widget snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetContext {
    pub viewport: Viewport,
    pub view: ViewState,
    pub interaction_mode: InteractionMode,
    pub cursor: CursorState,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WidgetEvent {
    OffsetChanged { offset_x: f64, offset_y: f64 },
    ScaleChanged { scale: f64 },
    Resized { width: u32, height: u32 },
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    DragStarted,
    DragEnded,
    Rendered { surfaces: SurfaceSet },
}

/// Hook interface for host code that mirrors the view state, for example a
/// content layer that must pan together with the rulers.
///
/// Observers see events and a context snapshot; they cannot mutate the widget.
pub trait ViewStateObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: WidgetEvent, context: WidgetContext);
}
