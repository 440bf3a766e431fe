use serde::{Deserialize, Serialize};

use crate::core::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Last known pointer position in widget pixels, used for ruler markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Host input forwarded to the widget, in widget pixels.
///
/// Touch input maps onto the pointer operations: a touch start presses, a
/// touch move drags, and touch end/cancel release without hiding the markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
    TouchCancel,
}

/// Pointer/touch drag state machine driving the pan offsets.
///
/// While a drag is active the offsets follow
/// `base_offset + (pointer - anchor)`, where both the base and the anchor are
/// captured at drag start. Releasing or leaving commits whatever offsets the
/// last move produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    mode: InteractionMode,
    anchor_x: f64,
    anchor_y: f64,
    base_offset_x: f64,
    base_offset_y: f64,
    rebase_pending: bool,
    cursor: CursorState,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            anchor_x: 0.0,
            anchor_y: 0.0,
            base_offset_x: 0.0,
            base_offset_y: 0.0,
            rebase_pending: false,
            cursor: CursorState::default(),
        }
    }
}

impl DragState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    #[must_use]
    pub fn cursor(self) -> CursorState {
        self.cursor
    }

    /// Drag anchor captured at drag start (or at the last rebase).
    #[must_use]
    pub fn anchor(self) -> (f64, f64) {
        (self.anchor_x, self.anchor_y)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, current: ViewState) {
        self.mode = InteractionMode::Dragging;
        self.capture_anchor(x, y, current);
        self.rebase_pending = false;
        self.track_cursor(x, y);
    }

    /// Records the pointer and returns the drag offsets `(offset_x, offset_y)`
    /// to apply, if any.
    ///
    /// Returns `None` when idle, and for the first move after a container
    /// resize, which only re-captures the anchor.
    pub fn pointer_move(&mut self, x: f64, y: f64, current: ViewState) -> Option<(f64, f64)> {
        self.track_cursor(x, y);
        if !self.is_dragging() {
            return None;
        }
        if self.rebase_pending {
            self.rebase_pending = false;
            self.capture_anchor(x, y, current);
            return None;
        }

        Some((
            self.base_offset_x + (x - self.anchor_x),
            self.base_offset_y + (y - self.anchor_y),
        ))
    }

    /// Ends the drag. Returns `true` when a drag was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.mode = InteractionMode::Idle;
        self.rebase_pending = false;
        was_dragging
    }

    /// Ends the drag and hides the cursor markers. Returns `true` when a drag
    /// was active.
    pub fn pointer_leave(&mut self) -> bool {
        self.cursor.visible = false;
        self.pointer_up()
    }

    /// Container size changed; an active drag rebases on the next move.
    pub fn container_resized(&mut self) {
        if self.is_dragging() {
            self.rebase_pending = true;
        }
    }

    fn capture_anchor(&mut self, x: f64, y: f64, current: ViewState) {
        self.anchor_x = x;
        self.anchor_y = y;
        self.base_offset_x = current.offset_x;
        self.base_offset_y = current.offset_y;
    }

    fn track_cursor(&mut self, x: f64, y: f64) {
        self.cursor.visible = true;
        self.cursor.x = x;
        self.cursor.y = y;
    }
}
