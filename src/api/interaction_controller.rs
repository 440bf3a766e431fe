use tracing::{trace, warn};

use crate::core::Axis;
use crate::error::{RulerError, RulerResult};
use crate::extensions::{SurfaceSet, WidgetEvent};
use crate::interaction::{CursorState, InteractionMode, PointerInput};
use crate::render::Renderer;

use super::RulerWidget;

impl<R: Renderer> RulerWidget<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.drag.mode()
    }

    #[must_use]
    pub fn cursor_state(&self) -> CursorState {
        self.drag.cursor()
    }

    /// Dispatches one host input event.
    pub fn handle_input(&mut self, input: PointerInput) -> RulerResult<()> {
        match input {
            PointerInput::Down { x, y } | PointerInput::TouchStart { x, y } => {
                self.pointer_down(x, y)
            }
            PointerInput::Move { x, y } | PointerInput::TouchMove { x, y } => {
                self.pointer_move(x, y)
            }
            PointerInput::Up | PointerInput::TouchEnd | PointerInput::TouchCancel => {
                self.pointer_up();
                Ok(())
            }
            PointerInput::Leave => {
                self.pointer_leave();
                Ok(())
            }
        }
    }

    /// Starts a drag at widget pixel `(x, y)`.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> RulerResult<()> {
        validate_pointer(x, y)?;
        self.drag.pointer_down(x, y, self.view);
        self.dirty = self.dirty.union(SurfaceSet::RULERS);
        self.emit_event(WidgetEvent::DragStarted);
        Ok(())
    }

    /// Tracks the pointer for the ruler markers and pans while dragging.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> RulerResult<()> {
        validate_pointer(x, y)?;
        if let Some((offset_x, offset_y)) = self.drag.pointer_move(x, y, self.view) {
            trace!(offset_x, offset_y, "drag pan");
            let state = self
                .view
                .with_offset(Axis::Horizontal, offset_x)
                .with_offset(Axis::Vertical, offset_y);
            self.apply_view_state(state);
        }
        self.dirty = self.dirty.union(SurfaceSet::RULERS);
        self.emit_event(WidgetEvent::PointerMoved { x, y });
        Ok(())
    }

    /// Ends an active drag; the offsets reached so far stay committed.
    pub fn pointer_up(&mut self) {
        if self.drag.pointer_up() {
            self.emit_event(WidgetEvent::DragEnded);
        }
    }

    /// Pointer left the widget: ends any drag and hides the ruler markers.
    pub fn pointer_leave(&mut self) {
        let was_dragging = self.drag.pointer_leave();
        self.dirty = self.dirty.union(SurfaceSet::RULERS);
        self.emit_event(WidgetEvent::PointerLeft);
        if was_dragging {
            self.emit_event(WidgetEvent::DragEnded);
        }
    }
}

fn validate_pointer(x: f64, y: f64) -> RulerResult<()> {
    if !x.is_finite() || !y.is_finite() {
        warn!(x, y, "rejecting non-finite pointer coordinates");
        return Err(RulerError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
