use tracing::{debug, warn};

use crate::core::{ViewState, Viewport, ZoomLimits};
use crate::error::{RulerError, RulerResult};
use crate::extensions::{SurfaceSet, WidgetEvent};
use crate::render::Renderer;

use super::RulerWidget;
use super::validation::validate_widget_viewport;

impl<R: Renderer> RulerWidget<R> {
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.config.zoom_limits
    }

    /// Replaces the whole view state. The scale must lie inside the zoom limits.
    pub fn set_view_state(&mut self, state: ViewState) -> RulerResult<()> {
        state.validate()?;
        if !self.config.zoom_limits.contains(state.scale) {
            warn!(scale = state.scale, "rejecting view scale outside zoom limits");
            return Err(RulerError::InvalidData(format!(
                "scale {} is outside zoom limits [{}, {}]",
                state.scale, self.config.zoom_limits.min_scale, self.config.zoom_limits.max_scale
            )));
        }
        self.apply_view_state(state);
        Ok(())
    }

    /// Moves the logical origin to content pixel `(offset_x, offset_y)`.
    pub fn set_offset(&mut self, offset_x: f64, offset_y: f64) -> RulerResult<()> {
        let state = ViewState::new(self.view.scale, offset_x, offset_y)?;
        self.apply_view_state(state);
        Ok(())
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> RulerResult<()> {
        let state = self.view.panned_by(dx, dy)?;
        self.apply_view_state(state);
        Ok(())
    }

    /// Sets the scale, keeping the content's top-left corner fixed. The scale
    /// is clamped into the configured zoom limits.
    pub fn set_scale(&mut self, scale: f64) -> RulerResult<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RulerError::InvalidData(
                "scale must be finite and > 0".to_owned(),
            ));
        }
        let state = self
            .view
            .zoomed_at(scale / self.view.scale, 0.0, 0.0, self.config.zoom_limits)?;
        self.apply_view_state(state);
        Ok(())
    }

    /// Zooms by `factor` around widget pixel `(x, y)`.
    ///
    /// The logical coordinate under the pointer stays under the pointer; the
    /// resulting scale is clamped into the configured zoom limits.
    pub fn zoom_at(&mut self, factor: f64, x: f64, y: f64) -> RulerResult<()> {
        let thickness = self.config.geometry.thickness_px;
        let state =
            self.view
                .zoomed_at(factor, x - thickness, y - thickness, self.config.zoom_limits)?;
        self.apply_view_state(state);
        Ok(())
    }

    /// Restores the configured initial view state.
    pub fn reset_view(&mut self) {
        self.apply_view_state(self.config.initial_view);
    }

    /// Applies a new container size; every surface is repainted on the next
    /// `render`. An active drag rebases on the next pointer move.
    pub fn resize(&mut self, container: Viewport) -> RulerResult<()> {
        validate_widget_viewport(container, self.config.geometry)?;
        if container == self.container {
            return Ok(());
        }

        debug!(
            width = container.width,
            height = container.height,
            "ruler widget container resized"
        );
        self.container = container;
        self.drag.container_resized();
        self.dirty = self.dirty.union(SurfaceSet::ALL);
        self.emit_event(WidgetEvent::Resized {
            width: container.width,
            height: container.height,
        });
        Ok(())
    }

    /// Publishes `state` to the shared channel and notifies observers of the
    /// fields that changed. Surfaces pick the change up on the next `render`.
    pub(super) fn apply_view_state(&mut self, state: ViewState) {
        let changes = self.channel.publish(state);
        self.view = state;
        if !changes.any() {
            return;
        }

        debug!(
            scale = state.scale,
            offset_x = state.offset_x,
            offset_y = state.offset_y,
            "view state changed"
        );
        if changes.offsets() {
            self.emit_event(WidgetEvent::OffsetChanged {
                offset_x: state.offset_x,
                offset_y: state.offset_y,
            });
        }
        if changes.scale {
            self.emit_event(WidgetEvent::ScaleChanged { scale: state.scale });
        }
    }
}
