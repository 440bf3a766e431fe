use tracing::trace;

use crate::core::Axis;
use crate::error::RulerResult;
use crate::extensions::{SurfaceSet, WidgetEvent};
use crate::render::{RenderFrame, Renderer};

use super::grid_frame_builder::build_grid_frame;
use super::ruler_frame_builder::{RulerFrameInput, build_ruler_frame};
use super::view_state_channel::ViewStateChannel;
use super::widget::SurfaceSubscriptions;
use super::{RulerWidget, WidgetSurface};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

impl<R: Renderer> RulerWidget<R> {
    /// Surfaces that will be repainted by the next `render`.
    #[must_use]
    pub fn dirty_surfaces(&self) -> SurfaceSet {
        let mut subscriptions = self.subscriptions;
        self.dirty
            .union(surfaces_dirtied_by_channel(&self.channel, &mut subscriptions))
    }

    pub fn horizontal_ruler_frame(&self) -> RulerResult<RenderFrame> {
        self.surface_frame(WidgetSurface::HorizontalRuler)
    }

    pub fn vertical_ruler_frame(&self) -> RulerResult<RenderFrame> {
        self.surface_frame(WidgetSurface::VerticalRuler)
    }

    pub fn grid_frame(&self) -> RulerResult<RenderFrame> {
        self.surface_frame(WidgetSurface::Grid)
    }

    /// Builds the frame of one surface from the current widget state.
    pub fn surface_frame(&self, surface: WidgetSurface) -> RulerResult<RenderFrame> {
        let input = RulerFrameInput {
            container: self.container,
            view: self.view,
            cursor: self.drag.cursor(),
        };
        match surface {
            WidgetSurface::HorizontalRuler => {
                build_ruler_frame(Axis::Horizontal, input, &self.config)
            }
            WidgetSurface::VerticalRuler => build_ruler_frame(Axis::Vertical, input, &self.config),
            WidgetSurface::Grid => build_grid_frame(self.container, self.view, &self.config),
        }
    }

    /// Repaints every dirty surface and returns the set that was painted.
    ///
    /// A surface whose frame or backend call fails stays dirty, so the next
    /// `render` retries it. Observers still get `Rendered` for the surfaces
    /// painted before the failure.
    pub fn render(&mut self) -> RulerResult<SurfaceSet> {
        self.drain_view_state_channel();
        if self.dirty.is_empty() {
            return Ok(SurfaceSet::NONE);
        }

        let mut rendered = SurfaceSet::NONE;
        for surface in WidgetSurface::ALL {
            if !surface.is_in(self.dirty) {
                continue;
            }
            if let Err(err) = self.render_surface(surface) {
                if !rendered.is_empty() {
                    self.emit_event(WidgetEvent::Rendered { surfaces: rendered });
                }
                return Err(err);
            }
            rendered = rendered.union(surface.as_set());
        }

        self.emit_event(WidgetEvent::Rendered { surfaces: rendered });
        Ok(rendered)
    }

    fn render_surface(&mut self, surface: WidgetSurface) -> RulerResult<()> {
        let frame = self.surface_frame(surface)?;
        trace!(
            ?surface,
            commands = frame.commands.len(),
            "render widget surface"
        );
        self.surfaces.renderer_mut(surface).render(&frame)?;
        self.clear_dirty(surface);
        Ok(())
    }

    /// Marks every surface dirty and repaints all of them.
    pub fn render_all(&mut self) -> RulerResult<SurfaceSet> {
        self.dirty = SurfaceSet::ALL;
        self.render()
    }

    /// Renders one surface into an external cairo context, for toolkit draw
    /// callbacks that own the context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_surface_on_cairo_context(
        &mut self,
        surface: WidgetSurface,
        context: &cairo::Context,
    ) -> RulerResult<()>
    where
        R: CairoContextRenderer,
    {
        self.drain_view_state_channel();
        let frame = self.surface_frame(surface)?;
        self.surfaces
            .renderer_mut(surface)
            .render_on_cairo_context(context, &frame)?;
        self.clear_dirty(surface);
        self.emit_event(WidgetEvent::Rendered {
            surfaces: surface.as_set(),
        });
        Ok(())
    }

    fn drain_view_state_channel(&mut self) {
        let dirtied = surfaces_dirtied_by_channel(&self.channel, &mut self.subscriptions);
        self.dirty = self.dirty.union(dirtied);
    }

    fn clear_dirty(&mut self, surface: WidgetSurface) {
        match surface {
            WidgetSurface::HorizontalRuler => self.dirty.horizontal_ruler = false,
            WidgetSurface::VerticalRuler => self.dirty.vertical_ruler = false,
            WidgetSurface::Grid => self.dirty.grid = false,
        }
    }
}

/// Each surface follows the view-state fields it depends on: a ruler follows
/// its own axis offset and the scale, the grid follows everything.
fn surfaces_dirtied_by_channel(
    channel: &ViewStateChannel,
    subscriptions: &mut SurfaceSubscriptions,
) -> SurfaceSet {
    let mut dirtied = SurfaceSet::NONE;
    if let Some((_, changes)) = channel.poll(&mut subscriptions.horizontal_ruler) {
        dirtied.horizontal_ruler = changes.offset_x || changes.scale;
    }
    if let Some((_, changes)) = channel.poll(&mut subscriptions.vertical_ruler) {
        dirtied.vertical_ruler = changes.offset_y || changes.scale;
    }
    dirtied.grid = channel.poll(&mut subscriptions.grid).is_some();
    dirtied
}
