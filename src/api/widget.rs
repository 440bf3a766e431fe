use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ViewState, Viewport};
use crate::error::RulerResult;
use crate::extensions::{SurfaceSet, ViewStateObserver};
use crate::interaction::DragState;
use crate::render::Renderer;

use super::layout_helpers::{SurfaceViewports, surface_viewports};
use super::view_state_channel::{ViewStateChannel, ViewStateChanges, ViewStateSubscription};
use super::RulerWidgetConfig;

/// One of the three canvases the widget paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetSurface {
    HorizontalRuler,
    VerticalRuler,
    Grid,
}

impl WidgetSurface {
    pub const ALL: [Self; 3] = [Self::HorizontalRuler, Self::VerticalRuler, Self::Grid];

    #[must_use]
    pub fn is_in(self, set: SurfaceSet) -> bool {
        match self {
            Self::HorizontalRuler => set.horizontal_ruler,
            Self::VerticalRuler => set.vertical_ruler,
            Self::Grid => set.grid,
        }
    }

    #[must_use]
    pub fn as_set(self) -> SurfaceSet {
        match self {
            Self::HorizontalRuler => SurfaceSet {
                horizontal_ruler: true,
                ..SurfaceSet::NONE
            },
            Self::VerticalRuler => SurfaceSet {
                vertical_ruler: true,
                ..SurfaceSet::NONE
            },
            Self::Grid => SurfaceSet {
                grid: true,
                ..SurfaceSet::NONE
            },
        }
    }
}

/// Renderers backing the three widget canvases.
#[derive(Debug, Default)]
pub struct RulerSurfaces<R: Renderer> {
    pub horizontal_ruler: R,
    pub vertical_ruler: R,
    pub grid: R,
}

impl<R: Renderer> RulerSurfaces<R> {
    #[must_use]
    pub fn new(horizontal_ruler: R, vertical_ruler: R, grid: R) -> Self {
        Self {
            horizontal_ruler,
            vertical_ruler,
            grid,
        }
    }

    pub(super) fn renderer_mut(&mut self, surface: WidgetSurface) -> &mut R {
        match surface {
            WidgetSurface::HorizontalRuler => &mut self.horizontal_ruler,
            WidgetSurface::VerticalRuler => &mut self.vertical_ruler,
            WidgetSurface::Grid => &mut self.grid,
        }
    }
}

/// Per-surface cursors into the shared view-state channel.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct SurfaceSubscriptions {
    pub horizontal_ruler: ViewStateSubscription,
    pub vertical_ruler: ViewStateSubscription,
    pub grid: ViewStateSubscription,
}

/// Main facade consumed by host applications.
///
/// `RulerWidget` owns the shared view state, the drag state machine and the
/// renderers of the horizontal ruler, the vertical ruler and the grid. Host
/// code forwards pointer and resize events and calls `render` once per
/// animation frame; only surfaces whose inputs changed are repainted.
pub struct RulerWidget<R: Renderer> {
    pub(super) surfaces: RulerSurfaces<R>,
    pub(super) config: RulerWidgetConfig,
    pub(super) container: Viewport,
    pub(super) view: ViewState,
    pub(super) drag: DragState,
    pub(super) channel: ViewStateChannel,
    pub(super) subscriptions: SurfaceSubscriptions,
    pub(super) dirty: SurfaceSet,
    pub(super) observers: IndexMap<String, Box<dyn ViewStateObserver>>,
}

impl<R: Renderer> RulerWidget<R> {
    #[must_use]
    pub fn config(&self) -> &RulerWidgetConfig {
        &self.config
    }

    /// Current container size (the configured viewport until the first resize).
    #[must_use]
    pub fn container(&self) -> Viewport {
        self.container
    }

    pub fn surface_viewports(&self) -> RulerResult<SurfaceViewports> {
        surface_viewports(self.container, self.config.geometry.thickness_px)
    }

    #[must_use]
    pub fn surfaces(&self) -> &RulerSurfaces<R> {
        &self.surfaces
    }

    #[must_use]
    pub fn surfaces_mut(&mut self) -> &mut RulerSurfaces<R> {
        &mut self.surfaces
    }

    #[must_use]
    pub fn into_surfaces(self) -> RulerSurfaces<R> {
        self.surfaces
    }

    /// Opens a subscription to the shared view state. The first poll yields
    /// the current value.
    #[must_use]
    pub fn subscribe_view_state(&self) -> ViewStateSubscription {
        self.channel.subscribe()
    }

    pub fn poll_view_state(
        &self,
        subscription: &mut ViewStateSubscription,
    ) -> Option<(ViewState, ViewStateChanges)> {
        self.channel.poll(subscription)
    }
}
