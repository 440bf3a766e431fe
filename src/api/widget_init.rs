use indexmap::IndexMap;
use tracing::debug;

use crate::error::RulerResult;
use crate::extensions::SurfaceSet;
use crate::interaction::DragState;
use crate::render::Renderer;

use super::view_state_channel::ViewStateChannel;
use super::widget::SurfaceSubscriptions;
use super::{RulerSurfaces, RulerWidget, RulerWidgetConfig};

impl<R: Renderer> RulerWidget<R> {
    /// Creates a widget with validated configuration. Every surface starts
    /// dirty so the first `render` paints all three canvases.
    pub fn new(surfaces: RulerSurfaces<R>, config: RulerWidgetConfig) -> RulerResult<Self> {
        config.validate()?;

        let view = config.initial_view;
        let channel = ViewStateChannel::new(view);
        let subscriptions = SurfaceSubscriptions {
            horizontal_ruler: channel.subscribe(),
            vertical_ruler: channel.subscribe(),
            grid: channel.subscribe(),
        };

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            scale = view.scale,
            offset_x = view.offset_x,
            offset_y = view.offset_y,
            "ruler widget initialized"
        );

        Ok(Self {
            surfaces,
            container: config.viewport,
            config,
            view,
            drag: DragState::default(),
            channel,
            subscriptions,
            dirty: SurfaceSet::ALL,
            observers: IndexMap::new(),
        })
    }
}
