mod grid_frame_builder;
mod interaction_controller;
mod layout_helpers;
mod observer_registry;
mod render_coordinator;
mod ruler_frame_builder;
mod ruler_style;
mod validation;
mod view_controller;
mod view_state_channel;
mod widget;
mod widget_config;
mod widget_init;
mod widget_snapshot;

pub use layout_helpers::SurfaceViewports;
pub use ruler_style::RulerStyle;
pub use view_state_channel::{ViewStateChannel, ViewStateChanges, ViewStateSubscription};
pub use widget::{RulerSurfaces, RulerWidget, WidgetSurface};
pub use widget_config::{GridConfig, RulerGeometry, RulerWidgetConfig};
pub use widget_snapshot::{
    WIDGET_SNAPSHOT_JSON_SCHEMA_V1, WidgetSnapshot, WidgetSnapshotJsonContractV1,
};
