pub mod observers;

pub use observers::{SurfaceSet, ViewStateObserver, WidgetContext, WidgetEvent};
