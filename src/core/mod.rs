pub mod tick_layout;
pub mod types;
pub mod view_state;

pub use tick_layout::{
    AxisTick, LabelSign, MAX_VISIBLE_TICKS, MIN_LINE_SPACING_PX, RulerTickSpec, TickKind,
    TickPosition,
    density_multiplier, format_tick_label, grid_lines, ruler_ticks, visible_ticks,
};
pub use types::{Axis, Viewport};
pub use view_state::{MAX_OFFSET_PX, ViewState, ZoomLimits};
