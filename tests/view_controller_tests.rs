use approx::assert_relative_eq;
use canvas_ruler::RulerError;
use canvas_ruler::api::{RulerSurfaces, RulerWidget, RulerWidgetConfig};
use canvas_ruler::core::{Axis, ViewState, Viewport, ZoomLimits};
use canvas_ruler::render::NullRenderer;

fn widget_with(config: RulerWidgetConfig) -> RulerWidget<NullRenderer> {
    RulerWidget::new(RulerSurfaces::default(), config).expect("widget init")
}

fn widget() -> RulerWidget<NullRenderer> {
    widget_with(RulerWidgetConfig::new(Viewport::new(800, 600)))
}

#[test]
fn zoom_keeps_logical_point_under_pointer() {
    let mut widget = widget();
    widget.set_offset(15.0, -40.0).expect("offset");

    // Widget pixel (220, 120) is content pixel (200, 100).
    let view = widget.view_state();
    let before_x = view.pixel_to_logical(Axis::Horizontal, 200.0);
    let before_y = view.pixel_to_logical(Axis::Vertical, 100.0);

    widget.zoom_at(2.0, 220.0, 120.0).expect("zoom");
    let view = widget.view_state();
    assert_relative_eq!(view.scale, 2.0);
    assert_relative_eq!(view.pixel_to_logical(Axis::Horizontal, 200.0), before_x);
    assert_relative_eq!(view.pixel_to_logical(Axis::Vertical, 100.0), before_y);
}

#[test]
fn zoom_and_set_scale_clamp_into_limits() {
    let mut widget = widget();
    widget.zoom_at(1_000.0, 20.0, 20.0).expect("zoom in");
    assert_relative_eq!(widget.view_state().scale, 20.0);

    widget.set_scale(0.001).expect("set scale");
    assert_relative_eq!(widget.view_state().scale, 0.05);
    assert_relative_eq!(widget.view_state().offset_x, 0.0);

    assert!(widget.zoom_at(0.0, 0.0, 0.0).is_err());
    assert!(widget.set_scale(f64::NAN).is_err());
}

#[test]
fn set_view_state_rejects_scale_outside_limits() {
    let config = RulerWidgetConfig::new(Viewport::new(800, 600))
        .with_zoom_limits(ZoomLimits::new(0.5, 4.0).expect("limits"));
    let mut widget = widget_with(config);

    let err = widget
        .set_view_state(ViewState::new(8.0, 0.0, 0.0).expect("state"))
        .expect_err("scale outside limits");
    assert!(matches!(err, RulerError::InvalidData(_)));
    assert_eq!(widget.view_state(), ViewState::default());

    let accepted = ViewState::new(2.0, 5.0, 6.0).expect("state");
    widget.set_view_state(accepted).expect("set view state");
    assert_eq!(widget.view_state(), accepted);
}

#[test]
fn pan_by_accumulates_and_reset_restores_initial_view() {
    let initial = ViewState::new(1.5, 10.0, 10.0).expect("state");
    let mut widget =
        widget_with(RulerWidgetConfig::new(Viewport::new(800, 600)).with_initial_view(initial));

    widget.pan_by(5.0, -3.0).expect("pan");
    widget.pan_by(5.0, -3.0).expect("pan");
    assert_eq!(
        widget.view_state(),
        ViewState::new(1.5, 20.0, 4.0).expect("state")
    );
    assert!(widget.pan_by(f64::INFINITY, 0.0).is_err());

    widget.reset_view();
    assert_eq!(widget.view_state(), initial);
}

#[test]
fn subscriptions_replay_current_state_then_report_changes() {
    let mut widget = widget();
    widget.set_offset(12.0, 0.0).expect("offset");

    let mut subscription = widget.subscribe_view_state();
    let (state, changes) = widget
        .poll_view_state(&mut subscription)
        .expect("initial value");
    assert_eq!(state.offset_x, 12.0);
    assert!(changes.offset_x && changes.offset_y && changes.scale);
    assert!(widget.poll_view_state(&mut subscription).is_none());

    widget.set_offset(12.0, 7.0).expect("offset");
    let (_, changes) = widget
        .poll_view_state(&mut subscription)
        .expect("offset_y change");
    assert!(!changes.offset_x && changes.offset_y && !changes.scale);
}
