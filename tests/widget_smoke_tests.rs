use canvas_ruler::api::{
    RulerGeometry, RulerSurfaces, RulerWidget, RulerWidgetConfig, WidgetSurface,
};
use canvas_ruler::core::{ViewState, Viewport};
use canvas_ruler::extensions::SurfaceSet;
use canvas_ruler::interaction::{InteractionMode, PointerInput};
use canvas_ruler::render::{DrawCommand, NullRenderer};

fn widget() -> RulerWidget<NullRenderer> {
    let config = RulerWidgetConfig::new(Viewport::new(800, 600));
    RulerWidget::new(RulerSurfaces::default(), config).expect("widget init")
}

#[test]
fn widget_smoke_flow() {
    let mut widget = widget();
    assert_eq!(widget.dirty_surfaces(), SurfaceSet::ALL);

    let rendered = widget.render().expect("first render");
    assert_eq!(rendered, SurfaceSet::ALL);
    assert!(widget.dirty_surfaces().is_empty());

    let surfaces = widget.surfaces();
    assert_eq!(
        surfaces.horizontal_ruler.last_viewport,
        Some(Viewport::new(800, 20))
    );
    assert_eq!(
        surfaces.vertical_ruler.last_viewport,
        Some(Viewport::new(20, 600))
    );
    assert_eq!(surfaces.grid.last_viewport, Some(Viewport::new(780, 580)));

    // 16 majors + 64 minors, band and corner box, one label per major.
    assert_eq!(surfaces.horizontal_ruler.last_line_count, 80);
    assert_eq!(surfaces.horizontal_ruler.last_rect_count, 2);
    assert_eq!(surfaces.horizontal_ruler.last_text_count, 16);
    // Vertical labels are stacked one character per text command.
    assert_eq!(surfaces.vertical_ruler.last_text_count, 33);
    assert_eq!(surfaces.grid.last_line_count, 78 + 58);

    assert_eq!(widget.render().expect("idle render"), SurfaceSet::NONE);
    assert_eq!(widget.surfaces().grid.frames_rendered, 1);
}

#[test]
fn drag_pans_every_surface() {
    let mut widget = widget();
    widget.render().expect("initial render");

    widget.pointer_down(100.0, 100.0).expect("down");
    assert_eq!(widget.interaction_mode(), InteractionMode::Dragging);
    widget.pointer_move(130.0, 90.0).expect("move");
    widget.pointer_up();
    assert_eq!(widget.interaction_mode(), InteractionMode::Idle);

    let view = widget.view_state();
    assert_eq!(view.offset_x, 30.0);
    assert_eq!(view.offset_y, -10.0);
    assert_eq!(widget.render().expect("render"), SurfaceSet::ALL);

    widget.pointer_move(500.0, 500.0).expect("hover");
    assert_eq!(widget.view_state(), view);
}

#[test]
fn touch_input_drives_the_same_drag() {
    let mut widget = widget();
    widget
        .handle_input(PointerInput::TouchStart { x: 50.0, y: 50.0 })
        .expect("touch start");
    widget
        .handle_input(PointerInput::TouchMove { x: 70.0, y: 80.0 })
        .expect("touch move");
    widget
        .handle_input(PointerInput::TouchEnd)
        .expect("touch end");

    assert_eq!(widget.interaction_mode(), InteractionMode::Idle);
    assert_eq!(widget.view_state(), ViewState::new(1.0, 20.0, 30.0).expect("state"));
    assert!(widget.cursor_state().visible);

    widget.handle_input(PointerInput::Leave).expect("leave");
    assert!(!widget.cursor_state().visible);
}

#[test]
fn resize_during_drag_rebases_anchor() {
    let mut widget = widget();
    widget.pointer_down(100.0, 100.0).expect("down");
    widget.pointer_move(120.0, 100.0).expect("move");
    assert_eq!(widget.view_state().offset_x, 20.0);

    widget.resize(Viewport::new(1000, 800)).expect("resize");
    widget.pointer_move(150.0, 100.0).expect("rebase move");
    assert_eq!(widget.view_state().offset_x, 20.0);

    widget.pointer_move(160.0, 100.0).expect("move after rebase");
    assert_eq!(widget.view_state().offset_x, 30.0);
    assert_eq!(widget.view_state().offset_y, 0.0);
}

#[test]
fn leave_ends_drag_and_keeps_offsets() {
    let mut widget = widget();
    widget.pointer_down(10.0, 10.0).expect("down");
    widget.pointer_move(40.0, 10.0).expect("move");
    widget.pointer_leave();

    assert_eq!(widget.interaction_mode(), InteractionMode::Idle);
    assert_eq!(widget.view_state().offset_x, 30.0);
    widget.pointer_move(90.0, 10.0).expect("hover");
    assert_eq!(widget.view_state().offset_x, 30.0);
}

#[test]
fn rejects_non_finite_pointer() {
    let mut widget = widget();
    assert!(widget.pointer_down(f64::NAN, 0.0).is_err());
    assert!(widget.pointer_move(0.0, f64::INFINITY).is_err());
    assert_eq!(widget.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn surface_frames_match_surface_viewports() {
    let widget = widget();
    let viewports = widget.surface_viewports().expect("viewports");
    for surface in WidgetSurface::ALL {
        let frame = widget.surface_frame(surface).expect("frame");
        let expected = match surface {
            WidgetSurface::HorizontalRuler => viewports.horizontal_ruler,
            WidgetSurface::VerticalRuler => viewports.vertical_ruler,
            WidgetSurface::Grid => viewports.grid,
        };
        assert_eq!(frame.viewport, expected);
    }
}

#[test]
fn rejects_container_not_larger_than_rulers() {
    let config = RulerWidgetConfig::new(Viewport::new(20, 600));
    assert!(RulerWidget::new(RulerSurfaces::<NullRenderer>::default(), config).is_err());

    let mut widget = widget();
    assert!(widget.resize(Viewport::new(10, 10)).is_err());
    assert_eq!(widget.container(), Viewport::new(800, 600));
}

#[test]
fn dense_minor_step_renders_majors_only() {
    let geometry = RulerGeometry {
        minor_step: 0.01,
        ..RulerGeometry::default()
    };
    let config = RulerWidgetConfig::new(Viewport::new(1920, 1080)).with_geometry(geometry);
    let mut widget: RulerWidget<NullRenderer> = RulerWidget::new(RulerSurfaces::default(), config).expect("widget init");

    assert_eq!(widget.render().expect("render"), SurfaceSet::ALL);
    let dense = widget.surfaces().horizontal_ruler.last_line_count;

    let mut sparse = RulerWidget::new(
        RulerSurfaces::<NullRenderer>::default(),
        RulerWidgetConfig::new(Viewport::new(1920, 1080)),
    )
    .expect("widget init");
    sparse.render().expect("render");
    assert!(dense > 0);
    assert!(dense < sparse.surfaces().horizontal_ruler.last_line_count);
}

#[test]
fn rejects_offsets_that_would_blank_the_rulers() {
    let mut widget = widget();
    widget.set_offset(120.0, 40.0).expect("offset");

    let far = ViewState {
        scale: 1.0,
        offset_x: -1.0e21,
        offset_y: 0.0,
    };
    assert!(widget.set_view_state(far).is_err());
    assert!(widget.set_offset(-1.0e21, 0.0).is_err());
    assert!(widget.pan_by(0.0, 1.0e21).is_err());
    assert_eq!(widget.view_state(), ViewState::new(1.0, 120.0, 40.0).expect("state"));

    let frame = widget.horizontal_ruler_frame().expect("frame");
    assert!(frame.commands.iter().any(|command| matches!(command, DrawCommand::Text(_))));
}
