use canvas_ruler::api::{RulerSurfaces, RulerWidget, RulerWidgetConfig};
use canvas_ruler::core::Viewport;
use canvas_ruler::extensions::SurfaceSet;
use canvas_ruler::render::NullRenderer;

fn rendered_widget() -> RulerWidget<NullRenderer> {
    let config = RulerWidgetConfig::new(Viewport::new(640, 480));
    let mut widget = RulerWidget::new(RulerSurfaces::default(), config).expect("widget init");
    widget.render().expect("initial render");
    widget
}

fn frame_counts(widget: &RulerWidget<NullRenderer>) -> (usize, usize, usize) {
    let surfaces = widget.surfaces();
    (
        surfaces.horizontal_ruler.frames_rendered,
        surfaces.vertical_ruler.frames_rendered,
        surfaces.grid.frames_rendered,
    )
}

#[test]
fn hover_repaints_rulers_only() {
    let mut widget = rendered_widget();
    widget.pointer_move(200.0, 150.0).expect("hover");
    assert_eq!(widget.dirty_surfaces(), SurfaceSet::RULERS);

    assert_eq!(widget.render().expect("render"), SurfaceSet::RULERS);
    assert_eq!(frame_counts(&widget), (2, 2, 1));
}

#[test]
fn horizontal_offset_skips_vertical_ruler() {
    let mut widget = rendered_widget();
    widget.set_offset(25.0, 0.0).expect("offset");

    let expected = SurfaceSet {
        horizontal_ruler: true,
        vertical_ruler: false,
        grid: true,
    };
    assert_eq!(widget.dirty_surfaces(), expected);
    assert_eq!(widget.render().expect("render"), expected);
    assert_eq!(frame_counts(&widget), (2, 1, 2));
}

#[test]
fn vertical_offset_skips_horizontal_ruler() {
    let mut widget = rendered_widget();
    widget.pan_by(0.0, -12.0).expect("pan");

    let expected = SurfaceSet {
        horizontal_ruler: false,
        vertical_ruler: true,
        grid: true,
    };
    assert_eq!(widget.render().expect("render"), expected);
}

#[test]
fn scale_and_resize_repaint_everything() {
    let mut widget = rendered_widget();
    widget.set_scale(2.0).expect("scale");
    assert_eq!(widget.render().expect("render"), SurfaceSet::ALL);

    widget.resize(Viewport::new(700, 500)).expect("resize");
    assert_eq!(widget.dirty_surfaces(), SurfaceSet::ALL);
    assert_eq!(widget.render().expect("render"), SurfaceSet::ALL);
    assert_eq!(
        widget.surfaces().grid.last_viewport,
        Some(Viewport::new(680, 480))
    );
}

#[test]
fn unchanged_state_repaints_nothing() {
    let mut widget = rendered_widget();
    widget.set_offset(0.0, 0.0).expect("same offset");
    widget.resize(Viewport::new(640, 480)).expect("same size");
    assert!(widget.dirty_surfaces().is_empty());
    assert_eq!(widget.render().expect("render"), SurfaceSet::NONE);
    assert_eq!(frame_counts(&widget), (1, 1, 1));
}

#[test]
fn render_all_forces_full_repaint() {
    let mut widget = rendered_widget();
    assert_eq!(widget.render_all().expect("render all"), SurfaceSet::ALL);
    assert_eq!(frame_counts(&widget), (2, 2, 2));
}
