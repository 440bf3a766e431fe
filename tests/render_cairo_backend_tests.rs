#![cfg(feature = "cairo-backend")]

use std::cell::RefCell;
use std::rc::Rc;

use cairo::{Context, Format, ImageSurface};
use canvas_ruler::RulerError;
use canvas_ruler::api::{RulerSurfaces, RulerWidget, RulerWidgetConfig, WidgetSurface};
use canvas_ruler::core::Viewport;
use canvas_ruler::extensions::{SurfaceSet, ViewStateObserver, WidgetContext, WidgetEvent};
use canvas_ruler::render::CairoRenderer;

fn cairo_surfaces() -> RulerSurfaces<CairoRenderer> {
    RulerSurfaces::new(
        CairoRenderer::new(1, 1).expect("horizontal renderer"),
        CairoRenderer::new(1, 1).expect("vertical renderer"),
        CairoRenderer::new(1, 1).expect("grid renderer"),
    )
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, RulerError::InvalidData(_)));
}

#[test]
fn cairo_surfaces_follow_frame_viewports() {
    let config = RulerWidgetConfig::new(Viewport::new(640, 480));
    let mut widget = RulerWidget::new(cairo_surfaces(), config).expect("widget init");
    widget.render().expect("render");

    let surfaces = widget.surfaces();
    assert_eq!(surfaces.horizontal_ruler.surface().width(), 640);
    assert_eq!(surfaces.horizontal_ruler.surface().height(), 20);
    assert_eq!(surfaces.vertical_ruler.surface().width(), 20);
    assert_eq!(surfaces.grid.surface().width(), 620);
    assert_eq!(surfaces.grid.surface().height(), 460);

    let stats = surfaces.horizontal_ruler.last_stats();
    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.texts_drawn, 13);
    assert!(stats.lines_drawn > stats.texts_drawn);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let config = RulerWidgetConfig::new(Viewport::new(640, 480));
    let mut widget = RulerWidget::new(cairo_surfaces(), config).expect("widget init");
    widget.pointer_move(100.0, 100.0).expect("hover");

    let surface = ImageSurface::create(Format::ARgb32, 640, 20).expect("surface");
    let context = Context::new(&surface).expect("context");
    widget
        .render_surface_on_cairo_context(WidgetSurface::HorizontalRuler, &context)
        .expect("render on context");

    let stats = widget.surfaces().horizontal_ruler.last_stats();
    assert_eq!(stats.rects_drawn, 2);
    assert!(!widget.dirty_surfaces().horizontal_ruler);
    assert!(widget.dirty_surfaces().vertical_ruler);
}

struct RenderedLog {
    events: Rc<RefCell<Vec<SurfaceSet>>>,
}

impl ViewStateObserver for RenderedLog {
    fn id(&self) -> &str {
        "rendered-log"
    }

    fn on_event(&mut self, event: WidgetEvent, _context: WidgetContext) {
        if let WidgetEvent::Rendered { surfaces } = event {
            self.events.borrow_mut().push(surfaces);
        }
    }
}

#[test]
fn external_context_paint_is_reported_to_observers() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let config = RulerWidgetConfig::new(Viewport::new(640, 480));
    let mut widget = RulerWidget::new(cairo_surfaces(), config).expect("widget init");
    widget
        .register_observer(Box::new(RenderedLog {
            events: events.clone(),
        }))
        .expect("register");

    let surface = ImageSurface::create(Format::ARgb32, 620, 460).expect("surface");
    let context = Context::new(&surface).expect("context");
    widget
        .render_surface_on_cairo_context(WidgetSurface::Grid, &context)
        .expect("render on context");

    let expected = SurfaceSet {
        horizontal_ruler: false,
        vertical_ruler: false,
        grid: true,
    };
    assert_eq!(events.borrow().as_slice(), &[expected]);
}
