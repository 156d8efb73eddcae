//! End-to-end checks of the connector → display → surface chain through the public API.

use core::cell::RefCell;
use std::rc::Rc;
use stepgauge_lib::progress::{Channel, ProgressConnector, ProgressDisplay, Rounding};
use stepgauge_lib::surfaces::{Surface, TextSurface};

/// Surface that keeps only what a presentation layer would currently show.
#[derive(Debug, Default)]
struct PanelMirror {
    fill: f64,
    label: String,
    visible: bool,
}

impl Surface for PanelMirror {
    fn set_fill(&mut self, fraction: f64) {
        self.fill = fraction;
    }

    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

type SharedDisplay = Rc<RefCell<ProgressDisplay<PanelMirror>>>;

fn wired() -> (ProgressConnector, SharedDisplay) {
    let display = Rc::new(RefCell::new(ProgressDisplay::new(PanelMirror::default(), Rounding::HalfEven)));
    let connector = ProgressConnector::with_display(Some(Rc::clone(&display)));
    (connector, display)
}

fn shown(display: &SharedDisplay) -> (f64, String, bool) {
    let display = display.borrow();
    let surface = display.surface();
    (surface.fill, surface.label.clone(), surface.visible)
}

#[test]
fn test_five_step_scenario() {
    let (mut connector, display) = wired();

    connector.initialize(5);
    assert_eq!(shown(&display), (0.0, "0%".to_string(), true));

    connector.advance(1);
    let (fill, label, _) = shown(&display);
    assert!((fill - 0.2).abs() < 1e-9);
    assert_eq!(label, "20%");

    connector.advance(5);
    assert_eq!(shown(&display), (1.0, "100%".to_string(), true));

    connector.advance(0);
    assert_eq!(shown(&display), (0.0, "0%".to_string(), true));
}

#[test]
fn test_out_of_range_progress_is_clamped_by_display() {
    let (mut connector, display) = wired();
    connector.initialize(10);

    connector.advance(-5);
    assert_eq!(display.borrow().state().completed(), 0);

    connector.advance(999);
    assert_eq!(display.borrow().state().completed(), 10);
    assert_eq!(shown(&display).1, "100%");
}

#[test]
fn test_zero_total_never_divides() {
    let (mut connector, display) = wired();
    connector.initialize(0);
    for completed in [-1, 0, 1, i64::MAX] {
        connector.advance(completed);
        assert_eq!(shown(&display), (0.0, "0%".to_string(), true));
    }
}

#[test]
fn test_negative_total_is_treated_as_empty() {
    let (mut connector, display) = wired();
    connector.initialize(-3);
    connector.advance(2);
    assert_eq!(display.borrow().state().total(), 0);
    assert_eq!(shown(&display).1, "0%");
}

#[test]
fn test_two_displays_on_one_connector() {
    let (mut connector, first) = wired();
    let second = Rc::new(RefCell::new(ProgressDisplay::new(PanelMirror::default(), Rounding::HalfAwayFromZero)));

    let init_target = Rc::clone(&second);
    let _ = connector.subscribe(Channel::Initialize, move |total| init_target.borrow_mut().initialize(total));
    let progress_target = Rc::clone(&second);
    let _ = connector.subscribe(Channel::Progress, move |completed| progress_target.borrow_mut().update_progress(completed));

    connector.initialize(8);
    connector.advance(1);

    assert_eq!(shown(&first).1, "12%");
    assert_eq!(shown(&second).1, "13%");
}

#[test]
fn test_text_surface_through_connector() {
    let display = Rc::new(RefCell::new(ProgressDisplay::new(TextSurface::new(Vec::new(), 4, false), Rounding::HalfEven)));
    let mut connector = ProgressConnector::with_display(Some(Rc::clone(&display)));

    connector.initialize(2);
    connector.advance(1);
    connector.advance(2);
    drop(connector);

    let display = Rc::try_unwrap(display).expect("connector released its listeners").into_inner();
    let text = String::from_utf8(display.into_surface().into_inner()).unwrap();
    assert_eq!(text, "[    ] 0%\n[=>  ] 50%\n[====] 100%\n");
}
