use super::state::{ProgressState, Rounding};
use crate::surfaces::Surface;

const LOG_TARGET: &str = "   display";

/// A consumer of progress signals.
///
/// This is what a [`ProgressConnector`](super::ProgressConnector) binds to by default.
pub trait ProgressSink {
    /// Restart the sequence with `total_steps` steps.
    fn initialize(&mut self, total_steps: i64);

    /// Report that `completed_steps` steps are done.
    fn update_progress(&mut self, completed_steps: i64);
}

/// What a display last pushed to its surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    pub fill: f64,
    pub label: String,
}

impl Default for Rendering {
    fn default() -> Self {
        Self {
            fill: 0.0,
            label: "0%".to_string(),
        }
    }
}

/// A progress panel: owns the step counter and re-renders it on every update.
#[derive(Debug)]
pub struct ProgressDisplay<S: Surface> {
    state: ProgressState,
    rounding: Rounding,
    rendering: Rendering,
    visible: bool,
    surface: S,
}

impl<S: Surface> ProgressDisplay<S> {
    /// Create a hidden display with no steps.
    #[must_use]
    pub fn new(surface: S, rounding: Rounding) -> Self {
        Self {
            state: ProgressState::default(),
            rounding,
            rendering: Rendering::default(),
            visible: false,
            surface,
        }
    }

    /// Reset to `total_steps` steps with none completed, render, and show the panel.
    pub fn initialize(&mut self, total_steps: i64) {
        self.state.initialize(total_steps);
        log::debug!(target: LOG_TARGET, "Initialized with {} step(s)", self.state.total());
        self.render();
        self.show();
    }

    /// Record `completed_steps` (clamped into `0..=total`) and render.
    pub fn update_progress(&mut self, completed_steps: i64) {
        self.state.update(completed_steps);
        if u64::try_from(completed_steps).ok() != Some(self.state.completed()) {
            log::trace!(
                target: LOG_TARGET,
                "Clamped {completed_steps} to {} of {}",
                self.state.completed(),
                self.state.total()
            );
        }
        self.render();
    }

    /// Push the current fill and percentage label to the surface.
    pub fn render(&mut self) {
        let fill = self.state.fraction();
        let label = format!("{}%", self.state.percent(self.rounding));

        self.surface.set_fill(fill);
        self.surface.set_label(&label);
        self.rendering = Rendering { fill, label };
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.surface.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.surface.set_visible(false);
    }

    #[must_use]
    pub const fn state(&self) -> &ProgressState {
        &self.state
    }

    #[must_use]
    pub const fn rendering(&self) -> &Rendering {
        &self.rendering
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: Surface> ProgressSink for ProgressDisplay<S> {
    fn initialize(&mut self, total_steps: i64) {
        Self::initialize(self, total_steps);
    }

    fn update_progress(&mut self, completed_steps: i64) {
        Self::update_progress(self, completed_steps);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::surfaces::RecordingSurface;

    fn display() -> ProgressDisplay<RecordingSurface> {
        ProgressDisplay::new(RecordingSurface::default(), Rounding::HalfEven)
    }

    fn assert_rendered(display: &ProgressDisplay<RecordingSurface>, fill: f64, label: &str) {
        assert!((display.rendering().fill - fill).abs() < 1e-9, "fill {} != {fill}", display.rendering().fill);
        assert_eq!(display.rendering().label, label);
        assert_eq!(display.surface().labels.last().map(String::as_str), Some(label));
    }

    #[test]
    fn test_new_display_is_hidden() {
        let d = display();
        assert!(!d.is_visible());
        assert!(d.surface().labels.is_empty());
        assert_eq!(d.rendering(), &Rendering::default());
    }

    #[test]
    fn test_initialize_renders_and_shows() {
        let mut d = display();
        d.initialize(5);
        assert!(d.is_visible());
        assert!(d.surface().visible);
        assert_eq!(d.state().total(), 5);
        assert_eq!(d.state().completed(), 0);
        assert_rendered(&d, 0.0, "0%");
    }

    #[test]
    fn test_update_progress_scenario() {
        let mut d = display();
        d.initialize(5);
        d.update_progress(1);
        assert_rendered(&d, 0.2, "20%");
        d.update_progress(5);
        assert_rendered(&d, 1.0, "100%");
        d.update_progress(0);
        assert_rendered(&d, 0.0, "0%");
    }

    #[test]
    fn test_update_progress_clamps() {
        let mut d = display();
        d.initialize(10);
        d.update_progress(-5);
        assert_eq!(d.state().completed(), 0);
        d.update_progress(999);
        assert_eq!(d.state().completed(), 10);
        assert_rendered(&d, 1.0, "100%");
    }

    #[test]
    fn test_zero_total() {
        let mut d = display();
        d.initialize(0);
        d.update_progress(3);
        assert_eq!(d.state().completed(), 0);
        assert_rendered(&d, 0.0, "0%");
    }

    #[test]
    fn test_update_progress_is_idempotent() {
        let mut d = display();
        d.initialize(7);
        d.update_progress(3);
        let first = d.rendering().clone();
        d.update_progress(3);
        assert_eq!(d.rendering(), &first);
        assert_eq!(d.state().completed(), 3);
    }

    #[test]
    fn test_show_hide_do_not_touch_state() {
        let mut d = display();
        d.initialize(4);
        d.update_progress(2);
        let labels_before = d.surface().labels.len();

        d.hide();
        assert!(!d.is_visible());
        assert!(!d.surface().visible);
        d.show();
        assert!(d.is_visible());

        assert_eq!(d.state().completed(), 2);
        assert_eq!(d.surface().labels.len(), labels_before);
        assert_rendered(&d, 0.5, "50%");
    }

    #[test]
    fn test_reinitialize_restarts() {
        let mut d = display();
        d.initialize(4);
        d.update_progress(3);
        d.hide();
        d.initialize(8);
        assert!(d.is_visible());
        assert_eq!(d.state().completed(), 0);
        assert_rendered(&d, 0.0, "0%");
    }

    #[test]
    fn test_rounding_rule_applies_to_label() {
        let mut even = display();
        even.initialize(8);
        even.update_progress(1);
        assert_eq!(even.rendering().label, "12%");

        let mut away = ProgressDisplay::new(RecordingSurface::default(), Rounding::HalfAwayFromZero);
        away.initialize(8);
        away.update_progress(1);
        assert_eq!(away.rendering().label, "13%");
    }

    #[test]
    fn test_sink_trait_forwards() {
        let mut d = display();
        let sink: &mut dyn ProgressSink = &mut d;
        sink.initialize(2);
        sink.update_progress(1);
        assert_rendered(&d, 0.5, "50%");
    }
}
