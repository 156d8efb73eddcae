use super::Surface;
use core::fmt;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Bar positions per full bar; the fill fraction is mapped onto this range.
const RESOLUTION: u32 = 1000;

/// Redraw rate cap for the terminal target.
const REFRESH_HZ: u8 = 10;

const PREFIX: &str = "Progress";

/// Produces the draw target a visible bar renders to.
pub type TargetFactory = Box<dyn Fn() -> ProgressDrawTarget>;

/// A progress panel rendered as an `indicatif` bar on stderr.
///
/// The label becomes the bar message. Hiding the panel clears the drawn line and parks the
/// position and message on a bar with a hidden draw target, so showing it again draws a single
/// bar in the same state.
pub struct BarSurface {
    bar: ProgressBar,
    style: ProgressStyle,
    target: TargetFactory,
    visible: bool,
}

impl BarSurface {
    /// Create a hidden bar `width` cells wide that draws to stderr once shown.
    ///
    /// When `use_colors` is false, the bar chrome is rendered without ANSI styling.
    #[must_use]
    pub fn new(width: u16, use_colors: bool) -> Self {
        Self::with_target(width, use_colors, Box::new(|| ProgressDrawTarget::stderr_with_hz(REFRESH_HZ)))
    }

    /// Create a hidden bar that draws to whatever `target` produces once shown.
    #[must_use]
    pub fn with_target(width: u16, use_colors: bool, target: TargetFactory) -> Self {
        let template = if use_colors {
            format!("{{prefix:>12.bold.cyan}} [{{bar:{width}}}] {{msg}}")
        } else {
            format!("{{prefix:>12}} [{{bar:{width}}}] {{msg}}")
        };

        let style = ProgressStyle::default_bar()
            .template(&template)
            .expect("could not create progress bar style")
            .progress_chars("=> ");

        let bar = parked_bar(&style, 0, String::new());
        Self {
            bar,
            style,
            target,
            visible: false,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current bar position in `0..=1000`.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.bar.message()
    }
}

/// A bar on a hidden draw target carrying the given state.
fn parked_bar(style: &ProgressStyle, position: u64, message: String) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(u64::from(RESOLUTION)), ProgressDrawTarget::hidden());
    bar.set_style(style.clone());
    bar.set_prefix(PREFIX);
    bar.set_position(position);
    bar.set_message(message);
    bar
}

impl Surface for BarSurface {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "value is clamped to 0..=RESOLUTION")]
    fn set_fill(&mut self, fraction: f64) {
        let position = (fraction.clamp(0.0, 1.0) * f64::from(RESOLUTION)).round() as u64;
        self.bar.set_position(position);
    }

    fn set_label(&mut self, text: &str) {
        self.bar.set_message(text.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }

        self.visible = visible;
        if visible {
            self.bar.set_draw_target((self.target)());
            self.bar.tick();
        } else {
            // swapping in a hidden target leaves the last frame on a terminal, so retire the drawn bar
            let parked = parked_bar(&self.style, self.bar.position(), self.bar.message());
            let drawn = core::mem::replace(&mut self.bar, parked);
            drawn.finish_and_clear();
        }
    }

    fn finish(&mut self) {
        if self.visible {
            self.bar.finish_and_clear();
        }
    }
}

impl fmt::Debug for BarSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarSurface")
            .field("bar", &self.bar)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use indicatif::InMemoryTerm;

    fn in_memory(width: u16) -> (BarSurface, InMemoryTerm) {
        let term = InMemoryTerm::new(10, 80);
        let target_term = term.clone();
        let surface = BarSurface::with_target(
            width,
            false,
            Box::new(move || ProgressDrawTarget::term_like(Box::new(target_term.clone()))),
        );
        (surface, term)
    }

    #[test]
    fn test_starts_hidden() {
        let surface = BarSurface::new(25, false);
        assert!(!surface.is_visible());
        assert_eq!(surface.position(), 0);
    }

    #[test]
    fn test_fill_maps_to_position() {
        let mut surface = BarSurface::new(25, false);
        surface.set_fill(0.2);
        assert_eq!(surface.position(), 200);

        surface.set_fill(1.0);
        assert_eq!(surface.position(), u64::from(RESOLUTION));

        surface.set_fill(0.0);
        assert_eq!(surface.position(), 0);
    }

    #[test]
    fn test_label_becomes_message() {
        let mut surface = BarSurface::new(10, true);
        surface.set_label("40%");
        assert_eq!(surface.message(), "40%");
    }

    #[test]
    fn test_visibility_toggle_keeps_position() {
        let mut surface = BarSurface::new(10, false);
        surface.set_fill(0.5);
        surface.set_label("50%");
        surface.set_visible(true);
        surface.set_visible(false);
        assert!(!surface.is_visible());
        assert_eq!(surface.position(), 500);
        assert_eq!(surface.message(), "50%");
    }

    #[test]
    fn test_nothing_drawn_while_hidden() {
        let (mut surface, term) = in_memory(10);
        surface.set_fill(0.4);
        surface.set_label("40%");
        assert_eq!(term.contents(), String::new());
    }

    #[test]
    fn test_hide_clears_the_screen() {
        let (mut surface, term) = in_memory(10);
        surface.set_fill(0.4);
        surface.set_label("40%");

        surface.set_visible(true);
        let shown = term.contents();
        assert!(shown.contains("Progress [====>"), "got: {shown:?}");
        assert!(shown.ends_with("40%"), "got: {shown:?}");

        surface.set_visible(false);
        assert_eq!(term.contents(), String::new());
    }

    #[test]
    fn test_show_after_hide_draws_one_bar() {
        let (mut surface, term) = in_memory(10);
        surface.set_fill(0.4);
        surface.set_label("40%");

        surface.set_visible(true);
        surface.set_visible(false);
        surface.set_visible(true);

        let shown = term.contents();
        assert_eq!(shown.lines().count(), 1, "got: {shown:?}");
        assert!(shown.ends_with("40%"), "got: {shown:?}");
    }

    #[test]
    fn test_finish_clears_visible_bar() {
        let (mut surface, term) = in_memory(10);
        surface.set_fill(1.0);
        surface.set_label("100%");
        surface.set_visible(true);

        surface.finish();
        assert_eq!(term.contents(), String::new());
    }
}
