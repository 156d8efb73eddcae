//! Rendering targets for a progress display
//!
//! A [`Surface`] is the host-side half of a progress panel: a proportional fill indicator,
//! a text label, and a visibility toggle. The display decides *what* to show; a surface only
//! knows *how* to put it on screen.
//!
//! - [`BarSurface`]: an `indicatif` bar drawn on stderr, for interactive terminals
//! - [`TextSurface`]: one line per update written to any `Write`, for pipes and logs

mod bar;
mod text;

pub use bar::{BarSurface, TargetFactory};
pub use text::TextSurface;

/// The presentation capabilities a progress display needs from its host.
pub trait Surface {
    /// Set the filled proportion of the indicator, in `[0.0, 1.0]`.
    fn set_fill(&mut self, fraction: f64);

    /// Replace the label text (e.g. `"40%"`).
    fn set_label(&mut self, text: &str);

    /// Show or hide the whole panel.
    fn set_visible(&mut self, visible: bool);

    /// Release the panel at the end of a session.
    fn finish(&mut self) {}
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn set_fill(&mut self, fraction: f64) {
        (**self).set_fill(fraction);
    }

    fn set_label(&mut self, text: &str) {
        (**self).set_label(text);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

/// Surface that records every call for inspection.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub fills: Vec<f64>,
    pub labels: Vec<String>,
    pub visible: bool,
    pub visibility_changes: usize,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn set_fill(&mut self, fraction: f64) {
        self.fills.push(fraction);
    }

    fn set_label(&mut self, text: &str) {
        self.labels.push(text.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.visibility_changes += 1;
    }
}

/// Number of cells filled in a bar `width` cells wide.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "value is clamped to 0..=width")]
pub(crate) fn filled_cells(fraction: f64, width: u16) -> u16 {
    (fraction.clamp(0.0, 1.0) * f64::from(width)).round() as u16
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells(0.0, 10), 0);
        assert_eq!(filled_cells(0.2, 10), 2);
        assert_eq!(filled_cells(1.0, 25), 25);
        assert_eq!(filled_cells(1.5, 10), 10);
        assert_eq!(filled_cells(-0.5, 10), 0);
    }
}
