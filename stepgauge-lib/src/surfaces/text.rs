use super::{Surface, filled_cells};
use owo_colors::OwoColorize;
use std::io::Write;

/// A progress panel rendered as plain text lines, e.g. `[====>     ] 50%`.
///
/// A line is written each time the label changes while the panel is visible, and once when the
/// panel becomes visible. Nothing is written while hidden.
#[derive(Debug)]
pub struct TextSurface<W: Write> {
    writer: W,
    width: u16,
    use_colors: bool,
    fill: f64,
    label: String,
    visible: bool,
}

impl<W: Write> TextSurface<W> {
    /// Create a hidden text panel drawing a bar `width` cells wide.
    #[must_use]
    pub const fn new(writer: W, width: u16, use_colors: bool) -> Self {
        Self {
            writer,
            width,
            use_colors,
            fill: 0.0,
            label: String::new(),
            visible: false,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// The bar portion of a line, without brackets.
    fn bar(&self) -> String {
        let width = usize::from(self.width);
        let filled = usize::from(filled_cells(self.fill, self.width));

        let mut bar = String::with_capacity(width);
        for cell in 0..width {
            let ch = if cell + 1 < filled || (cell + 1 == filled && filled == width) {
                '='
            } else if cell + 1 == filled {
                '>'
            } else {
                ' '
            };
            bar.push(ch);
        }
        bar
    }

    fn draw(&mut self) {
        let bar = self.bar();
        let _ = if self.use_colors {
            writeln!(self.writer, "[{}] {}", bar.cyan(), self.label.bold())
        } else {
            writeln!(self.writer, "[{bar}] {}", self.label)
        };
        let _ = self.writer.flush();
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn set_fill(&mut self, fraction: f64) {
        self.fill = fraction;
    }

    fn set_label(&mut self, text: &str) {
        text.clone_into(&mut self.label);
        if self.visible {
            self.draw();
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.visible = true;
            self.draw();
        } else {
            self.visible = visible;
        }
    }
}
