//! Chip renderer for terminals.
//!
//! Draws a packed layout as rows of ` text × ` chips. Geometry comes from
//! [`place`], so what is drawn is exactly what [`crate::state::TagInput::handle_click`]
//! hit-tests against.
//!
//! A chip wider than the container (a lone overflow row) is truncated with an
//! ellipsis so its remove button stays on screen.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::layout::{place, string_width, truncate_text, ChipMetrics, Placement};
use crate::state::TagStoreConfig;
use crate::types::{Layout, Tag};

/// Cells taken by the remove button (`×` plus trailing pad).
pub const REMOVE_BUTTON_WIDTH: f32 = 2.0;

const REMOVE_GLYPH: char = '×';

/// Chip colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipStyle {
    pub background: Color,
    pub text: Color,
    pub remove: Color,
}

impl Default for ChipStyle {
    fn default() -> Self {
        Self {
            background: Color::DarkGrey,
            text: Color::White,
            remove: Color::Red,
        }
    }
}

/// Renders layouts packed in terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipRenderer {
    pub metrics: ChipMetrics,
    pub style: ChipStyle,
}

impl ChipRenderer {
    /// One-cell padding each side, a two-cell button, one-cell gaps.
    pub fn terminal() -> Self {
        Self {
            metrics: ChipMetrics {
                chrome: 2.0 + REMOVE_BUTTON_WIDTH,
                chip_gap: 1.0,
                chip_height: 1.0,
                row_gap: 1.0,
            },
            style: ChipStyle::default(),
        }
    }

    /// Store config whose spacing matches this renderer's chrome and gap.
    ///
    /// Pair it with [`crate::layout::CellMeasurer`].
    pub fn store_config(&self) -> TagStoreConfig {
        TagStoreConfig::default().with_spacing(self.metrics.spacing())
    }

    /// Chip rectangles, with overflowing chips clipped to the container.
    pub fn placement(&self, layout: &Layout) -> Placement {
        let mut placement = place(layout, self.metrics);
        for chip in &mut placement.chips {
            if chip.x + chip.width > layout.container_width {
                chip.width = (layout.container_width - chip.x).max(self.metrics.chrome);
            }
        }
        placement.content_width = placement
            .chips
            .iter()
            .map(|chip| chip.x + chip.width)
            .fold(0.0, f32::max);
        placement
    }

    /// The visible text of a chip of `cells` total width.
    fn label_text(&self, tag: &Tag, cells: u16) -> String {
        let room = cells.saturating_sub(self.metrics.chrome as u16);
        if string_width(&tag.text) > room {
            truncate_text(&tag.text, room)
        } else {
            tag.text.clone()
        }
    }

    /// Full chip label: ` text × `.
    pub fn chip_label(&self, tag: &Tag, cells: u16) -> String {
        format!(" {} {} ", self.label_text(tag, cells), REMOVE_GLYPH)
    }

    /// Plain-text rendering, one string per terminal line.
    pub fn render_lines(&self, layout: &Layout) -> Vec<String> {
        let placement = self.placement(layout);
        let row_pitch = (self.metrics.chip_height + self.metrics.row_gap) as usize;
        let mut lines: Vec<String> = Vec::new();

        for (tag, chip) in layout.tags().zip(&placement.chips) {
            let line_index = chip.row * row_pitch;
            while lines.len() < line_index + 1 {
                lines.push(String::new());
            }

            let line = &mut lines[line_index];
            let target = chip.x as usize;
            let current = string_width(line) as usize;
            line.extend(std::iter::repeat_n(' ', target.saturating_sub(current)));
            line.push_str(&self.chip_label(tag, chip.width as u16));
        }

        lines
    }

    /// Queue the layout's chips at `origin` (column, row). Caller flushes.
    pub fn draw<W: Write>(&self, out: &mut W, layout: &Layout, origin: (u16, u16)) -> io::Result<()> {
        let placement = self.placement(layout);

        for (tag, chip) in layout.tags().zip(&placement.chips) {
            let label = self.label_text(tag, chip.width as u16);
            queue!(
                out,
                MoveTo(origin.0 + chip.x as u16, origin.1 + chip.y as u16),
                SetBackgroundColor(self.style.background),
                SetForegroundColor(self.style.text),
                Print(format!(" {label} ")),
                SetForegroundColor(self.style.remove),
                Print(format!("{REMOVE_GLYPH} ")),
                ResetColor
            )?;
        }

        Ok(())
    }
}

impl Default for ChipRenderer {
    fn default() -> Self {
        Self::terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CellMeasurer;
    use crate::state::TagStore;

    fn store(width: f32) -> TagStore {
        let renderer = ChipRenderer::terminal();
        TagStore::new(renderer.store_config(), CellMeasurer, width).unwrap()
    }

    #[test]
    fn test_terminal_spacing() {
        assert_eq!(ChipRenderer::terminal().store_config().spacing, 5.0);
    }

    #[test]
    fn test_render_lines() {
        let store = store(20.0);
        for text in ["rust", "tui", "signals"] {
            store.add_tag(text).unwrap();
        }

        let lines = ChipRenderer::terminal().render_lines(&store.layout());
        assert_eq!(lines, vec![
            " rust × ".to_string() + " " + " tui × ",
            String::new(),
            " signals × ".to_string(),
        ]);
    }

    #[test]
    fn test_rows_fit_container() {
        let store = store(24.0);
        for text in ["alpha", "beta", "gamma", "delta", "epsilon", "z"] {
            store.add_tag(text).unwrap();
        }

        for line in ChipRenderer::terminal().render_lines(&store.layout()) {
            assert!(string_width(&line) <= 24, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_oversized_chip_is_truncated() {
        let store = store(12.0);
        store.add_tag("a-very-long-tag").unwrap();

        let renderer = ChipRenderer::terminal();
        let layout = store.layout();
        let placement = renderer.placement(&layout);
        assert_eq!(placement.chips[0].width, 12.0);

        let lines = renderer.render_lines(&layout);
        assert_eq!(lines, vec![" a-very-… × ".to_string()]);
    }

    #[test]
    fn test_draw_emits_labels() {
        let store = store(40.0);
        store.add_tag("rust").unwrap();

        let mut out: Vec<u8> = Vec::new();
        ChipRenderer::terminal().draw(&mut out, &store.layout(), (0, 2)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" rust "));
        assert!(text.contains('×'));
    }
}
