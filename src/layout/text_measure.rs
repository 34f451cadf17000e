//! Text Measurement
//!
//! The measurer is supplied by the host toolkit. The store calls it once per
//! tag on every layout pass, so implementations must be deterministic for a
//! given text and font.
//!
//! Two headless measurers ship with the crate:
//! - [`CellMeasurer`] - terminal cells (ASCII 1, CJK/emoji 2, control 0)
//! - [`AdvanceMeasurer`] - a fixed advance per cell scaled by font size

use unicode_width::UnicodeWidthChar;

use crate::types::FontDescriptor;

/// Measures rendered text width in layout units.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &FontDescriptor) -> f32,
{
    fn measure(&self, text: &str, font: &FontDescriptor) -> f32 {
        self(text, font)
    }
}

/// Width in terminal cells. Ignores the font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str, _font: &FontDescriptor) -> f32 {
        f32::from(string_width(text))
    }
}

/// Approximates proportional text as `cells * font.size * advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceMeasurer {
    /// Advance of one cell as a fraction of the font size.
    pub advance: f32,
}

impl AdvanceMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for AdvanceMeasurer {
    fn default() -> Self {
        Self { advance: 0.55 }
    }
}

impl TextMeasurer for AdvanceMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> f32 {
        f32::from(string_width(text)) * font.size * self.advance
    }
}

/// Display width of a single character in terminal cells.
#[inline]
fn char_width(c: char) -> u16 {
    // Control characters report None.
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |width, c| width.saturating_add(char_width(c)))
}

/// Truncate text to fit within `width` cells, ending in an ellipsis when cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    // Leave room for the ellipsis
    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let w = char_width(c);
        if current_width + w > target_width {
            break;
        }
        result.push(c);
        current_width += w;
    }

    result.push('…');
    result
}
