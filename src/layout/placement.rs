//! Chip placement.
//!
//! Turns packed rows into absolute chip rectangles a renderer can paint and
//! hit-test. Rows stack top to bottom, chips run left to right.

use crate::types::{Layout, TagId};

/// Chip geometry in the same units as the measurer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipMetrics {
    /// Horizontal padding around the text, remove button included.
    pub chrome: f32,
    /// Gap between adjacent chips on a row.
    pub chip_gap: f32,
    pub chip_height: f32,
    /// Gap between rows.
    pub row_gap: f32,
}

impl ChipMetrics {
    /// Per-item spacing to pack with so placed chips never exceed the container.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.chrome + self.chip_gap
    }
}

impl Default for ChipMetrics {
    /// 14pt leading + 30pt trailing padding, 6pt gap, 28pt rows 10pt apart.
    fn default() -> Self {
        Self {
            chrome: 44.0,
            chip_gap: 6.0,
            chip_height: 28.0,
            row_gap: 10.0,
        }
    }
}

/// One placed chip.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipRect {
    pub id: TagId,
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ChipRect {
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Placed chips plus the extent they cover.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Placement {
    pub chips: Vec<ChipRect>,
    pub content_width: f32,
    pub content_height: f32,
}

impl Placement {
    /// Chip under the given point, if any.
    pub fn chip_at(&self, x: f32, y: f32) -> Option<&ChipRect> {
        self.chips.iter().find(|chip| chip.contains(x, y))
    }
}

/// Place every chip of `layout`.
pub fn place(layout: &Layout, metrics: ChipMetrics) -> Placement {
    let mut placement = Placement {
        chips: Vec::with_capacity(layout.tag_count()),
        content_width: 0.0,
        content_height: content_height(layout, metrics),
    };

    let row_pitch = metrics.chip_height + metrics.row_gap;

    for (row_index, row) in layout.rows.iter().enumerate() {
        let y = row_index as f32 * row_pitch;
        let mut x = 0.0f32;

        for (i, tag) in row.items.iter().enumerate() {
            if i > 0 {
                x += metrics.chip_gap;
            }
            let width = tag.measured_width + metrics.chrome;
            placement.chips.push(ChipRect {
                id: tag.id.clone(),
                row: row_index,
                x,
                y,
                width,
                height: metrics.chip_height,
            });
            x += width;
        }

        placement.content_width = placement.content_width.max(x);
    }

    placement
}

/// Height covered by the rows of `layout`.
pub fn content_height(layout: &Layout, metrics: ChipMetrics) -> f32 {
    match layout.row_count() {
        0 => 0.0,
        n => n as f32 * metrics.chip_height + (n - 1) as f32 * metrics.row_gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Row, Tag};

    fn tag(id: &str, width: f32) -> Tag {
        let mut tag = Tag::with_id(id, id);
        tag.measured_width = width;
        tag
    }

    fn two_row_layout() -> Layout {
        Layout {
            rows: vec![
                Row {
                    items: vec![tag("a", 10.0), tag("b", 20.0)],
                    span: 0.0,
                },
                Row {
                    items: vec![tag("c", 5.0)],
                    span: 0.0,
                },
            ],
            container_width: 100.0,
            spacing: 6.0,
        }
    }

    fn metrics() -> ChipMetrics {
        ChipMetrics {
            chrome: 4.0,
            chip_gap: 2.0,
            chip_height: 1.0,
            row_gap: 1.0,
        }
    }

    #[test]
    fn test_default_spacing_matches_chip_chrome() {
        assert_eq!(ChipMetrics::default().spacing(), 50.0);
    }

    #[test]
    fn test_place_positions() {
        let placement = place(&two_row_layout(), metrics());

        assert_eq!(placement.chips.len(), 3);

        let a = &placement.chips[0];
        assert_eq!((a.x, a.y, a.width, a.height), (0.0, 0.0, 14.0, 1.0));

        let b = &placement.chips[1];
        assert_eq!((b.x, b.y, b.width), (16.0, 0.0, 24.0));

        let c = &placement.chips[2];
        assert_eq!((c.row, c.x, c.y, c.width), (1, 0.0, 2.0, 9.0));

        assert_eq!(placement.content_width, 40.0);
        assert_eq!(placement.content_height, 3.0);
    }

    #[test]
    fn test_chip_at() {
        let placement = place(&two_row_layout(), metrics());

        assert_eq!(placement.chip_at(17.0, 0.5).map(|c| c.id.as_str()), Some("b"));
        assert_eq!(placement.chip_at(3.0, 2.0).map(|c| c.id.as_str()), Some("c"));
        // Gap between chips
        assert!(placement.chip_at(15.0, 0.5).is_none());
        // Gap between rows
        assert!(placement.chip_at(3.0, 1.5).is_none());
    }

    #[test]
    fn test_empty_layout_places_nothing() {
        let placement = place(&Layout::empty(100.0, 0.0), metrics());
        assert!(placement.chips.is_empty());
        assert_eq!(placement.content_height, 0.0);
        assert_eq!(placement.content_width, 0.0);
    }
}
