//! Flow Packer
//!
//! Greedy left-to-right line breaking for variable-width items.
//!
//! # Algorithm
//!
//! Single pass, O(n), order preserving:
//!
//! 1. Each item occupies `width + spacing` on its row.
//! 2. The item's span is added to the running row total.
//! 3. If the total now exceeds the container width and the row already has
//!    items, the row is closed and the item starts the next one.
//! 4. A lone item wider than the container keeps a row to itself.
//!
//! A total exactly equal to the container width does not wrap.

use tracing::{trace, warn};

use crate::error::LayoutError;
use crate::types::{Row, Tag};

// =============================================================================
// ITEMS
// =============================================================================

/// Anything the packer can place on a row.
pub trait FlowItem {
    /// Measured width in layout units, before spacing.
    fn width(&self) -> f32;
}

impl FlowItem for Tag {
    #[inline]
    fn width(&self) -> f32 {
        self.measured_width
    }
}

/// A bare `(id, width)` item for hosts that keep their own item storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured<Id> {
    pub id: Id,
    pub width: f32,
}

impl<Id> Measured<Id> {
    pub fn new(id: Id, width: f32) -> Self {
        Self { id, width }
    }
}

impl<Id> FlowItem for Measured<Id> {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// Container width and per-item spacing for one packing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParams {
    pub container_width: f32,
    pub spacing: f32,
}

impl FlowParams {
    /// Build validated parameters.
    pub fn new(container_width: f32, spacing: f32) -> Result<Self, LayoutError> {
        let params = Self {
            container_width,
            spacing,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject non-positive container widths and negative spacing.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.container_width.is_finite() || self.container_width <= 0.0 {
            warn!(container_width = self.container_width, "rejected container width");
            return Err(LayoutError::invalid("container_width", self.container_width));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            warn!(spacing = self.spacing, "rejected spacing");
            return Err(LayoutError::invalid("spacing", self.spacing));
        }
        Ok(())
    }
}

// =============================================================================
// PACKING
// =============================================================================

/// Pack `items` into rows no wider than `container_width`.
///
/// See the module docs for the exact wrapping rule.
pub fn pack<T: FlowItem + Clone>(
    items: &[T],
    container_width: f32,
    spacing: f32,
) -> Result<Vec<Row<T>>, LayoutError> {
    pack_with(items, FlowParams::new(container_width, spacing)?)
}

/// Pack `items` with pre-built parameters.
pub fn pack_with<T: FlowItem + Clone>(
    items: &[T],
    params: FlowParams,
) -> Result<Vec<Row<T>>, LayoutError> {
    params.validate()?;

    let mut rows: Vec<Row<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();
    let mut accumulated = 0.0f32;

    for item in items {
        let width = item.width();
        if !width.is_finite() || width < 0.0 {
            warn!(width, "rejected item width");
            return Err(LayoutError::invalid("item_width", width));
        }

        let span = width + params.spacing;
        let tentative = accumulated + span;

        if tentative > params.container_width && !current.is_empty() {
            rows.push(Row {
                items: std::mem::take(&mut current),
                span: accumulated,
            });
            accumulated = span;
        } else {
            // Also covers a lone oversized item: it overflows on its own row.
            accumulated = tentative;
        }

        current.push(item.clone());
    }

    if !current.is_empty() {
        rows.push(Row {
            items: current,
            span: accumulated,
        });
    }

    trace!(
        items = items.len(),
        rows = rows.len(),
        container_width = params.container_width,
        "packed flow rows"
    );

    Ok(rows)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items(widths: &[(&'static str, f32)]) -> Vec<Measured<&'static str>> {
        widths.iter().map(|&(id, w)| Measured::new(id, w)).collect()
    }

    fn ids(rows: &[Row<Measured<&'static str>>]) -> Vec<Vec<&'static str>> {
        rows.iter()
            .map(|row| row.items.iter().map(|item| item.id).collect())
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        let rows = pack::<Measured<&str>>(&[], 100.0, 16.0).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_per_item_accumulation() {
        // A -> 56, B -> 112 > 100 wraps, C -> 112 > 100 wraps
        let rows = pack(&items(&[("A", 40.0), ("B", 40.0), ("C", 40.0)]), 100.0, 16.0).unwrap();
        assert_eq!(ids(&rows), vec![vec!["A"], vec!["B"], vec!["C"]]);
        assert_eq!(rows[0].span, 56.0);
    }

    #[test]
    fn test_exact_fit_stays_on_row() {
        let rows = pack(&items(&[("a", 80.0), ("b", 80.0), ("c", 80.0)]), 300.0, 20.0).unwrap();
        assert_eq!(ids(&rows), vec![vec!["a", "b", "c"]]);
        assert_eq!(rows[0].span, 300.0);
    }

    #[test]
    fn test_wraps_once_over_width() {
        let rows = pack(
            &items(&[("a", 30.0), ("b", 30.0), ("c", 30.0), ("d", 30.0)]),
            100.0,
            10.0,
        )
        .unwrap();
        assert_eq!(ids(&rows), vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(rows[1].span, 80.0);
    }

    #[test]
    fn test_oversized_first_item_has_no_empty_row_before_it() {
        let rows = pack(&items(&[("wide", 500.0), ("a", 10.0)]), 100.0, 10.0).unwrap();
        assert_eq!(ids(&rows), vec![vec!["wide"], vec!["a"]]);
        assert_eq!(rows[0].span, 510.0);
    }

    #[test]
    fn test_oversized_middle_item_gets_own_row() {
        let rows = pack(
            &items(&[("a", 10.0), ("wide", 500.0), ("b", 10.0), ("c", 10.0)]),
            100.0,
            10.0,
        )
        .unwrap();
        assert_eq!(ids(&rows), vec![vec!["a"], vec!["wide"], vec!["b", "c"]]);
    }

    #[test]
    fn test_zero_spacing() {
        let rows = pack(&items(&[("a", 50.0), ("b", 50.0), ("c", 1.0)]), 100.0, 0.0).unwrap();
        assert_eq!(ids(&rows), vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_rejects_non_positive_container() {
        let err = pack(&items(&[("a", 1.0)]), 0.0, 0.0).unwrap_err();
        assert_eq!(err, LayoutError::invalid("container_width", 0.0));
        assert!(pack(&items(&[("a", 1.0)]), -5.0, 0.0).is_err());
        assert!(pack(&items(&[("a", 1.0)]), f32::NAN, 0.0).is_err());
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let err = pack(&items(&[("a", 1.0)]), 100.0, -1.0).unwrap_err();
        assert_eq!(err, LayoutError::invalid("spacing", -1.0));
    }

    #[test]
    fn test_rejects_negative_item_width() {
        let err = pack(&items(&[("a", 1.0), ("b", -3.0)]), 100.0, 0.0).unwrap_err();
        assert_eq!(err, LayoutError::invalid("item_width", -3.0));
    }

    #[test]
    fn test_packs_tags_by_measured_width() {
        let mut tags = vec![Tag::with_id("x", "x"), Tag::with_id("y", "y")];
        tags[0].measured_width = 60.0;
        tags[1].measured_width = 60.0;

        let rows = pack(&tags, 100.0, 0.0).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].items[0].text, "y");
    }

    #[test]
    fn test_packing_is_deterministic() {
        let input = items(&[("a", 33.0), ("b", 71.0), ("c", 12.0), ("d", 90.0)]);
        let first = pack(&input, 120.0, 8.0).unwrap();
        let second = pack(&input, 120.0, 8.0).unwrap();
        assert_eq!(first, second);
    }
}
