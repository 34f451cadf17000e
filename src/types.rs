//! Core types for tagflow.
//!
//! These types flow from the tag store through the packer and out to
//! whatever renderer is observing the published layout.

use std::fmt;

use uuid::Uuid;

// =============================================================================
// Tag identity
// =============================================================================

/// Opaque tag identifier.
///
/// Generated once when a tag is created and never reused. Renderers hand it
/// back to [`crate::TagStore::remove_tag`] from a chip's remove action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(String);

impl TagId {
    /// Generate a fresh process-wide unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// View the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TagId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// Tag
// =============================================================================

/// A user-entered short text item.
///
/// `measured_width` is derived: it is overwritten by the store on every
/// layout pass and is meaningless before the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: TagId,
    pub text: String,
    pub measured_width: f32,
}

impl Tag {
    /// Create an unmeasured tag with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TagId::generate(),
            text: text.into(),
            measured_width: 0.0,
        }
    }

    /// Create an unmeasured tag with a caller-supplied id.
    pub fn with_id(id: impl Into<TagId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            measured_width: 0.0,
        }
    }
}

// =============================================================================
// Font
// =============================================================================

/// Font handed to the text measurer alongside each string.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    /// Point size (or cell size for terminal measurers, which ignore it).
    pub size: f32,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The 16pt system font the chips are drawn with by default.
    pub fn system(size: f32) -> Self {
        Self::new("system", size)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::system(16.0)
    }
}

// =============================================================================
// Rows and layout
// =============================================================================

/// A horizontally packed group of items.
///
/// Never empty. `span` is the accumulated `width + spacing` of its items.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub items: Vec<T>,
    pub span: f32,
}

impl<T> Row<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The full packed layout of a tag set.
///
/// Replaced wholesale on every recompute; readers hold an immutable snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub rows: Vec<Row<Tag>>,
    /// Container width the rows were packed against.
    pub container_width: f32,
    /// Per-item spacing the rows were packed with.
    pub spacing: f32,
}

impl Layout {
    /// A layout with no rows.
    pub fn empty(container_width: f32, spacing: f32) -> Self {
        Self {
            rows: Vec::new(),
            container_width,
            spacing,
        }
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of tags across all rows.
    pub fn tag_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// All tags in row order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.rows.iter().flat_map(|row| row.items.iter())
    }

    /// Index of the row holding `id`, if any.
    pub fn row_of(&self, id: &TagId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.items.iter().any(|tag| &tag.id == id))
    }

    /// Tag texts per row. Handy for assertions and plain renderers.
    pub fn texts(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.items.iter().map(|tag| tag.text.as_str()).collect())
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(texts: &[&str]) -> Row<Tag> {
        Row {
            items: texts.iter().map(|t| Tag::with_id(*t, *t)).collect(),
            span: 0.0,
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = TagId::generate();
        let b = TagId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_new_tag_is_unmeasured() {
        let tag = Tag::new("Swift");
        assert_eq!(tag.text, "Swift");
        assert_eq!(tag.measured_width, 0.0);
    }

    #[test]
    fn test_layout_queries() {
        let layout = Layout {
            rows: vec![row(&["a", "b"]), row(&["c"])],
            container_width: 100.0,
            spacing: 10.0,
        };

        assert_eq!(layout.row_count(), 2);
        assert_eq!(layout.tag_count(), 3);
        assert_eq!(layout.row_of(&TagId::from("c")), Some(1));
        assert_eq!(layout.row_of(&TagId::from("z")), None);
        assert_eq!(layout.texts(), vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::empty(320.0, 56.0);
        assert!(layout.is_empty());
        assert_eq!(layout.tag_count(), 0);
        assert_eq!(layout.tags().count(), 0);
    }
}
