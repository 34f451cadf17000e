//! Tag Store - the tag list state machine
//!
//! Owns the ordered tag list and the layout derived from it. Every mutation
//! re-measures every tag, re-packs the rows and publishes both as one
//! snapshot, so readers never see tags and rows out of step.
//!
//! # API
//!
//! - `add_tag(text)` - Append a tag, returns its id
//! - `remove_tag(id)` - Remove a tag (absent ids are a no-op)
//! - `set_container_width(w)` - Re-pack for a new container width
//! - `on_layout(handler)` - Subscribe to layout changes
//! - `state_signal()` - The published snapshot as a signal
//!
//! # Example
//!
//! ```
//! use tagflow::state::{TagStore, TagStoreConfig};
//! use tagflow::layout::CellMeasurer;
//!
//! let store = TagStore::new(TagStoreConfig::default().with_spacing(4.0), CellMeasurer, 16.0).unwrap();
//! let id = store.add_tag("rust").unwrap();
//! store.add_tag("signals").unwrap();
//! assert_eq!(store.layout().texts(), vec![vec!["rust"], vec!["signals"]]);
//!
//! store.remove_tag(&id).unwrap();
//! assert_eq!(store.layout().texts(), vec![vec!["signals"]]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;
use spark_signals::{signal, Signal};
use tracing::debug;

use crate::error::{LayoutError, Result, TagStoreError};
use crate::layout::{pack, TextMeasurer};
use crate::types::{FontDescriptor, Layout, Tag, TagId};

// =============================================================================
// CONFIGURATION
// =============================================================================

bitflags! {
    /// Optional text policies applied before a tag is stored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TagFlags: u8 {
        /// Trim surrounding whitespace.
        const TRIM = 1 << 0;
        /// Reject empty text with `TagStoreError::EmptyTag`.
        const REJECT_EMPTY = 1 << 1;
    }
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TagStoreConfig {
    /// Added to every measured width before packing.
    pub spacing: f32,
    /// Font handed to the measurer.
    pub font: FontDescriptor,
    pub flags: TagFlags,
}

impl TagStoreConfig {
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    pub fn with_flags(mut self, flags: TagFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for TagStoreConfig {
    /// 56pt spacing: 44pt chip padding plus inter-chip gap and margin.
    fn default() -> Self {
        Self {
            spacing: 56.0,
            font: FontDescriptor::default(),
            flags: TagFlags::empty(),
        }
    }
}

// =============================================================================
// PUBLISHED STATE
// =============================================================================

/// The tag list and its layout, published together.
#[derive(Debug, Clone, PartialEq)]
pub struct TagState {
    pub tags: Vec<Tag>,
    pub layout: Rc<Layout>,
}

/// Handler for layout changes.
pub type LayoutHandler = Rc<dyn Fn(&Rc<Layout>)>;

struct ObserverRegistry {
    handlers: Vec<(usize, LayoutHandler)>,
    next_id: usize,
}

impl ObserverRegistry {
    fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Canonical tag sequence plus its current layout.
///
/// Single-threaded: all mutations run to completion on the caller's thread.
pub struct TagStore {
    config: TagStoreConfig,
    measurer: Box<dyn TextMeasurer>,
    state: Signal<Rc<TagState>>,
    observers: Rc<RefCell<ObserverRegistry>>,
}

impl TagStore {
    /// Create an empty store packing against `container_width`.
    pub fn new(
        config: TagStoreConfig,
        measurer: impl TextMeasurer + 'static,
        container_width: f32,
    ) -> Result<Self, LayoutError> {
        // Validate up front so an empty store can't hold a bad width.
        crate::layout::FlowParams::new(container_width, config.spacing)?;

        let layout = Rc::new(Layout::empty(container_width, config.spacing));
        Ok(Self {
            config,
            measurer: Box::new(measurer),
            state: signal(Rc::new(TagState {
                tags: Vec::new(),
                layout,
            })),
            observers: Rc::new(RefCell::new(ObserverRegistry::new())),
        })
    }

    /// Create a store seeded with `texts`, laid out once.
    pub fn with_tags<I, S>(
        config: TagStoreConfig,
        measurer: impl TextMeasurer + 'static,
        container_width: f32,
        texts: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new(config, measurer, container_width)?;
        let tags = texts
            .into_iter()
            .map(|text| store.prepare_text(text.into()).map(Tag::new))
            .collect::<Result<Vec<_>>>()?;
        store.commit(tags, container_width)?;
        Ok(store)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &TagStoreConfig {
        &self.config
    }

    /// Current snapshot of tags and layout.
    pub fn state(&self) -> Rc<TagState> {
        self.state.get()
    }

    /// The published state signal. Reading it inside a `derived` or `effect`
    /// tracks every store mutation.
    pub fn state_signal(&self) -> Signal<Rc<TagState>> {
        self.state.clone()
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> Vec<Tag> {
        self.state.get().tags.clone()
    }

    /// Current layout snapshot.
    pub fn layout(&self) -> Rc<Layout> {
        self.state.get().layout.clone()
    }

    pub fn container_width(&self) -> f32 {
        self.state.get().layout.container_width
    }

    pub fn get(&self, id: &TagId) -> Option<Tag> {
        self.state.get().tags.iter().find(|tag| &tag.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.get().tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.get().tags.is_empty()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Append a tag and re-layout. Returns the new tag's id.
    pub fn add_tag(&self, text: impl Into<String>) -> Result<TagId> {
        let text = self.prepare_text(text.into())?;
        let tag = Tag::new(text);
        let id = tag.id.clone();

        let mut tags = self.tags();
        tags.push(tag);
        self.commit(tags, self.container_width())?;

        debug!(id = %id, count = self.len(), "added tag");
        Ok(id)
    }

    /// Remove the tag with `id` and re-layout.
    ///
    /// Returns `false` without touching state when no tag matches.
    pub fn remove_tag(&self, id: &TagId) -> Result<bool> {
        let mut tags = self.tags();
        let Some(position) = tags.iter().position(|tag| &tag.id == id) else {
            debug!(id = %id, "remove ignored, unknown tag");
            return Ok(false);
        };

        tags.remove(position);
        self.commit(tags, self.container_width())?;

        debug!(id = %id, count = self.len(), "removed tag");
        Ok(true)
    }

    /// Remove every tag.
    pub fn clear(&self) -> Result<()> {
        self.commit(Vec::new(), self.container_width())?;
        debug!("cleared tags");
        Ok(())
    }

    /// Re-pack for a new container width (viewport resize).
    pub fn set_container_width(&self, container_width: f32) -> Result<(), LayoutError> {
        self.recompute_layout(container_width)
    }

    /// Re-measure every tag and re-pack against `container_width`.
    pub fn recompute_layout(&self, container_width: f32) -> Result<(), LayoutError> {
        self.commit(self.tags(), container_width)
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Subscribe to layout changes. Handlers run after each committed
    /// mutation with the new layout.
    /// Returns cleanup function.
    pub fn on_layout<F>(&self, handler: F) -> impl FnOnce() + use<F>
    where
        F: Fn(&Rc<Layout>) + 'static,
    {
        let id = {
            let mut reg = self.observers.borrow_mut();
            let id = reg.next_id();
            reg.handlers.push((id, Rc::new(handler)));
            id
        };

        let observers = Rc::clone(&self.observers);
        move || {
            observers
                .borrow_mut()
                .handlers
                .retain(|(handler_id, _)| *handler_id != id);
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn prepare_text(&self, text: String) -> Result<String> {
        let text = if self.config.flags.contains(TagFlags::TRIM) {
            text.trim().to_string()
        } else {
            text
        };

        if text.is_empty() && self.config.flags.contains(TagFlags::REJECT_EMPTY) {
            return Err(TagStoreError::EmptyTag);
        }

        Ok(text)
    }

    /// Measure, pack, then publish. Nothing is published if packing fails.
    fn commit(&self, mut tags: Vec<Tag>, container_width: f32) -> Result<(), LayoutError> {
        for tag in &mut tags {
            tag.measured_width = self.measurer.measure(&tag.text, &self.config.font);
        }

        let rows = pack(&tags, container_width, self.config.spacing)?;
        let layout = Rc::new(Layout {
            rows,
            container_width,
            spacing: self.config.spacing,
        });

        debug!(
            tags = tags.len(),
            rows = layout.row_count(),
            container_width,
            "recomputed tag layout"
        );

        self.state.set(Rc::new(TagState {
            tags,
            layout: Rc::clone(&layout),
        }));
        self.notify(&layout);
        Ok(())
    }

    fn notify(&self, layout: &Rc<Layout>) {
        // Snapshot so handlers may subscribe or unsubscribe re-entrantly.
        let handlers: Vec<LayoutHandler> = self
            .observers
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in handlers {
            handler(layout);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
