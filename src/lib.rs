//! # tagflow
//!
//! Tag input state and flow layout for chip rows.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! observable state.
//!
//! ## Architecture
//!
//! A tag input is a text field that appends short text tags to a list and
//! shows them as wrapped rows of chips. Every mutation re-measures each tag,
//! re-packs the rows and publishes one immutable snapshot:
//!
//! ```text
//! input → TagStore mutation → TextMeasurer → flow::pack → Layout → renderer
//! ```
//!
//! The packer and measurers are pure and toolkit independent. Hosts inject
//! the measurer and the container width; nothing here queries a screen.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Tag, TagId, Row, Layout, FontDescriptor)
//! - [`layout`] - Text measurement, greedy flow packing, chip placement
//! - [`state`] - Tag store and draft input
//! - [`renderer`] - Terminal chip renderer

pub mod error;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{LayoutError, TagStoreError};

pub use layout::{
    pack, place, string_width, AdvanceMeasurer, CellMeasurer, ChipMetrics, FlowItem, FlowParams,
    Measured, Placement, TextMeasurer,
};

pub use renderer::{ChipRenderer, ChipStyle};

pub use state::{
    InputEvent, InputOutcome, TagFlags, TagInput, TagState, TagStore, TagStoreConfig,
};
