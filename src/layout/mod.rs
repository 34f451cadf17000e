//! tagflow - Layout Module
//!
//! Flow layout for tag chips.
//!
//! # Architecture
//!
//! 1. [`text_measure`] measures each tag's text through an injected measurer
//! 2. [`flow`] packs measured items greedily into rows bounded by the
//!    container width
//! 3. [`placement`] turns rows into chip rectangles for a renderer
//!
//! Everything here is pure: no signals, no globals. The tag store drives it.
//!
//! # Example
//!
//! ```
//! use tagflow::layout::{pack, Measured};
//!
//! let items = vec![Measured::new("a", 40.0), Measured::new("b", 40.0)];
//! let rows = pack(&items, 100.0, 10.0).unwrap();
//! assert_eq!(rows.len(), 1);
//! ```

pub mod flow;
pub mod placement;
pub mod text_measure;

pub use flow::{pack, pack_with, FlowItem, FlowParams, Measured};
pub use placement::{content_height, place, ChipMetrics, ChipRect, Placement};
pub use text_measure::{
    string_width, truncate_text, AdvanceMeasurer, CellMeasurer, TextMeasurer,
};
