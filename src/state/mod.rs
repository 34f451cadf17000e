//! State Module - Runtime state for the tag input
//!
//! - **Tag store** - Ordered tags, layout recompute, observers
//! - **Input** - Draft text field, key and click handling

mod input;
mod tag_store;

pub use input::*;
pub use tag_store::*;
