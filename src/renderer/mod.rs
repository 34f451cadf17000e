//! Renderers for packed tag layouts.
//!
//! The store knows nothing about drawing; a renderer reads a layout snapshot
//! and turns it into output. [`ChipRenderer`] targets terminals through
//! crossterm and also produces plain lines for headless use.

mod chips;

pub use chips::{ChipRenderer, ChipStyle, REMOVE_BUTTON_WIDTH};
