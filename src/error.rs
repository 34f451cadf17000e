//! Error types for tagflow.

use thiserror::Error;

/// Rejected packer input. Always a caller or integration bug.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid layout parameter `{parameter}`: {value}")]
    InvalidLayoutParameter { parameter: &'static str, value: f32 },
}

impl LayoutError {
    pub(crate) fn invalid(parameter: &'static str, value: f32) -> Self {
        Self::InvalidLayoutParameter { parameter, value }
    }
}

/// Errors surfaced by tag store mutations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TagStoreError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Only raised when the store is configured with `TagFlags::REJECT_EMPTY`.
    #[error("tag text is empty")]
    EmptyTag,
}

pub type Result<T, E = TagStoreError> = std::result::Result<T, E>;
