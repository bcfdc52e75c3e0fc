//! Error types

/// Errors raised while addressing elements of a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// A referenced element id resolved to nothing.
    #[error("element `{id}` is not defined, make sure the id exists")]
    MissingElement { id: String },

    /// `change_style` received property and value lists of different length.
    #[error("properties and values in `{target}` are not equal ({properties} properties, {values} values)")]
    MismatchedStyleLists {
        /// Space separated ids of the handle's elements.
        target: String,
        properties: usize,
        values: usize,
    },
}

impl DomError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

/// Errors raised while setting up a scrollbar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScrollError {
    #[error("scrollbar is already initialized")]
    AlreadyInitialized,

    /// Travel bounds that would make the thumb-to-content ratio degenerate.
    #[error("invalid {axis} travel bounds (min {min}, max {max})")]
    InvalidBounds {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error(transparent)]
    Dom(#[from] DomError),
}
