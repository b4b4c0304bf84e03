//! Export functionality for Topograph diagrams.
//!
//! This module is the boundary to the external rendering collaborator. The
//! [`dot`] submodule converts a completed [`Diagram`](topograph_core::model::Diagram)
//! into the collaborator's graph description and delegates layout and image
//! export to Graphviz.
//!
//! # Pipeline Position
//!
//! ```text
//! Declarations (builder API / presets)
//!     ↓ model
//! Diagram
//!     ↓ export (this module)
//! DOT text / image file
//! ```
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering conversion failures and
//! collaborator/I/O errors. [`Error`] converts into
//! [`TopographError::Export`] at the crate boundary.
//!
//! [`TopographError::Export`]: crate::TopographError::Export

/// DOT emission and Graphviz delegation.
pub mod dot;

/// Errors that can occur during diagram export.
///
/// This type is converted into [`TopographError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// A missing Graphviz installation surfaces here as `Io`, unchanged from
/// the process-spawn failure.
///
/// [`TopographError::Export`]: crate::TopographError::Export
#[derive(Debug)]
pub enum Error {
    /// A model-to-DOT conversion failure described by `message`.
    Render(String),
    /// An I/O or collaborator error encountered while producing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
