//! Error types for Topograph operations.
//!
//! This module provides the main error type [`TopographError`] which wraps
//! the error conditions that can occur while building or exporting a diagram.

use std::io;

use thiserror::Error;

use topograph_core::model::ModelError;

/// The main error type for Topograph operations.
///
/// Model-invariant violations (the invalid-reference error, empty or
/// duplicate labels) arrive through the `Model` variant; failures of the
/// Graphviz collaborator arrive through `Export`.
#[derive(Debug, Error)]
pub enum TopographError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for TopographError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
