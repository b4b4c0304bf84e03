//! Semantic diagram model types.
//!
//! This module contains the in-memory representation of a topology diagram:
//! typed nodes, labeled edges, nested clusters, and the [`Diagram`] container
//! that owns them. The model is plain data: it is built once (usually through
//! the builder API in the `topograph` crate), handed to the export stage, and
//! discarded.
//!
//! # Pipeline Position
//!
//! ```text
//! Declarations (builder API / presets)
//!     ↓ model (these types) - validated references, ordered containers
//! Diagram
//!     ↓ export
//! DOT text / image file (Graphviz)
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - The [`Diagram`] container, [`Cluster`], and [`ModelError`]
//! - [`element`] - Diagram elements: [`Node`], [`NodeKind`], [`Edge`],
//!   [`EdgeStyle`], [`Direction`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
