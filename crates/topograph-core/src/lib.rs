//! Topograph Core Types and Definitions
//!
//! This crate provides the foundational types for the Topograph diagram
//! builder. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Model**: The semantic diagram model ([`model`] module): typed nodes,
//!   labeled edges, nested clusters, and the [`model::Diagram`] container

pub mod identifier;
pub mod model;
