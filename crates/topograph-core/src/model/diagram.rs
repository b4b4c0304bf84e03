//! The diagram container, cluster grouping, and model errors.

use indexmap::IndexMap;
use log::trace;
use thiserror::Error;

use crate::{
    identifier::Id,
    model::element::{Edge, EdgeStyle, Node, NodeKind},
};

/// Errors raised while building or validating a diagram model.
///
/// All of these are build-time failures: they surface immediately from the
/// mutator that violated the invariant, before any rendering takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An edge references a node that was never declared.
    #[error("edge references undeclared node `{id}`")]
    UnknownNode { id: Id },

    /// A node or cluster was declared with an empty label.
    #[error("label must not be empty")]
    EmptyLabel,

    /// A node with the same label already exists in the diagram.
    #[error("duplicate node label `{id}`")]
    DuplicateNode { id: Id },

    /// A cluster with the same path already exists in the diagram.
    #[error("duplicate cluster `{id}`")]
    DuplicateCluster { id: Id },
}

/// A named, possibly nested visual grouping of nodes.
///
/// Clusters carry no runtime semantics; they only affect how the rendering
/// collaborator draws the diagram. The identifier is path-qualified
/// (`parent::child`) so equally named clusters under different parents stay
/// distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: Id,
    name: String,
    parent: Option<Id>,
}

impl Cluster {
    fn new(id: Id, name: String, parent: Option<Id>) -> Self {
        Self { id, name, parent }
    }

    /// Get the path-qualified cluster identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the cluster's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parent cluster identifier, if this cluster is nested.
    pub fn parent(&self) -> Option<Id> {
        self.parent
    }
}

/// The top-level diagram model: a title, typed nodes, clusters, edges, and
/// render-only graph attributes.
///
/// Nodes and clusters are kept in insertion order so that identical
/// declaration sequences produce structurally identical models. The mutators
/// enforce the model invariants; [`Diagram::validate`] re-checks the edge
/// invariant as a final gate before export.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    title: String,
    nodes: IndexMap<Id, Node>,
    clusters: IndexMap<Id, Cluster>,
    edges: Vec<Edge>,
    graph_attrs: IndexMap<String, String>,
}

impl Diagram {
    /// Create an empty diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: IndexMap::new(),
            clusters: IndexMap::new(),
            edges: Vec::new(),
            graph_attrs: IndexMap::new(),
        }
    }

    /// Get the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The output file stem derived from the title: whitespace runs joined
    /// with `_`, lowercased. An all-whitespace title falls back to `diagram`.
    pub fn output_stem(&self) -> String {
        let stem = self
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        if stem.is_empty() {
            "diagram".to_string()
        } else {
            stem
        }
    }

    /// Returns an iterator over all nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns the node with the given identifier, if it exists.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Checks whether a node with the given identifier exists.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over all clusters in declaration order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.values()
    }

    /// Returns the cluster with the given path-qualified identifier.
    pub fn cluster(&self, id: Id) -> Option<&Cluster> {
        self.clusters.get(&id)
    }

    /// Returns the declaration-order position of a cluster, if it exists.
    pub fn cluster_index(&self, id: Id) -> Option<usize> {
        self.clusters.get_index_of(&id)
    }

    /// Borrow the edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over the render-only graph attributes.
    pub fn graph_attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph_attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the value of a graph attribute, if set.
    pub fn graph_attr(&self, key: &str) -> Option<&str> {
        self.graph_attrs.get(key).map(String::as_str)
    }

    /// Set a render-only graph attribute (a layout hint such as `splines`).
    pub fn set_graph_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.graph_attrs.insert(key.into(), value.into());
    }

    /// Add a typed node with the given label and cluster ancestry path.
    ///
    /// The node identifier is derived from the label.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyLabel`] for a blank label and
    /// [`ModelError::DuplicateNode`] if a node with the same label already
    /// exists.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        label: &str,
        cluster_path: &[Id],
    ) -> Result<Id, ModelError> {
        if label.trim().is_empty() {
            return Err(ModelError::EmptyLabel);
        }

        let id = Id::new(label);
        if self.nodes.contains_key(&id) {
            return Err(ModelError::DuplicateNode { id });
        }

        debug_assert!(
            cluster_path.iter().all(|c| self.clusters.contains_key(c)),
            "Adding node {label}: cluster path contains an unregistered cluster",
        );

        trace!(node = label, kind:% = kind; "Adding node");
        self.nodes.insert(
            id,
            Node::new(id, label.to_string(), kind, cluster_path.to_vec()),
        );
        Ok(id)
    }

    /// Register a cluster with the given display name under an optional parent.
    ///
    /// Returns the path-qualified cluster identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyLabel`] for a blank name,
    /// [`ModelError::UnknownNode`] if the parent was never registered, and
    /// [`ModelError::DuplicateCluster`] if the same path was already
    /// registered.
    pub fn add_cluster(&mut self, name: &str, parent: Option<Id>) -> Result<Id, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::EmptyLabel);
        }

        if let Some(parent_id) = parent
            && !self.clusters.contains_key(&parent_id)
        {
            return Err(ModelError::UnknownNode { id: parent_id });
        }

        let id = match parent {
            Some(parent_id) => parent_id.create_nested(Id::new(name)),
            None => Id::new(name),
        };
        if self.clusters.contains_key(&id) {
            return Err(ModelError::DuplicateCluster { id });
        }

        trace!(cluster:% = id; "Registering cluster");
        self.clusters
            .insert(id, Cluster::new(id, name.to_string(), parent));
        Ok(id)
    }

    /// Add an edge between two declared nodes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownNode`] if either endpoint was never
    /// declared. The check happens here, at build time, before any rendering.
    pub fn add_edge(&mut self, source: Id, target: Id, style: EdgeStyle) -> Result<(), ModelError> {
        if !self.nodes.contains_key(&source) {
            return Err(ModelError::UnknownNode { id: source });
        }
        if !self.nodes.contains_key(&target) {
            return Err(ModelError::UnknownNode { id: target });
        }

        trace!(source:% = source, target:% = target; "Adding edge");
        self.edges.push(Edge::new(source, target, style));
        Ok(())
    }

    /// Resolve a node's cluster ancestry to display names, outermost first.
    ///
    /// A node declared inside nested clusters `A > B` reports `["A", "B"]`.
    pub fn cluster_ancestry(&self, node: &Node) -> Vec<&str> {
        node.cluster_path()
            .iter()
            .filter_map(|id| self.clusters.get(id).map(Cluster::name))
            .collect()
    }

    /// Re-check the edge invariant: every edge endpoint must be a declared
    /// node. The mutators already enforce this; export runs it once more as
    /// a terminal gate.
    pub fn validate(&self) -> Result<(), ModelError> {
        for edge in &self.edges {
            if !self.nodes.contains_key(&edge.source()) {
                return Err(ModelError::UnknownNode { id: edge.source() });
            }
            if !self.nodes.contains_key(&edge.target()) {
                return Err(ModelError::UnknownNode { id: edge.target() });
            }
        }
        Ok(())
    }
}
