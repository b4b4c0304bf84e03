//! The declarative diagram-building API.
//!
//! [`DiagramBuilder`] wraps the semantic model with a scoped, declarative
//! surface: typed nodes, labeled/directed edges, and nested cluster scopes
//! expressed as closures. The builder keeps an explicit stack of the current
//! cluster path; every node inherits that path at creation time, so there is
//! no ambient global state.

use log::trace;

use topograph_core::{
    identifier::Id,
    model::{Diagram, EdgeStyle, ModelError, NodeKind},
};

/// A handle to a declared node, usable as an edge endpoint.
///
/// Handles are returned by [`DiagramBuilder::node`] and are cheap to copy.
/// A handle can also be produced from a `&str` label, which lets an edge
/// reference a node by name; if the name was never declared, adding the edge
/// fails with [`ModelError::UnknownNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(Id);

impl NodeHandle {
    /// Get the underlying node identifier.
    pub fn id(self) -> Id {
        self.0
    }
}

impl From<Id> for NodeHandle {
    fn from(id: Id) -> Self {
        Self(id)
    }
}

impl From<&str> for NodeHandle {
    /// Reference a node by its label. The reference is resolved when an edge
    /// is added, not here.
    fn from(label: &str) -> Self {
        Self(Id::new(label))
    }
}

/// Builder for declaring a topology diagram.
///
/// # Examples
///
/// ```
/// use topograph::{DiagramBuilder, model::{Direction, EdgeStyle, NodeKind}};
///
/// let mut builder = DiagramBuilder::new("AWS Architecture");
///
/// let user = builder.node(NodeKind::UserActor, "User")?;
/// builder.cluster("VPC", |b| {
///     let igw = b.node(NodeKind::InternetGateway, "Internet Gateway")?;
///     let rt = b.node(NodeKind::RouteTable, "Route Table")?;
///     b.edge(igw, rt)
/// })?;
/// builder.edge_with(
///     user,
///     "Internet Gateway",
///     EdgeStyle::labeled("HTTPS").direction(Direction::Forward),
/// )?;
///
/// let diagram = builder.finish();
/// assert_eq!(diagram.node_count(), 3);
/// # Ok::<(), topograph::model::ModelError>(())
/// ```
#[derive(Debug)]
pub struct DiagramBuilder {
    diagram: Diagram,
    scope: Vec<Id>,
}

impl DiagramBuilder {
    /// Start a new diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            diagram: Diagram::new(title),
            scope: Vec::new(),
        }
    }

    /// Attach a render-only graph attribute (a layout hint such as
    /// `splines=ortho`). Later values overwrite earlier ones for the same key.
    pub fn graph_attr(&mut self, key: &str, value: &str) -> &mut Self {
        self.diagram.set_graph_attr(key, value);
        self
    }

    /// Declare a typed node with the given label inside the current cluster
    /// scope.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyLabel`] for a blank label and
    /// [`ModelError::DuplicateNode`] if the label is already taken.
    pub fn node(&mut self, kind: NodeKind, label: &str) -> Result<NodeHandle, ModelError> {
        let id = self.diagram.add_node(kind, label, &self.scope)?;
        Ok(NodeHandle(id))
    }

    /// Enter a named cluster scope for the duration of the closure.
    ///
    /// Nodes declared inside the closure inherit the cluster's ancestry path.
    /// Clusters nest; the scope is left again when the closure returns,
    /// whether it succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateCluster`] if the same cluster path was
    /// already entered once, or whatever error the closure produced.
    pub fn cluster<F>(&mut self, name: &str, f: F) -> Result<(), ModelError>
    where
        F: FnOnce(&mut Self) -> Result<(), ModelError>,
    {
        let parent = self.scope.last().copied();
        let id = self.diagram.add_cluster(name, parent)?;

        trace!(cluster:% = id; "Entering cluster scope");
        self.scope.push(id);
        let result = f(self);
        self.scope.pop();
        trace!(cluster:% = id; "Left cluster scope");

        result
    }

    /// Connect two nodes with an unlabeled plain association.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownNode`] if either endpoint was never
    /// declared.
    pub fn edge(
        &mut self,
        source: impl Into<NodeHandle>,
        target: impl Into<NodeHandle>,
    ) -> Result<(), ModelError> {
        self.edge_with(source, target, EdgeStyle::new())
    }

    /// Connect two nodes with an explicit [`EdgeStyle`] (label and/or
    /// direction).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownNode`] if either endpoint was never
    /// declared.
    pub fn edge_with(
        &mut self,
        source: impl Into<NodeHandle>,
        target: impl Into<NodeHandle>,
        style: EdgeStyle,
    ) -> Result<(), ModelError> {
        self.diagram
            .add_edge(source.into().id(), target.into().id(), style)
    }

    /// Consume the builder and return the completed model.
    pub fn finish(self) -> Diagram {
        debug_assert!(
            self.scope.is_empty(),
            "finish() called with an open cluster scope",
        );
        self.diagram
    }
}

#[cfg(test)]
mod tests {
    use topograph_core::model::Direction;

    use super::*;

    #[test]
    fn test_node_returns_usable_handle() {
        let mut builder = DiagramBuilder::new("Handles");
        let a = builder
            .node(NodeKind::InternetGateway, "gateway")
            .expect("node should succeed");
        let b = builder
            .node(NodeKind::RouteTable, "route_table")
            .expect("node should succeed");

        builder.edge(a, b).expect("edge should succeed");
        assert_eq!(builder.finish().edge_count(), 1);
    }

    #[test]
    fn test_edge_by_name() {
        let mut builder = DiagramBuilder::new("By name");
        builder
            .node(NodeKind::Vpc, "main-vpc")
            .expect("node should succeed");
        builder
            .node(NodeKind::Subnet, "main-subnet")
            .expect("node should succeed");

        builder
            .edge("main-vpc", "main-subnet")
            .expect("edge by label should succeed");

        let err = builder
            .edge("main-vpc", "vpc2")
            .expect_err("undeclared label should fail");
        assert_eq!(
            err,
            ModelError::UnknownNode {
                id: Id::new("vpc2")
            }
        );
    }

    #[test]
    fn test_cluster_scope_is_inherited() {
        let mut builder = DiagramBuilder::new("Scopes");
        let mut inner = None;
        builder
            .cluster("A", |b| {
                b.cluster("B", |b| {
                    inner = Some(b.node(NodeKind::ComputeInstance, "worker")?);
                    Ok(())
                })
            })
            .expect("clusters should succeed");

        let diagram = builder.finish();
        let node = diagram
            .node(inner.expect("node was declared").id())
            .expect("node should exist");
        assert_eq!(diagram.cluster_ancestry(node), vec!["A", "B"]);
    }

    #[test]
    fn test_scope_is_left_on_error() {
        let mut builder = DiagramBuilder::new("Scopes");
        let result = builder.cluster("A", |b| {
            b.node(NodeKind::ComputeInstance, "")?;
            Ok(())
        });
        assert_eq!(result, Err(ModelError::EmptyLabel));

        // The failed scope must not leak into subsequent declarations.
        let id = builder
            .node(NodeKind::ComputeInstance, "worker")
            .expect("node should succeed");
        let diagram = builder.finish();
        assert!(
            diagram
                .node(id.id())
                .expect("node should exist")
                .cluster_path()
                .is_empty()
        );
    }

    #[test]
    fn test_sibling_clusters_may_share_a_name() {
        let mut builder = DiagramBuilder::new("Nested names");
        builder
            .cluster("VPC", |b| b.cluster("Subnet", |_| Ok(())))
            .expect("first tree should succeed");
        builder
            .cluster("VPC 2", |b| b.cluster("Subnet", |_| Ok(())))
            .expect("same name under a different parent should succeed");

        assert_eq!(builder.finish().clusters().count(), 4);
    }

    #[test]
    fn test_edge_style_passthrough() {
        let mut builder = DiagramBuilder::new("Style");
        let user = builder
            .node(NodeKind::UserActor, "User")
            .expect("node should succeed");
        let ec2 = builder
            .node(NodeKind::ComputeInstance, "EC2 Instance")
            .expect("node should succeed");
        builder
            .edge_with(
                user,
                ec2,
                EdgeStyle::labeled("SSH/HTTP").direction(Direction::Bidirectional),
            )
            .expect("edge should succeed");

        let diagram = builder.finish();
        assert_eq!(diagram.edges()[0].label(), Some("SSH/HTTP"));
        assert_eq!(diagram.edges()[0].direction(), Direction::Bidirectional);
    }
}
