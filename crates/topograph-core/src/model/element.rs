//! Diagram element types for the semantic model.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// The closed set of node categories a topology diagram can contain.
///
/// Each variant corresponds to one AWS network component (plus the external
/// user/client actor). The names match external configuration strings
/// (snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A Virtual Private Cloud
    Vpc,
    /// An Internet Gateway
    InternetGateway,
    /// A subnet within a VPC
    Subnet,
    /// A route table
    RouteTable,
    /// A network access control list
    NetworkAcl,
    /// A compute instance (EC2)
    ComputeInstance,
    /// A security group
    SecurityGroup,
    /// An external user or client
    UserActor,
}

impl FromStr for NodeKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vpc" => Ok(Self::Vpc),
            "internet_gateway" => Ok(Self::InternetGateway),
            "subnet" => Ok(Self::Subnet),
            "route_table" => Ok(Self::RouteTable),
            "network_acl" => Ok(Self::NetworkAcl),
            "compute_instance" => Ok(Self::ComputeInstance),
            "security_group" => Ok(Self::SecurityGroup),
            "user_actor" => Ok(Self::UserActor),
            _ => Err("Unsupported node kind"),
        }
    }
}

impl From<NodeKind> for &'static str {
    fn from(val: NodeKind) -> Self {
        match val {
            NodeKind::Vpc => "vpc",
            NodeKind::InternetGateway => "internet_gateway",
            NodeKind::Subnet => "subnet",
            NodeKind::RouteTable => "route_table",
            NodeKind::NetworkAcl => "network_acl",
            NodeKind::ComputeInstance => "compute_instance",
            NodeKind::SecurityGroup => "security_group",
            NodeKind::UserActor => "user_actor",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Directionality of an edge.
///
/// `Plain` is an undirected association; the other variants draw arrowheads.
/// These map onto the Graphviz `dir=` attribute values `none`, `forward`,
/// `back`, and `both`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Undirected association (default)
    #[default]
    Plain,
    /// Arrow from source to target
    Forward,
    /// Arrow from target to source
    Backward,
    /// Arrowheads at both ends
    Bidirectional,
}

/// Optional styling for an edge: a text label and a [`Direction`].
///
/// The default is an unlabeled plain association.
///
/// # Examples
///
/// ```
/// use topograph_core::model::{Direction, EdgeStyle};
///
/// let style = EdgeStyle::labeled("SSH/HTTP").direction(Direction::Forward);
/// assert_eq!(style.label(), Some("SSH/HTTP"));
/// assert_eq!(style.arrow(), Direction::Forward);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeStyle {
    label: Option<String>,
    direction: Direction,
}

impl EdgeStyle {
    /// Create an unlabeled plain association style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style with a text label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            direction: Direction::default(),
        }
    }

    /// Set the direction, consuming and returning the style.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Get the label text, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the direction.
    pub fn arrow(&self) -> Direction {
        self.direction
    }
}

/// A typed, labeled vertex in the diagram.
///
/// The identifier is derived from the label; the cluster path records the
/// ancestry of cluster scopes (outermost first) the node was declared inside,
/// as path-qualified cluster [`Id`]s. Top-level nodes have an empty path.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    label: String,
    kind: NodeKind,
    cluster_path: Vec<Id>,
}

impl Node {
    pub(crate) fn new(id: Id, label: String, kind: NodeKind, cluster_path: Vec<Id>) -> Self {
        Self {
            id,
            label,
            kind,
            cluster_path,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the node label (the text rendered inside the node).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the node's category.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Get the cluster ancestry path of this node, outermost cluster first.
    ///
    /// The entries are path-qualified cluster identifiers; resolve them to
    /// display names through
    /// [`Diagram::cluster_ancestry`](crate::model::Diagram::cluster_ancestry).
    pub fn cluster_path(&self) -> &[Id] {
        &self.cluster_path
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A connection between two nodes, carrying an optional label and a direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: Id,
    target: Id,
    label: Option<String>,
    direction: Direction,
}

impl Edge {
    pub(crate) fn new(source: Id, target: Id, style: EdgeStyle) -> Self {
        Self {
            source,
            target,
            label: style.label,
            direction: style.direction,
        }
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the edge direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_round_trip() {
        let kinds = [
            NodeKind::Vpc,
            NodeKind::InternetGateway,
            NodeKind::Subnet,
            NodeKind::RouteTable,
            NodeKind::NetworkAcl,
            NodeKind::ComputeInstance,
            NodeKind::SecurityGroup,
            NodeKind::UserActor,
        ];

        for kind in kinds {
            let name = kind.to_string();
            assert_eq!(name.parse::<NodeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_node_kind_rejects_unknown() {
        assert!("transit_gateway".parse::<NodeKind>().is_err());
        assert!("".parse::<NodeKind>().is_err());
    }

    #[test]
    fn test_edge_style_default_is_plain() {
        let style = EdgeStyle::new();
        assert_eq!(style.label(), None);
        assert_eq!(style.arrow(), Direction::Plain);
    }

    #[test]
    fn test_edge_style_builder() {
        let style = EdgeStyle::labeled("Default Route").direction(Direction::Forward);
        assert_eq!(style.label(), Some("Default Route"));
        assert_eq!(style.arrow(), Direction::Forward);
    }
}
