//! Conversion of the semantic model into the Graphviz DOT representation.
//!
//! The emission order mirrors the declaration order of the model: graph
//! attributes first (title label plus layout hints), then top-level nodes,
//! then clusters as nested `subgraph cluster_N` blocks, then all edges.
//! Everything position-related is left to the collaborator.

use std::{fs, path::Path};

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info};

use topograph_core::model::{Cluster, Diagram, Direction, Node, NodeKind};

use crate::config::OutputFormat;

use super::Error;

/// Quote a string for use as a DOT identifier or attribute value.
fn quoted(text: &str) -> DotId {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    DotId::Escaped(format!("\"{escaped}\""))
}

fn plain(text: &str) -> DotId {
    DotId::Plain(text.to_string())
}

/// The Graphviz node shape drawn for each node category.
fn shape(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Vpc => "box3d",
        NodeKind::InternetGateway => "cds",
        NodeKind::Subnet => "folder",
        NodeKind::RouteTable => "tab",
        NodeKind::NetworkAcl => "note",
        NodeKind::ComputeInstance => "box",
        NodeKind::SecurityGroup => "hexagon",
        NodeKind::UserActor => "oval",
    }
}

/// The Graphviz `dir=` value for each edge direction.
fn arrow_dir(direction: Direction) -> &'static str {
    match direction {
        Direction::Plain => "none",
        Direction::Forward => "forward",
        Direction::Backward => "back",
        Direction::Bidirectional => "both",
    }
}

fn node_stmt(node: &Node) -> Stmt {
    Stmt::Node(DotNode {
        id: NodeId(quoted(node.label()), None),
        attributes: vec![
            Attribute(plain("shape"), plain(shape(node.kind()))),
            Attribute(plain("label"), quoted(node.label())),
        ],
    })
}

/// Emit one cluster as a `subgraph cluster_N` block: its display name as
/// label, its direct member nodes, then its child clusters, recursively.
fn cluster_subgraph(diagram: &Diagram, cluster: &Cluster) -> Result<Subgraph, Error> {
    let index = diagram
        .cluster_index(cluster.id())
        .ok_or_else(|| Error::Render(format!("unregistered cluster `{}`", cluster.id())))?;

    let mut stmts = vec![Stmt::Attribute(Attribute(
        plain("label"),
        quoted(cluster.name()),
    ))];

    for node in diagram
        .nodes()
        .filter(|node| node.cluster_path().last().copied() == Some(cluster.id()))
    {
        stmts.push(node_stmt(node));
    }

    for child in diagram
        .clusters()
        .filter(|child| child.parent() == Some(cluster.id()))
    {
        stmts.push(Stmt::Subgraph(cluster_subgraph(diagram, child)?));
    }

    // The cluster_ prefix is what makes Graphviz draw the grouping box.
    Ok(Subgraph {
        id: plain(&format!("cluster_{index}")),
        stmts,
    })
}

/// Convert a diagram model into the collaborator's graph structure.
///
/// # Errors
///
/// Returns [`Error::Render`] if the model fails its final validation (an
/// edge referencing an undeclared node).
pub fn to_graph(diagram: &Diagram) -> Result<Graph, Error> {
    diagram
        .validate()
        .map_err(|err| Error::Render(err.to_string()))?;

    let mut stmts = Vec::new();

    let mut graph_attrs = vec![Attribute(plain("label"), quoted(diagram.title()))];
    graph_attrs.extend(
        diagram
            .graph_attrs()
            .map(|(key, value)| Attribute(plain(key), quoted(value))),
    );
    stmts.push(Stmt::GAttribute(GraphAttributes::Graph(graph_attrs)));

    for node in diagram.nodes().filter(|node| node.cluster_path().is_empty()) {
        stmts.push(node_stmt(node));
    }

    for cluster in diagram.clusters().filter(|cluster| cluster.parent().is_none()) {
        stmts.push(Stmt::Subgraph(cluster_subgraph(diagram, cluster)?));
    }

    for edge in diagram.edges() {
        let mut attributes = vec![Attribute(
            plain("dir"),
            plain(arrow_dir(edge.direction())),
        )];
        if let Some(label) = edge.label() {
            attributes.push(Attribute(plain("label"), quoted(label)));
        }

        stmts.push(Stmt::Edge(DotEdge {
            ty: EdgeTy::Pair(
                Vertex::N(NodeId(quoted(&edge.source().to_string()), None)),
                Vertex::N(NodeId(quoted(&edge.target().to_string()), None)),
            ),
            attributes,
        }));
    }

    debug!(statements = stmts.len(); "DOT graph assembled");
    Ok(Graph::DiGraph {
        id: quoted(diagram.title()),
        strict: false,
        stmts,
    })
}

/// Print a diagram as DOT text. Pure conversion, no I/O.
///
/// # Errors
///
/// Returns [`Error::Render`] if the model fails validation.
pub fn print(diagram: &Diagram) -> Result<String, Error> {
    let graph = to_graph(diagram)?;
    Ok(graph.print(&mut PrinterContext::default()))
}

/// Render a diagram to a file at `path` in the given format.
///
/// The `dot` format writes the DOT text directly; `svg` and `png` invoke the
/// Graphviz `dot` executable through the collaborator. A missing executable
/// propagates unchanged as [`Error::Io`].
pub fn render_file(diagram: &Diagram, path: &Path, format: OutputFormat) -> Result<(), Error> {
    info!(path = path.display().to_string(), format:% = format; "Rendering diagram");

    match format {
        OutputFormat::Dot => {
            let dot = print(diagram)?;
            fs::write(path, dot).map_err(Error::Io)?;
        }
        OutputFormat::Svg | OutputFormat::Png => {
            let graph = to_graph(diagram)?;
            let backend_format = match format {
                OutputFormat::Svg => Format::Svg,
                _ => Format::Png,
            };
            exec(
                graph,
                &mut PrinterContext::default(),
                vec![
                    CommandArg::Format(backend_format),
                    CommandArg::Output(path.display().to_string()),
                ],
            )
            .map_err(Error::Io)?;
        }
    }

    Ok(())
}
