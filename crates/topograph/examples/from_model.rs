//! Example: declaring a topology diagram programmatically
//!
//! This example demonstrates how to build a small AWS topology with the
//! builder API and render it to DOT text, without using the built-in
//! presets.

use topograph::{
    DiagramBuilder, Renderer,
    config::AppConfig,
    model::{Direction, EdgeStyle, NodeKind},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Declaring diagram...\n");

    let mut builder = DiagramBuilder::new("Example Topology");

    // An external client, outside any cluster
    let client = builder.node(NodeKind::UserActor, "Client")?;

    // The VPC cluster with a nested private subnet
    builder.cluster("VPC", |b| {
        let igw = b.node(NodeKind::InternetGateway, "Gateway")?;
        b.edge_with(
            client,
            igw,
            EdgeStyle::labeled("HTTPS").direction(Direction::Forward),
        )?;

        b.cluster("Private Subnet", |b| {
            let app = b.node(NodeKind::ComputeInstance, "App Server")?;
            let sg = b.node(NodeKind::SecurityGroup, "App SG")?;
            b.edge(app, sg)?;
            b.edge_with(igw, app, EdgeStyle::labeled("Forwarded").direction(Direction::Forward))
        })
    })?;

    let diagram = builder.finish();

    // Print diagram info
    println!("Built diagram:");
    println!("  Title: {}", diagram.title());
    println!("  Nodes: {}", diagram.node_count());
    println!("  Edges: {}", diagram.edge_count());
    println!("  Clusters: {}", diagram.clusters().count());
    println!();

    // Render the diagram to DOT using the Renderer facade
    println!("Rendering to DOT...");
    let renderer = Renderer::new(AppConfig::default());
    let dot = renderer.render_dot(&diagram)?;

    println!("DOT generated successfully ({} bytes)", dot.len());

    // Write to file
    let output_path = "from_model_output.dot";
    std::fs::write(output_path, &dot)?;
    println!("DOT written to: {}", output_path);

    Ok(())
}
