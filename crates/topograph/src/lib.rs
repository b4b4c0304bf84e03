//! Topograph - declarative AWS network topology diagrams.
//!
//! Diagrams are declared through [`DiagramBuilder`] as typed nodes, labeled
//! edges, and nested clusters, then handed to Graphviz for layout and image
//! export. The library never positions anything itself; it emits the
//! collaborator's graph description in the right nesting order.

pub mod config;
pub mod topology;

mod builder;
mod error;
mod export;

pub use topograph_core::{identifier, model};

pub use builder::{DiagramBuilder, NodeHandle};
pub use error::TopographError;

use std::path::{Path, PathBuf};

use log::{debug, info};

use config::AppConfig;
use model::Diagram;

/// Facade for rendering completed diagram models.
///
/// Holds the application configuration and applies its default layout hints
/// to every diagram it renders (explicit per-diagram attributes win).
///
/// # Examples
///
/// ```rust,no_run
/// use topograph::{DiagramBuilder, Renderer, config::AppConfig, model::NodeKind};
///
/// let mut builder = DiagramBuilder::new("AWS Architecture");
/// let vpc = builder.node(NodeKind::Vpc, "VPC")?;
/// let igw = builder.node(NodeKind::InternetGateway, "Internet Gateway")?;
/// builder.edge(vpc, igw)?;
/// let diagram = builder.finish();
///
/// let renderer = Renderer::new(AppConfig::default());
/// let dot = renderer.render_dot(&diagram).expect("Failed to render");
/// println!("{dot}");
/// # Ok::<(), topograph::model::ModelError>(())
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Merge the configured default layout hints into a copy of the diagram.
    /// Hints already set on the diagram itself are left untouched.
    fn with_layout_defaults(&self, diagram: &Diagram) -> Diagram {
        let mut merged = diagram.clone();
        for (key, value) in self.config.layout().hints() {
            if merged.graph_attr(key).is_none() {
                merged.set_graph_attr(key, value);
            }
        }
        merged
    }

    /// Render a diagram model to DOT text.
    ///
    /// # Errors
    ///
    /// Returns [`TopographError`] if the model fails its final reference
    /// validation.
    pub fn render_dot(&self, diagram: &Diagram) -> Result<String, TopographError> {
        info!(title = diagram.title(); "Rendering diagram to DOT");
        let merged = self.with_layout_defaults(diagram);
        let dot = export::dot::print(&merged)?;
        debug!(bytes = dot.len(); "DOT rendered successfully");
        Ok(dot)
    }

    /// Render a diagram to an image file in `out_dir`.
    ///
    /// The file is named from the diagram title (lowercased, whitespace
    /// joined with `_`) with the configured format's extension, and its path
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TopographError`] for validation failures, a missing
    /// Graphviz installation (for `svg`/`png` output), or I/O errors while
    /// writing the file.
    pub fn render_image(
        &self,
        diagram: &Diagram,
        out_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, TopographError> {
        let format = self.config.output().format();
        let path = out_dir
            .as_ref()
            .join(format!("{}.{}", diagram.output_stem(), format.extension()));

        info!(
            title = diagram.title(),
            path = path.display().to_string();
            "Rendering diagram to file"
        );

        let merged = self.with_layout_defaults(diagram);
        export::dot::render_file(&merged, &path, format)?;

        info!(path = path.display().to_string(); "Diagram rendered successfully");
        Ok(path)
    }
}
