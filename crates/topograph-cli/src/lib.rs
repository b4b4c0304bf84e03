//! CLI logic for the Topograph diagram tool.
//!
//! This module contains the core CLI logic for the Topograph diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{io, str::FromStr};

use log::info;

use topograph::{
    Renderer, TopographError,
    config::{AppConfig, OutputConfig, OutputFormat},
    topology::Preset,
};

/// Run the Topograph CLI application
///
/// This function builds the selected topology preset and renders it to a
/// file in the output directory, named from the diagram title.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TopographError` for:
/// - Unknown preset or format names
/// - Configuration loading errors
/// - Model-invariant violations
/// - Rendering and file I/O errors
pub fn run(args: &Args) -> Result<(), TopographError> {
    info!(
        preset = args.preset,
        out_dir = args.out_dir;
        "Rendering topology preset"
    );

    let preset = Preset::from_str(&args.preset).map_err(|_| {
        TopographError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "unknown preset `{}` (available: {})",
                args.preset,
                Preset::all().map(|p| p.to_string()).join(", "),
            ),
        ))
    })?;

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // --format overrides the configured output format
    let app_config = match &args.format {
        Some(format) => {
            let format = OutputFormat::from_str(format).map_err(|_| {
                TopographError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown output format `{format}` (available: dot, svg, png)"),
                ))
            })?;
            AppConfig::new(OutputConfig::new(format), app_config.layout().clone())
        }
        None => app_config,
    };

    // Build the preset model and render it
    let diagram = preset.build()?;
    let renderer = Renderer::new(app_config);
    let path = renderer.render_image(&diagram, &args.out_dir)?;

    info!(output_file = path.display().to_string(); "Diagram exported successfully");

    Ok(())
}
