//! Command-line argument definitions for the Topograph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the topology preset, control the output
//! location and format, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Topograph diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Built-in topology preset to render
    #[arg(help = "Preset to render (aws-architecture, aws-cluster, aws-vpc-cluster)")]
    pub preset: String,

    /// Directory the output file is written to; the file is named from the
    /// diagram title
    #[arg(short, long, default_value = ".")]
    pub out_dir: String,

    /// Output format (dot, svg, png), overriding the configuration
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
