//! Configuration types for Topograph rendering.
//!
//! This module provides configuration structures that control the output
//! format and default layout hints. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining output and layout settings.
//! - [`OutputConfig`] - Controls which [`OutputFormat`] rendered diagrams use.
//! - [`LayoutConfig`] - Default Graphviz layout hints applied to every diagram.
//!
//! # Example
//!
//! ```
//! # use topograph::config::{AppConfig, OutputFormat};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.output().format(), OutputFormat::Dot);
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Top-level application configuration combining output and layout settings.
///
/// Groups [`OutputConfig`] and [`LayoutConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified output and layout
    /// configurations.
    pub fn new(output: OutputConfig, layout: LayoutConfig) -> Self {
        Self { output, layout }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Output format for rendered diagrams.
///
/// The names match external configuration strings (snake_case). `dot`
/// writes the collaborator's graph description directly and needs no
/// Graphviz installation; `svg` and `png` shell out to the `dot` executable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Graphviz DOT text (default)
    #[default]
    Dot,
    /// Scalable Vector Graphics
    Svg,
    /// Portable Network Graphics
    Png,
}

impl OutputFormat {
    /// The file extension for this format, without the leading dot.
    pub fn extension(self) -> &'static str {
        self.into()
    }
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(Self::Dot),
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err("Unsupported output format"),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Dot => "dot",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Output configuration for rendered diagrams.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// The [`OutputFormat`] rendered diagrams are written in.
    #[serde(default)]
    format: OutputFormat,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the configured [`OutputFormat`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Default Graphviz layout hints applied to every rendered diagram.
///
/// A hint set here is only used when the diagram does not set the same
/// attribute itself; explicit per-diagram attributes win.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Edge routing style (e.g. `ortho`, `curved`).
    #[serde(default)]
    splines: Option<String>,

    /// Minimum space between adjacent nodes, in inches.
    #[serde(default)]
    nodesep: Option<f64>,

    /// Minimum space between ranks, in inches.
    #[serde(default)]
    ranksep: Option<f64>,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified hints.
    pub fn new(splines: Option<String>, nodesep: Option<f64>, ranksep: Option<f64>) -> Self {
        Self {
            splines,
            nodesep,
            ranksep,
        }
    }

    /// Returns the configured hints as graph attribute key/value pairs.
    pub fn hints(&self) -> Vec<(&'static str, String)> {
        let mut hints = Vec::new();
        if let Some(splines) = &self.splines {
            hints.push(("splines", splines.clone()));
        }
        if let Some(nodesep) = self.nodesep {
            hints.push(("nodesep", nodesep.to_string()));
        }
        if let Some(ranksep) = self.ranksep {
            hints.push(("ranksep", ranksep.to_string()));
        }
        hints
    }
}
