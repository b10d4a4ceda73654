//! Chart configuration parser
//!
//! Parses chart TOML files into category definitions and builds the
//! relation model from them.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::model::{build_model, RelationModel};

/// Chart-wide settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartMeta {
    /// Chart name, used in reports and the run history
    pub name: String,
    /// File stem for rendered outputs (defaults to the chart name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// A single category definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Unique category name
    pub name: String,
    /// Display color as `#RRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Categories this one is strong against
    #[serde(default)]
    pub beats: Vec<String>,
}

/// Top-level chart configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Chart settings
    pub chart: ChartMeta,
    /// Category definitions, in rank order
    #[serde(rename = "category", default)]
    pub categories: Vec<CategoryConfig>,
}

impl ChartConfig {
    /// Parse a chart file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chart file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse chart content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse chart file")?;
        config.validate()?;
        Ok(config)
    }

    /// Find a category by name
    #[must_use]
    pub fn get_category(&self, name: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Build the relation model for this chart
    pub fn model(&self) -> Result<RelationModel> {
        let names: Vec<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
        let model = build_model(
            names.as_slice(),
            self.categories.iter().map(|c| (c.name.as_str(), &c.beats)),
        )
        .with_context(|| format!("Invalid matchups in chart '{}'", self.chart.name))?;
        Ok(model)
    }

    /// Display colors in rank order
    #[must_use]
    pub fn colors(&self) -> Vec<Option<&str>> {
        self.categories.iter().map(|c| c.color.as_deref()).collect()
    }

    /// File stem for the rendered graph and table
    #[must_use]
    pub fn output_stem(&self) -> &str {
        self.chart.output.as_deref().unwrap_or(&self.chart.name)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.chart.name.trim().is_empty() {
            bail!("Chart name cannot be empty");
        }

        if let Some(output) = &self.chart.output {
            if output.trim().is_empty() {
                bail!("Chart output stem cannot be empty");
            }
        }

        for category in &self.categories {
            if category.name.trim().is_empty() {
                bail!("Category name cannot be empty");
            }
            if category.name.trim() != category.name {
                bail!(
                    "Category name '{}' has leading or trailing whitespace",
                    category.name
                );
            }
            if let Some(color) = &category.color {
                validate_color(color)
                    .with_context(|| format!("in category '{}'", category.name))?;
            }
        }

        // Duplicate names and unknown references
        self.model()?;

        Ok(())
    }
}

/// Validate that a color is written as `#RRGGBB`.
fn validate_color(color: &str) -> Result<()> {
    let Some(hex) = color.strip_prefix('#') else {
        bail!("Invalid color '{color}': expected format '#RRGGBB'");
    };

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("Invalid color '{color}': expected six hex digits after '#'");
    }

    Ok(())
}
