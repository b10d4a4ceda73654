//! Charts shipped with the binary

use anyhow::Result;
use clap::ValueEnum;

use crate::chart::config::ChartConfig;

const CYBER: &str = include_str!("../../charts/cyber.toml");
const POKEMON: &str = include_str!("../../charts/pokemon.toml");

/// A chart embedded at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinChart {
    /// Nine cyber factions
    Cyber,
    /// The eighteen main-series monster types
    Pokemon,
}

impl BuiltinChart {
    /// Raw TOML source of the chart
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Cyber => CYBER,
            Self::Pokemon => POKEMON,
        }
    }

    /// Parse the embedded chart
    pub fn load(self) -> Result<ChartConfig> {
        ChartConfig::parse(self.source())
    }
}
