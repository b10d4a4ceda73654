//! Chart Cycles - three-way cycle finder for type charts
//!
//! Loads a "strong against" chart, enumerates every cycle where three
//! categories each beat the next, and renders the chart as a graph and a
//! matchup matrix.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod chart;
pub mod cli;
pub mod doctor;
pub mod log;
pub mod render;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use chart::builtin::BuiltinChart;
pub use chart::config::{CategoryConfig, ChartConfig};
pub use chart::cycles::{find_cycles, Cycle, CycleReport, CycleStats};
pub use chart::model::{build_model, InvalidRelationError, RelationModel};
pub use cli::ReportDisplay;
pub use doctor::{diagnose, DiagnosticReport};
pub use log::{AnalysisLogger, AnalysisRecord};
