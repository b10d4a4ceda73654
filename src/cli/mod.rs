//! CLI output formatting
//!
//! Provides human-readable terminal display for chart analysis.

pub mod display;

pub use display::render_diagnostic_report;
pub use display::ReportDisplay;
