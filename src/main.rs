//! Chart Cycles - three-way cycle finder for type charts
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use chart_cycles::cli::{render_diagnostic_report, ReportDisplay};
use chart_cycles::render::{render_dot, render_matchups, render_table};
use chart_cycles::{
    diagnose, find_cycles, AnalysisLogger, AnalysisRecord, BuiltinChart, ChartConfig,
};

/// Three-way cycle finder for type charts
///
/// Loads a chart of "strong against" matchups, lists every cycle of three
/// categories that each beat the next, and renders the chart as a Graphviz
/// graph and a markdown matrix.
#[derive(Parser, Debug)]
#[command(name = "chart-cycles", version, about)]
struct Cli {
    /// Path to the chart TOML file
    #[arg(long, default_value = "chart.toml")]
    chart: PathBuf,

    /// Analyze a chart shipped with the binary instead of --chart
    #[arg(long, value_enum)]
    builtin: Option<BuiltinChart>,

    /// Directory for the rendered .dot and .md files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the rendered graph and table to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Directory for the run history (.chart-cycles by default)
    #[arg(long, default_value = ".chart-cycles")]
    log_dir: PathBuf,

    /// Neither read nor append the run history
    #[arg(long)]
    no_log: bool,
}

/// Load the chart selected on the command line.
fn load_chart(cli: &Cli) -> Result<ChartConfig> {
    match cli.builtin {
        Some(builtin) => builtin
            .load()
            .with_context(|| format!("Failed to load built-in chart '{builtin:?}'")),
        None => ChartConfig::from_path(&cli.chart)
            .with_context(|| format!("Failed to load chart from '{}'", cli.chart.display())),
    }
}

/// Paths of the graph and table files for a chart.
fn output_paths(out_dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
    (
        out_dir.join(format!("{stem}.dot")),
        out_dir.join(format!("{stem}.md")),
    )
}

/// Write the rendered graph and table, returning the paths written.
fn write_renderings(out_dir: &Path, stem: &str, dot: &str, table: &str) -> Result<[PathBuf; 2]> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let (dot_path, table_path) = output_paths(out_dir, stem);
    std::fs::write(&dot_path, dot)
        .with_context(|| format!("Failed to write graph: {}", dot_path.display()))?;
    std::fs::write(&table_path, table)
        .with_context(|| format!("Failed to write table: {}", table_path.display()))?;

    Ok([dot_path, table_path])
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_chart(&cli)?;
    let model = config.model()?;
    let chart_name = config.chart.name.as_str();

    let display = ReportDisplay::new(chart_name);
    display.print_header(&model);
    display.print_matchups(&render_matchups(&model));

    let report = find_cycles(&model);
    display.print_cycles(&model, &report);
    display.print_stats(&report);

    // Run history
    let logger = if cli.no_log {
        None
    } else {
        Some(AnalysisLogger::new(&cli.log_dir).context("Failed to initialize JSONL logger")?)
    };
    let previous = match &logger {
        Some(logger) => logger
            .latest_for(chart_name)
            .context("Failed to read run history")?,
        None => None,
    };

    let diagnostics = diagnose(&config, &model, &report, previous.as_ref());
    render_diagnostic_report(&diagnostics);

    let dot = render_dot(&model, &config.colors());
    let table = render_table(&model);
    if cli.stdout {
        println!("{dot}");
        print!("{table}");
    } else {
        for path in write_renderings(&cli.out_dir, config.output_stem(), &dot, &table)? {
            display.print_written(&path);
        }
    }

    if let Some(logger) = &logger {
        logger
            .append(&AnalysisRecord::new(chart_name, &model, &report))
            .context("Failed to write to JSONL log")?;
    }

    Ok(())
}
