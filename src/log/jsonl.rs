//! JSONL (JSON Lines) logging for analysis history
//!
//! Provides append-only logging of analysis runs to `.chart-cycles/log.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::chart::cycles::CycleReport;
use crate::chart::model::RelationModel;

/// Represents the outcome of a single chart analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRecord {
    /// ISO 8601 timestamp of when the analysis completed
    pub timestamp: DateTime<Utc>,
    /// Name of the analyzed chart
    pub chart: String,
    /// Number of declared categories
    pub categories: usize,
    /// Number of matchups, self-matchups included
    pub edges: usize,
    /// Number of canonical cycles found
    pub cycle_count: usize,
    /// Cycles as name triples, in reporting order
    pub cycles: Vec<[String; 3]>,
    /// Cycle membership per category
    pub stats: BTreeMap<String, usize>,
}

impl AnalysisRecord {
    /// Summarize a finished analysis, timestamped now
    #[must_use]
    pub fn new(chart: &str, model: &RelationModel, report: &CycleReport) -> Self {
        Self {
            timestamp: Utc::now(),
            chart: chart.to_string(),
            categories: model.len(),
            edges: model.edge_count(),
            cycle_count: report.cycles.len(),
            cycles: report
                .named_cycles(model)
                .into_iter()
                .map(|names| names.map(str::to_string))
                .collect(),
            stats: report
                .stats
                .iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
        }
    }
}

/// JSONL logger for analysis history
///
/// Provides append-only logging to `<log_dir>/log.jsonl`.
/// Each line is a JSON object representing a single analysis run.
pub struct AnalysisLogger {
    log_path: PathBuf,
}

impl AnalysisLogger {
    /// Create a new JSONL logger
    ///
    /// # Arguments
    /// * `log_dir` - Directory where log.jsonl will be stored (typically `.chart-cycles`)
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log.jsonl");

        Ok(Self { log_path })
    }

    /// Append an analysis record to the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be opened or created
    /// - The record cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, record: &AnalysisRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(record).context("Failed to serialize analysis record to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all analysis records from the log, oldest first
    ///
    /// # Errors
    /// Returns an error if:
    /// - The log file cannot be read
    /// - Any line cannot be parsed as valid JSON
    pub fn read_all(&self) -> Result<Vec<AnalysisRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: AnalysisRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Most recent record for `chart`, if any
    pub fn latest_for(&self, chart: &str) -> Result<Option<AnalysisRecord>> {
        Ok(self
            .read_all()?
            .into_iter()
            .rev()
            .find(|record| record.chart == chart))
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
