//! Chart doctor: diagnostics and sanity checks
//!
//! Inspects a chart, its relation model, the cycles found in it and the
//! run history, and reports anything that looks unintended. Findings are
//! either warnings (probably a mistake) or info (worth knowing).

use crate::chart::config::ChartConfig;
use crate::chart::cycles::CycleReport;
use crate::chart::model::RelationModel;
use crate::log::AnalysisRecord;

/// Severity level for a diagnostic finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Probably a mistake in the chart
    Warning,
    /// Informational note
    Info,
}

/// A single diagnostic finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity of the finding
    pub severity: Severity,
    /// Short code for the finding (e.g., "C001")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Suggested fix (optional)
    pub suggestion: Option<String>,
}

/// Diagnostic report for one chart
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    /// All findings, warnings first
    pub findings: Vec<Finding>,
}

impl DiagnosticReport {
    /// Returns true if the report has no findings at all
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the number of warnings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(&Severity::Warning)
    }

    /// Returns the number of info items
    #[must_use]
    pub fn info_count(&self) -> usize {
        self.count(&Severity::Info)
    }

    fn count(&self, severity: &Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| &f.severity == severity)
            .count()
    }

    /// Findings with the given code
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.code == code)
    }
}

/// Run all diagnostic checks and return a report.
///
/// `previous` is the last logged analysis of the same chart, if any.
#[must_use]
pub fn diagnose(
    config: &ChartConfig,
    model: &RelationModel,
    report: &CycleReport,
    previous: Option<&AnalysisRecord>,
) -> DiagnosticReport {
    let mut findings = Vec::new();

    check_self_matchups(model, &mut findings);
    check_mutual_matchups(model, &mut findings);
    check_isolation(model, &mut findings);
    check_cycle_membership(report, &mut findings);
    check_colors(config, &mut findings);
    check_history(report, previous, &mut findings);

    // Stable sort keeps check order within a severity
    findings.sort_by_key(|f| match f.severity {
        Severity::Warning => 0,
        Severity::Info => 1,
    });

    DiagnosticReport { findings }
}

/// C001: Categories listed as strong against themselves
fn check_self_matchups(model: &RelationModel, findings: &mut Vec<Finding>) {
    for (rank, name) in model.categories().iter().enumerate() {
        if model.beats_rank(rank, rank) {
            findings.push(Finding {
                severity: Severity::Warning,
                code: "C001".to_string(),
                message: format!(
                    "'{name}' is listed as strong against itself; cycle search ignores it"
                ),
                suggestion: Some(format!("Remove \"{name}\" from the beats list of '{name}'")),
            });
        }
    }
}

/// C002: Pairs that beat each other
fn check_mutual_matchups(model: &RelationModel, findings: &mut Vec<Finding>) {
    let n = model.len();
    for a in 0..n {
        for b in (a + 1)..n {
            if model.beats_rank(a, b) && model.beats_rank(b, a) {
                findings.push(Finding {
                    severity: Severity::Warning,
                    code: "C002".to_string(),
                    message: format!(
                        "'{}' and '{}' are strong against each other",
                        model.name(a),
                        model.name(b)
                    ),
                    suggestion: None,
                });
            }
        }
    }
}

/// C003/C004: Categories that beat nothing, or that nothing beats
fn check_isolation(model: &RelationModel, findings: &mut Vec<Finding>) {
    for name in model.categories() {
        if model.strengths(name).is_empty() {
            findings.push(Finding {
                severity: Severity::Info,
                code: "C003".to_string(),
                message: format!("'{name}' is not strong against any category"),
                suggestion: None,
            });
        }
        if model.weaknesses(name).is_empty() {
            findings.push(Finding {
                severity: Severity::Info,
                code: "C004".to_string(),
                message: format!("No category is strong against '{name}'"),
                suggestion: None,
            });
        }
    }
}

/// C005: Categories outside every cycle, when the chart has cycles at all
fn check_cycle_membership(report: &CycleReport, findings: &mut Vec<Finding>) {
    if report.is_empty() {
        return;
    }

    let outside: Vec<&str> = report
        .stats
        .iter()
        .filter(|&(_, count)| count == 0)
        .map(|(name, _)| name)
        .collect();

    if !outside.is_empty() {
        findings.push(Finding {
            severity: Severity::Info,
            code: "C005".to_string(),
            message: format!(
                "{} categor{} in no three-way cycle: {}",
                outside.len(),
                if outside.len() == 1 { "y is" } else { "ies are" },
                outside.join(", ")
            ),
            suggestion: None,
        });
    }
}

/// C006: Colors declared for some categories but not all
fn check_colors(config: &ChartConfig, findings: &mut Vec<Finding>) {
    let missing: Vec<&str> = config
        .categories
        .iter()
        .filter(|c| c.color.is_none())
        .map(|c| c.name.as_str())
        .collect();

    if !missing.is_empty() && missing.len() < config.categories.len() {
        findings.push(Finding {
            severity: Severity::Warning,
            code: "C006".to_string(),
            message: format!("Categories without a color: {}", missing.join(", ")),
            suggestion: Some(
                "Add `color = \"#RRGGBB\"` to each category so the graph is consistent"
                    .to_string(),
            ),
        });
    }
}

/// C007: Cycle count changed since the previous logged run
fn check_history(
    report: &CycleReport,
    previous: Option<&AnalysisRecord>,
    findings: &mut Vec<Finding>,
) {
    let Some(previous) = previous else {
        return;
    };

    let current = report.cycles.len();
    if previous.cycle_count != current {
        findings.push(Finding {
            severity: Severity::Info,
            code: "C007".to_string(),
            message: format!(
                "Cycle count changed from {} to {current} since the run at {}",
                previous.cycle_count,
                previous.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            suggestion: None,
        });
    }
}
