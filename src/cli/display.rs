//! Rich CLI display for chart analysis
//!
//! Renders matchups, cycles, statistics and diagnostics as human-readable
//! terminal output. All output goes to stderr so stdout remains clean for
//! piping rendered charts.

use std::path::Path;

use colored::Colorize;

use crate::chart::cycles::CycleReport;
use crate::chart::model::RelationModel;
use crate::doctor::{DiagnosticReport, Severity};

/// Display handler for one chart analysis
pub struct ReportDisplay {
    chart_name: String,
}

impl ReportDisplay {
    /// Create a new display handler for the given chart
    #[must_use]
    pub fn new(chart_name: &str) -> Self {
        Self {
            chart_name: chart_name.to_string(),
        }
    }

    /// Print the chart header with its size
    pub fn print_header(&self, model: &RelationModel) {
        eprintln!(
            "\n{} {}",
            "===".bold().cyan(),
            format!("Chart: {}", self.chart_name).bold().cyan()
        );
        eprintln!(
            "  {} {} categories, {} matchups",
            "Size:".dimmed(),
            model.len(),
            model.edge_count()
        );
        eprintln!("{}", "─".repeat(50).dimmed());
    }

    /// Print the per-category matchup summary
    pub fn print_matchups(&self, matchups: &str) {
        for line in matchups.lines() {
            eprintln!("  {line}");
        }
        eprintln!();
    }

    /// Print every cycle in reporting order
    pub fn print_cycles(&self, model: &RelationModel, report: &CycleReport) {
        let count = report.cycles.len();
        let headline = format!("Found {count} three-way cycle{}", plural(count));
        if count == 0 {
            eprintln!("  {}", headline.yellow().bold());
        } else {
            eprintln!("  {}", headline.green().bold());
        }

        for names in report.named_cycles(model) {
            eprintln!("    {} {}", "↻".blue(), format_cycle(names));
        }
        eprintln!();
    }

    /// Print per-category membership counts
    pub fn print_stats(&self, report: &CycleReport) {
        eprintln!("  {}", "Stats:".dimmed());

        let width = report
            .stats
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);

        for (name, count) in report.stats.iter() {
            let line = format_stat(name, count, width);
            if count == 0 {
                eprintln!("    {}", line.dimmed());
            } else {
                eprintln!("    {line}");
            }
        }
        eprintln!();
    }

    /// Report a rendered file written to disk
    pub fn print_written(&self, path: &Path) {
        eprintln!("  {} {}", "Wrote".green(), path.display());
    }
}

/// Render a diagnostic report to stderr
pub fn render_diagnostic_report(report: &DiagnosticReport) {
    eprintln!("{}", "─".repeat(50).dimmed());

    if report.is_clean() {
        eprintln!("  {} no findings", "Doctor:".dimmed());
        return;
    }

    eprintln!(
        "  {} {} warning(s), {} note(s)",
        "Doctor:".dimmed(),
        report.warning_count(),
        report.info_count()
    );

    for finding in &report.findings {
        let tag = match finding.severity {
            Severity::Warning => "⚠".yellow().bold(),
            Severity::Info => "ℹ".blue(),
        };
        eprintln!("  {tag} {} {}", finding.code.dimmed(), finding.message);
        if let Some(suggestion) = &finding.suggestion {
            eprintln!("      {} {suggestion}", "→".dimmed());
        }
    }
}

/// `A > B > C > A`
fn format_cycle(names: [&str; 3]) -> String {
    format!("{} > {} > {} > {}", names[0], names[1], names[2], names[0])
}

fn format_stat(name: &str, count: usize, width: usize) -> String {
    format!("{name:<width$}  {count:>3}  {}", "■".repeat(count))
}

const fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::cycles::find_cycles;
    use crate::doctor::Finding;
    use crate::testutil::make_test_model;

    fn triangle() -> RelationModel {
        make_test_model(
            &["Mil", "Bio", "Tel"],
            &[("Mil", &["Bio"]), ("Bio", &["Tel"]), ("Tel", &["Mil"])],
        )
    }

    #[test]
    fn test_new_display() {
        let display = ReportDisplay::new("cyber");
        assert_eq!(display.chart_name, "cyber");
    }

    #[test]
    fn test_format_cycle_closes_loop() {
        assert_eq!(format_cycle(["Mil", "Bio", "Tel"]), "Mil > Bio > Tel > Mil");
    }

    #[test]
    fn test_format_stat_aligns_columns() {
        assert_eq!(format_stat("Mil", 2, 6), "Mil       2  ■■");
        assert_eq!(format_stat("Street", 0, 6), "Street    0  ");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(19), "s");
    }

    // Test that every print path runs without panicking
    #[test]
    fn test_print_all_sections_no_panic() {
        let model = triangle();
        let report = find_cycles(&model);
        let display = ReportDisplay::new("test");

        display.print_header(&model);
        display.print_matchups("Tel > **Mil** > Bio\n");
        display.print_cycles(&model, &report);
        display.print_stats(&report);
        display.print_written(Path::new("types.dot"));
    }

    #[test]
    fn test_print_empty_report_no_panic() {
        let model = make_test_model(&[], &[]);
        let report = find_cycles(&model);
        let display = ReportDisplay::new("empty");

        display.print_cycles(&model, &report);
        display.print_stats(&report);
    }

    #[test]
    fn test_render_diagnostic_report_no_panic() {
        render_diagnostic_report(&DiagnosticReport { findings: vec![] });
        render_diagnostic_report(&DiagnosticReport {
            findings: vec![
                Finding {
                    severity: Severity::Warning,
                    code: "C001".to_string(),
                    message: "'Dragon' is listed as strong against itself".to_string(),
                    suggestion: Some("Remove it".to_string()),
                },
                Finding {
                    severity: Severity::Info,
                    code: "C003".to_string(),
                    message: "'Normal' is not strong against any category".to_string(),
                    suggestion: None,
                },
            ],
        });
    }
}
