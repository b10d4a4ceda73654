//! Markdown matchup matrix
//!
//! Rows are attackers, columns are defenders. A cell holds `X` when the row
//! category is strong against the column category and `.` otherwise.

use crate::chart::model::RelationModel;

/// Render the chart as a fixed-width markdown table.
#[must_use]
pub fn render_table(model: &RelationModel) -> String {
    let n = model.len();
    let mut out = String::from("| A \\ D  ");

    for defender in model.categories() {
        out.push_str(&format!("| {defender:^6} "));
    }
    out.push_str("|\n");
    out.push_str(&"| ------ ".repeat(n + 1));
    out.push_str("|\n");

    for (a, attacker) in model.categories().iter().enumerate() {
        out.push_str(&format!("| {attacker:^6} "));
        for d in 0..n {
            let mark = if model.beats_rank(a, d) { "X" } else { "." };
            out.push_str(&format!("| {mark:^6} "));
        }
        out.push_str("|\n");
    }

    out
}
