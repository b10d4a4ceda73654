//! Per-category matchup summary
//!
//! One markdown line per category: who beats it, the category in bold, and
//! who it beats.

use crate::chart::model::RelationModel;

/// Render `<attackers> > **<category>** > <defenders>` for every category.
#[must_use]
pub fn render_matchups(model: &RelationModel) -> String {
    let mut out = String::new();
    for name in model.categories() {
        out.push_str(&format!(
            "{} > **{name}** > {}\n",
            join_or_dash(&model.weaknesses(name)),
            join_or_dash(&model.strengths(name))
        ));
    }
    out
}

fn join_or_dash(names: &[&str]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
