//! Graph-description rendering
//!
//! Produces a Graphviz digraph wrapped in `@startdot` / `@enddot` so the
//! block can be embedded in PlantUML documents as well as fed to `dot`.

use crate::chart::model::RelationModel;

const HEADER: &str = "@startdot\ndigraph TypeChart {\n  rankdir=TD;\n";
const NODE_DEFAULTS: &str =
    "  node [shape=cylinder, style=\"rounded,filled\", color=black, fillcolor=royalblue];\n";
const FOOTER: &str = "}\n@enddot\n";

// Reserved in DOT regardless of case
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Render the chart as a directed graph.
///
/// `colors` is indexed by rank; a missing entry or `None` leaves the node
/// with the default fill and its outgoing edges with the default color.
#[must_use]
pub fn render_dot(model: &RelationModel, colors: &[Option<&str>]) -> String {
    let color_of = |rank: usize| colors.get(rank).copied().flatten();

    let mut out = String::from(HEADER);
    out.push_str(NODE_DEFAULTS);

    for (rank, name) in model.categories().iter().enumerate() {
        let label = quote(name);
        match color_of(rank) {
            Some(color) => out.push_str(&format!(
                "  {} [label={label}, fillcolor={}];\n",
                dot_id(name),
                quote(color)
            )),
            None => out.push_str(&format!("  {} [label={label}];\n", dot_id(name))),
        }
    }

    out.push_str("\n  edge [color=red];\n");

    for (attacker, defender) in model.edges() {
        let edge = format!("  {} -> {}", dot_id(attacker), dot_id(defender));
        match model.rank(attacker).and_then(color_of) {
            Some(color) => out.push_str(&format!(
                "{edge} [label=\">\", color={}];\n",
                quote(color)
            )),
            None => out.push_str(&format!("{edge} [label=\">\"];\n")),
        }
    }

    out.push_str(FOOTER);
    out
}

/// Bare identifier when DOT allows it, quoted string otherwise
fn dot_id(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name.to_ascii_lowercase().as_str());

    if plain {
        name.to_string()
    } else {
        quote(name)
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_model;

    #[test]
    fn test_render_colored_triangle() {
        let model = make_test_model(
            &["Mil", "Bio", "Tel"],
            &[("Mil", &["Bio"]), ("Bio", &["Tel"]), ("Tel", &["Mil"])],
        );
        let dot = render_dot(&model, &[Some("#E00000"), Some("#00E000"), Some("#0060E0")]);

        let expected = r##"@startdot
digraph TypeChart {
  rankdir=TD;
  node [shape=cylinder, style="rounded,filled", color=black, fillcolor=royalblue];
  Mil [label="Mil", fillcolor="#E00000"];
  Bio [label="Bio", fillcolor="#00E000"];
  Tel [label="Tel", fillcolor="#0060E0"];

  edge [color=red];
  Mil -> Bio [label=">", color="#E00000"];
  Bio -> Tel [label=">", color="#00E000"];
  Tel -> Mil [label=">", color="#0060E0"];
}
@enddot
"##;
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_render_without_colors() {
        let model = make_test_model(&["A", "B"], &[("A", &["B"])]);
        let dot = render_dot(&model, &[]);

        assert!(dot.contains("  A [label=\"A\"];\n"));
        assert!(dot.contains("  A -> B [label=\">\"];\n"));
        assert!(!dot.contains("fillcolor=\"#"));
    }

    #[test]
    fn test_render_self_matchup_edge() {
        let model = make_test_model(&["Nano"], &[("Nano", &["Nano"])]);
        let dot = render_dot(&model, &[None]);
        assert!(dot.contains("  Nano -> Nano [label=\">\"];\n"));
    }

    #[test]
    fn test_render_empty_chart() {
        let model = make_test_model(&[], &[]);
        let dot = render_dot(&model, &[]);
        assert!(dot.starts_with("@startdot\n"));
        assert!(dot.ends_with("}\n@enddot\n"));
    }

    #[test]
    fn test_dot_id_quotes_when_needed() {
        assert_eq!(dot_id("Fire"), "Fire");
        assert_eq!(dot_id("_x1"), "_x1");
        assert_eq!(dot_id("Mr. Mime"), "\"Mr. Mime\"");
        assert_eq!(dot_id("1up"), "\"1up\"");
        assert_eq!(dot_id(""), "\"\"");
        assert_eq!(dot_id("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(dot_id("Node"), "\"Node\"");
        assert_eq!(dot_id("EDGE"), "\"EDGE\"");
        assert_eq!(dot_id("strict"), "\"strict\"");
        assert_eq!(dot_id("Nodes"), "Nodes");
    }

    #[test]
    fn test_render_quotes_keyword_names() {
        let model = make_test_model(&["Node", "Edge"], &[("Node", &["Edge"])]);
        let dot = render_dot(&model, &[None, None]);

        assert!(dot.contains("  \"Node\" [label=\"Node\"];\n"));
        assert!(dot.contains("  \"Node\" -> \"Edge\" [label=\">\"];\n"));
        assert!(!dot.contains("  Node -> Edge"));
    }
}
