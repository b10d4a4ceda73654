//! Text renderings of a chart
//!
//! Pure builders over the relation model: a Graphviz graph, a markdown
//! matrix, and a per-category matchup summary.

pub mod dot;
pub mod matchups;
pub mod table;

pub use dot::render_dot;
pub use matchups::render_matchups;
pub use table::render_table;
