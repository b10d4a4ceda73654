//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::chart::model::{build_model, RelationModel};

/// Build a `RelationModel` from string slices, panicking on invalid input.
#[must_use]
pub fn make_test_model(categories: &[&str], relation: &[(&str, &[&str])]) -> RelationModel {
    build_model(
        categories,
        relation
            .iter()
            .map(|&(attacker, defenders)| (attacker, defenders.iter().copied())),
    )
    .expect("test relation should be valid")
}
