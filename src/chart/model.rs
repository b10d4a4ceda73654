//! Relation model
//!
//! Holds the ordered category universe of a chart and the directed
//! "is strong against" relation over it.

use std::collections::HashMap;

/// Errors raised while building a [`RelationModel`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRelationError {
    /// The same category name was declared twice.
    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),
    /// A matchup lists an attacker that is not a declared category.
    #[error("matchup attacker '{0}' is not a declared category")]
    UnknownAttacker(String),
    /// A matchup lists a defender that is not a declared category.
    #[error("category '{attacker}' is strong against unknown category '{defender}'")]
    UnknownDefender {
        /// The declared attacker.
        attacker: String,
        /// The undeclared defender it references.
        defender: String,
    },
}

/// Immutable category universe plus "beats" relation.
///
/// A category's rank is its position in [`RelationModel::categories`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationModel {
    categories: Vec<String>,
    index: HashMap<String, usize>,
    // Dense N×N matrix, row = attacker, column = defender
    adjacency: Vec<bool>,
    // Defenders per attacker in declaration order
    strengths: Vec<Vec<usize>>,
}

/// Build a relation model from an ordered category list and a matchup table.
///
/// `relation` yields `(attacker, defenders)` pairs. An attacker may appear
/// more than once; its defenders are merged. Categories without an entry
/// simply beat nothing. Self-matchups are accepted.
pub fn build_model<C, R, A, D, S>(
    categories: &[C],
    relation: R,
) -> Result<RelationModel, InvalidRelationError>
where
    C: AsRef<str>,
    R: IntoIterator<Item = (A, D)>,
    A: AsRef<str>,
    D: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = Vec::with_capacity(categories.len());
    let mut index = HashMap::with_capacity(categories.len());
    for name in categories {
        let name = name.as_ref();
        if index.insert(name.to_string(), names.len()).is_some() {
            return Err(InvalidRelationError::DuplicateCategory(name.to_string()));
        }
        names.push(name.to_string());
    }

    let n = names.len();
    let mut adjacency = vec![false; n * n];
    let mut strengths = vec![Vec::new(); n];

    for (attacker, defenders) in relation {
        let attacker = attacker.as_ref();
        let &a = index
            .get(attacker)
            .ok_or_else(|| InvalidRelationError::UnknownAttacker(attacker.to_string()))?;

        for defender in defenders {
            let defender = defender.as_ref();
            let &d = index
                .get(defender)
                .ok_or_else(|| InvalidRelationError::UnknownDefender {
                    attacker: attacker.to_string(),
                    defender: defender.to_string(),
                })?;

            let cell = &mut adjacency[a * n + d];
            if !*cell {
                *cell = true;
                strengths[a].push(d);
            }
        }
    }

    Ok(RelationModel {
        categories: names,
        index,
        adjacency,
        strengths,
    })
}

impl RelationModel {
    /// All categories, in rank order
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the universe has no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Rank of a category, or `None` if it is not declared
    #[must_use]
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the category at `rank`
    ///
    /// # Panics
    /// Panics if `rank` is out of range.
    #[must_use]
    pub fn name(&self, rank: usize) -> &str {
        &self.categories[rank]
    }

    /// Returns true if `attacker` is strong against `defender`.
    ///
    /// Undeclared names never beat anything.
    #[must_use]
    pub fn beats(&self, attacker: &str, defender: &str) -> bool {
        match (self.rank(attacker), self.rank(defender)) {
            (Some(a), Some(d)) => self.beats_rank(a, d),
            _ => false,
        }
    }

    /// Rank-level form of [`RelationModel::beats`].
    ///
    /// # Panics
    /// Panics if either rank is out of range.
    #[must_use]
    pub fn beats_rank(&self, attacker: usize, defender: usize) -> bool {
        let n = self.len();
        assert!(attacker < n && defender < n, "rank out of range");
        self.adjacency[attacker * n + defender]
    }

    /// Defenders `name` is strong against, in declaration order
    #[must_use]
    pub fn strengths(&self, name: &str) -> Vec<&str> {
        self.rank(name).map_or_else(Vec::new, |a| {
            self.strengths[a]
                .iter()
                .map(|&d| self.categories[d].as_str())
                .collect()
        })
    }

    /// Attackers strong against `name`, in rank order
    #[must_use]
    pub fn weaknesses(&self, name: &str) -> Vec<&str> {
        self.rank(name).map_or_else(Vec::new, |d| {
            (0..self.len())
                .filter(|&a| self.beats_rank(a, d))
                .map(|a| self.categories[a].as_str())
                .collect()
        })
    }

    /// Every `(attacker, defender)` pair, attackers in rank order and
    /// defenders in declaration order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.strengths.iter().enumerate().flat_map(move |(a, ds)| {
            ds.iter()
                .map(move |&d| (self.categories[a].as_str(), self.categories[d].as_str()))
        })
    }

    /// Number of pairs in the relation, self-matchups included
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.strengths.iter().map(Vec::len).sum()
    }
}
