//! Three-way cycle enumeration
//!
//! Finds every triple of distinct categories where each one is strong
//! against the next and the last is strong against the first.
//!
//! Each cycle is reported once, in canonical form: the rotation that starts
//! with its lowest-ranked member. Rotations are identified, reflections are
//! not, so `(A, B, C)` and `(A, C, B)` are different cycles.

use crate::chart::model::RelationModel;

/// A canonical three-way cycle, stored as category ranks.
///
/// The derived ordering is lexicographic over the ranks, which is the
/// reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cycle([usize; 3]);

impl Cycle {
    /// Rotate `(a, b, c)` so that the lowest rank comes first.
    ///
    /// Returns `None` unless the three ranks are pairwise distinct.
    #[must_use]
    pub fn canonical(a: usize, b: usize, c: usize) -> Option<Self> {
        if a == b || b == c || a == c {
            return None;
        }
        let ranks = if a < b && a < c {
            [a, b, c]
        } else if b < c {
            [b, c, a]
        } else {
            [c, a, b]
        };
        Some(Self(ranks))
    }

    /// Member ranks in cycle order
    #[must_use]
    pub const fn ranks(&self) -> [usize; 3] {
        self.0
    }

    /// Returns true if the category at `rank` is part of this cycle
    #[must_use]
    pub fn contains(&self, rank: usize) -> bool {
        self.0.contains(&rank)
    }

    /// Member names in cycle order
    #[must_use]
    pub fn names<'a>(&self, model: &'a RelationModel) -> [&'a str; 3] {
        self.0.map(|rank| model.name(rank))
    }
}

/// Per-category cycle membership counts, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CycleStats {
    entries: Vec<(String, usize)>,
}

impl CycleStats {
    /// Count of cycles containing `category`, or `None` if it is not declared
    #[must_use]
    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|&(_, count)| count)
    }

    /// Iterate `(category, count)` in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Sum of all counts (three per cycle)
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }
}

/// Result of one enumeration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Canonical cycles, sorted by rank triple
    pub cycles: Vec<Cycle>,
    /// Membership counts for every declared category
    pub stats: CycleStats,
}

impl CycleReport {
    /// Cycles as name triples, in reporting order
    #[must_use]
    pub fn named_cycles<'a>(&self, model: &'a RelationModel) -> Vec<[&'a str; 3]> {
        self.cycles.iter().map(|cycle| cycle.names(model)).collect()
    }

    /// Returns true if no cycle was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

/// Enumerate every canonical three-way cycle in `model`.
///
/// Self-matchups never take part in a cycle. Runs in O(N³) over the
/// category count and cannot fail.
#[must_use]
pub fn find_cycles(model: &RelationModel) -> CycleReport {
    let n = model.len();
    let mut cycles = Vec::new();

    // t1 is always the lowest rank of its cycle, so t2 and t3 start above it
    for t1 in 0..n {
        for t2 in (t1 + 1)..n {
            if !model.beats_rank(t1, t2) {
                continue;
            }
            for t3 in (t1 + 1)..n {
                if t3 != t2 && model.beats_rank(t2, t3) && model.beats_rank(t3, t1) {
                    cycles.push(Cycle([t1, t2, t3]));
                }
            }
        }
    }

    cycles.sort_unstable();

    let mut counts = vec![0usize; n];
    for cycle in &cycles {
        for rank in cycle.ranks() {
            counts[rank] += 1;
        }
    }

    let stats = CycleStats {
        entries: model.categories().iter().cloned().zip(counts).collect(),
    };

    CycleReport { cycles, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::model::build_model;
    use crate::testutil::make_test_model;

    #[test]
    fn test_single_triangle() {
        let model = make_test_model(
            &["Mil", "Bio", "Tel"],
            &[("Mil", &["Bio"]), ("Bio", &["Tel"]), ("Tel", &["Mil"])],
        );
        let report = find_cycles(&model);

        assert_eq!(report.named_cycles(&model), vec![["Mil", "Bio", "Tel"]]);
        assert_eq!(report.stats.get("Mil"), Some(1));
        assert_eq!(report.stats.get("Bio"), Some(1));
        assert_eq!(report.stats.get("Tel"), Some(1));
        assert_eq!(report.stats.total(), 3);
    }

    #[test]
    fn test_two_categories_have_no_cycle() {
        let model = make_test_model(&["A", "B"], &[("A", &["B"])]);
        let report = find_cycles(&model);

        assert!(report.is_empty());
        assert_eq!(report.stats.get("A"), Some(0));
        assert_eq!(report.stats.get("B"), Some(0));
    }

    #[test]
    fn test_mutual_pair_is_not_a_cycle() {
        let model = make_test_model(&["A", "B", "C"], &[("A", &["B"]), ("B", &["A"])]);
        assert!(find_cycles(&model).is_empty());
    }

    #[test]
    fn test_empty_relation() {
        let model = make_test_model(&["A", "B", "C", "D"], &[]);
        let report = find_cycles(&model);

        assert!(report.is_empty());
        assert!(report.stats.iter().all(|(_, count)| count == 0));
        assert_eq!(report.stats.iter().count(), 4);
    }

    #[test]
    fn test_empty_universe() {
        let model = make_test_model(&[], &[]);
        let report = find_cycles(&model);
        assert!(report.is_empty());
        assert_eq!(report.stats.total(), 0);
    }

    #[test]
    fn test_cycle_reported_from_lowest_rank() {
        // Declared as C -> A -> B -> C, reported from A
        let model = make_test_model(
            &["A", "B", "C"],
            &[("C", &["A"]), ("A", &["B"]), ("B", &["C"])],
        );
        assert_eq!(find_cycles(&model).named_cycles(&model), vec![["A", "B", "C"]]);
    }

    #[test]
    fn test_both_orientations_are_distinct_cycles() {
        let model = make_test_model(
            &["A", "B", "C"],
            &[("A", &["B", "C"]), ("B", &["C", "A"]), ("C", &["A", "B"])],
        );
        let report = find_cycles(&model);
        assert_eq!(
            report.named_cycles(&model),
            vec![["A", "B", "C"], ["A", "C", "B"]]
        );
        assert_eq!(report.stats.get("B"), Some(2));
    }

    #[test]
    fn test_self_matchups_are_ignored() {
        let model = make_test_model(
            &["A", "B", "C"],
            &[("A", &["A", "B"]), ("B", &["B", "C"]), ("C", &["A", "C"])],
        );
        let report = find_cycles(&model);
        assert_eq!(report.named_cycles(&model), vec![["A", "B", "C"]]);
    }

    #[test]
    fn test_cycles_sorted_by_rank_triple() {
        // Two disjoint triangles declared in reverse order
        let model = make_test_model(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("D", &["E"]),
                ("E", &["F"]),
                ("F", &["D"]),
                ("A", &["C"]),
                ("C", &["B"]),
                ("B", &["A"]),
            ],
        );
        let report = find_cycles(&model);
        assert_eq!(
            report.named_cycles(&model),
            vec![["A", "C", "B"], ["D", "E", "F"]]
        );
    }

    #[test]
    fn test_stats_count_each_membership() {
        // A is in both A->B->C and A->B->D
        let model = make_test_model(
            &["A", "B", "C", "D"],
            &[("A", &["B"]), ("B", &["C", "D"]), ("C", &["A"]), ("D", &["A"])],
        );
        let report = find_cycles(&model);

        assert_eq!(report.cycles.len(), 2);
        assert_eq!(report.stats.get("A"), Some(2));
        assert_eq!(report.stats.get("B"), Some(2));
        assert_eq!(report.stats.get("C"), Some(1));
        assert_eq!(report.stats.get("D"), Some(1));
        assert_eq!(report.stats.get("Z"), None);
        assert_eq!(report.stats.total(), 3 * report.cycles.len());
    }

    #[test]
    fn test_stats_iterate_in_rank_order() {
        let model = build_model(&["Z", "Y", "X"], [("Z", vec!["Y"])]).unwrap();
        let report = find_cycles(&model);
        let names: Vec<_> = report.stats.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Z", "Y", "X"]);
    }

    #[test]
    fn test_canonical_rotations() {
        let expected = Cycle::canonical(1, 4, 2);
        assert_eq!(expected.map(|c| c.ranks()), Some([1, 4, 2]));
        assert_eq!(Cycle::canonical(4, 2, 1), expected);
        assert_eq!(Cycle::canonical(2, 1, 4), expected);
        // Reflection is a different cycle
        assert_ne!(Cycle::canonical(1, 2, 4), expected);
    }

    #[test]
    fn test_canonical_rejects_repeated_members() {
        assert_eq!(Cycle::canonical(1, 1, 2), None);
        assert_eq!(Cycle::canonical(1, 2, 1), None);
        assert_eq!(Cycle::canonical(2, 1, 1), None);
    }

    #[test]
    fn test_cycle_contains() {
        let cycle = Cycle::canonical(3, 0, 5).unwrap();
        assert_eq!(cycle.ranks(), [0, 5, 3]);
        assert!(cycle.contains(5));
        assert!(!cycle.contains(1));
    }
}
