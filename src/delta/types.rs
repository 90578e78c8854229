use std::collections::BTreeSet;

/// Ordered set of sequence positions.
pub type IndexSet = BTreeSet<usize>;

/// Result of `DeltaCalculator::compute_delta`.
///
/// Indices refer to the two sequences that produced the delta and mean
/// nothing against any other pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta {
    unchanged_indices: IndexSet,
    added_indices: IndexSet,
    removed_indices: IndexSet,
    moved_index_pairs: Vec<(usize, usize)>,
}

/// A single entry of a delta, as yielded by `Delta::changes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Position in the old sequence.
    Removed(usize),
    /// Position in the new sequence.
    Added(usize),
    Moved { from: usize, to: usize },
}

impl Delta {
    pub fn new(
        unchanged_indices: IndexSet,
        added_indices: IndexSet,
        removed_indices: IndexSet,
        moved_index_pairs: Vec<(usize, usize)>,
    ) -> Self {
        Delta {
            unchanged_indices,
            added_indices,
            removed_indices,
            moved_index_pairs,
        }
    }

    /// Positions valid in both sequences holding equal elements.
    pub fn unchanged_indices(&self) -> &IndexSet {
        &self.unchanged_indices
    }

    /// New-sequence positions with no equal element anywhere in the old one.
    pub fn added_indices(&self) -> &IndexSet {
        &self.added_indices
    }

    /// Old-sequence positions with no equal element anywhere in the new one.
    pub fn removed_indices(&self) -> &IndexSet {
        &self.removed_indices
    }

    /// `(old, new)` pairs in ascending new-index order.
    ///
    /// An old index may show up in several pairs when the new sequence holds
    /// duplicates of it.
    pub fn moved_index_pairs(&self) -> &[(usize, usize)] {
        &self.moved_index_pairs
    }

    pub fn is_empty(&self) -> bool {
        self.unchanged_indices.is_empty() && !self.has_changes()
    }

    /// True when anything was added, removed or moved.
    pub fn has_changes(&self) -> bool {
        !self.added_indices.is_empty()
            || !self.removed_indices.is_empty()
            || !self.moved_index_pairs.is_empty()
    }

    /// Walks the delta as a batch-update script: removals, then insertions,
    /// then moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use listdelta::{delta, Change};
    ///
    /// let result = delta(&["a", "b"], &["b", "c"]);
    /// let changes: Vec<Change> = result.changes().collect();
    /// assert_eq!(
    ///     changes,
    ///     vec![Change::Removed(0), Change::Added(1), Change::Moved { from: 1, to: 0 }]
    /// );
    /// ```
    pub fn changes(&self) -> impl Iterator<Item = Change> + '_ {
        let removed = self.removed_indices.iter().map(|&i| Change::Removed(i));
        let added = self.added_indices.iter().map(|&i| Change::Added(i));
        let moved = self
            .moved_index_pairs
            .iter()
            .map(|&(from, to)| Change::Moved { from, to });
        removed.chain(added).chain(moved)
    }
}
