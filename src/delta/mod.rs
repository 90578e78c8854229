mod options;
mod types;

pub use options::*;
pub use types::*;

use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Compares two sequences position by position and by equality, and reports
/// which positions are unchanged, added, removed or moved.
///
/// The equality test decides what counts as "the same item". It does not
/// have to be full value equality: comparing rows by id lets a row whose
/// title changed still be reported as unchanged or moved.
///
/// Moves use first-match search: each new position is paired with the first
/// old position, in ascending order, that compares equal. This is not an
/// optimal assignment, and with duplicate elements several new positions can
/// point at the same old index.
///
/// # Examples
///
/// ```
/// use listdelta::{DeltaCalculator, DeltaOptions};
///
/// let mut calculator = DeltaCalculator::new();
/// let result = calculator.compute_delta(&['a', 'b', 'c'], &['c', 'a', 'b']);
/// assert!(result.unchanged_indices().is_empty());
/// assert_eq!(result.moved_index_pairs(), &[(2, 0), (0, 1), (1, 2)]);
///
/// calculator.options = DeltaOptions::IGNORE_INSERT_AND_MOVE;
/// let result = calculator.compute_delta(&['a', 'b', 'c'], &['c', 'a', 'b']);
/// assert!(result.moved_index_pairs().is_empty());
/// ```
pub struct DeltaCalculator<T, F = fn(&T, &T) -> bool> {
    /// Read on every call, so changes apply to the next computation.
    pub options: DeltaOptions,
    equality_test: F,
    marker: PhantomData<fn(&T, &T)>,
}

impl<T: PartialEq> DeltaCalculator<T> {
    /// Calculator using `PartialEq` as the equality test and no options.
    pub fn new() -> Self {
        Self::with_equality(|lhs: &T, rhs: &T| lhs == rhs)
    }
}

impl<T: PartialEq> Default for DeltaCalculator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> DeltaCalculator<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn with_equality(equality_test: F) -> Self {
        Self::with_options(DeltaOptions::empty(), equality_test)
    }

    pub fn with_options(options: DeltaOptions, equality_test: F) -> Self {
        DeltaCalculator {
            options,
            equality_test,
            marker: PhantomData,
        }
    }

    pub fn equality_test(&self) -> &F {
        &self.equality_test
    }

    /// Computes the delta from `old` to `new`.
    ///
    /// Runs three passes in order:
    /// 1. unchanged: `old[i]` equals `new[i]` for `i` below both lengths
    /// 2. added/moved: every other new position is paired with the first
    ///    equal old position, or marked added when there is none
    /// 3. removed: old positions with no equal element anywhere in `new`
    ///
    /// The equality test is always called as `(old element, new element)`.
    /// Cost is `O(old.len() * new.len())`.
    pub fn compute_delta(&self, old: &[T], new: &[T]) -> Delta {
        let eq = &self.equality_test;

        let unchanged: IndexSet = old
            .iter()
            .zip(new)
            .enumerate()
            .filter(|&(_, (o, n))| eq(o, n))
            .map(|(i, _)| i)
            .collect();

        let mut added = IndexSet::new();
        let mut moved = Vec::new();
        if self.options.ignores_insert_and_move() {
            trace!("skipping added/moved pass");
        } else {
            for (i, item) in new.iter().enumerate() {
                if unchanged.contains(&i) {
                    continue;
                }
                match old.iter().position(|o| eq(o, item)) {
                    Some(j) => moved.push((j, i)),
                    None => {
                        added.insert(i);
                    }
                }
            }
        }

        let removed: IndexSet = if self.options.ignores_remove() {
            trace!("skipping removed pass");
            IndexSet::new()
        } else {
            old.iter()
                .enumerate()
                .filter(|&(_, o)| !new.iter().any(|n| eq(o, n)))
                .map(|(i, _)| i)
                .collect()
        };

        debug!(
            old_len = old.len(),
            new_len = new.len(),
            unchanged = unchanged.len(),
            added = added.len(),
            removed = removed.len(),
            moved = moved.len(),
            "computed delta"
        );

        Delta::new(unchanged, added, removed, moved)
    }
}

impl<T, F: Clone> Clone for DeltaCalculator<T, F> {
    fn clone(&self) -> Self {
        DeltaCalculator {
            options: self.options,
            equality_test: self.equality_test.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for DeltaCalculator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeltaCalculator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Delta between two sequences using `PartialEq` and no options.
pub fn delta<T: PartialEq>(old: &[T], new: &[T]) -> Delta {
    DeltaCalculator::new().compute_delta(old, new)
}

/// Delta between two sequences using a custom equality test and no options.
pub fn delta_by<T, F>(old: &[T], new: &[T], equality_test: F) -> Delta
where
    F: Fn(&T, &T) -> bool,
{
    DeltaCalculator::with_equality(equality_test).compute_delta(old, new)
}

/// Computes the delta between two strings after breaking them into newlines
/// and running `delta`.
pub fn delta_lines(old: &str, new: &str) -> Delta {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    delta(&old_lines, &new_lines)
}
