//! Index-level deltas between two ordered sequences.
//!
//! Given an old and a new list, `DeltaCalculator` reports which positions are
//! unchanged, added, removed or moved, which is what a list view needs to
//! animate an update row by row.
//!
//! ```
//! use listdelta::delta;
//!
//! let result = delta(&["a", "b"], &["b", "c"]);
//! assert!(result.added_indices().contains(&1));
//! assert!(result.removed_indices().contains(&0));
//! assert_eq!(result.moved_index_pairs(), &[(1, 0)]);
//! ```

pub mod delta;
pub mod error;

pub use delta::{
    delta, delta_by, delta_lines, Change, Delta, DeltaCalculator, DeltaOptions, IndexSet,
};
pub use error::ParseOptionsError;
