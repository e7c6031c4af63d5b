//! Sorted, filtered view over a populated index

use crate::index::{Group, GroupIndex};

/// Smallest group the report includes
pub const MIN_GROUP_SIZE: usize = 2;

/// Groups with at least `min_size` values, ordered by byte-wise key comparison.
///
/// Borrows from the index and leaves it untouched.
pub fn sorted_groups(index: &dyn GroupIndex, min_size: usize) -> Vec<(&str, &Group)> {
    let mut groups: Vec<_> = index
        .groups()
        .filter(|(_, group)| group.len() >= min_size)
        .collect();

    // keys are unique, so an unstable sort is still deterministic
    groups.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
    groups
}
