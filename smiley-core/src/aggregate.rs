//! Concatenation of per-shape point sets.

use crate::point_set::PointSet;

/// Concatenates `groups` into one point set.
///
/// Group order and the order within each group are preserved; nothing is
/// deduplicated.
///
/// # Examples
/// ```
/// use smiley_core::{PointSet, concatenate};
///
/// let left = PointSet::new(vec![0.0], vec![1.0]).expect("valid");
/// let right = PointSet::new(vec![2.0, 3.0], vec![4.0, 5.0]).expect("valid");
/// let combined = concatenate([&left, &right]);
/// assert_eq!(combined.xs(), &[0.0, 2.0, 3.0]);
/// assert_eq!(combined.ys(), &[1.0, 4.0, 5.0]);
/// ```
pub fn concatenate<'a, I>(groups: I) -> PointSet
where
    I: IntoIterator<Item = &'a PointSet>,
    I::IntoIter: Clone,
{
    let iter = groups.into_iter();
    let total = iter.clone().map(PointSet::len).sum();
    iter.fold(PointSet::with_capacity(total), |mut combined, group| {
        combined.extend_from(group);
        combined
    })
}
