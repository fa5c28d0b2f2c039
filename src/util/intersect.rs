//! Intersection of posting sets.
//!
//! This is the inner loop of every multi-term query: each query token looks
//! up one [`OrderedSet`] of document ids and the sets are folded together
//! left to right. Membership is a hash lookup, so intersecting sets whose
//! total size is `n` costs `O(n)`.

use std::borrow::Cow;
use std::hash::Hash;

use crate::util::ordered_set::OrderedSet;

/// Return the elements shared by all `sets`.
///
/// - No sets, or any `None` entry, gives an empty set. A query token missing
///   from the index must not behave like "no constraint".
/// - A single set is returned as-is, borrowed rather than copied.
/// - Otherwise the first set is walked and each element is kept if the next
///   set contains it, one set at a time. The result keeps the first set's
///   insertion order.
///
/// # Examples
///
/// ```
/// use scour::util::intersect::intersect;
/// use scour::util::ordered_set::OrderedSet;
///
/// let a: OrderedSet<u32> = vec![1, 2, 3, 4].into_iter().collect();
/// let b: OrderedSet<u32> = vec![3, 4, 5].into_iter().collect();
///
/// let common = intersect(&[Some(&a), Some(&b)]);
/// assert_eq!(common.to_vec(), vec![3, 4]);
///
/// assert!(intersect(&[Some(&a), None]).is_empty());
/// ```
pub fn intersect<'a, T>(sets: &[Option<&'a OrderedSet<T>>]) -> Cow<'a, OrderedSet<T>>
where
    T: Eq + Hash + Clone,
{
    if sets.iter().any(Option::is_none) {
        return Cow::Owned(OrderedSet::new());
    }

    let mut remaining = sets.iter().flatten();
    let Some(first) = remaining.next() else {
        return Cow::Owned(OrderedSet::new());
    };

    let mut acc = Cow::Borrowed(*first);
    for next in remaining {
        if acc.is_empty() {
            break;
        }
        let narrowed: OrderedSet<T> = acc
            .iter()
            .filter(|item| next.contains(*item))
            .cloned()
            .collect();
        acc = Cow::Owned(narrowed);
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[u32]) -> OrderedSet<u32> {
        items.iter().copied().collect()
    }

    fn run(input: &[&[u32]]) -> Vec<u32> {
        let sets: Vec<OrderedSet<u32>> = input.iter().map(|items| set(items)).collect();
        let refs: Vec<Option<&OrderedSet<u32>>> = sets.iter().map(Some).collect();
        intersect(&refs).to_vec()
    }

    #[test]
    fn test_intersect_no_sets() {
        assert!(intersect::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_intersect_single_set_is_borrowed() {
        let a = set(&[1, 2, 3, 4]);
        let result = intersect(&[Some(&a)]);

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_intersect_missing_set() {
        let a = set(&[1, 2, 3]);

        assert!(intersect::<u32>(&[None]).is_empty());
        assert!(intersect(&[Some(&a), None]).is_empty());
        assert!(intersect(&[None, Some(&a)]).is_empty());
    }

    #[test]
    fn test_intersect_two_sets() {
        assert_eq!(run(&[&[1, 2, 3, 4], &[3, 4, 5]]), vec![3, 4]);
        assert_eq!(run(&[&[1, 2, 3], &[1, 2, 3]]), vec![1, 2, 3]);
        assert_eq!(run(&[&[1, 2, 3], &[4, 5, 6]]), Vec::<u32>::new());
        assert_eq!(run(&[&[], &[1, 2, 3]]), Vec::<u32>::new());
        assert_eq!(run(&[&[1, 2, 3], &[]]), Vec::<u32>::new());
    }

    #[test]
    fn test_intersect_three_sets() {
        assert_eq!(run(&[&[1, 2], &[2, 3], &[1, 2, 3]]), vec![2]);
        assert_eq!(run(&[&[1, 2], &[1, 2], &[1, 2]]), vec![1, 2]);
        assert_eq!(run(&[&[1, 2], &[3, 4], &[4, 5]]), Vec::<u32>::new());
        assert_eq!(run(&[&[], &[1, 2, 3], &[4, 5, 6]]), Vec::<u32>::new());
        assert_eq!(run(&[&[1, 2], &[2, 3], &[]]), Vec::<u32>::new());
    }

    #[test]
    fn test_intersect_follows_first_set_order() {
        assert_eq!(run(&[&[4, 3, 2, 1], &[1, 2, 3]]), vec![3, 2, 1]);
    }
}
