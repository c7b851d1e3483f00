//! An unordered collection of unique elements with in-place algebraic operations.
//!
//! Unlike the adaptors of the standard hash set, the multi-set operations here
//! ([`Set::merge`], [`Set::diff`], [`Set::intersect`]) mutate the receiver and
//! accept any number of other sets in a single call.

use std::hash::Hash;

use hashbrown::HashSet;

/// A set of unique elements of type `T`.
///
/// Iteration order is unspecified and may differ between two calls on the same
/// set. Code needing a stable order must sort the values itself.
///
/// A set instance is meant to be owned and mutated by a single caller. Sharing
/// one across threads requires external synchronization.
///
/// # Example
/// ```
/// use kit_sets::Set;
/// let mut primes: Set<u32> = [2, 3, 5, 7].into_iter().collect();
/// let odds: Set<u32> = [1, 3, 5, 7, 9].into_iter().collect();
/// primes.intersect(&[&odds]);
/// assert!(primes.contains(&3) && !primes.contains(&2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Set<T> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Set {
            elements: Default::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Set {
            elements: HashSet::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts a value, returning true if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    /// Removes a value, returning true if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.elements.remove(value)
    }

    /// Removes all values, releasing the previous backing storage.
    pub fn clear(&mut self) {
        self.elements = Default::default();
    }

    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.iter()
    }

    /// Returns the elements as a vector, in unspecified order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// Adds every element present in any of `others` (in-place union).
    pub fn merge(&mut self, others: &[&Set<T>])
    where
        T: Clone,
    {
        for other in others {
            self.elements.extend(other.iter().cloned());
        }
    }

    /// Removes every element present in any of `others` (in-place subtraction).
    ///
    /// With no `others`, the set is left unchanged.
    pub fn diff(&mut self, others: &[&Set<T>]) {
        self.elements.retain(|v| !others.iter().any(|o| o.contains(v)));
    }

    /// Keeps only the elements present in every one of `others`.
    ///
    /// With no `others`, the set becomes empty: intersecting with nothing
    /// yields nothing. Note the asymmetry with [`Set::diff`].
    pub fn intersect(&mut self, others: &[&Set<T>]) {
        if others.is_empty() {
            self.clear();
            return;
        }
        self.elements.retain(|v| others.iter().all(|o| o.contains(v)));
    }

    /// Keeps only the elements for which the predicate returns true.
    pub fn retain(&mut self, predicate: impl FnMut(&T) -> bool) {
        self.elements.retain(predicate);
    }

    /// Replaces every element with `transform(element)`.
    ///
    /// If the transform maps two distinct elements to the same value, the
    /// cardinality shrinks accordingly.
    pub fn map(&mut self, transform: impl FnMut(T) -> T) {
        let mapped: HashSet<T> = self.elements.drain().map(transform).collect();
        self.elements = mapped;
    }
}

/// Equality is cardinality plus membership, independent of iteration order.
impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Set {
            elements: values.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.elements.extend(values);
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hashbrown::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn set(values: &[i32]) -> Set<i32> {
        values.iter().copied().collect()
    }

    fn sorted(s: &Set<i32>) -> Vec<i32> {
        s.iter().copied().sorted().collect()
    }

    #[test]
    fn construction_collapses_duplicates() {
        let s = set(&[1, 1, 2, 3, 3, 3]);
        assert_eq!(s.len(), 3);
        assert_eq!(sorted(&s), vec![1, 2, 3]);
    }

    #[test]
    fn insert_and_remove() {
        let mut s = Set::new();
        assert!(s.insert(1));
        assert!(!s.insert(1)); // already present
        assert_eq!(s.len(), 1);

        assert!(s.remove(&1));
        assert!(!s.remove(&1)); // already absent
        assert!(s.is_empty());
    }

    #[test]
    fn extend_is_bulk_insert() {
        let mut s = set(&[1]);
        s.extend([2, 2, 3]);
        assert_eq!(sorted(&s), vec![1, 2, 3]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut s = set(&[1, 2, 3]);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(&1));

        s.insert(4);
        assert_eq!(s.values(), vec![4]);
    }

    #[test]
    fn membership() {
        let s = set(&[1, 2]);
        assert!(s.contains(&1));
        assert!(s.contains(&2));
        assert!(!s.contains(&3));
    }

    #[test]
    fn merge_is_in_place_union() {
        let mut s = set(&[1, 2]);
        s.merge(&[&set(&[2, 3]), &set(&[4])]);
        assert_eq!(sorted(&s), vec![1, 2, 3, 4]);

        // merging nothing changes nothing
        s.merge(&[]);
        assert_eq!(sorted(&s), vec![1, 2, 3, 4]);
    }

    #[test]
    fn diff_removes_elements_of_others() {
        let mut s = set(&[1, 2, 3, 4]);
        s.diff(&[&set(&[2]), &set(&[4, 5])]);
        assert_eq!(sorted(&s), vec![1, 3]);
    }

    #[test]
    fn diff_with_no_others_is_a_noop() {
        let mut s = set(&[1, 2]);
        s.diff(&[]);
        assert_eq!(sorted(&s), vec![1, 2]);
    }

    #[test]
    fn intersect_keeps_common_elements() {
        let mut s = set(&[1, 2, 3, 4]);
        s.intersect(&[&set(&[2, 3, 5]), &set(&[3, 4])]);
        assert_eq!(s.values(), vec![3]);
    }

    #[test]
    fn intersect_with_no_others_empties_the_set() {
        // Intersecting with nothing yields nothing, unlike diff.
        let mut s = set(&[1, 2]);
        s.intersect(&[]);
        assert!(s.is_empty());
    }

    #[test]
    fn intersect_with_an_empty_other_empties_the_set() {
        let mut s = set(&[1, 2]);
        s.intersect(&[&set(&[1, 2]), &Set::new()]);
        assert!(s.is_empty());
    }

    #[test]
    fn equality_is_membership_based() {
        assert_eq!(set(&[1, 2, 3]), set(&[3, 2, 1]));
        assert_ne!(set(&[1, 2]), set(&[1, 2, 3]));
        assert_ne!(set(&[1, 2]), set(&[1, 3]));
        assert_eq!(Set::<i32>::new(), set(&[]));
    }

    #[test]
    fn retain_keeps_matching_elements() {
        let mut s = set(&[1, 2, 3, 4, 5]);
        s.retain(|v| v % 2 == 0);
        assert_eq!(sorted(&s), vec![2, 4]);
    }

    #[test]
    fn map_reapplies_set_semantics() {
        let mut s = set(&[1, 2, 3]);
        s.map(|v| v * 10);
        assert_eq!(sorted(&s), vec![10, 20, 30]);

        // a collapsing transform shrinks the cardinality
        let mut s = set(&[1, 2, 3, 4]);
        s.map(|v| v / 2);
        assert_eq!(sorted(&s), vec![0, 1, 2]);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = set(&[1, 2]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.insert(3);
        original.remove(&1);
        assert_eq!(sorted(&original), vec![2]);
        assert_eq!(sorted(&copy), vec![1, 2, 3]);
    }

    #[test]
    fn merge_matches_element_wise_union() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let a: Set<i32> = (0..rng.random_range(0..20))
                .map(|_| rng.random_range(0..15))
                .collect();
            let b: Set<i32> = (0..rng.random_range(0..20))
                .map(|_| rng.random_range(0..15))
                .collect();

            let mut merged = a.clone();
            merged.merge(&[&b]);

            let union: Set<i32> = a.iter().chain(b.iter()).copied().collect();
            assert_eq!(merged, union);
        }
    }
}
