//! Per-vertex out-edge storage.

use crate::graph::IndexType;

/// The out-edge set of one vertex: its targets, sorted ascending, without
/// duplicates.
///
/// Backed by a contiguous vector so that traversal is a linear scan and a
/// position inside the set is a plain offset. Membership is a binary search;
/// insertion shifts the tail, which is cheap for the small out-degrees of a
/// sparse graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct OutEdgeSet<Ix> {
    targets: Vec<Ix>,
}

impl<Ix: IndexType> OutEdgeSet<Ix> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { targets: Vec::new() }
    }

    /// Inserts `target` if absent. Returns `true` if the set changed.
    pub(crate) fn insert(&mut self, target: Ix) -> bool {
        match self.targets.binary_search(&target) {
            Ok(_) => false,
            Err(pos) => {
                self.targets.insert(pos, target);
                true
            }
        }
    }

    #[inline]
    pub(crate) fn contains(&self, target: Ix) -> bool {
        self.targets.binary_search(&target).is_ok()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Ix] {
        &self.targets
    }

    /// Returns `true` if the targets are strictly ascending.
    pub(crate) fn is_strictly_sorted(&self) -> bool {
        self.targets.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::OutEdgeSet;

    #[test]
    fn insert_keeps_targets_sorted_and_unique() {
        let mut set = OutEdgeSet::<u32>::new();
        assert!(set.insert(5));
        assert!(set.insert(1));
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(!set.insert(5));
        assert_eq!(set.as_slice(), &[1, 3, 5]);
        assert_eq!(set.len(), 3);
        assert!(set.is_strictly_sorted());
    }

    #[test]
    fn contains_uses_sorted_order() {
        let mut set = OutEdgeSet::<usize>::new();
        assert_eq!(set.len(), 0);
        assert!(!set.contains(0));
        set.insert(8);
        set.insert(2);
        assert!(set.contains(2));
        assert!(set.contains(8));
        assert!(!set.contains(4));
    }
}
