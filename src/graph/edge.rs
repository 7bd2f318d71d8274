//! The edge descriptor.

use core::fmt;

use crate::graph::IndexType;

/// A directed edge, identified by its `(source, target)` pair.
///
/// An edge is a plain value: it carries no handle into graph storage, so it can
/// be copied, compared and hashed freely. The derived ordering (source first,
/// then target) is the canonical order in which [`Edges`](crate::graph::Edges)
/// yields edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<Ix = usize> {
    /// The vertex the edge leaves.
    pub source: Ix,
    /// The vertex the edge enters.
    pub target: Ix,
}

impl<Ix: IndexType> Edge<Ix> {
    /// Creates the edge `source -> target`.
    #[inline]
    pub const fn new(source: Ix, target: Ix) -> Self {
        Self { source, target }
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the edge as a `(source, target)` tuple.
    #[inline]
    pub fn into_pair(self) -> (Ix, Ix) {
        (self.source, self.target)
    }
}

impl<Ix: IndexType> From<(Ix, Ix)> for Edge<Ix> {
    #[inline]
    fn from((source, target): (Ix, Ix)) -> Self {
        Self::new(source, target)
    }
}

impl<Ix: fmt::Display> fmt::Display for Edge<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::Edge;

    #[test]
    fn orders_by_source_then_target() {
        let mut edges = vec![
            Edge::new(2u32, 0),
            Edge::new(0, 3),
            Edge::new(1, 1),
            Edge::new(0, 1),
        ];
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new(0, 1), Edge::new(0, 3), Edge::new(1, 1), Edge::new(2, 0)]
        );
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Edge::new(4usize, 7).to_string(), "(4,7)");
    }

    #[test]
    fn converts_to_and_from_tuples() {
        let e: Edge<u16> = (3, 9).into();
        assert!(!e.is_self_loop());
        assert_eq!(e.into_pair(), (3, 9));
        assert!(Edge::new(5u8, 5).is_self_loop());
    }
}
