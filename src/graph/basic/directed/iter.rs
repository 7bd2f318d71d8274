//! Cursors over a [`DirectedGraph`].
//!
//! Every cursor is a small state tuple: a shared reference to the graph plus the
//! positions of its front and back ends. Two cursors are equal only if they walk
//! the same graph instance and sit at the same positions.

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;

use super::DirectedGraph;
use crate::graph::{Edge, IndexType};

/// Iterator over the vertex ids of a graph, in ascending order.
///
/// `nth` and `nth_back` reposition in constant time.
pub struct Vertices<'a, Ix> {
    graph: &'a DirectedGraph<Ix>,
    front: usize,
    back: usize,
}

impl<'a, Ix: IndexType> Vertices<'a, Ix> {
    #[inline]
    pub(super) fn new(graph: &'a DirectedGraph<Ix>) -> Self {
        Self {
            graph,
            front: 0,
            back: graph.num_vertices(),
        }
    }
}

impl<Ix: IndexType> Iterator for Vertices<'_, Ix> {
    type Item = Ix;

    #[inline]
    fn next(&mut self) -> Option<Ix> {
        if self.front < self.back {
            let vertex = Ix::new(self.front);
            self.front += 1;
            Some(vertex)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Ix> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<Ix: IndexType> DoubleEndedIterator for Vertices<'_, Ix> {
    #[inline]
    fn next_back(&mut self) -> Option<Ix> {
        if self.front < self.back {
            self.back -= 1;
            Some(Ix::new(self.back))
        } else {
            None
        }
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Ix> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<Ix: IndexType> ExactSizeIterator for Vertices<'_, Ix> {}
impl<Ix: IndexType> FusedIterator for Vertices<'_, Ix> {}

impl<Ix> Clone for Vertices<'_, Ix> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            front: self.front,
            back: self.back,
        }
    }
}

impl<Ix> PartialEq for Vertices<'_, Ix> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.front == other.front && self.back == other.back
    }
}

impl<Ix> Eq for Vertices<'_, Ix> {}

impl<Ix> fmt::Debug for Vertices<'_, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertices")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// Iterator over the targets of one vertex's out-edges, in ascending order.
pub struct AdjacentVertices<'a, Ix> {
    graph: &'a DirectedGraph<Ix>,
    source: usize,
    targets: &'a [Ix],
    front: usize,
    back: usize,
}

impl<'a, Ix: IndexType> AdjacentVertices<'a, Ix> {
    #[inline]
    pub(super) fn new(graph: &'a DirectedGraph<Ix>, source: usize) -> Self {
        let targets = graph.adjacency[source].as_slice();
        Self {
            graph,
            source,
            targets,
            front: 0,
            back: targets.len(),
        }
    }

    /// Returns the vertex whose out-edges are being walked.
    #[inline]
    pub fn source(&self) -> Ix {
        Ix::new(self.source)
    }
}

impl<Ix: IndexType> Iterator for AdjacentVertices<'_, Ix> {
    type Item = Ix;

    #[inline]
    fn next(&mut self) -> Option<Ix> {
        if self.front < self.back {
            let target = self.targets[self.front];
            self.front += 1;
            Some(target)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Ix> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<Ix: IndexType> DoubleEndedIterator for AdjacentVertices<'_, Ix> {
    #[inline]
    fn next_back(&mut self) -> Option<Ix> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.targets[self.back])
        } else {
            None
        }
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Ix> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<Ix: IndexType> ExactSizeIterator for AdjacentVertices<'_, Ix> {}
impl<Ix: IndexType> FusedIterator for AdjacentVertices<'_, Ix> {}

impl<Ix> Clone for AdjacentVertices<'_, Ix> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            source: self.source,
            targets: self.targets,
            front: self.front,
            back: self.back,
        }
    }
}

impl<Ix> PartialEq for AdjacentVertices<'_, Ix> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph)
            && self.source == other.source
            && self.front == other.front
            && self.back == other.back
    }
}

impl<Ix> Eq for AdjacentVertices<'_, Ix> {}

impl<Ix> fmt::Debug for AdjacentVertices<'_, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacentVertices")
            .field("source", &self.source)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// Iterator over one vertex's out-edges, in ascending target order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutEdges<'a, Ix> {
    targets: AdjacentVertices<'a, Ix>,
}

impl<'a, Ix: IndexType> OutEdges<'a, Ix> {
    #[inline]
    pub(super) fn new(graph: &'a DirectedGraph<Ix>, source: usize) -> Self {
        Self {
            targets: AdjacentVertices::new(graph, source),
        }
    }
}

impl<Ix: IndexType> Iterator for OutEdges<'_, Ix> {
    type Item = Edge<Ix>;

    #[inline]
    fn next(&mut self) -> Option<Edge<Ix>> {
        let target = self.targets.next()?;
        Some(Edge::new(self.targets.source(), target))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Edge<Ix>> {
        let target = self.targets.nth(n)?;
        Some(Edge::new(self.targets.source(), target))
    }
}

impl<Ix: IndexType> DoubleEndedIterator for OutEdges<'_, Ix> {
    #[inline]
    fn next_back(&mut self) -> Option<Edge<Ix>> {
        let target = self.targets.next_back()?;
        Some(Edge::new(self.targets.source(), target))
    }
}

impl<Ix: IndexType> ExactSizeIterator for OutEdges<'_, Ix> {}
impl<Ix: IndexType> FusedIterator for OutEdges<'_, Ix> {}

/// A position in the canonical edge order: the `offset`-th out-edge of `vertex`.
///
/// `(num_vertices, 0)` is the end position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct EdgePosition {
    vertex: usize,
    offset: usize,
}

/// Iterator over every edge of a graph in canonical order: ascending source,
/// then ascending target.
///
/// Vertices without out-edges are skipped. While edges remain, the front
/// position always names a stored edge and the back position is exclusive.
/// Once the cursor runs dry from either end both positions collapse onto the
/// end position, so an exhausted cursor compares equal to [`Edges::end`] and to
/// a fresh cursor over an edgeless graph.
pub struct Edges<'a, Ix> {
    graph: &'a DirectedGraph<Ix>,
    front: EdgePosition,
    back: EdgePosition,
    remaining: usize,
}

impl<'a, Ix: IndexType> Edges<'a, Ix> {
    pub(super) fn new(graph: &'a DirectedGraph<Ix>) -> Self {
        if graph.num_edges() == 0 {
            return Self::end(graph);
        }
        let mut edges = Self {
            graph,
            front: EdgePosition {
                vertex: 0,
                offset: 0,
            },
            back: Self::end_position(graph),
            remaining: graph.num_edges(),
        };
        edges.settle_front();
        edges
    }

    /// Returns the exhausted cursor over `graph`'s edges.
    pub fn end(graph: &'a DirectedGraph<Ix>) -> Self {
        let end = Self::end_position(graph);
        Self {
            graph,
            front: end,
            back: end,
            remaining: 0,
        }
    }

    #[inline]
    fn end_position(graph: &DirectedGraph<Ix>) -> EdgePosition {
        EdgePosition {
            vertex: graph.num_vertices(),
            offset: 0,
        }
    }

    #[inline]
    fn targets(&self, vertex: usize) -> &'a [Ix] {
        self.graph.adjacency[vertex].as_slice()
    }

    /// Moves the front past exhausted and empty out-edge sets.
    fn settle_front(&mut self) {
        let n = self.graph.num_vertices();
        while self.front.vertex < n && self.front.offset >= self.targets(self.front.vertex).len() {
            self.front.vertex += 1;
            self.front.offset = 0;
        }
    }

    fn exhaust(&mut self) {
        let end = Self::end_position(self.graph);
        self.front = end;
        self.back = end;
        self.remaining = 0;
    }

    #[inline]
    fn edge_at(&self, pos: EdgePosition) -> Edge<Ix> {
        Edge::new(Ix::new(pos.vertex), self.targets(pos.vertex)[pos.offset])
    }
}

impl<Ix: IndexType> Iterator for Edges<'_, Ix> {
    type Item = Edge<Ix>;

    fn next(&mut self) -> Option<Edge<Ix>> {
        if self.remaining == 0 {
            return None;
        }
        let edge = self.edge_at(self.front);
        self.remaining -= 1;
        if self.remaining == 0 {
            self.exhaust();
        } else {
            self.front.offset += 1;
            self.settle_front();
        }
        Some(edge)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    /// Skips whole out-edge sets at a time.
    fn nth(&mut self, n: usize) -> Option<Edge<Ix>> {
        if n >= self.remaining {
            self.exhaust();
            return None;
        }
        let mut skip = n;
        loop {
            let available = self.targets(self.front.vertex).len() - self.front.offset;
            if skip < available {
                self.front.offset += skip;
                break;
            }
            skip -= available;
            self.front.vertex += 1;
            self.front.offset = 0;
        }
        self.remaining -= n;
        self.next()
    }
}

impl<Ix: IndexType> DoubleEndedIterator for Edges<'_, Ix> {
    fn next_back(&mut self) -> Option<Edge<Ix>> {
        if self.remaining == 0 {
            return None;
        }
        // An edge precedes `back`, so this walk stops before vertex 0 underflows.
        while self.back.offset == 0 {
            self.back.vertex -= 1;
            self.back.offset = self.targets(self.back.vertex).len();
        }
        self.back.offset -= 1;
        let edge = self.edge_at(self.back);
        self.remaining -= 1;
        if self.remaining == 0 {
            self.exhaust();
        }
        Some(edge)
    }

    fn nth_back(&mut self, n: usize) -> Option<Edge<Ix>> {
        if n >= self.remaining {
            self.exhaust();
            return None;
        }
        let mut skip = n;
        loop {
            if skip < self.back.offset {
                self.back.offset -= skip;
                break;
            }
            skip -= self.back.offset;
            self.back.vertex -= 1;
            self.back.offset = self.targets(self.back.vertex).len();
        }
        self.remaining -= n;
        self.next_back()
    }
}

impl<Ix: IndexType> ExactSizeIterator for Edges<'_, Ix> {}
impl<Ix: IndexType> FusedIterator for Edges<'_, Ix> {}

impl<Ix> Clone for Edges<'_, Ix> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<Ix> PartialEq for Edges<'_, Ix> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.front == other.front && self.back == other.back
    }
}

impl<Ix> Eq for Edges<'_, Ix> {}

impl<Ix> fmt::Debug for Edges<'_, Ix> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edges")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("remaining", &self.remaining)
            .finish()
    }
}
