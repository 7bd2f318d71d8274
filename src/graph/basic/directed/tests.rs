//! Tests for the directed adjacency-list graph.

use super::*;

fn diamond() -> DirectedGraph<u32> {
    // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 3 -> (none) ; 4 isolated
    let mut g = DirectedGraph::with_vertices(5);
    g.add_edge(0, 2);
    g.add_edge(0, 1);
    g.add_edge(2, 3);
    g.add_edge(1, 3);
    g
}

#[test]
fn fresh_graph_is_empty() {
    let g = DirectedGraph::<usize>::new();
    assert_eq!(g.num_vertices(), 0);
    assert_eq!(g.num_edges(), 0);
    assert!(g.is_valid());
    assert_eq!(g.vertices().next(), None);
    assert_eq!(g.edges().next(), None);
    assert_eq!(g, DirectedGraph::default());
}

#[test]
fn add_vertex_hands_out_dense_ids() {
    let mut g = DirectedGraph::<u16>::new();
    for expected in 0..100u16 {
        assert_eq!(g.add_vertex(), expected);
        assert_eq!(g.num_vertices(), usize::from(expected) + 1);
    }
    assert!(g.contains_vertex(99));
    assert!(!g.contains_vertex(100));
}

#[test]
fn add_edge_is_idempotent() {
    let mut g = DirectedGraph::<u32>::with_vertices(2);
    let (first, inserted) = g.add_edge(0, 1);
    assert!(inserted);
    let (second, inserted) = g.add_edge(0, 1);
    assert!(!inserted);
    assert_eq!(first, second);
    assert_eq!(g.num_edges(), 1);
    assert!(g.is_valid());
}

#[test]
fn self_loop_counts_once() {
    let mut g = DirectedGraph::<u32>::new();
    let a = g.add_vertex();
    assert!(g.add_edge(a, a).1);
    assert!(!g.add_edge(a, a).1);
    assert_eq!(g.num_edges(), 1);
    assert_eq!(g.edges().collect::<Vec<_>>(), vec![Edge::new(a, a)]);
    assert_eq!(g.adjacent_vertices(a).collect::<Vec<_>>(), vec![a]);
}

#[test]
fn edge_lookup_reports_presence() {
    let g = diamond();
    let (e, present) = g.edge(0, 2);
    assert!(present);
    assert_eq!(g.source(e), 0);
    assert_eq!(g.target(e), 2);

    let (e, present) = g.edge(3, 0);
    assert!(!present);
    assert_eq!(e, Edge::new(3, 0));
}

#[test]
fn adjacency_is_ascending() {
    let g = diamond();
    assert_eq!(g.adjacent_vertices(0).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(g.adjacent_vertices(0).rev().collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(g.adjacent_vertices(3).len(), 0);
    assert_eq!(g.adjacent_vertices(1).source(), 1);
    assert_eq!(g.out_degree(0), 2);
    assert_eq!(
        g.out_edges(0).collect::<Vec<_>>(),
        vec![Edge::new(0, 1), Edge::new(0, 2)]
    );
}

#[test]
fn edges_follow_canonical_order_and_skip_empty_vertices() {
    let g = diamond();
    let edges: Vec<_> = g.edges().map(Edge::into_pair).collect();
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);

    let mut reversed: Vec<_> = g.edges().rev().collect();
    reversed.reverse();
    assert_eq!(reversed, g.edges().collect::<Vec<_>>());
}

#[test]
fn edges_skip_leading_empty_vertices() {
    let mut g = DirectedGraph::<usize>::with_vertices(6);
    g.add_edge(4, 1);
    g.add_edge(2, 5);
    assert_eq!(
        g.edges().collect::<Vec<_>>(),
        vec![Edge::new(2, 5), Edge::new(4, 1)]
    );
    assert_eq!(g.edges().next_back(), Some(Edge::new(4, 1)));
}

#[test]
fn edges_without_any_edge_start_at_end() {
    let g = DirectedGraph::<u32>::with_vertices(3);
    let edges = g.edges();
    assert_eq!(edges.len(), 0);
    assert_eq!(edges, Edges::end(&g));

    let empty = DirectedGraph::<u32>::new();
    assert_eq!(empty.edges(), Edges::end(&empty));
    assert_eq!(empty.vertices().len(), 0);
}

#[test]
fn exhausted_edges_equal_end_from_either_direction() {
    let g = diamond();

    let mut forward = g.edges();
    forward.by_ref().for_each(drop);
    assert_eq!(forward, Edges::end(&g));

    let mut backward = g.edges();
    while backward.next_back().is_some() {}
    assert_eq!(backward, Edges::end(&g));

    let mut mixed = g.edges();
    mixed.next();
    mixed.next_back();
    mixed.next_back();
    assert_eq!(mixed.next(), Some(Edge::new(0, 2)));
    assert_eq!(mixed.next(), None);
    assert_eq!(mixed, Edges::end(&g));
}

#[test]
fn cursors_from_different_graphs_are_never_equal() {
    let g = diamond();
    let h = g.clone();
    assert_eq!(g.vertices(), g.vertices());
    assert_ne!(g.vertices(), h.vertices());
    assert_ne!(g.edges(), h.edges());
    assert_ne!(Edges::end(&g), Edges::end(&h));
    assert_ne!(g.adjacent_vertices(0), h.adjacent_vertices(0));
    assert_ne!(g.adjacent_vertices(0), g.adjacent_vertices(1));
}

#[test]
fn cursor_equality_tracks_position() {
    let g = diamond();
    let mut a = g.vertices();
    let b = g.vertices();
    a.next();
    assert_ne!(a, b);
    let mut b = b;
    b.next();
    assert_eq!(a, b);

    let mut edges = g.edges();
    let snapshot = edges.clone();
    edges.next();
    assert_ne!(edges, snapshot);
}

#[test]
fn vertices_nth_is_a_jump() {
    let g = DirectedGraph::<u32>::with_vertices(10);
    let mut vertices = g.vertices();
    assert_eq!(vertices.nth(3), Some(3));
    assert_eq!(vertices.len(), 6);
    assert_eq!(vertices.nth_back(2), Some(7));
    assert_eq!(vertices.collect::<Vec<_>>(), vec![4, 5, 6]);

    let mut vertices = g.vertices();
    assert_eq!(vertices.nth(10), None);
    assert_eq!(vertices.next(), None);
    assert_eq!(vertices.next_back(), None);
}

#[test]
fn edges_nth_matches_repeated_next() {
    let mut g = DirectedGraph::<u32>::with_vertices(8);
    for (a, b) in [(0, 7), (0, 1), (3, 3), (3, 2), (3, 0), (6, 4), (7, 7)] {
        g.add_edge(a, b);
    }
    let all: Vec<_> = g.edges().collect();
    for k in 0..=all.len() {
        assert_eq!(g.edges().nth(k), all.get(k).copied(), "nth({k})");
        assert_eq!(
            g.edges().nth_back(k),
            all.iter().rev().nth(k).copied(),
            "nth_back({k})"
        );
    }

    let mut edges = g.edges();
    assert_eq!(edges.nth(2), Some(Edge::new(3, 0)));
    assert_eq!(edges.nth_back(1), Some(Edge::new(6, 4)));
    assert_eq!(edges.len(), 2);
    assert_eq!(
        edges.collect::<Vec<_>>(),
        vec![Edge::new(3, 2), Edge::new(3, 3)]
    );
}

#[test]
fn clone_is_deep() {
    let mut g = diamond();
    let mut h = g.clone();
    g.add_vertex();
    assert_eq!(h.num_vertices(), 5);
    h.add_edge(4, 0);
    assert_eq!(g.num_edges(), 4);
    assert!(!g.edge(4, 0).1);
    assert!(h.edge(4, 0).1);
}

#[test]
fn from_edges_grows_vertex_range() {
    let g = DirectedGraph::<u8>::from_edges([(2, 0), (0, 5), (2, 0)]);
    assert_eq!(g.num_vertices(), 6);
    assert_eq!(g.num_edges(), 2);
    assert!(g.is_valid());
}

#[test]
fn try_operations_report_out_of_bounds() {
    let mut g = DirectedGraph::<u32>::with_vertices(2);
    let err = GraphError::VertexOutOfBounds {
        vertex: 2,
        num_vertices: 2,
    };
    assert_eq!(g.try_add_edge(2, 0), Err(err));
    assert_eq!(g.try_add_edge(0, 2), Err(err));
    assert_eq!(g.try_edge(0, 2), Err(err));
    assert_eq!(g.try_adjacent_vertices(2).err(), Some(err));
    assert_eq!(g.num_edges(), 0);
    assert_eq!(g.try_add_edge(1, 0), Ok((Edge::new(1, 0), true)));
    assert_eq!(
        err.to_string(),
        "vertex 2 out of bounds for graph with 2 vertices"
    );
}

#[test]
fn try_add_vertex_reports_index_overflow() {
    let mut g = DirectedGraph::<u8>::with_vertices(256);
    assert_eq!(
        g.try_add_vertex(),
        Err(GraphError::IndexOverflow { index: 256 })
    );
    assert_eq!(g.num_vertices(), 256);
}

#[test]
#[should_panic(expected = "vertex 3 out of bounds")]
fn add_edge_panics_on_unknown_source() {
    let mut g = DirectedGraph::<u32>::with_vertices(3);
    g.add_edge(3, 0);
}

#[test]
#[should_panic(expected = "vertex 7 out of bounds")]
fn adjacent_vertices_panics_on_unknown_vertex() {
    let g = DirectedGraph::<usize>::with_vertices(1);
    let _ = g.adjacent_vertices(7);
}

#[test]
#[should_panic(expected = "vertex 0 out of bounds")]
fn vertex_panics_past_the_end() {
    let g = DirectedGraph::<usize>::new();
    let _ = g.vertex(0);
}

#[test]
fn debug_lists_edges() {
    let mut g = DirectedGraph::<u32>::with_vertices(2);
    g.add_edge(1, 0);
    assert_eq!(
        format!("{g:?}"),
        "DirectedGraph { num_vertices: 2, num_edges: 1, edges: [(1, 0)] }"
    );
}
