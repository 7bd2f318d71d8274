use std::collections::BTreeSet;

use adjgraph::{DirectedGraph, Edge};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex,
    AddEdge(u8, u8),
    Lookup(u8, u8),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            1 => Just(Operation::AddVertex),
            4 => (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Operation::AddEdge(a, b)),
            1 => (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Operation::Lookup(a, b)),
        ],
        1..200,
    )
}

proptest! {
    #[test]
    fn graph_matches_set_model(ops in operations()) {
        let mut model: Vec<BTreeSet<u32>> = Vec::new();
        let mut g = DirectedGraph::<u32>::new();

        for op in ops {
            match op {
                Operation::AddVertex => {
                    let v = g.add_vertex();
                    prop_assert_eq!(v as usize, model.len());
                    model.push(BTreeSet::new());
                }
                Operation::AddEdge(a, b) if !model.is_empty() => {
                    let n = model.len() as u32;
                    let (a, b) = (u32::from(a) % n, u32::from(b) % n);
                    let expected = model[a as usize].insert(b);
                    let (edge, inserted) = g.add_edge(a, b);
                    prop_assert_eq!(inserted, expected, "add_edge({}, {})", a, b);
                    prop_assert_eq!(edge, Edge::new(a, b));
                }
                Operation::Lookup(a, b) if !model.is_empty() => {
                    let n = model.len() as u32;
                    let (a, b) = (u32::from(a) % n, u32::from(b) % n);
                    prop_assert_eq!(g.edge(a, b).1, model[a as usize].contains(&b));
                }
                Operation::AddEdge(a, b) | Operation::Lookup(a, b) => {
                    prop_assert!(g.try_add_edge(u32::from(a), u32::from(b)).is_err());
                }
            }
        }

        prop_assert!(g.is_valid());
        prop_assert_eq!(g.num_vertices(), model.len());

        let expected: Vec<Edge<u32>> = model
            .iter()
            .enumerate()
            .flat_map(|(a, targets)| targets.iter().map(move |&b| Edge::new(a as u32, b)))
            .collect();
        prop_assert_eq!(g.num_edges(), expected.len());
        prop_assert_eq!(g.edges().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(g.edges().len(), expected.len());

        let mut reversed: Vec<_> = g.edges().rev().collect();
        reversed.reverse();
        prop_assert_eq!(reversed, expected);

        for (a, targets) in model.iter().enumerate() {
            let v = a as u32;
            prop_assert_eq!(
                g.adjacent_vertices(v).collect::<Vec<_>>(),
                targets.iter().copied().collect::<Vec<_>>()
            );
            prop_assert_eq!(g.out_degree(v), targets.len());
        }
    }

    #[test]
    fn edges_len_tracks_every_step(pairs in proptest::collection::vec((0u32..12, 0u32..12), 0..60)) {
        let g = DirectedGraph::<u32>::from_edges(pairs);
        let mut edges = g.edges();
        let mut remaining = g.num_edges();
        let mut previous: Option<Edge<u32>> = None;
        loop {
            prop_assert_eq!(edges.len(), remaining);
            let Some(edge) = edges.next() else { break };
            if let Some(prev) = previous {
                prop_assert!(prev < edge);
            }
            previous = Some(edge);
            remaining -= 1;
        }
        prop_assert_eq!(remaining, 0);
        prop_assert_eq!(edges, adjgraph::graph::Edges::end(&g));
    }

    #[test]
    fn nth_matches_stepping(pairs in proptest::collection::vec((0u32..10, 0u32..10), 0..40), k in 0usize..50) {
        let g = DirectedGraph::<u32>::from_edges(pairs);
        let mut stepped = g.edges();
        let expected = (0..=k).map(|_| stepped.next()).last().flatten();
        let mut jumped = g.edges();
        prop_assert_eq!(jumped.nth(k), expected);
        prop_assert_eq!(jumped, stepped);
    }
}
