use adjgraph::graph::traits::{AdjacencyGraph, VertexListGraph};
use adjgraph::{DirectedGraph, GraphError};

/// Counts vertices reachable from `start` using only the graph concepts.
fn reachable<G>(graph: &G, start: G::Vertex) -> usize
where
    G: VertexListGraph + AdjacencyGraph,
{
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        if seen.insert(u) {
            stack.extend(graph.adjacent_vertices(u));
        }
    }
    seen.len()
}

fn main() -> Result<(), GraphError> {
    let mut g = DirectedGraph::<u32>::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    let d = g.add_vertex();

    g.add_edge(a, c);
    g.add_edge(a, b);
    g.add_edge(b, d);
    let (_, inserted) = g.add_edge(a, b);
    println!("re-adding A->B inserted: {inserted}");

    println!("{} vertices, {} edges", g.num_vertices(), g.num_edges());
    for e in g.edges() {
        println!("  {e}");
    }
    println!(
        "adjacent to A: {:?}",
        g.adjacent_vertices(a).collect::<Vec<_>>()
    );
    println!("reachable from A: {}", reachable(&g, a));

    // Unknown vertices are reported, not silently indexed.
    match g.try_add_edge(a, 42) {
        Err(err) => println!("rejected: {err}"),
        Ok(_) => unreachable!("vertex 42 does not exist"),
    }

    let (_, present) = g.try_edge(c, a)?;
    println!("C->A present: {present}");
    Ok(())
}
