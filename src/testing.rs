use super::graph::*;
use rand::Rng;

/// Counts components with a union-find over the edge list, independently of
/// any traversal.
pub fn union_find_components(n: NumNodes, edges: impl IntoIterator<Item = Edge>) -> NumNodes {
    fn find(parent: &mut [Node], mut u: Node) -> Node {
        while parent[u as usize] != u {
            parent[u as usize] = parent[parent[u as usize] as usize];
            u = parent[u as usize];
        }
        u
    }

    let mut parent: Vec<Node> = (0..n).collect();
    let mut count = n;

    for Edge(u, v) in edges {
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        if ru != rv {
            parent[ru as usize] = rv;
            count -= 1;
        }
    }

    count
}

/// Endless stream of random graphs with varying size and density, paired with the
/// number of components computed by [`union_find_components`].
pub fn random_graphs_with_components(
    rng: &mut impl Rng,
) -> impl Iterator<Item = (AdjArray, NumNodes)> + '_ {
    (0..).map(move |i| {
        let n = rng.gen_range(1..60);
        let avg_deg = [0.0, 0.5, 1.0, 2.0, 4.0][i % 5];
        let graph = AdjArray::random_gnp_with_avg_deg(rng, n, avg_deg);
        let expected = union_find_components(n, graph.edges());
        (graph, expected)
    })
}

#[test]
fn union_find_reference() {
    assert_eq!(union_find_components(5, []), 5);
    assert_eq!(
        union_find_components(5, [Edge(0, 1), Edge(3, 4), Edge(1, 0), Edge(2, 2)]),
        3
    );
}
