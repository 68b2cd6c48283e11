use super::*;
use crate::errors::{InvariantCheck, ScoalaError};
use itertools::Itertools;
use std::fmt;

/// Adjacency array of an undirected multigraph. Each node owns a growable
/// neighborhood; an insertion conceptually prepends, so neighbors are
/// reported newest first.
#[derive(Clone, Default)]
pub struct AdjArray {
    adj: Vec<Neighborhood>,
    number_of_edges: NumEdges,
}

macro_rules! forward {
    ($single : ident, $internal : ident, $type : ty) => {
        fn $single(&self, node: Node) -> $type {
            self.adj[node as usize].$internal()
        }
    };
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyList for AdjArray {
    forward!(degree_of, degree, NumNodes);

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj[u as usize].neighbors()
    }
}

impl GraphNew for AdjArray {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Default::default(); number_of_nodes as usize],
            number_of_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node) -> crate::errors::Result<()> {
        let n = self.number_of_nodes();
        if u >= n || v >= n {
            return Err(ScoalaError::InvalidEdgeEndpoint {
                u: u as i64,
                v: v as i64,
                n,
            });
        }

        self.adj[u as usize].push(v);
        self.adj[v as usize].push(u);
        self.number_of_edges += 1;

        Ok(())
    }
}

impl AdjArray {
    /// Like [`GraphNew::new`] but reports a failed allocation of the node table
    /// instead of aborting.
    pub fn try_new(number_of_nodes: NumNodes) -> crate::errors::Result<Self> {
        Ok(Self {
            adj: allocate_neighborhoods(number_of_nodes as usize, number_of_nodes)?,
            number_of_edges: 0,
        })
    }

    /// Returns every stored edge once (parallel edges repeated), grouped by the smaller endpoint
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| {
            // a loop is stored twice at its node
            let mut odd_loop = false;
            self.adj[u as usize]
                .nodes
                .iter()
                .filter(move |&&v| {
                    u < v || (u == v && {
                        odd_loop = !odd_loop;
                        odd_loop
                    })
                })
                .map(move |&v| Edge(u, v))
        })
    }

    pub fn test_only_from(edges: impl Clone + IntoIterator<Item = impl Into<Edge>>) -> Self {
        let n = edges
            .clone()
            .into_iter()
            .map(|e| e.into())
            .map(|e| e.0.max(e.1) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Self::new(n as NumNodes);

        graph.add_edges(edges);

        graph
    }
}

fn allocate_neighborhoods(
    len: usize,
    number_of_nodes: NumNodes,
) -> crate::errors::Result<Vec<Neighborhood>> {
    let mut adj = Vec::new();
    adj.try_reserve_exact(len)
        .map_err(|_| ScoalaError::AllocationFailure { n: number_of_nodes })?;
    adj.resize_with(len, Default::default);
    Ok(adj)
}

#[derive(Default, Clone)]
struct Neighborhood {
    nodes: Vec<Node>,
}

impl Neighborhood {
    fn degree(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().rev().copied()
    }

    fn sorted(&self) -> Vec<Node> {
        let mut nodes = self.nodes.clone();
        nodes.sort_unstable();
        nodes
    }

    fn push(&mut self, v: Node) {
        self.nodes.push(v);
    }
}

impl InvariantCheck<ScoalaError> for AdjArray {
    /// Checks that every non-loop edge is listed equally often at both endpoints.
    /// Runs in O(m log m).
    fn is_correct(&self) -> std::result::Result<(), ScoalaError> {
        let n = self.number_of_nodes();
        let sorted: Vec<Vec<Node>> = self.adj.iter().map(|nh| nh.sorted()).collect();

        let multiplicity = |u: Node, v: Node| {
            let list = &sorted[u as usize];
            list.partition_point(|&x| x <= v) - list.partition_point(|&x| x < v)
        };

        for u in self.vertices() {
            for (forward, v) in sorted[u as usize].iter().copied().dedup_with_count() {
                if v >= n {
                    return Err(ScoalaError::InvalidEdgeEndpoint {
                        u: u as i64,
                        v: v as i64,
                        n,
                    });
                }

                if u == v {
                    continue;
                }

                let backward = multiplicity(v, u);
                if forward != backward {
                    return Err(ScoalaError::AsymmetricAdjacency {
                        u,
                        v,
                        forward,
                        backward,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Renders the adjacency lists with 1-based city ids
impl fmt::Display for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nGraph Adjacency Lists:")?;
        for u in self.vertices() {
            write!(f, "{:>2}: [ ", u + 1)?;
            for v in self.neighbors_of(u) {
                write!(f, "{} ", v + 1)?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph G {{")?;
        for Edge(u, v) in self.edges() {
            write!(f, "v{u}--v{v}; ")?;
        }
        write!(f, "}}")
    }
}
