pub mod adj_array;
pub mod connectivity;
pub mod edge;
pub mod gnp;
pub mod traversal;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

use std::ops::Range;

pub use adj_array::*;
pub use connectivity::*;
pub use edge::*;
pub use gnp::*;
pub use traversal::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> Node;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns a range of vertices. In contrast to self.vertices(), the range does
    /// not borrow self and hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, parallel edges included
    fn number_of_edges(&self) -> NumEdges;
}

pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the neighbors of a given vertex, most recently inserted first.
    /// ** Panics if the v >= n **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of from [`u`]
    fn degree_of(&self, u: Node) -> NumNodes;

    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }
}

pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Adds the undirected edge *{u,v}* to the graph.
    /// ** Panics if u, v >= n **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(
            self.try_add_edge(u, v).is_ok(),
            "edge ({u}, {v}) out of range"
        );
    }

    /// Adds the undirected edge *{u,v}* to the graph. Parallel edges and loops are
    /// stored as given. Fails if an endpoint is not a node of the graph.
    fn try_add_edge(&mut self, u: Node, v: Node) -> crate::errors::Result<()>;

    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}
