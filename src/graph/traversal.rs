use super::*;
use log::trace;

/// Depth-first search with an explicit stack; a node is marked when it is first
/// pushed, so every node is reported at most once and no recursion is involved.
pub struct DFS<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: Vec<bool>,
    first_unvisited: Node,
    stack: Vec<Node>,
}

impl<G: AdjacencyList> Iterator for DFS<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;
        let graph = self.graph;

        for v in graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.stack.push(v);
            }
        }

        Some(u)
    }
}

impl<'a, G: AdjacencyList> DFS<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            first_unvisited: 0,
            stack: vec![start],
        }
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.stack.is_empty());

        while (self.first_unvisited as usize) < self.visited.len()
            && self.visited[self.first_unvisited as usize]
        {
            self.first_unvisited += 1;
        }

        if self.first_unvisited as usize == self.visited.len() {
            return false;
        }

        let x = self.first_unvisited;
        trace!("restart search at node {x}");
        self.visited[x as usize] = true;
        self.stack.push(x);
        true
    }
}

/// Offers graph traversal algorithms as methods of the graph representation
pub trait Traversal: AdjacencyList {
    /// Returns an iterator traversing nodes in depth-first-search order
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<T: AdjacencyList> Traversal for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn path_with_branch() -> AdjArray {
        //  0 - 1 - 2
        //      |
        //      3 - 4     5
        AdjArray::test_only_from([(0, 1), (1, 2), (1, 3), (3, 4), (5, 5)])
    }

    #[test]
    fn dfs_order() {
        let graph = path_with_branch();

        // neighbors of 1 are reported newest first: 3, 2, 0
        let order = graph.dfs(1).collect_vec();
        assert_eq!(order, [1, 0, 2, 3, 4]);
    }

    #[test]
    fn restart() {
        let graph = path_with_branch();
        let mut dfs = graph.dfs(2);

        assert_eq!(dfs.by_ref().sorted().collect_vec(), [0, 1, 2, 3, 4]);
        assert!(dfs.try_restart_at_unvisited());
        assert_eq!(dfs.by_ref().collect_vec(), [5]);
        assert!(!dfs.try_restart_at_unvisited());
    }

    #[test]
    fn long_path_without_recursion() {
        let n = 200_000;
        let graph = AdjArray::test_only_from((1..n).map(|u| (u - 1, u)));
        assert_eq!(graph.dfs(0).count(), n as usize);
    }
}
