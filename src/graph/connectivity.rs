use super::*;

pub type ComponentId = Node;

/// Connected components of an undirected graph, discovered by a depth-first
/// search started at every yet unvisited node in increasing order.
pub trait Connectivity: AdjacencyList {
    /// Assigns each node the id of its component. Ids are dense and numbered in the
    /// order in which the components are discovered, so node 0 always lies in component 0.
    /// Returns the labels together with the number of components.
    fn component_labels(&self) -> (Vec<ComponentId>, NumNodes);

    /// Returns the number of connected components; every isolated node counts as one
    fn number_of_connected_components(&self) -> NumNodes {
        self.component_labels().1
    }

    /// Returns the node sets of all components; each set is sorted ascendingly
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let (labels, count) = self.component_labels();
        let mut components = vec![Vec::new(); count as usize];
        for (u, &c) in labels.iter().enumerate() {
            components[c as usize].push(u as Node);
        }
        components
    }

    /// Returns true if the graph has exactly one component
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() == 1
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn component_labels(&self) -> (Vec<ComponentId>, NumNodes) {
        let mut labels = vec![ComponentId::MAX; self.len()];
        if self.is_empty() {
            return (labels, 0);
        }

        let mut dfs = self.dfs(0);
        let mut count: NumNodes = 0;

        loop {
            for u in dfs.by_ref() {
                labels[u as usize] = count;
            }
            count += 1;

            if !dfs.try_restart_at_unvisited() {
                break;
            }
        }

        debug_assert!(labels.iter().all(|&c| c < count));
        (labels, count)
    }

    fn number_of_connected_components(&self) -> NumNodes {
        if self.is_empty() {
            return 0;
        }

        let mut dfs = self.dfs(0);
        let mut count: NumNodes = 1;

        loop {
            dfs.by_ref().for_each(drop);
            if !dfs.try_restart_at_unvisited() {
                break;
            }
            count += 1;
        }

        count
    }
}
