pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

/// Best known state of one discovered node during a search
/// C: Cost of reaching the node from the start
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchNode<C> {
    pub(crate) parent: usize, // index of the parent in the node map, usize::MAX for the start node
    pub(crate) g: C, // lowest known cost from the start
    pub(crate) f: C, // g + heuristic estimate to the goal
    pub(crate) closed: bool, // expanded, neighbors have been generated
}

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// There is exactly one entry per discovered node, entries are never removed so indices are stable
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, SearchNode<C>>;
