use crate::cost::PathCost;
use crate::errors::SearchError;
use crate::graph::Graph;
use super::{shortest_path, GraphNodeMap, SearchNode};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};



/// Entry on the open list
/// A node may have several entries after relaxations, only the one matching its best cost is live
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the node map - maps to the Id of the node
    seq: usize, // push order, earlier entries win ties on f_cost
    cost: T, // Cost to reach this node when the entry was pushed
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
}

// Min-heap on f_cost, then first pushed. Incomparable costs (NaN) count as equal
impl<T: PartialOrd> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for Node<T> {}


/// Planner settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Give up once this many nodes have been expanded, unbounded when None
    pub max_expansions: Option<usize>,
    /// Reopen a closed node when a cheaper path to it turns up.
    /// Only matters for inconsistent heuristics, keeps those optimal if they are admissible
    pub reopen_closed: bool,
}

/// Outcome of a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<N, C> {
    /// Nodes from start to goal, empty when no path was found
    pub path: Vec<N>,
    pub found: bool,
    /// Total edge cost of `path`, zero when no path was found
    pub cost: C,
    /// Number of nodes expanded (moved to the closed set)
    pub expanded: usize,
}

impl<N, C: Zero> SearchResult<N, C> {
    fn not_found(expanded: usize) -> Self {
        SearchResult {
            path: Vec::new(),
            found: false,
            cost: Zero::zero(),
            expanded,
        }
    }
}

impl<N, C> SearchResult<N, C> {
    /// The path if one was found
    pub fn into_path(self) -> Option<Vec<N>> {
        self.found.then_some(self.path)
    }
}

/// State left behind by a traversal
struct Exploration<N, C> {
    node_map: GraphNodeMap<N, C>,
    goal_index: Option<usize>,
    expanded: usize,
    limit_reached: bool,
}

impl<N: Clone, C: Zero + Copy> Exploration<N, C> {
    fn into_result(self) -> SearchResult<N, C> {
        match self.goal_index.and_then(|i| self.node_map.get_index(i).map(|(_, s)| (i, s.g))) {
            Some((goal_index, cost)) => SearchResult {
                path: shortest_path(&self.node_map, goal_index),
                found: true,
                cost,
                expanded: self.expanded,
            },
            None => SearchResult::not_found(self.expanded),
        }
    }
}


/// Find a lowest cost path from `start` to `goal`
/// An unreachable goal is not an error, it gives an empty path with `found == false`
pub fn search<G: Graph>(graph: &G, start: G::Node, goal: G::Node) -> SearchResult<G::Node, G::Cost> {
    AStar::default().explore(graph, start, goal).into_result()
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Debug, Clone, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        if config.max_expansions == Some(0) {
            return Err(SearchError::InvalidConfig("max_expansions must be at least 1".to_string()));
        }
        Ok(AStar { config })
    }

    /// Bound the search to `limit` expansions, a limit of zero is rejected like in `new`
    pub fn with_max_expansions(self, limit: usize) -> Result<Self, SearchError> {
        AStar::new(SearchConfig { max_expansions: Some(limit), ..self.config })
    }

    pub fn with_reopen_closed(mut self, reopen_closed: bool) -> Self {
        self.config.reopen_closed = reopen_closed;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// From start Node, traverse through graph until the goal is expanded
    /// The Approach has 2 requirements for an optimal path:
    /// 1. Edge costs are non-negative
    /// 2. The heuristic function is admissible and consistent (admissible is enough with `reopen_closed`)
    /// Fails only when `max_expansions` runs out before the goal is reached
    pub fn plan<G: Graph>(&self, graph: &G, start: G::Node, goal: G::Node) -> Result<SearchResult<G::Node, G::Cost>, SearchError> {
        let exploration = self.explore(graph, start, goal);

        if exploration.limit_reached {
            // limit_reached is only set when max_expansions is Some
            let limit = self.config.max_expansions.unwrap_or(exploration.expanded);
            return Err(SearchError::ExpansionLimitReached { limit });
        }

        Ok(exploration.into_result())
    }


    /// Traverses the graph using A* algorithm
    /// Returns the map of discovered nodes with their best costs along with the index of the goal node
    fn explore<G: Graph>(&self, graph: &G, start: G::Node, goal: G::Node) -> Exploration<G::Node, G::Cost> {
        debug!(?start, ?goal, "starting A* search");

        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic)
        let mut open_list: BinaryHeap<Node<G::Cost>> = BinaryHeap::new();
        let mut seq: usize = 0;

        // Every discovered node, open or closed. Closed nodes have their cost settled
        let mut node_map: GraphNodeMap<G::Node, G::Cost> = GraphNodeMap::default();

        let h_cost = graph.heuristic(&start, &goal);
        let start_index = node_map.insert_full(start, SearchNode {
            parent: usize::MAX,
            g: Zero::zero(),
            f: h_cost,
            closed: false,
        }).0;
        open_list.push(Node {
            index: start_index,
            seq,
            cost: Zero::zero(),
            f_cost: h_cost,
        });

        let mut expanded: usize = 0;

        while let Some(Node { index, cost, .. }) = open_list.pop() {

            let Some((node, search_node)) = node_map.get_index_mut(index) else {
                continue;
            };

            // Either already expanded, or a better path to this node was pushed after this entry
            if search_node.closed || cost > search_node.g {
                continue;
            }

            // Check if we've reached the goal
            if *node == goal {
                debug!(expanded, cost = ?search_node.g, "goal reached");
                return Exploration { node_map, goal_index: Some(index), expanded, limit_reached: false };
            }

            if self.config.max_expansions.is_some_and(|limit| expanded >= limit) {
                debug!(expanded, "expansion limit reached");
                return Exploration { node_map, goal_index: None, expanded, limit_reached: true };
            }

            search_node.closed = true;
            let c = search_node.g;
            expanded += 1;
            trace!(?node, cost = ?c, f_cost = ?search_node.f, "expanding node");

            // loop over neighbors
            for (neighbor, edge_cost) in graph.neighbors(node) {

                // new cost to reach this node = edge cost + node cost
                let new_cost = c.add_cost(edge_cost);

                let (neighbor_index, f_cost) = match node_map.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        let f_cost = new_cost.add_cost(graph.heuristic(e.key(), &goal));
                        let neighbor_index = e.index();
                        e.insert(SearchNode { parent: index, g: new_cost, f: f_cost, closed: false });
                        (neighbor_index, f_cost)
                    }
                    Occupied(mut e) => {
                        let existing = e.get();
                        if existing.closed && !self.config.reopen_closed {
                            continue;
                        }
                        if new_cost.partial_cmp(&existing.g) != Some(Ordering::Less) {
                            // The existing path is at least as good, do nothing
                            continue;
                        }

                        // We've found a better path to this neighbor
                        let f_cost = new_cost.add_cost(graph.heuristic(e.key(), &goal));
                        trace!(node = ?e.key(), old = ?existing.g, new = ?new_cost, "relaxing node");
                        let neighbor_index = e.index();
                        *e.get_mut() = SearchNode { parent: index, g: new_cost, f: f_cost, closed: false };
                        (neighbor_index, f_cost)
                    }
                };

                seq += 1;
                open_list.push(Node {
                    index: neighbor_index,
                    seq,
                    cost: new_cost,
                    f_cost,
                });
            }
        }

        debug!(expanded, "open list exhausted, goal unreachable");
        Exploration { node_map, goal_index: None, expanded, limit_reached: false }
    }
}
