use crate::graph::{Graph, ZeroHeuristic};
use super::a_star::{search, SearchResult};


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Runs A* with the graph's heuristic replaced by zero, the nodes expand in order of cost from start
pub fn dijkstra<G: Graph>(graph: &G, start: G::Node, goal: G::Node) -> SearchResult<G::Node, G::Cost> {
    search(&ZeroHeuristic(graph), start, goal)
}
