//! Generic A* search over caller-supplied graphs.
//!
//! A graph is anything implementing [`Graph`]: it hands out outgoing edges for a
//! node and a heuristic estimate between two nodes. [`search`] finds a lowest
//! cost path from a start node to a goal node.
//!
//! ```
//! use pathfind::{from_fn, search};
//!
//! let graph = from_fn(
//!     |n: &u32| match n {
//!         0 => vec![(1, 1), (2, 4)],
//!         1 | 2 => vec![(3, 1)],
//!         _ => vec![],
//!     },
//!     |_: &u32, _: &u32| 0u32,
//! );
//!
//! let result = search(&graph, 0, 3);
//! assert!(result.found);
//! assert_eq!(result.path, vec![0, 1, 3]);
//! assert_eq!(result.cost, 2);
//! ```

mod collections;
pub mod cost;
pub mod errors;
pub mod graph;
pub mod graph_algos;

pub use cost::PathCost;
pub use errors::SearchError;
pub use graph::{Edge, FnGraph, Graph, ZeroHeuristic, from_fn};
pub use graph_algos::a_star::{AStar, SearchConfig, SearchResult, search};
pub use graph_algos::dijkstra::dijkstra;
