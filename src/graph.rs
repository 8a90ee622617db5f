use std::{fmt::Debug, hash::Hash, marker::PhantomData};
use num_traits::Zero;
use crate::cost::PathCost;


/// Directed, weighted transition out of a node: (neighbor, traversal cost)
pub type Edge<N, C> = (N, C);

/// Graph supplied by the caller to the search algorithms
///
/// The algorithms only read from the graph. Two requirements for optimal results:
/// 1. Edge costs are non-negative
/// 2. The heuristic is admissible (never overestimates the remaining cost) and consistent
///
/// Neither is checked, violations give suboptimal paths rather than errors.
pub trait Graph {
    /// Node identity, only compared for equality (and hashed consistently with it)
    type Node: Eq + Hash + Clone + Debug;
    /// Traversal cost, integer or floating point
    type Cost: PathCost;
    /// Outgoing edges of a node, in any order
    type Edges: IntoIterator<Item = Edge<Self::Node, Self::Cost>>;

    /// All directed edges leaving `node`, empty for a dead end
    fn neighbors(&self, node: &Self::Node) -> Self::Edges;

    /// Estimated cost from `from` to `to`
    fn heuristic(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;
    type Cost = G::Cost;
    type Edges = G::Edges;

    fn neighbors(&self, node: &Self::Node) -> Self::Edges {
        (**self).neighbors(node)
    }

    fn heuristic(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost {
        (**self).heuristic(from, to)
    }
}


/// Graph built from a neighbor closure and a heuristic closure, see [`from_fn`]
pub struct FnGraph<N, C, NN, H> {
    neighbors: NN,
    heuristic: H,
    _marker: PhantomData<fn(&N) -> C>,
}

/// Wrap two closures into a [`Graph`]
/// neighbors: returns the neighbors of a node along with the edge cost to each
/// heuristic: estimated cost between two nodes
pub fn from_fn<N, C, IT, NN, H>(neighbors: NN, heuristic: H) -> FnGraph<N, C, NN, H>
where
    N: Eq + Hash + Clone + Debug,
    C: PathCost,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    H: Fn(&N, &N) -> C,
{
    FnGraph {
        neighbors,
        heuristic,
        _marker: PhantomData,
    }
}

impl<N, C, IT, NN, H> Graph for FnGraph<N, C, NN, H>
where
    N: Eq + Hash + Clone + Debug,
    C: PathCost,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    H: Fn(&N, &N) -> C,
{
    type Node = N;
    type Cost = C;
    type Edges = IT;

    fn neighbors(&self, node: &N) -> IT {
        (self.neighbors)(node)
    }

    fn heuristic(&self, from: &N, to: &N) -> C {
        (self.heuristic)(from, to)
    }
}


/// Wraps a graph and ignores its heuristic, A* over it is uniform-cost search
pub struct ZeroHeuristic<G>(pub G);

impl<G: Graph> Graph for ZeroHeuristic<G> {
    type Node = G::Node;
    type Cost = G::Cost;
    type Edges = G::Edges;

    fn neighbors(&self, node: &Self::Node) -> Self::Edges {
        self.0.neighbors(node)
    }

    fn heuristic(&self, _from: &Self::Node, _to: &Self::Node) -> Self::Cost {
        Zero::zero()
    }
}
