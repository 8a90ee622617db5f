use super::GraphNodeMap;

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Vec<N>
where 
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, parents always point to an earlier discovery
    while let Some((node, search_node)) = node_map.get_index(current_index) {
        path.push(node.clone());
        current_index = search_node.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::super::SearchNode;

    fn entry(parent: usize, g: u32) -> SearchNode<u32> {
        SearchNode { parent, g, f: g, closed: true }
    }

    #[test]
    fn test_path_reconstruction() {
        // Create a node map manually to test path building
        let mut node_map: GraphNodeMap<String, u32> = GraphNodeMap::default();

        // Insert nodes with their parent indices and costs
        let a_index = node_map.insert_full("A".to_string(), entry(usize::MAX, 0)).0;
        let b_index = node_map.insert_full("B".to_string(), entry(a_index, 1)).0;
        let c_index = node_map.insert_full("C".to_string(), entry(a_index, 3)).0;
        let d_index = node_map.insert_full("D".to_string(), entry(c_index, 4)).0;

        // Test path from A to D: A -> C -> D
        let path_to_d = shortest_path(&node_map, d_index);
        assert_eq!(path_to_d, vec!["A", "C", "D"].into_iter().map(String::from).collect::<Vec<_>>());

        // Test path from A to B: A -> B
        let path_to_b = shortest_path(&node_map, b_index);
        assert_eq!(path_to_b, vec!["A", "B"].into_iter().map(String::from).collect::<Vec<_>>());

        // The start node is a path of its own
        assert_eq!(shortest_path(&node_map, a_index), vec!["A".to_string()]);
    }

    #[test]
    fn test_long_chain_is_walked_iteratively() {
        let mut node_map: GraphNodeMap<u32, u32> = GraphNodeMap::default();
        let mut parent = usize::MAX;
        for n in 0..100_000u32 {
            parent = node_map.insert_full(n, entry(parent, n)).0;
        }

        let path = shortest_path(&node_map, parent);
        assert_eq!(path.len(), 100_000);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&99_999));
    }
}
