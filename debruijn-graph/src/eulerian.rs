use crate::error::{ErrorKind, Result};
use crate::graph::DeBruijnGraph;
use crate::index::{EdgeIndex, GraphIndex, NodeIndex};
use log::{debug, trace};
use std::collections::VecDeque;

/// Returns true if the graph contains a Eulerian cycle.
pub fn decomposes_into_eulerian_cycles(graph: &DeBruijnGraph) -> bool {
    graph.nodes().iter().all(|node| node.imbalance() == 0)
}

/// Compute a vector of tuples of nodes and outdegree - indegree that has indegree != outdegree.
pub fn find_non_eulerian_nodes_with_differences(graph: &DeBruijnGraph) -> Vec<(NodeIndex, isize)> {
    let mut node_indices_and_differences = Vec::new();
    for node_index in graph.node_indices() {
        let difference = graph.node(node_index).imbalance();
        if difference != 0 {
            node_indices_and_differences.push((node_index, difference));
        }
    }
    node_indices_and_differences
}

/// Returns the node an Eulerian walk through the graph has to start from.
///
/// This is the first node whose outdegree exceeds its indegree.
/// If there is none, the graph is balanced and the first node with an outgoing edge is returned, which makes the walk a cycle.
/// Returns `None` if the graph has no edges.
pub fn find_walk_start(graph: &DeBruijnGraph) -> Option<NodeIndex> {
    graph
        .node_indices()
        .find(|&node| graph.node(node).imbalance() > 0)
        .or_else(|| {
            graph
                .node_indices()
                .find(|&node| graph.node(node).out_degree() > 0)
        })
}

/// Returns true if all edges of the graph are in the same weakly connected component.
/// A graph without edges is weakly connected.
pub fn is_weakly_connected(graph: &DeBruijnGraph) -> bool {
    let start = match graph.node_indices().next() {
        Some(start) => start,
        None => return true,
    };

    // Nodes are only created together with edges, so reaching all nodes means reaching all edges.
    let mut neighbors = vec![Vec::new(); graph.node_count()];
    for edge in graph.edges() {
        neighbors[edge.from_node.as_usize()].push(edge.to_node);
        neighbors[edge.to_node.as_usize()].push(edge.from_node);
    }

    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    visited[start.as_usize()] = true;
    queue.push_back(start);
    let mut visited_count = 1;

    while let Some(node) = queue.pop_front() {
        for &neighbor in &neighbors[node.as_usize()] {
            if !visited[neighbor.as_usize()] {
                visited[neighbor.as_usize()] = true;
                visited_count += 1;
                queue.push_back(neighbor);
            }
        }
    }

    visited_count == graph.node_count()
}

/// Returns true if the graph has an Eulerian walk, i.e. a walk that uses each edge exactly once.
///
/// This is the case if the edges are weakly connected, and either all nodes are balanced,
/// or exactly one node has one more outgoing than incoming edge and exactly one node has one more incoming than outgoing edge.
pub fn has_eulerian_walk(graph: &DeBruijnGraph) -> bool {
    let differences = find_non_eulerian_nodes_with_differences(graph);
    let balanced = match differences.as_slice() {
        [] => true,
        [(_, first), (_, second)] => {
            (*first == 1 && *second == -1) || (*first == -1 && *second == 1)
        }
        _ => false,
    };

    balanced && is_weakly_connected(graph)
}

/// An Eulerian walk through a De Bruijn graph.
///
/// The walk contains one more node than edges, and the `i`th edge connects the `i`th node to the `i+1`th node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianWalk {
    nodes: Vec<NodeIndex>,
    edges: Vec<EdgeIndex>,
}

impl EulerianWalk {
    /// Computes an Eulerian walk through the graph using Hierholzer's algorithm.
    ///
    /// The outgoing edges of each node are consumed in insertion order, which makes the walk deterministic.
    /// The graph itself is not modified, so it can be walked any number of times.
    ///
    /// Returns `Ok(None)` if the graph has no edges.
    /// Fails with [`ErrorKind::ReconstructionError`] if the walk does not contain all edges of the graph,
    /// or if two consecutive edges of the walk are not connected, which happens if the graph is not Eulerian.
    pub fn compute(graph: &DeBruijnGraph) -> Result<Option<Self>> {
        let start = match find_walk_start(graph) {
            Some(start) => start,
            None => {
                debug!("Graph has no edges, so it has no Eulerian walk");
                return Ok(None);
            }
        };
        debug!(
            "Starting Eulerian walk at node {:?} ('{}')",
            start,
            graph.node(start).label()
        );

        // Number of consumed outgoing edges of each node.
        let mut cursors = vec![0; graph.node_count()];
        // The nodes that are currently descended into, each with the edge used to reach it.
        let mut stack: Vec<(NodeIndex, Option<EdgeIndex>)> = vec![(start, None)];
        // Nodes and the edges used to reach them, in reverse walk order.
        let mut postorder = Vec::with_capacity(graph.edge_count() + 1);

        while let Some(&(node, _)) = stack.last() {
            let cursor = &mut cursors[node.as_usize()];
            if let Some(&edge) = graph.out_edges(node).get(*cursor) {
                *cursor += 1;
                let to_node = graph.edge(edge).to_node;
                trace!("Descending along {:?} from {:?} to {:?}", edge, node, to_node);
                stack.push((to_node, Some(edge)));
            } else if let Some(finished) = stack.pop() {
                postorder.push(finished);
            }
        }

        let visited_edges = postorder.len() - 1;
        if visited_edges != graph.edge_count() {
            debug!(
                "Eulerian walk visited only {} of {} edges",
                visited_edges,
                graph.edge_count()
            );
            return Err(ErrorKind::ReconstructionError(visited_edges, graph.edge_count()).into());
        }

        postorder.reverse();

        // Each edge must leave the node before it. Branching into more than one dead end
        // consumes all edges, but splices the branches together without connecting them.
        let connected_edges = postorder
            .windows(2)
            .take_while(|window| match window[1].1 {
                Some(edge) => graph.edge(edge).from_node == window[0].0,
                None => false,
            })
            .count();
        if connected_edges != graph.edge_count() {
            debug!(
                "Eulerian walk is disconnected after {} of {} edges",
                connected_edges,
                graph.edge_count()
            );
            return Err(
                ErrorKind::ReconstructionError(connected_edges, graph.edge_count()).into(),
            );
        }

        let nodes = postorder.iter().map(|&(node, _)| node).collect();
        let edges = postorder.iter().filter_map(|&(_, edge)| edge).collect();
        Ok(Some(Self { nodes, edges }))
    }

    /// The nodes of the walk, in walk order.
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// The edges of the walk, in walk order.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// The first node of the walk.
    pub fn first_node(&self) -> NodeIndex {
        self.nodes[0]
    }

    /// The last node of the walk.
    pub fn last_node(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns true if the walk starts and ends in the same node.
    pub fn is_cycle(&self) -> bool {
        self.first_node() == self.last_node()
    }

    /// Returns the sequence spelled by this walk.
    ///
    /// This is the (k-1)-mer of the first node followed by the last character of each k-mer along the walk.
    pub fn to_sequence(&self, graph: &DeBruijnGraph) -> String {
        let mut sequence = graph.node(self.first_node()).label().to_owned();
        sequence.extend(
            self.edges
                .iter()
                .filter_map(|&edge| graph.edge_kmer(edge).chars().next_back()),
        );
        sequence
    }
}

/// Reconstructs a sequence from the graph by spelling an Eulerian walk through it.
///
/// Returns the empty string if the graph has no edges.
/// Fails with [`ErrorKind::ReconstructionError`] if the graph has no Eulerian walk.
pub fn reconstruct(graph: &DeBruijnGraph) -> Result<String> {
    Ok(EulerianWalk::compute(graph)?
        .map(|walk| walk.to_sequence(graph))
        .unwrap_or_default())
}
