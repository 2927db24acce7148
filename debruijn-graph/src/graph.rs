use crate::error::{ErrorKind, Result};
use crate::index::{EdgeIndex, GraphIndex, NodeIndex};
use crate::kmer::extract_kmers;
use log::debug;
use std::collections::HashMap;

/// A node of a De Bruijn graph, identified by its (k-1)-mer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    label: String,
    in_degree: usize,
    out_degree: usize,
}

impl Node {
    fn new(label: String) -> Self {
        Self {
            label,
            in_degree: 0,
            out_degree: 0,
        }
    }

    /// The (k-1)-mer of this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The amount of edges ending in this node.
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// The amount of edges starting in this node.
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Out-degree minus in-degree.
    pub fn imbalance(&self) -> isize {
        self.out_degree as isize - self.in_degree as isize
    }
}

/// A directed edge of a De Bruijn graph, representing one occurrence of a k-mer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The node of the k-mer's prefix.
    pub from_node: NodeIndex,
    /// The node of the k-mer's suffix.
    pub to_node: NodeIndex,
}

/// A De Bruijn multigraph of the (k-1)-mers of a list of sequences.
///
/// Nodes are stored in the order they were first seen, and the outgoing edges of each node are stored in insertion order.
/// Repeated k-mers are kept as parallel edges.
/// The graph cannot be modified after it was built.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    nodes: Vec<Node>,
    registry: HashMap<String, NodeIndex>,
    edges: Vec<Edge>,
    out_edges: Vec<Vec<EdgeIndex>>,
    kmers: Vec<String>,
    sequence_count: usize,
    skipped_sequence_count: usize,
    shortest_sequence_length: Option<usize>,
}

/// Builds the De Bruijn graph of the given sequences with k-mer size `k`.
/// See [`DeBruijnGraph::build`].
pub fn build_graph<Sequences: IntoIterator<Item = SequenceType>, SequenceType: AsRef<str>>(
    sequences: Sequences,
    k: isize,
) -> Result<DeBruijnGraph> {
    DeBruijnGraph::build(sequences, k)
}

impl DeBruijnGraph {
    /// Builds the De Bruijn graph of the given sequences with k-mer size `k`.
    ///
    /// The sequences are processed in order, and the k-mers of all of them are merged into a single graph.
    /// Sequences shorter than `k` contribute nothing.
    /// Fails with [`ErrorKind::InvalidParameter`] if `k < 1`.
    pub fn build<Sequences: IntoIterator<Item = SequenceType>, SequenceType: AsRef<str>>(
        sequences: Sequences,
        k: isize,
    ) -> Result<Self> {
        if k < 1 {
            return Err(ErrorKind::InvalidParameter(k).into());
        }

        let mut graph = Self {
            k: k as usize,
            nodes: Vec::new(),
            registry: HashMap::new(),
            edges: Vec::new(),
            out_edges: Vec::new(),
            kmers: Vec::new(),
            sequence_count: 0,
            skipped_sequence_count: 0,
            shortest_sequence_length: None,
        };

        for sequence in sequences {
            let sequence = sequence.as_ref();
            let sequence_length = sequence.chars().count();
            graph.sequence_count += 1;
            graph.shortest_sequence_length = Some(
                graph
                    .shortest_sequence_length
                    .map_or(sequence_length, |shortest| shortest.min(sequence_length)),
            );

            if sequence_length < graph.k {
                debug!(
                    "Skipping sequence of length {} that is shorter than k = {}",
                    sequence_length, graph.k
                );
                graph.skipped_sequence_count += 1;
                continue;
            }

            for triple in extract_kmers(sequence, k)? {
                let from_node = graph.get_or_insert_node(triple.prefix);
                let to_node = graph.get_or_insert_node(triple.suffix);
                graph.insert_edge(from_node, to_node, triple.kmer);
            }
        }

        debug!(
            "Built De Bruijn graph with k = {} from {} sequences: {} nodes and {} edges",
            graph.k,
            graph.sequence_count,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn get_or_insert_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&node) = self.registry.get(label) {
            return node;
        }

        let node = NodeIndex::from(self.nodes.len());
        self.nodes.push(Node::new(label.to_owned()));
        self.out_edges.push(Vec::new());
        self.registry.insert(label.to_owned(), node);
        node
    }

    fn insert_edge(&mut self, from_node: NodeIndex, to_node: NodeIndex, kmer: &str) {
        let edge = EdgeIndex::from(self.edges.len());
        self.edges.push(Edge { from_node, to_node });
        self.kmers.push(kmer.to_owned());
        self.out_edges[from_node.as_usize()].push(edge);
        self.nodes[from_node.as_usize()].out_degree += 1;
        self.nodes[to_node.as_usize()].in_degree += 1;
    }

    /// The k-mer size of this graph.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The amount of nodes, i.e. of distinct (k-1)-mers.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The amount of edges, i.e. of k-mers including duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no edges.
    /// Since nodes are only created together with edges, such a graph has no nodes either.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The node indices of this graph, in the order the nodes were first seen.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.nodes.len()).map(NodeIndex::from)
    }

    /// The edge indices of this graph, in the order the k-mers were extracted.
    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        (0..self.edges.len()).map(EdgeIndex::from)
    }

    /// The nodes of this graph, in the order they were first seen.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The edges of this graph, in the order their k-mers were extracted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the node with the given index.
    /// Panics if the index is out of range.
    pub fn node(&self, node: NodeIndex) -> &Node {
        &self.nodes[node.as_usize()]
    }

    /// Returns the edge with the given index.
    /// Panics if the index is out of range.
    pub fn edge(&self, edge: EdgeIndex) -> &Edge {
        &self.edges[edge.as_usize()]
    }

    /// Returns the index of the node with the given (k-1)-mer, if it exists.
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.registry.get(label).copied()
    }

    /// The outgoing edges of the given node, in insertion order.
    pub fn out_edges(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.out_edges[node.as_usize()]
    }

    /// The k-mer represented by the given edge.
    pub fn edge_kmer(&self, edge: EdgeIndex) -> &str {
        &self.kmers[edge.as_usize()]
    }

    /// The k-mers extracted while building, in extraction order.
    pub fn kmers(&self) -> &[String] {
        &self.kmers
    }

    /// The k-mers extracted while building, separated by single spaces.
    pub fn kmers_str(&self) -> String {
        self.kmers.join(" ")
    }

    /// The (k-1)-mers of all nodes, in the order the nodes were first seen.
    pub fn node_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(Node::label)
    }

    /// All edges as pairs of (k-1)-mers, in the order their k-mers were extracted.
    pub fn edge_labels(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges.iter().map(move |edge| {
            (
                self.node(edge.from_node).label(),
                self.node(edge.to_node).label(),
            )
        })
    }

    /// The amount of sequences the graph was built from, including skipped ones.
    pub fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    /// The amount of sequences that were shorter than `k` and hence contributed nothing.
    pub fn skipped_sequence_count(&self) -> usize {
        self.skipped_sequence_count
    }

    /// Returns an error if sequences were given, but no k-mer could be extracted from any of them.
    ///
    /// This distinguishes an empty graph caused by a too large `k` from an empty input.
    pub fn check_kmer_size(&self) -> Result<()> {
        match self.shortest_sequence_length {
            Some(shortest_sequence_length) if self.is_empty() => {
                Err(ErrorKind::KmerSizeTooLarge(self.k, shortest_sequence_length).into())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeBruijnGraph;
    use crate::error::ErrorKind;
    use crate::index::GraphIndex;

    #[test]
    fn test_build_acgt() {
        let graph = DeBruijnGraph::build(["ACGT"], 2).unwrap();
        assert_eq!(graph.kmers(), ["AC", "CG", "GT"]);
        assert_eq!(graph.node_labels().collect::<Vec<_>>(), ["A", "C", "G", "T"]);
        assert_eq!(
            graph.edge_labels().collect::<Vec<_>>(),
            [("A", "C"), ("C", "G"), ("G", "T")]
        );
        assert_eq!(graph.kmers_str(), "AC CG GT");
    }

    #[test]
    fn test_build_preserves_duplicate_edges() {
        let graph = DeBruijnGraph::build(["AAAA"], 2).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 3);

        let a = graph.node_index("A").unwrap();
        assert_eq!(graph.out_edges(a).len(), 3);
        assert_eq!(graph.node(a).in_degree(), 3);
        assert_eq!(graph.node(a).out_degree(), 3);
        assert_eq!(graph.node(a).imbalance(), 0);
    }

    #[test]
    fn test_build_edge_count_and_degree_invariants() {
        let sequence = "ATGGCTAGTTGGATCTGACGTGTGCA";
        for k in 2..=sequence.len() {
            let graph = DeBruijnGraph::build([sequence], k as isize).unwrap();
            assert_eq!(graph.edge_count(), sequence.len() - k + 1);
            assert_eq!(graph.kmers().len(), graph.edge_count());

            let out_degree_sum: usize = graph.nodes().iter().map(|node| node.out_degree()).sum();
            let in_degree_sum: usize = graph.nodes().iter().map(|node| node.in_degree()).sum();
            assert_eq!(out_degree_sum, graph.edge_count());
            assert_eq!(in_degree_sum, graph.edge_count());

            for node in graph.node_indices() {
                assert_eq!(graph.out_edges(node).len(), graph.node(node).out_degree());
                for &edge in graph.out_edges(node) {
                    assert_eq!(graph.edge(edge).from_node, node);
                }
            }
        }
    }

    #[test]
    fn test_build_adjacency_in_insertion_order() {
        let graph = DeBruijnGraph::build(["ACAGAT"], 2).unwrap();
        let a = graph.node_index("A").unwrap();
        let targets: Vec<_> = graph
            .out_edges(a)
            .iter()
            .map(|&edge| graph.node(graph.edge(edge).to_node).label())
            .collect();
        assert_eq!(targets, ["C", "G", "T"]);
        let kmers: Vec<_> = graph
            .out_edges(a)
            .iter()
            .map(|&edge| graph.edge_kmer(edge))
            .collect();
        assert_eq!(kmers, ["AC", "AG", "AT"]);
    }

    #[test]
    fn test_build_multiple_sequences() {
        let graph = DeBruijnGraph::build(["ACG", "CGT"], 2).unwrap();
        assert_eq!(graph.kmers(), ["AC", "CG", "CG", "GT"]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.sequence_count(), 2);

        let c = graph.node_index("C").unwrap();
        assert_eq!(c.as_usize(), 1);
        assert_eq!(graph.node(c).out_degree(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = DeBruijnGraph::build(["ACGTTGCA", "GGTAC"], 3).unwrap();
        let second = DeBruijnGraph::build(["ACGTTGCA", "GGTAC"], 3).unwrap();
        assert_eq!(first.nodes(), second.nodes());
        assert_eq!(first.edges(), second.edges());
        assert_eq!(first.kmers(), second.kmers());
    }

    #[test]
    fn test_build_invalid_k() {
        for k in [0, -1] {
            let error = DeBruijnGraph::build(["ACGT"], k).unwrap_err();
            assert!(matches!(error.kind(), ErrorKind::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_build_k_too_large() {
        let graph = DeBruijnGraph::build(["ACG", "ACGTA"], 6).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.skipped_sequence_count(), 2);
        let error = graph.check_kmer_size().unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::KmerSizeTooLarge(6, 3)));

        let graph = DeBruijnGraph::build(["ACG", "ACGTACG"], 6).unwrap();
        assert!(!graph.is_empty());
        assert_eq!(graph.skipped_sequence_count(), 1);
        assert!(graph.check_kmer_size().is_ok());
    }

    #[test]
    fn test_build_no_sequences() {
        let graph = DeBruijnGraph::build(Vec::<String>::new(), 3).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert!(graph.check_kmer_size().is_ok());
    }
}
