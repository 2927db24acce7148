use crate::error::Result;
use crate::graph::DeBruijnGraph;
use crate::index::GraphIndex;
use log::info;
use petgraph::dot::Dot;
use petgraph::graph::DiGraph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Converts the graph into a `petgraph` graph with (k-1)-mers as node weights and k-mers as edge weights.
///
/// Nodes and edges keep their indices, so the `i`th node of the result is the `i`th node of the input.
pub fn to_petgraph(graph: &DeBruijnGraph) -> DiGraph<String, String, usize> {
    let mut result = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    for label in graph.node_labels() {
        result.add_node(label.to_owned());
    }
    for edge_index in graph.edge_indices() {
        let edge = graph.edge(edge_index);
        result.add_edge(
            edge.from_node.as_usize().into(),
            edge.to_node.as_usize().into(),
            graph.edge_kmer(edge_index).to_owned(),
        );
    }
    result
}

/// Escapes a string for use inside a quoted dot attribute.
fn escape_dot_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes the graph in the Graphviz dot format.
/// The k-mers of the graph are attached as label of the whole graph, one per line.
pub fn write_dot<W: Write>(graph: &DeBruijnGraph, mut writer: W) -> Result<()> {
    let kmers: Vec<_> = graph.kmers().iter().map(|kmer| escape_dot_string(kmer)).collect();
    let graph_label = format!(
        "    label = \"k = {}\\lk-mers ({}):\\l{}\\l\"\n    labelloc = \"t\"\n",
        graph.k(),
        graph.edge_count(),
        kmers.join("\\l")
    );

    let dot = format!("{}", Dot::new(&to_petgraph(graph)));
    // petgraph opens the graph with `digraph {` on its own line.
    let dot = dot.replacen("{\n", &format!("{{\n{}", graph_label), 1);
    writeln!(writer, "{}", dot)?;
    writer.flush()?;
    Ok(())
}

/// Writes the graph in the Graphviz dot format into a new file, or truncates the file if it exists.
pub fn write_dot_file<P: AsRef<Path>>(graph: &DeBruijnGraph, path: P) -> Result<()> {
    info!("Writing graph to '{}'", path.as_ref().display());
    write_dot(graph, BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use super::{to_petgraph, write_dot};
    use crate::graph::DeBruijnGraph;

    #[test]
    fn test_to_petgraph_keeps_duplicate_edges() {
        let graph = DeBruijnGraph::build(["AAAA", "ACGT"], 2).unwrap();
        let petgraph = to_petgraph(&graph);
        assert_eq!(petgraph.node_count(), 4);
        assert_eq!(petgraph.edge_count(), 6);
        assert_eq!(petgraph[petgraph::graph::NodeIndex::new(0)], "A");
        assert_eq!(
            petgraph.raw_edges().iter().map(|edge| edge.weight.as_str()).collect::<Vec<_>>(),
            ["AA", "AA", "AA", "AC", "CG", "GT"]
        );
    }

    #[test]
    fn test_write_dot() {
        let graph = DeBruijnGraph::build(["ACGT"], 2).unwrap();
        let mut output = Vec::new();
        write_dot(&graph, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with(
            "digraph {\n    label = \"k = 2\\lk-mers (3):\\lAC\\lCG\\lGT\\l\"\n    labelloc = \"t\"\n"
        ));
        for label in ["\"A\"", "\"C\"", "\"G\"", "\"T\"", "\"AC\"", "\"CG\"", "\"GT\""] {
            assert!(output.contains(label), "missing {} in {}", label, output);
        }
    }

    #[test]
    fn test_write_dot_escapes_graph_label() {
        let graph = DeBruijnGraph::build(["a\"b"], 3).unwrap();
        let mut output = Vec::new();
        write_dot(&graph, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("k-mers (1):\\la\\\"b\\l\""), "{}", output);
    }
}
