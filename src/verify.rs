use crate::input::SequenceSource;
use crate::CliOptions;
use clap::Parser;
use colored::*;
use debruijn_graph::eulerian::{
    decomposes_into_eulerian_cycles, find_non_eulerian_nodes_with_differences,
    has_eulerian_walk, is_weakly_connected,
};
use log::{info, warn};

#[derive(Parser)]
pub struct VerifyCommand {
    #[clap(flatten)]
    pub source: SequenceSource,
}

pub(crate) fn verify(_options: &CliOptions, subcommand: &VerifyCommand) -> crate::Result<()> {
    let (_, graph) = subcommand.source.build_graph()?;

    info!("");
    info!(" === Graph Statistics === ");
    info!("");
    info!("k: {}", graph.k());
    info!("Nodes: {}", graph.node_count());
    info!("Edges: {}", graph.edge_count());
    info!("k-mers: {}", graph.kmers_str());

    let differences = find_non_eulerian_nodes_with_differences(&graph);
    if differences.is_empty() {
        info!("All nodes are balanced");
    } else {
        let mut differences_string = String::new();
        for &(node, difference) in &differences {
            if !differences_string.is_empty() {
                differences_string += ", ";
            }
            let entry = format!("{}: {:+}", graph.node(node).label(), difference);
            if difference.abs() == 1 {
                differences_string += &entry.yellow().to_string();
            } else {
                differences_string += &entry.red().to_string();
            }
        }
        info!(
            "{} imbalanced nodes (out-degree - in-degree): [{}]",
            differences.len(),
            differences_string
        );
    }

    if is_weakly_connected(&graph) {
        info!("The edges are weakly connected");
    } else {
        warn!("{}", "The edges are not weakly connected".red());
    }

    if !has_eulerian_walk(&graph) {
        warn!(
            "{}",
            "The graph has no Eulerian walk, a sequence cannot be reconstructed".red()
        );
    } else if decomposes_into_eulerian_cycles(&graph) {
        info!("{}", "The graph has an Eulerian cycle".green());
    } else {
        info!("{}", "The graph has an Eulerian walk".green());
    }

    Ok(())
}
