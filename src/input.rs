use clap::Args;
use debruijn_graph::io::fasta::read_sequences_from_fasta_file;
use debruijn_graph::DeBruijnGraph;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Used if neither sequences nor input files are given.
pub const DEFAULT_SEQUENCE: &str = "ATGGCTAGTTGGATCTGACGTGTGCA";

#[derive(Args)]
pub struct SequenceSource {
    #[clap(
        short,
        long = "sequence",
        help = "A source sequence, can be given multiple times. If neither sequences nor input files are given, a built-in example sequence is used"
    )]
    pub sequences: Vec<String>,

    #[clap(
        short,
        long = "input",
        help = "A fasta file containing source sequences, can be given multiple times"
    )]
    pub inputs: Vec<PathBuf>,

    #[clap(
        short,
        long,
        default_value = "7",
        allow_hyphen_values = true,
        help = "The length of the k-mers, i.e. the nodes of the graph are (k-1)-mers"
    )]
    pub kmer_size: isize,
}

impl SequenceSource {
    /// Returns the sequences from all input files followed by the sequences given on the command line.
    pub fn load(&self) -> crate::Result<Vec<String>> {
        let mut sequences = Vec::new();
        for input in &self.inputs {
            sequences.extend(read_sequences_from_fasta_file(input)?);
        }
        sequences.extend(self.sequences.iter().cloned());

        if sequences.is_empty() {
            info!(
                "No sequences given, using the example sequence {}",
                DEFAULT_SEQUENCE
            );
            sequences.push(DEFAULT_SEQUENCE.to_owned());
        }

        Ok(sequences)
    }

    /// Loads the sequences and builds their De Bruijn graph, failing if no k-mer could be extracted.
    pub fn build_graph(&self) -> crate::Result<(Vec<String>, DeBruijnGraph)> {
        let sequences = self.load()?;
        info!(
            "Building De Bruijn graph of {} sequences with k = {}",
            sequences.len(),
            self.kmer_size
        );

        let start = Instant::now();
        let graph = DeBruijnGraph::build(&sequences, self.kmer_size)?;
        info!(
            "Built graph with {} nodes and {} edges in {:.3} milliseconds",
            graph.node_count(),
            graph.edge_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        if graph.skipped_sequence_count() > 0 {
            info!(
                "Skipped {} sequences that are shorter than k",
                graph.skipped_sequence_count()
            );
        }
        graph.check_kmer_size()?;

        Ok((sequences, graph))
    }
}
