use crate::input::SequenceSource;
use crate::CliOptions;
use clap::Parser;
use debruijn_graph::io::fasta::write_sequence_as_fasta_file;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
pub struct ReconstructCommand {
    #[clap(flatten)]
    pub source: SequenceSource,

    #[clap(
        short,
        long,
        help = "A file to store the reconstructed sequence into in fasta format"
    )]
    pub output: Option<PathBuf>,
}

pub(crate) fn reconstruct(
    _options: &CliOptions,
    subcommand: &ReconstructCommand,
) -> crate::Result<()> {
    let (sequences, graph) = subcommand.source.build_graph()?;
    info!("k-mers: ({}) {}", graph.edge_count(), graph.kmers_str());

    info!("Computing Eulerian walk");
    let start = Instant::now();
    let reconstruction = debruijn_graph::reconstruct(&graph)?;
    info!(
        "Reconstructed sequence in {:.3} milliseconds",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let original_length: usize = sequences
        .iter()
        .map(|sequence| sequence.chars().count())
        .sum();
    info!(
        "Original length ({}), reconstructed length ({})",
        original_length,
        reconstruction.chars().count()
    );
    match sequences.as_slice() {
        [sequence] if sequence == &reconstruction => {
            info!("The reconstruction equals the original sequence")
        }
        [_] => warn!("The reconstruction differs from the original sequence"),
        _ => {}
    }

    println!("{}", reconstruction);

    if let Some(output) = &subcommand.output {
        let description = format!("k={}", graph.k());
        write_sequence_as_fasta_file(
            "reconstruction",
            Some(description.as_str()),
            &reconstruction,
            output,
        )?;
    }

    Ok(())
}
