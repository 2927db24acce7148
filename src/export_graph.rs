use crate::input::SequenceSource;
use crate::CliOptions;
use clap::Parser;
use debruijn_graph::io::dot::write_dot_file;
use std::path::PathBuf;

#[derive(Parser)]
pub struct ExportGraphCommand {
    #[clap(flatten)]
    pub source: SequenceSource,

    #[clap(
        short,
        long,
        help = "The file the graph is written to in Graphviz dot format"
    )]
    pub output: PathBuf,
}

pub(crate) fn export_graph(
    _options: &CliOptions,
    subcommand: &ExportGraphCommand,
) -> crate::Result<()> {
    let (_, graph) = subcommand.source.build_graph()?;
    write_dot_file(&graph, &subcommand.output)?;
    Ok(())
}
