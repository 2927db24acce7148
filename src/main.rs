#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod export_graph;
mod input;
mod reconstruct;
mod verify;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        Logger(log::SetLoggerError);
    }

    links {
        DeBruijnGraph(debruijn_graph::error::Error, debruijn_graph::error::ErrorKind);
    }
}

#[derive(Parser)]
#[clap(name = "De Bruijn", version = env!("CARGO_PKG_VERSION"))]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Builds the De Bruijn graph of the input sequences and reconstructs a sequence from it by computing an Eulerian walk."
    )]
    Reconstruct(reconstruct::ReconstructCommand),
    #[clap(about = "Writes the De Bruijn graph of the input sequences in Graphviz dot format.")]
    ExportGraph(export_graph::ExportGraphCommand),
    /// Prints statistics about the De Bruijn graph of the input sequences and checks if it has an Eulerian walk.
    Verify(verify::VerifyCommand),
}

// The main is unpacked from an error-chain macro.
// The real main is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) -> Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    info!("Logging initialised successfully");
    Ok(())
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level)?;

    match &options.subcommand {
        Command::Reconstruct(subcommand) => reconstruct::reconstruct(options, subcommand),
        Command::ExportGraph(subcommand) => export_graph::export_graph(options, subcommand),
        Command::Verify(subcommand) => verify::verify(options, subcommand),
    }
}
