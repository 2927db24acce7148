/// A module providing functions to export graphs in the Graphviz dot format.
pub mod dot;
/// A module providing functions to read and write fasta files.
pub mod fasta;
