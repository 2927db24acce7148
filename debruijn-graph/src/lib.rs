//! A crate to build De Bruijn graphs from sequences and to reconstruct sequences from them.
//!
//! A De Bruijn graph of window size `k` has a node for each (k-1)-mer of its source sequences and an edge for each k-mer,
//! connecting the prefix of the k-mer to its suffix.
//! Duplicate k-mers result in duplicate edges, so the graph is a multigraph.
//! A sequence is reconstructed from the graph by computing an Eulerian walk through it.
//!
//! ```
//! use debruijn_graph::{build_graph, reconstruct};
//!
//! let graph = build_graph(["ACGT"], 2).unwrap();
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(reconstruct(&graph).unwrap(), "ACGT");
//! ```
#![warn(missing_docs)]
#![recursion_limit = "1024"]

/// Contains the error types used by this crate.
pub mod error;
/// Algorithms related to Eulerian walks, including the reconstruction of sequences.
pub mod eulerian;
/// The De Bruijn multigraph and its construction.
pub mod graph;
/// Strongly typed indices into the graph.
pub mod index;
/// Contains functions for reading and writing sequences and graphs.
pub mod io;
/// Extraction of k-mers from sequences.
pub mod kmer;

pub use eulerian::{reconstruct, EulerianWalk};
pub use graph::{build_graph, DeBruijnGraph, Edge, Node};
pub use kmer::{extract_kmers, KmerTriple, Kmers};
