use error_chain::error_chain;

error_chain! {
    foreign_links {
        Io(std::io::Error)
        /// An IO error.
        ;
    }

    errors {
        /// The k-mer size is smaller than one.
        InvalidParameter(k: isize) {
            description("the k-mer size must be at least one")
            display("the k-mer size must be at least one, but is {}", k)
        }

        /// No k-mer could be extracted because all source sequences are shorter than the k-mer size.
        KmerSizeTooLarge(k: usize, shortest_sequence_length: usize) {
            description("the k-mer size is larger than every source sequence")
            display("the k-mer size {} is larger than every source sequence, the shortest has length {}", k, shortest_sequence_length)
        }

        /// The Eulerian walk did not consume every edge of the graph, i.e. the graph is not Eulerian.
        ReconstructionError(visited_edges: usize, total_edges: usize) {
            description("the graph has no Eulerian walk")
            display("the graph has no Eulerian walk: the walk visited {} of {} edges", visited_edges, total_edges)
        }

        /// A fasta record does not contain valid UTF-8.
        NonUtf8Sequence(record_id: String) {
            description("a sequence is not valid UTF-8")
            display("the sequence of record '{}' is not valid UTF-8", record_id)
        }
    }
}
