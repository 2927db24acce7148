use crate::error::{ErrorKind, Result};

/// A k-mer together with its (k-1)-mer prefix and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerTriple<'a> {
    /// The k-mer itself.
    pub kmer: &'a str,
    /// The first k-1 characters of the k-mer.
    pub prefix: &'a str,
    /// The last k-1 characters of the k-mer.
    pub suffix: &'a str,
}

/// An iterator over the k-mers of a sequence, in the order of their start offsets.
///
/// Offsets are counted in characters, not in bytes, so non-ASCII sequences are windowed correctly.
/// The iterator is cheap to clone, and a clone restarts from the clone's current position.
#[derive(Debug, Clone)]
pub struct Kmers<'a> {
    sequence: &'a str,
    /// Byte offset of the first character of the next k-mer.
    start: usize,
    /// Byte offset behind the last character of the next k-mer, or `None` if the iterator is exhausted.
    end: Option<usize>,
}

/// Returns the byte offset behind the first `n` characters of `text`, or `None` if `text` has less than `n` characters.
fn char_boundary_after(text: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    text.char_indices()
        .nth(n - 1)
        .map(|(offset, character)| offset + character.len_utf8())
}

/// Returns the k-mers of the given sequence.
/// If the sequence is shorter than `k`, the returned iterator is empty.
///
/// Fails with [`ErrorKind::InvalidParameter`] if `k < 1`.
pub fn extract_kmers(sequence: &str, k: isize) -> Result<Kmers<'_>> {
    if k < 1 {
        return Err(ErrorKind::InvalidParameter(k).into());
    }

    Ok(Kmers {
        sequence,
        start: 0,
        end: char_boundary_after(sequence, k as usize),
    })
}

impl<'a> Iterator for Kmers<'a> {
    type Item = KmerTriple<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.end?;
        let kmer = &self.sequence[self.start..end];
        let first_len = kmer.chars().next()?.len_utf8();
        let last_len = kmer.chars().next_back()?.len_utf8();

        let triple = KmerTriple {
            kmer,
            prefix: &self.sequence[self.start..end - last_len],
            suffix: &self.sequence[self.start + first_len..end],
        };

        self.start += first_len;
        self.end = self.sequence[end..]
            .chars()
            .next()
            .map(|character| end + character.len_utf8());
        Some(triple)
    }
}

impl std::iter::FusedIterator for Kmers<'_> {}
