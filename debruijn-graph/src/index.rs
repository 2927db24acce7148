use std::fmt::{Debug, Display, Formatter};

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid node index.
pub struct NodeIndex(usize);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid edge index.
/// Since every k-mer becomes exactly one edge, the index of an edge is also the index of its k-mer in the k-mer log.
pub struct EdgeIndex(usize);

/// A valid graph index.
pub trait GraphIndex: Debug + Eq + Ord + Copy + From<usize> {
    // We don't wanna have GraphIndex: Into<usize>, to make this type strong, i.e. make it hard to accidentally convert it to a different type.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

macro_rules! impl_graph_index {
    ($index_type:ident, $prefix:literal) => {
        impl GraphIndex for $index_type {
            #[inline]
            fn as_usize(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $index_type {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl Debug for $index_type {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl Display for $index_type {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_graph_index!(NodeIndex, "n");
impl_graph_index!(EdgeIndex, "e");

#[cfg(test)]
mod tests {
    use super::{EdgeIndex, GraphIndex, NodeIndex};

    #[test]
    fn test_index_debug_format() {
        assert_eq!(format!("{:?}", NodeIndex::from(3)), "n3");
        assert_eq!(format!("{:?}", EdgeIndex::from(0)), "e0");
        assert_eq!(EdgeIndex::from(7).as_usize(), 7);
    }
}
