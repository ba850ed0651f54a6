use thiserror::Error;

/// Error type returned by packed table operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row or column index, or the end of a row range, exceeds the
    /// table dimension.  Also returned when writing an element that
    /// lies outside the stored triangle of a triangular table.
    #[error("{axis} index {index} out of range for dimension {dim}")]
    OutOfRange {
        /// "row", "column" or "element"
        axis: &'static str,
        /// offending index (exclusive end for ranges)
        index: usize,
        /// table dimension
        dim: usize,
    },
    /// A view was released without a matching acquire, released with
    /// arguments that differ from those used to acquire it, or acquired
    /// while a conflicting view of the same region is outstanding.
    #[error("Invalid view state: {0}")]
    InvalidViewState(&'static str),
    /// Packed data length does not agree with the table dimension
    #[error("Packed data of length {len} is incompatible with dimension {dim}")]
    IncompatibleDimension {
        /// length of the supplied buffer
        len: usize,
        /// requested table dimension
        dim: usize,
    },
}

impl TableError {
    pub(crate) fn row_range(start: usize, count: usize, dim: usize) -> Self {
        TableError::OutOfRange {
            axis: "row",
            index: start.saturating_add(count),
            dim,
        }
    }
}
