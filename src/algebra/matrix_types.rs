#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Matrix shape marker for triangular matrices.
///
/// For packed tables this fixes which half of the matrix is held in
/// storage.  Both layouts are packed in row-major order.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

impl MatrixTriangle {
    /// the opposite triangle
    pub fn transpose(&self) -> Self {
        match self {
            MatrixTriangle::Triu => MatrixTriangle::Tril,
            MatrixTriangle::Tril => MatrixTriangle::Triu,
        }
    }

    /// true if the entry `(row, col)` lies in this triangle, diagonal included
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self {
            MatrixTriangle::Triu => row <= col,
            MatrixTriangle::Tril => row >= col,
        }
    }
}

/// Access mode requested when acquiring a view of a table.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum AccessMode {
    /// The view is materialized but never committed on release
    ReadOnly,
    /// The view starts zeroed and is committed on release
    WriteOnly,
    /// The view is materialized and committed on release
    #[default]
    ReadWrite,
}

impl AccessMode {
    pub(crate) fn reads(&self) -> bool {
        !matches!(self, AccessMode::WriteOnly)
    }
    pub(crate) fn writes(&self) -> bool {
        !matches!(self, AccessMode::ReadOnly)
    }
}

/// Describes how the half of a packed matrix that is not held in
/// storage appears through dense views.
///
/// Implemented by the zero-sized markers [`TriangularFill`] and
/// [`SymmetricFill`].
pub trait FillMode: Copy + Default + std::fmt::Debug + Send + 'static {
    /// true if the unstored half mirrors the stored half
    const SYMMETRIC: bool;
    /// short name used in printed output
    const NAME: &'static str;
}

/// The unstored half reads as zero and writes to it are discarded.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct TriangularFill;

/// The unstored half mirrors the stored half, i.e. `A[i,j] == A[j,i]`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct SymmetricFill;

impl FillMode for TriangularFill {
    const SYMMETRIC: bool = false;
    const NAME: &'static str = "triangular";
}

impl FillMode for SymmetricFill {
    const SYMMETRIC: bool = true;
    const NAME: &'static str = "symmetric";
}
