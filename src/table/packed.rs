use super::views::ViewLedger;
use super::{BlockView, NumericTable, ShapedTable, ViewRegion};
use crate::algebra::*;
use itertools::iproduct;
use std::marker::PhantomData;
use std::ops::Range;

/// Square matrix stored as one packed triangle.
///
/// Only the `n(n+1)/2` entries of the triangle selected by `uplo` are held,
/// contiguously and in row-major packed order:
///
/// ```text
///  Tril, n = 4            Triu, n = 4
///  [ 0  .  .  . ]         [ 0  1  2  3 ]
///  [ 1  2  .  . ]         [ .  4  5  6 ]
///  [ 3  4  5  . ]         [ .  .  7  8 ]
///  [ 6  7  8  9 ]         [ .  .  .  9 ]
/// ```
///
/// The fill mode `F` decides what the other half looks like through
/// views.  Use the aliases [`PackedTriangularMatrix`] (zeros) and
/// [`PackedSymmetricMatrix`] (mirrored) rather than this type directly.
///
/// The layout is fixed at construction and the table is never resized.
#[derive(Debug)]
pub struct PackedStorageMatrix<T, F> {
    /// dimension
    pub(crate) n: usize,
    /// stored triangle
    pub(crate) uplo: MatrixTriangle,
    /// packed data, row-major
    pub(crate) data: Vec<T>,
    pub(crate) ledger: ViewLedger,
    pub(crate) phantom: PhantomData<F>,
}

/// Packed triangular matrix.  The unstored half reads as zero.
pub type PackedTriangularMatrix<T = f64> = PackedStorageMatrix<T, TriangularFill>;

/// Packed symmetric matrix.  The unstored half mirrors the stored half.
pub type PackedSymmetricMatrix<T = f64> = PackedStorageMatrix<T, SymmetricFill>;

// clones never inherit outstanding views
impl<T, F> Clone for PackedStorageMatrix<T, F>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            n: self.n,
            uplo: self.uplo,
            data: self.data.clone(),
            ledger: ViewLedger::default(),
            phantom: PhantomData,
        }
    }
}

impl<T, F> PartialEq for PackedStorageMatrix<T, F>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.uplo == other.uplo && self.data == other.data
    }
}

impl<T, F> PackedStorageMatrix<T, F>
where
    T: FloatT,
    F: FillMode,
{
    /// Create a table of dimension `n` from packed data.
    ///
    /// Fails with [`TableError::IncompatibleDimension`] unless
    /// `data.len() == n(n+1)/2`.
    pub fn new(data: Vec<T>, n: usize, uplo: MatrixTriangle) -> Result<Self, TableError> {
        if checked_triangular_number(n) != Some(data.len()) {
            return Err(TableError::IncompatibleDimension {
                len: data.len(),
                dim: n,
            });
        }
        Ok(Self {
            n,
            uplo,
            data,
            ledger: ViewLedger::default(),
            phantom: PhantomData,
        })
    }

    /// Create a table of dimension `n` by copying packed data.
    pub fn new_from_slice(src: &[T], n: usize, uplo: MatrixTriangle) -> Result<Self, TableError> {
        Self::new(src.to_vec(), n, uplo)
    }

    /// Create a zero table of dimension `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n(n+1)/2` overflows `usize`.
    pub fn zeros(n: usize, uplo: MatrixTriangle) -> Self {
        let len = checked_triangular_number(n)
            .unwrap_or_else(|| panic!("packed storage for dimension {n} overflows usize"));
        Self {
            n,
            uplo,
            data: vec![T::zero(); len],
            ledger: ViewLedger::default(),
            phantom: PhantomData,
        }
    }

    /// Create a table from a dense `n × n` row-major buffer.  Only the
    /// entries of the `uplo` triangle are read.
    pub fn from_dense(dense: &[T], n: usize, uplo: MatrixTriangle) -> Result<Self, TableError> {
        if n.checked_mul(n) != Some(dense.len()) {
            return Err(TableError::IncompatibleDimension {
                len: dense.len(),
                dim: n,
            });
        }
        let mut out = Self::zeros(n, uplo);
        for row in 0..n {
            for col in out.stored_cols(row) {
                let k = packed_index(uplo, n, (row, col));
                out.data[k] = dense[row * n + col];
            }
        }
        Ok(out)
    }

    /// matrix dimension
    pub fn dim(&self) -> usize {
        self.n
    }

    /// stored triangle
    pub fn layout(&self) -> MatrixTriangle {
        self.uplo
    }

    /// true if the unstored half mirrors the stored half
    pub fn is_symmetric(&self) -> bool {
        F::SYMMETRIC
    }

    /// Packed backing storage.
    pub fn raw_storage(&self) -> &[T] {
        &self.data
    }

    /// Mutable packed backing storage.  Writes bypass view bookkeeping,
    /// so the caller must preserve the packed ordering.
    pub fn raw_storage_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// number of views currently outstanding
    pub fn outstanding_views(&self) -> usize {
        self.ledger.len()
    }

    /// Value of the dense entry `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, TableError> {
        self.check_index(row, col)?;
        Ok(self.value(row, col))
    }

    /// Set the dense entry `(row, col)`.
    ///
    /// For symmetric tables an entry in the unstored half updates its
    /// mirror.  For triangular tables it is an error.
    pub fn set(&mut self, row: usize, col: usize, v: T) -> Result<(), TableError> {
        self.check_index(row, col)?;
        let idx = if self.uplo.contains(row, col) {
            (row, col)
        } else if F::SYMMETRIC {
            (col, row)
        } else {
            return Err(TableError::OutOfRange {
                axis: "element",
                index: row * self.n + col,
                dim: self.n,
            });
        };
        let k = packed_index(self.uplo, self.n, idx);
        self.data[k] = v;
        Ok(())
    }

    /// Set every stored entry to `v`.
    pub fn assign(&mut self, v: T) {
        self.data.iter_mut().for_each(|x| *x = v);
    }

    /// Full `n × n` row-major expansion of the table.
    pub fn to_dense(&self) -> Vec<T> {
        iproduct!(0..self.n, 0..self.n)
            .map(|(row, col)| self.value(row, col))
            .collect()
    }

    /// Copy of this table stored in the `uplo` triangle.
    ///
    /// The stored entry `(i, j)` of the result is the stored entry `(j, i)`
    /// of `self`.  For symmetric tables this represents the same matrix.
    /// For triangular tables switching triangles is a transpose.
    pub fn to_layout(&self, uplo: MatrixTriangle) -> Self {
        if uplo == self.uplo {
            return self.clone();
        }
        let mut out = Self::zeros(self.n, uplo);
        for row in 0..self.n {
            for col in out.stored_cols(row) {
                let k = packed_index(uplo, self.n, (row, col));
                out.data[k] = self.data[packed_index(self.uplo, self.n, (col, row))];
            }
        }
        out
    }

    // columns of `row` that are held in storage
    fn stored_cols(&self, row: usize) -> Range<usize> {
        match self.uplo {
            MatrixTriangle::Tril => 0..row + 1,
            MatrixTriangle::Triu => row..self.n,
        }
    }

    #[inline]
    fn value(&self, row: usize, col: usize) -> T {
        if self.uplo.contains(row, col) {
            self.data[packed_index(self.uplo, self.n, (row, col))]
        } else if F::SYMMETRIC {
            self.data[packed_index(self.uplo, self.n, (col, row))]
        } else {
            T::zero()
        }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), TableError> {
        if row >= self.n {
            return Err(TableError::OutOfRange {
                axis: "row",
                index: row,
                dim: self.n,
            });
        }
        if col >= self.n {
            return Err(TableError::OutOfRange {
                axis: "column",
                index: col,
                dim: self.n,
            });
        }
        Ok(())
    }

    fn check_rows(&self, start: usize, count: usize) -> Result<(), TableError> {
        match start.checked_add(count) {
            Some(end) if end <= self.n => Ok(()),
            _ => Err(TableError::row_range(start, count, self.n)),
        }
    }

    fn acquire(&mut self, region: ViewRegion, mode: AccessMode) -> Result<BlockView<T>, TableError> {
        let shape = region.shape(self.n);
        let ticket = self.ledger.open(region, mode, F::SYMMETRIC)?;
        let data = if mode.reads() {
            self.materialize(region)
        } else {
            vec![T::zero(); shape.0 * shape.1]
        };
        Ok(BlockView::new(ticket, region, mode, shape, data))
    }

    fn release(&mut self, region: ViewRegion, view: BlockView<T>) -> Result<(), TableError> {
        self.ledger.close(view.ticket(), region)?;
        if view.mode().writes() {
            self.commit(region, view.as_slice());
        }
        Ok(())
    }

    fn materialize(&self, region: ViewRegion) -> Vec<T> {
        match region {
            ViewRegion::Rows { start, count } => iproduct!(start..start + count, 0..self.n)
                .map(|(row, col)| self.value(row, col))
                .collect(),
            ViewRegion::Column { col, start, count } => (start..start + count)
                .map(|row| self.value(row, col))
                .collect(),
        }
    }

    fn commit(&mut self, region: ViewRegion, src: &[T]) {
        let (n, uplo) = (self.n, self.uplo);

        match region {
            ViewRegion::Rows { start, count } => {
                let rows = start..start + count;

                // mirrored entries first; a stored entry inside the block
                // overrides its reflection
                if F::SYMMETRIC {
                    for (row, col) in iproduct!(rows.clone(), 0..n) {
                        if !uplo.contains(row, col) && !rows.contains(&col) {
                            let k = packed_index(uplo, n, (col, row));
                            self.data[k] = src[(row - start) * n + col];
                        }
                    }
                }
                for row in rows {
                    for col in self.stored_cols(row) {
                        let k = packed_index(uplo, n, (row, col));
                        self.data[k] = src[(row - start) * n + col];
                    }
                }
            }
            ViewRegion::Column { col, start, count } => {
                for (row, &v) in (start..start + count).zip(src) {
                    if uplo.contains(row, col) {
                        self.data[packed_index(uplo, n, (row, col))] = v;
                    } else if F::SYMMETRIC {
                        self.data[packed_index(uplo, n, (col, row))] = v;
                    }
                }
            }
        }
    }
}

impl<T, F> ShapedTable for PackedStorageMatrix<T, F> {
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T, F> NumericTable<T> for PackedStorageMatrix<T, F>
where
    T: FloatT,
    F: FillMode,
{
    fn get_rows_with_mode(
        &mut self,
        start_row: usize,
        row_count: usize,
        mode: AccessMode,
    ) -> Result<BlockView<T>, TableError> {
        self.check_rows(start_row, row_count)?;
        let region = ViewRegion::Rows {
            start: start_row,
            count: row_count,
        };
        self.acquire(region, mode)
    }

    fn release_rows(
        &mut self,
        start_row: usize,
        row_count: usize,
        view: BlockView<T>,
    ) -> Result<(), TableError> {
        let region = ViewRegion::Rows {
            start: start_row,
            count: row_count,
        };
        self.release(region, view)
    }

    fn get_column_with_mode(
        &mut self,
        col_index: usize,
        start_row: usize,
        row_count: usize,
        mode: AccessMode,
    ) -> Result<BlockView<T>, TableError> {
        if col_index >= self.n {
            return Err(TableError::OutOfRange {
                axis: "column",
                index: col_index,
                dim: self.n,
            });
        }
        self.check_rows(start_row, row_count)?;
        let region = ViewRegion::Column {
            col: col_index,
            start: start_row,
            count: row_count,
        };
        self.acquire(region, mode)
    }

    fn release_column(
        &mut self,
        col_index: usize,
        start_row: usize,
        row_count: usize,
        view: BlockView<T>,
    ) -> Result<(), TableError> {
        let region = ViewRegion::Column {
            col: col_index,
            start: start_row,
            count: row_count,
        };
        self.release(region, view)
    }

    fn discard(&mut self, view: BlockView<T>) -> Result<(), TableError> {
        self.ledger.close(view.ticket(), view.region())
    }
}

impl<T, F> std::fmt::Display for PackedStorageMatrix<T, F>
where
    T: FloatT,
    F: FillMode,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.n {
            write!(f, "[ ")?;
            for j in 0..self.n {
                write!(f, " {:?}", self.value(i, j))?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
