use super::BlockView;
use crate::algebra::{AccessMode, FloatT, TableError};

/// Dimensions of a table.
pub trait ShapedTable {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if the table has as many rows as columns
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Block access protocol for numeric tables.
///
/// Data is read and written through dense [`BlockView`]s.  Every view
/// returned by an acquire call (`get_*`) must be handed back through the
/// matching release call (`release_*`) with the same arguments.  Release
/// commits the view contents back into the table, unless the view was
/// acquired [`ReadOnly`](AccessMode::ReadOnly).
///
/// Tables are single owner and single threaded.  Acquiring a view of a
/// region that overlaps an outstanding writable view is an error.
pub trait NumericTable<T: FloatT>: ShapedTable {
    /// Acquire rows `start_row..start_row + row_count` with the given mode.
    fn get_rows_with_mode(
        &mut self,
        start_row: usize,
        row_count: usize,
        mode: AccessMode,
    ) -> Result<BlockView<T>, TableError>;

    /// Commit and invalidate a view acquired by `get_rows*`.
    fn release_rows(
        &mut self,
        start_row: usize,
        row_count: usize,
        view: BlockView<T>,
    ) -> Result<(), TableError>;

    /// Acquire column `col_index` over rows `start_row..start_row + row_count`
    /// with the given mode.
    fn get_column_with_mode(
        &mut self,
        col_index: usize,
        start_row: usize,
        row_count: usize,
        mode: AccessMode,
    ) -> Result<BlockView<T>, TableError>;

    /// Commit and invalidate a view acquired by `get_column*`.
    fn release_column(
        &mut self,
        col_index: usize,
        start_row: usize,
        row_count: usize,
        view: BlockView<T>,
    ) -> Result<(), TableError>;

    /// Close a view without committing its contents.
    fn discard(&mut self, view: BlockView<T>) -> Result<(), TableError>;

    /// Acquire a read/write block of rows.
    fn get_rows(&mut self, start_row: usize, row_count: usize) -> Result<BlockView<T>, TableError> {
        self.get_rows_with_mode(start_row, row_count, AccessMode::ReadWrite)
    }

    /// Acquire a read/write column slice.
    fn get_column(
        &mut self,
        col_index: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<BlockView<T>, TableError> {
        self.get_column_with_mode(col_index, start_row, row_count, AccessMode::ReadWrite)
    }
}
