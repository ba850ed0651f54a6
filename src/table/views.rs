use crate::algebra::{AccessMode, TableError};
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

// tickets are unique across all tables
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// The region of a table covered by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRegion {
    /// a contiguous block of full rows
    Rows {
        /// first row
        start: usize,
        /// number of rows
        count: usize,
    },
    /// a single column over a contiguous row range
    Column {
        /// column index
        col: usize,
        /// first row
        start: usize,
        /// number of rows
        count: usize,
    },
}

impl ViewRegion {
    /// dense (rows, columns) shape of a view over this region in a
    /// table with `ncols` columns
    pub fn shape(&self, ncols: usize) -> (usize, usize) {
        match *self {
            ViewRegion::Rows { count, .. } => (count, ncols),
            ViewRegion::Column { count, .. } => (count, 1),
        }
    }

    fn row_range(&self) -> (usize, usize) {
        match *self {
            ViewRegion::Rows { start, count } => (start, start + count),
            ViewRegion::Column { start, count, .. } => (start, start + count),
        }
    }

    /// true if the region covers no entries
    pub fn is_empty(&self) -> bool {
        match *self {
            ViewRegion::Rows { count, .. } => count == 0,
            ViewRegion::Column { count, .. } => count == 0,
        }
    }

    /// true if the two regions share at least one dense entry
    pub fn overlaps(&self, other: &ViewRegion) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a0, a1) = self.row_range();
        let (b0, b1) = other.row_range();
        let rows_meet = a0 < b1 && b0 < a1;

        match (self, other) {
            (ViewRegion::Column { col: c1, .. }, ViewRegion::Column { col: c2, .. }) => {
                c1 == c2 && rows_meet
            }
            _ => rows_meet,
        }
    }

    /// true if the two regions share a dense entry, or an entry of one is
    /// the transpose of an entry of the other.  This is the overlap test
    /// for symmetric storage, where `(i, j)` and `(j, i)` are one element.
    pub fn overlaps_mirrored(&self, other: &ViewRegion) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.overlaps(other) {
            return true;
        }
        match (*self, *other) {
            // rows a and b always share (a, b) ~ (b, a)
            (ViewRegion::Rows { .. }, ViewRegion::Rows { .. }) => true,
            (ViewRegion::Rows { start, count }, ViewRegion::Column { col, .. })
            | (ViewRegion::Column { col, .. }, ViewRegion::Rows { start, count }) => {
                (start..start + count).contains(&col)
            }
            (
                ViewRegion::Column {
                    col: c1,
                    start: s1,
                    count: n1,
                },
                ViewRegion::Column {
                    col: c2,
                    start: s2,
                    count: n2,
                },
            ) => (s1..s1 + n1).contains(&c2) && (s2..s2 + n2).contains(&c1),
        }
    }
}

/// A dense, row-major materialization of part of a table.
///
/// Views are handed out by [`NumericTable`](crate::table::NumericTable)
/// acquire calls and must be handed back exactly once through the matching
/// release call, which consumes the view.  A view that is dropped without
/// being released keeps its region locked; use
/// [`discard`](crate::table::NumericTable::discard) to close it without
/// committing.
#[derive(Debug)]
pub struct BlockView<T> {
    ticket: u64,
    region: ViewRegion,
    mode: AccessMode,
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T> BlockView<T> {
    pub(crate) fn new(
        ticket: u64,
        region: ViewRegion,
        mode: AccessMode,
        shape: (usize, usize),
        data: Vec<T>,
    ) -> Self {
        debug_assert_eq!(data.len(), shape.0 * shape.1);
        Self {
            ticket,
            region,
            mode,
            nrows: shape.0,
            ncols: shape.1,
            data,
        }
    }

    pub(crate) fn ticket(&self) -> u64 {
        self.ticket
    }

    /// region of the table this view was acquired for
    pub fn region(&self) -> ViewRegion {
        self.region
    }

    /// access mode this view was acquired with
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// number of rows in the view
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// number of columns in the view
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// (rows, columns) of the view
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// view data in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// mutable view data in row-major order
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// the `i`th row of the view
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows);
        &self.data[(i * self.ncols)..(i + 1) * self.ncols]
    }

    /// the `i`th row of the view, mutably
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.nrows);
        &mut self.data[(i * self.ncols)..(i + 1) * self.ncols]
    }

    #[inline]
    fn index_linear(&self, (row, col): (usize, usize)) -> usize {
        assert!(row < self.nrows && col < self.ncols);
        row * self.ncols + col
    }
}

// linear indexing, mostly for single column views
impl<T> Index<usize> for BlockView<T> {
    type Output = T;
    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for BlockView<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<T> Index<(usize, usize)> for BlockView<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data[lidx]
    }
}

impl<T> IndexMut<(usize, usize)> for BlockView<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenView {
    ticket: u64,
    region: ViewRegion,
    mode: AccessMode,
}

/// Bookkeeping of the views a table currently has outstanding.
#[derive(Debug, Default, Clone)]
pub(crate) struct ViewLedger {
    open: Vec<OpenView>,
}

impl ViewLedger {
    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }

    /// Register a new view, returning its ticket.  Fails if a view
    /// overlapping `region` is outstanding, unless both are read-only.
    /// With `mirrored` set, entries `(i, j)` and `(j, i)` count as the same.
    pub(crate) fn open(
        &mut self,
        region: ViewRegion,
        mode: AccessMode,
        mirrored: bool,
    ) -> Result<u64, TableError> {
        let conflict = self.open.iter().any(|v| {
            let overlap = if mirrored {
                v.region.overlaps_mirrored(&region)
            } else {
                v.region.overlaps(&region)
            };
            overlap && !(v.mode == AccessMode::ReadOnly && mode == AccessMode::ReadOnly)
        });
        if conflict {
            return Err(TableError::InvalidViewState(
                "a view of an overlapping region is already outstanding",
            ));
        }
        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        self.open.push(OpenView {
            ticket,
            region,
            mode,
        });
        Ok(ticket)
    }

    /// Close the view with the given ticket.  The record is removed even
    /// when `region` disagrees with the region the view was opened for.
    pub(crate) fn close(&mut self, ticket: u64, region: ViewRegion) -> Result<(), TableError> {
        let pos = self
            .open
            .iter()
            .position(|v| v.ticket == ticket)
            .ok_or(TableError::InvalidViewState(
                "view was not acquired from this table or was already released",
            ))?;
        let record = self.open.swap_remove(pos);
        if record.region != region {
            return Err(TableError::InvalidViewState(
                "release arguments do not match the acquired region",
            ));
        }
        Ok(())
    }
}
