//! __packed-triangular__ provides numeric tables for square matrices that are
//! stored in packed form, i.e. only the `n(n+1)/2` entries of one triangle are
//! held in memory.
//!
//! Two table kinds share one storage type:
//!
//! * [`PackedTriangularMatrix`](table::PackedTriangularMatrix): the unstored
//!   half of the matrix is zero.
//! * [`PackedSymmetricMatrix`](table::PackedSymmetricMatrix): the unstored
//!   half mirrors the stored half.
//!
//! Either triangle may be stored ([`MatrixTriangle`](algebra::MatrixTriangle)),
//! always in row-major packed order.
//!
//! Tables are accessed through dense views.  A view over a block of rows or
//! over one column is acquired with the
//! [`NumericTable`](table::NumericTable) trait, read or modified in place, and
//! released back into packed storage:
//!
//! ```
//! use packed_triangular::algebra::MatrixTriangle;
//! use packed_triangular::table::{NumericTable, PackedTriangularMatrix};
//!
//! let data: Vec<f64> = (0..6).map(|k| k as f64).collect();
//! let mut table = PackedTriangularMatrix::new(data, 3, MatrixTriangle::Tril).unwrap();
//!
//! let view = table.get_rows(1, 2).unwrap();
//! assert_eq!(view.row(0), &[1.0, 2.0, 0.0]);
//! assert_eq!(view.row(1), &[3.0, 4.0, 5.0]);
//! table.release_rows(1, 2, view).unwrap();
//! ```
//!
//! # Features
//!
//! * `serde` (default): save and load tables as JSON through
//!   [`TableJSONReadWrite`](table::TableJSONReadWrite).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod io;
pub mod table;
