//! Packed numeric tables and the dense views used to access them.
//!
//! A packed table stores one triangle of a square matrix.  Data is read and
//! written through [`BlockView`]s acquired from the [`NumericTable`] trait:
//!
//! ```
//! use packed_triangular::algebra::MatrixTriangle;
//! use packed_triangular::table::{NumericTable, PackedTriangularMatrix};
//!
//! let data: Vec<f64> = (0..15).map(|k| k as f64).collect();
//! let mut table = PackedTriangularMatrix::new(data, 5, MatrixTriangle::Tril).unwrap();
//!
//! let mut column = table.get_column(2, 0, 5).unwrap();
//! column[3] = 239.0;
//! table.release_column(2, 0, 5, column).unwrap();
//!
//! assert_eq!(table.raw_storage()[8], 239.0);
//! ```

mod packed;
mod print;
mod settings;
mod traits;
mod views;

pub use packed::*;
pub use print::*;
pub use settings::*;
pub use traits::*;
pub use views::*;

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "serde")]
pub use json::*;
