//! Numeric primitives shared by the packed table types.
//!
//! This module defines the [`FloatT`] trait used for all table element
//! types, the triangle and fill markers that describe a packed layout,
//! the index arithmetic that maps dense `(row, col)` coordinates onto
//! packed storage, and the error types returned by table operations.

mod error_types;
mod floats;
mod matrix_types;
mod scalarmath;

pub use error_types::*;
pub use floats::*;
pub use matrix_types::*;
pub(crate) use scalarmath::*;
