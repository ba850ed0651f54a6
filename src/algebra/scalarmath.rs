use super::MatrixTriangle;

pub(crate) fn triangular_number(k: usize) -> usize {
    (k * (k + 1)) >> 1
}

// k(k+1)/2, or None if it does not fit in a usize
pub(crate) fn checked_triangular_number(k: usize) -> Option<usize> {
    k.checked_add(1)
        .and_then(|k1| k.checked_mul(k1))
        .map(|p| p >> 1)
}

// offset of the first stored entry of `row` in a row-major packed
// triangle of dimension n
#[inline]
pub(crate) fn packed_row_offset(uplo: MatrixTriangle, n: usize, row: usize) -> usize {
    match uplo {
        MatrixTriangle::Tril => triangular_number(row),
        // sum of (n - k) for k in 0..row
        MatrixTriangle::Triu => (row * (2 * n - row + 1)) >> 1,
    }
}

// 0-based index into packed storage of the entry (row, col).  The entry
// must lie in the stored triangle.
#[inline]
pub(crate) fn packed_index(uplo: MatrixTriangle, n: usize, (row, col): (usize, usize)) -> usize {
    debug_assert!(uplo.contains(row, col));
    match uplo {
        MatrixTriangle::Tril => packed_row_offset(uplo, n, row) + col,
        MatrixTriangle::Triu => packed_row_offset(uplo, n, row) + (col - row),
    }
}
