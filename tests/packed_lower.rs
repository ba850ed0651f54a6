use packed_triangular::{algebra::*, table::*};

fn iota_table(n: usize) -> PackedTriangularMatrix<f64> {
    let data = (0..n * (n + 1) / 2).map(|k| k as f64).collect();
    PackedTriangularMatrix::new(data, n, MatrixTriangle::Tril).unwrap()
}

#[test]
fn test_lower_rows_expand() {
    let mut table = iota_table(5);
    let view = table.get_rows(0, 5).unwrap();
    assert_eq!(view.size(), (5, 5));

    #[rustfmt::skip]
    let expected = [
         0.,  0.,  0.,  0.,  0.,
         1.,  2.,  0.,  0.,  0.,
         3.,  4.,  5.,  0.,  0.,
         6.,  7.,  8.,  9.,  0.,
        10., 11., 12., 13., 14.,
    ];
    assert_eq!(view.as_slice(), &expected);
    table.release_rows(0, 5, view).unwrap();
}

#[test]
fn test_lower_column_write() {
    let mut table = iota_table(5);

    let mut column = table.get_column(2, 0, 5).unwrap();
    assert_eq!(column.as_slice(), &[0., 0., 5., 8., 12.]);
    column[3] = 239.;
    table.release_column(2, 0, 5, column).unwrap();

    let column = table.get_column(2, 0, 5).unwrap();
    assert_eq!(column.as_slice(), &[0., 0., 5., 239., 12.]);
    table.release_column(2, 0, 5, column).unwrap();

    let rows = table.get_rows(3, 1).unwrap();
    assert_eq!(rows.row(0), &[6., 7., 239., 9., 0.]);
    table.release_rows(3, 1, rows).unwrap();

    let mut expected: Vec<f64> = (0..15).map(|k| k as f64).collect();
    expected[8] = 239.;
    assert_eq!(table.raw_storage(), expected.as_slice());
}

#[test]
fn test_rows_roundtrip_unchanged() {
    for n in 0..8 {
        let mut table = iota_table(n);
        let before = table.raw_storage().to_vec();
        let view = table.get_rows(0, n).unwrap();
        table.release_rows(0, n, view).unwrap();
        assert_eq!(table.raw_storage(), before.as_slice());
        assert_eq!(table.outstanding_views(), 0);
    }
}

#[test]
fn test_column_write_then_read() {
    let n = 6;
    for col in 0..n {
        for row in col..n {
            let mut table = iota_table(n);
            let mut view = table.get_column(col, 0, n).unwrap();
            view[row] = -1.5;
            table.release_column(col, 0, n, view).unwrap();

            let view = table.get_column(col, 0, n).unwrap();
            assert_eq!(view[row], -1.5);
            table.release_column(col, 0, n, view).unwrap();
        }
    }
}

#[test]
fn test_upper_half_writes_are_discarded() {
    let mut table = iota_table(4);
    let before = table.raw_storage().to_vec();

    let mut view = table.get_rows(0, 4).unwrap();
    view[(0, 3)] = 100.;
    view[(1, 2)] = 100.;
    table.release_rows(0, 4, view).unwrap();
    assert_eq!(table.raw_storage(), before.as_slice());

    let mut view = table.get_column(3, 0, 2).unwrap();
    view[0] = 100.;
    table.release_column(3, 0, 2, view).unwrap();
    assert_eq!(table.raw_storage(), before.as_slice());
}

#[test]
fn test_partial_row_block() {
    let mut table = iota_table(5);
    let mut view = table.get_rows(2, 2).unwrap();
    assert_eq!(view.row(0), &[3., 4., 5., 0., 0.]);
    view[(1, 0)] = 60.;
    table.release_rows(2, 2, view).unwrap();
    assert_eq!(table.get(3, 0).unwrap(), 60.);
    assert_eq!(table.raw_storage()[6], 60.);
}

#[test]
fn test_rows_out_of_range() {
    let n = 5;
    let mut table = iota_table(n);
    for start in 0..=n + 2 {
        for count in 0..=n + 2 {
            let result = table.get_rows(start, count);
            if start + count > n {
                assert!(matches!(result, Err(TableError::OutOfRange { .. })));
            } else {
                let view = result.unwrap();
                table.release_rows(start, count, view).unwrap();
            }
        }
    }
    assert!(matches!(
        table.get_rows(usize::MAX, 2),
        Err(TableError::OutOfRange { .. })
    ));
}

#[test]
fn test_column_out_of_range() {
    let mut table = iota_table(5);
    assert!(matches!(
        table.get_column(5, 0, 1),
        Err(TableError::OutOfRange { axis: "column", index: 5, dim: 5 })
    ));
    assert!(matches!(
        table.get_column(0, 3, 3),
        Err(TableError::OutOfRange { axis: "row", index: 6, dim: 5 })
    ));
    assert_eq!(table.outstanding_views(), 0);
}

#[test]
fn test_lower_f32() {
    let data: Vec<f32> = (0..6).map(|k| k as f32).collect();
    let mut table = PackedTriangularMatrix::new(data, 3, MatrixTriangle::Tril).unwrap();
    let view = table.get_rows(0, 3).unwrap();
    assert_eq!(view.row(2), &[3f32, 4., 5.]);
    table.release_rows(0, 3, view).unwrap();
}
