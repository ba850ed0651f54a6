#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use packed_triangular::{algebra::*, table::*};
    use std::io::{Seek, SeekFrom};

    let data = (0..15).map(|k| k as f64).collect();
    let mut table = PackedTriangularMatrix::new(data, 5, MatrixTriangle::Tril).unwrap();
    table.set(3, 2, 239.).unwrap();

    // write the table to a file
    let mut file = tempfile::tempfile().unwrap();
    table.save_to_file(&mut file).unwrap();

    // read the table from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut table2 = PackedTriangularMatrix::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(table, table2);

    let column = table2.get_column(2, 0, 5).unwrap();
    assert_eq!(column[3], 239.);
    table2.release_column(2, 0, 5, column).unwrap();
}

#[cfg(feature = "serde")]
#[test]
fn test_json_bad_length() {
    use packed_triangular::table::*;
    use std::io::{Seek, SeekFrom, Write};

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(br#"{"n":3,"uplo":"Tril","fill":"triangular","data":[1.0,2.0]}"#)
        .unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = PackedTriangularMatrix::<f64>::load_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_non_finite() {
    use packed_triangular::{algebra::*, table::*};

    let mut table = PackedSymmetricMatrix::<f64>::zeros(2, MatrixTriangle::Triu);
    table.set(1, 0, f64::NAN).unwrap();
    let mut file = tempfile::tempfile().unwrap();
    let err = table.save_to_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_huge_dimension() {
    use packed_triangular::table::*;
    use std::io::{Seek, SeekFrom, Write};

    // n(n+1)/2 does not fit in 64 bits
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(br#"{"n":8589934592,"uplo":"Tril","fill":"triangular","data":[1.0]}"#)
        .unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = PackedTriangularMatrix::<f64>::load_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
