use packed_triangular::{algebra::*, io::ConfigurablePrintTarget, table::*};

fn test_print_table() -> PackedTriangularMatrix<f64> {
    let data = (0..6).map(|k| k as f64).collect();
    PackedTriangularMatrix::new(data, 3, MatrixTriangle::Tril).unwrap()
}

fn print_all(printer: &mut TablePrinter, table: &mut PackedTriangularMatrix<f64>) {
    printer.print_rows(table, 0, 3, "Packed rows:").unwrap();
    printer.print_storage(table.raw_storage(), "Packed data:").unwrap();
}

#[test]
fn test_print_to_stdout() {
    let mut table = test_print_table();
    let mut printer = TablePrinter::default();
    printer.print_to_stdout();
    print_all(&mut printer, &mut table);
}

#[test]
fn test_print_to_buffer() {
    let mut table = test_print_table();
    let mut printer = TablePrinter::default();
    printer.print_to_buffer();
    print_all(&mut printer, &mut table);
    let result = printer.get_print_buffer().unwrap();
    assert!(result.contains("Packed rows:"));
    assert!(result.contains(" 3.000    4.000    5.000"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut table = test_print_table();
    let mut printer = TablePrinter::default();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    printer.print_to_file(file.into_file());
    print_all(&mut printer, &mut table);

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("Packed data:"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut table = test_print_table();
    let mut printer = TablePrinter::default();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    printer.print_to_stream(Box::new(file.into_file()));
    print_all(&mut printer, &mut table);

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains(" 0.000    1.000    2.000    3.000    4.000    5.000"));
}

#[test]
fn test_get_buffer_without_buffering() {
    let mut printer = TablePrinter::default();
    assert!(printer.get_print_buffer().is_err());
}
