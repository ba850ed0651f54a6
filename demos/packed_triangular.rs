use packed_triangular::{algebra::*, table::*};

const N_DIM: usize = 5;
const N_READ: usize = 5;
const FIRST_READ_ROW: usize = 0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Packed triangular matrix example");

    let data: Vec<f64> = (0..15usize).map(|k| k.as_T()).collect();
    let mut table = PackedTriangularMatrix::new(data, N_DIM, MatrixTriangle::Tril)?;
    let mut printer = TablePrinter::default();

    // read a block of rows
    let title = format!("Print {} rows from packed data array as double:", N_READ);
    printer.print_rows(&mut table, FIRST_READ_ROW, N_READ, &title)?;

    // read a feature (column)
    let read_feature_idx = 2;
    let mut column = table.get_column(read_feature_idx, FIRST_READ_ROW, N_READ)?;
    printer.print_view(&column, "Print the third feature of packed data:")?;

    // set a new value in the view and release it
    column[3] = 239.0;
    table.release_column(read_feature_idx, FIRST_READ_ROW, N_READ, column)?;

    // read the block of rows again
    printer.print_rows(&mut table, FIRST_READ_ROW, N_READ, &title)?;

    // the packed backing storage
    printer.print_storage(table.raw_storage(), "Data from raw storage:")?;

    Ok(())
}
