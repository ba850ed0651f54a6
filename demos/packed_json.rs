use packed_triangular::{algebra::*, table::*};
use std::fs::File;
use std::io::{Seek, SeekFrom};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[rustfmt::skip]
    let dense = [
        4.0, 1.0, 2.0,
        1.0, 5.0, 3.0,
        2.0, 3.0, 6.0,
    ];
    let table = PackedSymmetricMatrix::from_dense(&dense, 3, MatrixTriangle::Triu)?;

    let path = std::env::temp_dir().join("packed_symmetric.json");
    let mut file = File::create(&path)?;
    table.save_to_file(&mut file)?;
    println!("wrote {}", path.display());

    let mut file = File::open(&path)?;
    file.seek(SeekFrom::Start(0))?;
    let mut loaded = PackedSymmetricMatrix::<f64>::load_from_file(&mut file)?;

    let mut printer = TablePrinter::default();
    printer.print_rows(&mut loaded, 0, 3, "Symmetric table read back:")?;

    Ok(())
}
