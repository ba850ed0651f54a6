use super::{PackedStorageMatrix, ShapedTable};
use crate::algebra::*;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Tables that can be saved to and loaded from JSON files.
pub trait TableJSONReadWrite: Sized {
    /// write the table contents to a file
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    /// read a table from a file written by `save_to_file`
    fn load_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// The packed contents of a table, without view bookkeeping.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonTableData<T> {
    pub n: usize,
    pub uplo: MatrixTriangle,
    pub fill: String,
    pub data: Vec<T>,
}

impl<T, F> TableJSONReadWrite for PackedStorageMatrix<T, F>
where
    T: FloatT + DeserializeOwned + Serialize,
    F: FillMode,
{
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        // json has no encoding for inf or nan
        if self.data.iter().any(|x| !x.is_finite()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "table contains non-finite values",
            ));
        }

        let json_data = JsonTableData {
            n: self.nrows(),
            uplo: self.uplo,
            fill: F::NAME.to_string(),
            data: self.data.clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonTableData<T> = serde_json::from_str(&buffer)?;

        if json_data.fill != F::NAME {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected a {} table, found {}", F::NAME, json_data.fill),
            ));
        }

        Self::new(json_data.data, json_data.n, json_data.uplo)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_json_io() {
    use crate::table::{NumericTable, PackedSymmetricMatrix, PackedTriangularMatrix};
    use std::io::{Seek, SeekFrom};

    let data: Vec<f64> = (0..10).map(|k| k as f64).collect();
    let mut table = PackedSymmetricMatrix::new(data, 4, MatrixTriangle::Triu).unwrap();

    // outstanding views are not written
    let view = table.get_column(1, 0, 4).unwrap();

    let mut file = tempfile::tempfile().unwrap();
    table.save_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let table2 = PackedSymmetricMatrix::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(table, table2);
    assert_eq!(table2.outstanding_views(), 0);
    table.release_column(1, 0, 4, view).unwrap();

    // fill mode is checked on load
    file.seek(SeekFrom::Start(0)).unwrap();
    let err = PackedTriangularMatrix::<f64>::load_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
