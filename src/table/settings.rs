use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by print settings validation
pub enum PrintSettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field {0}")]
    BadFieldValue(&'static str),
}

/// Formatting options used by [`TablePrinter`](crate::table::TablePrinter).
///
/// Construct with [`PrintSettingsBuilder`]:
///
/// ```
/// use packed_triangular::table::PrintSettingsBuilder;
///
/// let settings = PrintSettingsBuilder::default()
///     .precision(1)
///     .build()
///     .unwrap();
/// assert_eq!(settings.width, 6);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintSettings {
    ///minimum width of each printed value
    #[builder(default = "6")]
    pub width: usize,

    ///digits after the decimal point
    #[builder(default = "3")]
    pub precision: usize,

    ///text placed between values on a line
    #[builder(default = "String::from(\"   \")")]
    pub separator: String,

    ///maximum number of rows printed per block.  Remaining rows are
    ///summarized in a single line.
    #[builder(default = "None", setter(strip_option))]
    pub max_rows: Option<usize>,

    ///print a blank line after each block
    #[builder(default = "true")]
    pub trailing_blank_line: bool,
}

impl Default for PrintSettings {
    fn default() -> PrintSettings {
        PrintSettingsBuilder::default().build().unwrap()
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<PrintSettingsError> for PrintSettingsBuilderError {
    fn from(e: PrintSettingsError) -> Self {
        PrintSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl PrintSettingsBuilder {
    /// check that the formatting fields are usable
    pub fn validate(&self) -> Result<(), PrintSettingsError> {
        if let Some(precision) = self.precision {
            if precision > 17 {
                return Err(PrintSettingsError::BadFieldValue("precision"));
            }
        }
        if let Some(ref separator) = self.separator {
            if separator.contains('\n') {
                return Err(PrintSettingsError::BadFieldValue("separator"));
            }
        }
        if let Some(Some(0)) = self.max_rows {
            return Err(PrintSettingsError::BadFieldValue("max_rows"));
        }
        Ok(())
    }
}
