use super::{BlockView, NumericTable, PrintSettings};
use crate::algebra::{AccessMode, FloatT, TableError};
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;
use thiserror::Error;

/// Error type returned by table printing.
#[derive(Error, Debug)]
pub enum PrintError {
    /// the table refused the read-only view
    #[error(transparent)]
    Table(#[from] TableError),
    /// writing to the print target failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renders views and tables as fixed-width text blocks.
///
/// Output goes to stdout by default and can be redirected through
/// [`ConfigurablePrintTarget`].
#[derive(Debug, Default)]
pub struct TablePrinter {
    /// formatting options
    pub settings: PrintSettings,
    target: PrintTarget,
}

impl TablePrinter {
    /// printer writing to stdout
    pub fn new(settings: PrintSettings) -> Self {
        Self {
            settings,
            target: PrintTarget::default(),
        }
    }

    /// Print the contents of a view under a title line.
    pub fn print_view<T: FloatT>(&mut self, view: &BlockView<T>, title: &str) -> std::io::Result<()> {
        writeln!(self.target, "{}", title)?;
        self.write_block(view.as_slice(), view.nrows(), view.ncols())
    }

    /// Print rows `start_row..start_row + row_count` of a table.
    ///
    /// The rows are acquired read-only and released before returning, so
    /// the table is left exactly as it was found.
    pub fn print_rows<T, M>(
        &mut self,
        table: &mut M,
        start_row: usize,
        row_count: usize,
        title: &str,
    ) -> Result<(), PrintError>
    where
        T: FloatT,
        M: NumericTable<T>,
    {
        let view = table.get_rows_with_mode(start_row, row_count, AccessMode::ReadOnly)?;
        let printed = self.print_view(&view, title);
        table.release_rows(start_row, row_count, view)?;
        Ok(printed?)
    }

    /// Print one column of a table over a row range, one value per line.
    pub fn print_column<T, M>(
        &mut self,
        table: &mut M,
        col_index: usize,
        start_row: usize,
        row_count: usize,
        title: &str,
    ) -> Result<(), PrintError>
    where
        T: FloatT,
        M: NumericTable<T>,
    {
        let view =
            table.get_column_with_mode(col_index, start_row, row_count, AccessMode::ReadOnly)?;
        let printed = self.print_view(&view, title);
        table.release_column(col_index, start_row, row_count, view)?;
        Ok(printed?)
    }

    /// Print a packed storage buffer as a single row.
    pub fn print_storage<T: FloatT>(&mut self, data: &[T], title: &str) -> std::io::Result<()> {
        writeln!(self.target, "{}", title)?;
        self.write_block(data, 1, data.len())
    }

    fn write_block<T: FloatT>(&mut self, data: &[T], nrows: usize, ncols: usize) -> std::io::Result<()> {
        let (width, precision) = (self.settings.width, self.settings.precision);
        let shown = self.settings.max_rows.map_or(nrows, |m| m.min(nrows));

        for i in 0..shown {
            let line = data[(i * ncols)..(i + 1) * ncols]
                .iter()
                .map(|v| format!("{:>width$.precision$}", v))
                .collect::<Vec<_>>()
                .join(&self.settings.separator);
            writeln!(self.target, "{}", line)?;
        }
        if shown < nrows {
            writeln!(self.target, "... ({} more rows)", nrows - shown)?;
        }
        if self.settings.trailing_blank_line {
            writeln!(self.target)?;
        }
        Ok(())
    }
}

impl ConfigurablePrintTarget for TablePrinter {
    fn print_to_stdout(&mut self) {
        self.target.print_to_stdout()
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.target.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.target.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.target.get_print_buffer()
    }
}
