//! Output destinations for printed tables.

use std::fs::File;
use std::io::{stdout, Error, ErrorKind, Result, Stdout, Write};

/// Where printed output goes.  Files are held as streams.
pub(crate) enum PrintTarget {
    Stdout(Stdout),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
}

impl PrintTarget {
    fn name(&self) -> &'static str {
        match self {
            PrintTarget::Stdout(_) => "stdout",
            PrintTarget::Buffer(_) => "buffer",
            PrintTarget::Stream(_) => "stream",
        }
    }

    fn sink(&mut self) -> &mut dyn Write {
        match self {
            PrintTarget::Stdout(out) => out,
            PrintTarget::Buffer(buf) => buf,
            PrintTarget::Stream(stream) => stream.as_mut(),
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrintTarget({})", self.name())
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.sink().write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.sink().flush()
    }
}

/// Objects whose printed output can be redirected.
pub trait ConfigurablePrintTarget {
    /// print to stdout (the default)
    fn print_to_stdout(&mut self);
    /// print to any writer
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// print to a file
    fn print_to_file(&mut self, file: File) {
        self.print_to_stream(Box::new(file))
    }
    /// collect output in memory, discarding anything collected before
    fn print_to_buffer(&mut self);
    /// contents of the in-memory buffer.  Fails unless
    /// [`print_to_buffer`](ConfigurablePrintTarget::print_to_buffer) is active.
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::default();
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        if let PrintTarget::Buffer(buf) = self {
            return Ok(String::from_utf8_lossy(buf).into_owned());
        }
        Err(Error::new(
            ErrorKind::Other,
            format!("printing to {}, not to a buffer", self.name()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_target() {
        let mut target = PrintTarget::default();
        assert!(target.get_print_buffer().is_err());

        target.print_to_buffer();
        write!(target, "packed {}", 15).unwrap();
        target.flush().unwrap();
        assert_eq!(target.get_print_buffer().unwrap(), "packed 15");

        // switching targets drops the buffer
        target.print_to_stdout();
        assert!(target.get_print_buffer().is_err());
    }

    #[test]
    fn test_file_target_is_a_stream() {
        let mut target = PrintTarget::default();
        target.print_to_file(tempfile::tempfile().unwrap());
        assert_eq!(format!("{target:?}"), "PrintTarget(stream)");
        write!(target, "x").unwrap();
    }
}
