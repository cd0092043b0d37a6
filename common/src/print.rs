//! Print to an output sink
//!
//! `Console` renders the runtime's fixed output patterns onto any writer. The
//! exported entry points wrap standard output; tests wrap a `Vec<u8>`.

use std::io::{self, Stdout, Write};

use crate::Result;

pub struct Console<W> {
    sink: W,
}

impl Console<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn put_byte(&mut self, b: u8) -> Result<()> {
        self.sink.write_all(&[b])?;
        Ok(())
    }

    /// Decimal value followed by a single space, no newline.
    pub fn print_i32(&mut self, value: i32) -> Result<()> {
        write!(self.sink, "{value} ")?;
        Ok(())
    }

    pub fn println(&mut self) -> Result<()> {
        self.put_byte(b'\n')
    }

    /// Only the low byte of `code` is written, as C's `%c` does.
    pub fn print_chr(&mut self, code: i32) -> Result<()> {
        self.put_byte(code as u8)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
