//! `std::io::Write` adapters that turn written chunks into log calls
//!
//! Useful for handing a logger to APIs that only accept a writer:
//!
//! ```
//! use polylog::io::LevelWriter;
//! use polylog::{Level, SharedBuffer, WriterLogger};
//! use std::io::Write;
//!
//! let buf = SharedBuffer::new();
//! let mut w = LevelWriter::new(WriterLogger::new(buf.clone()), Level::Warn);
//! w.write_all(b"low on disk").unwrap();
//! assert_eq!(buf.contents(), "[WARN]  low on disk\n");
//! ```

use crate::core::{Arg, Level, Logger};
use crate::current::current;
use std::io::{self, Write};

fn reject_silent(level: Level) -> io::Result<()> {
    if level == Level::Silent {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot write log output at level silent",
        ));
    }
    Ok(())
}

fn chunk(buf: &[u8]) -> Arg {
    Arg::from(String::from_utf8_lossy(buf).into_owned())
}

/// Writes each chunk as one call at a fixed level on a given logger.
#[derive(Debug)]
pub struct LevelWriter<L> {
    logger: L,
    level: Level,
}

impl<L: Logger> LevelWriter<L> {
    pub fn new(logger: L, level: Level) -> Self {
        Self { logger, level }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn into_inner(self) -> L {
        self.logger
    }
}

impl<L: Logger> Write for LevelWriter<L> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        reject_silent(self.level)?;
        self.logger.log(self.level, &[chunk(buf)]);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Like [`LevelWriter`], against whatever logger the current slot holds at
/// write time.
#[derive(Debug, Clone, Copy)]
pub struct CurrentWriter {
    level: Level,
}

impl CurrentWriter {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Write for CurrentWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        reject_silent(self.level)?;
        current().log(self.level, &[chunk(buf)]);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
