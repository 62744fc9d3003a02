//! Byte sinks that backends hand finished lines to

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Shared handle to a writer. Clones (and named loggers) write to the same
/// underlying destination.
#[derive(Clone)]
pub struct Sink {
    name: &'static str,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", writer)
    }

    fn named<W: Write + Send + 'static>(name: &'static str, writer: W) -> Self {
        Self {
            name,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Write the whole string and flush.
    pub fn write_str(&self, s: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(s.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write a finished line. Failures are reported on stderr and swallowed:
    /// a log call never fails.
    pub fn emit(&self, line: &str) {
        if let Err(e) = self.write_str(line) {
            eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", self.name, e);
        }
    }

    /// Whether two handles point at the same writer.
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}

impl From<SharedBuffer> for Sink {
    fn from(buffer: SharedBuffer) -> Self {
        Sink::named("buffer", buffer)
    }
}

/// Cloneable in-memory writer for capturing output.
///
/// ```
/// use polylog::{args, Level, Logger, SharedBuffer, WriterLogger};
///
/// let buf = SharedBuffer::new();
/// let logger = WriterLogger::new(buf.clone());
/// logger.info(&args!["captured"]);
/// assert_eq!(buf.contents(), "[INFO]  captured\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    /// Return the contents and clear the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_buffer_capture() {
        let buf = SharedBuffer::new();
        let sink = Sink::from(buf.clone());
        sink.emit("one\n");
        sink.emit("two\n");
        assert_eq!(buf.contents(), "one\ntwo\n");
        assert_eq!(buf.take(), "one\ntwo\n");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_clones_share_writer() {
        let buf = SharedBuffer::new();
        let sink = Sink::from(buf.clone());
        let clone = sink.clone();
        clone.emit("x");
        assert!(sink.same_as(&clone));
        assert!(!sink.same_as(&Sink::from(SharedBuffer::new())));
        assert_eq!(buf.contents(), "x");
    }

    #[test]
    fn test_write_errors_surface_from_write_str() {
        let sink = Sink::from_writer(BrokenWriter);
        assert!(sink.write_str("lost").is_err());
        // emit swallows the failure
        sink.emit("lost");
    }
}
