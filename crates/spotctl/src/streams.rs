//! Process streams shared by the factory and everything it builds

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

/// Cloneable handle to a line-oriented input stream
#[derive(Clone)]
pub struct InputStream(Arc<Mutex<Box<dyn BufRead + Send>>>);

impl InputStream {
    pub fn new(reader: impl BufRead + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(reader))))
    }

    /// Read one line without its terminator; `None` at end of input
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut reader = self
            .0
            .lock()
            .map_err(|_| io::Error::other("input stream lock poisoned"))?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Cloneable handle to an output stream
#[derive(Clone)]
pub struct OutputStream(Arc<Mutex<Box<dyn Write + Send>>>);

impl OutputStream {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("output stream lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("output stream lock poisoned"))?
            .flush()
    }
}

/// Input, output and error streams of one invocation
#[derive(Clone)]
pub struct Streams {
    pub input: InputStream,
    pub out: OutputStream,
    pub err: OutputStream,
}

impl Streams {
    pub fn new(input: InputStream, out: OutputStream, err: OutputStream) -> Self {
        Self { input, out, err }
    }

    pub fn stdio() -> Self {
        Self {
            input: InputStream::new(io::BufReader::new(io::stdin())),
            out: OutputStream::new(io::stdout()),
            err: OutputStream::new(io::stderr()),
        }
    }
}

/// In-memory writer whose contents stay readable after being handed out
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        match self.0.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("buffer lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_until_eof() {
        let input = InputStream::new(io::Cursor::new("first\r\nsecond\n"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_output_clones_share_the_writer() {
        let buffer = SharedBuffer::new();
        let mut out = OutputStream::new(buffer.clone());
        let mut other = out.clone();

        write!(out, "a").unwrap();
        write!(other, "b").unwrap();
        assert_eq!(buffer.contents(), "ab");
    }
}
