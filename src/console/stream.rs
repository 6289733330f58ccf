/// Caller-owned stream handles with explicit access modes.
///
/// A [`Stream`] is a cheap clonable handle to one byte source or sink. Every
/// clone sees the same cursor and the same open/closed state, so a caller can
/// hand a clone to a [`Console`](super::Console), keep its own, and close it
/// later. Reads and writes through a closed handle fail with an I/O error.
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::rc::Rc;

/// Access granted when a stream was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
    ReadWrite,
}

impl Mode {
    #[must_use]
    pub fn readable(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    #[must_use]
    pub fn writable(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

#[derive(Debug)]
enum Backend {
    Stdout,
    Stderr,
    Stdin,
    Memory(Cursor<Vec<u8>>),
    File(File),
}

#[derive(Debug)]
struct Inner {
    /// `None` once closed.
    backend: Option<Backend>,
    mode: Mode,
}

/// A shared handle to a readable and/or writable byte stream.
#[derive(Debug, Clone)]
pub struct Stream {
    inner: Rc<RefCell<Inner>>,
}

impl Stream {
    fn new(backend: Backend, mode: Mode) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                backend: Some(backend),
                mode,
            })),
        }
    }

    /// The process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Backend::Stdout, Mode::Write)
    }

    /// The process's standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Backend::Stderr, Mode::Write)
    }

    /// The process's standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(Backend::Stdin, Mode::Read)
    }

    /// An empty in-memory buffer with a single read/write cursor.
    #[must_use]
    pub fn memory(mode: Mode) -> Self {
        Self::new(Backend::Memory(Cursor::new(Vec::new())), mode)
    }

    /// Open a file with the given access.
    ///
    /// `Write` creates or truncates the file. `ReadWrite` creates it if
    /// missing and keeps existing contents.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> io::Result<Self> {
        let mut opts = OpenOptions::new();
        match mode {
            Mode::Read => opts.read(true),
            Mode::Write => opts.write(true).create(true).truncate(true),
            Mode::ReadWrite => opts.read(true).write(true).create(true),
        };
        let file = opts.open(path)?;
        Ok(Self::new(Backend::File(file), mode))
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.inner.borrow().mode
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().backend.is_some()
    }

    /// Open and opened with read access.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.is_open() && self.mode().readable()
    }

    /// Open and opened with write access.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.is_open() && self.mode().writable()
    }

    /// Short backend name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match &self.inner.borrow().backend {
            None => "closed",
            Some(Backend::Stdout) => "stdout",
            Some(Backend::Stderr) => "stderr",
            Some(Backend::Stdin) => "stdin",
            Some(Backend::Memory(_)) => "memory",
            Some(Backend::File(_)) => "file",
        }
    }

    /// Whether both handles refer to the same underlying stream.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Release the backend. Idempotent.
    pub fn close(&self) {
        self.inner.borrow_mut().backend = None;
    }

    /// Write all of `bytes` at the current position.
    ///
    /// # Errors
    ///
    /// Fails if the stream is closed, was not opened for writing, or the
    /// backend reports an error.
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        if !inner.mode.writable() {
            return Err(not_permitted("writing"));
        }
        match inner.backend.as_mut().ok_or_else(closed)? {
            Backend::Stdout => io::stdout().lock().write_all(bytes),
            Backend::Stderr => io::stderr().lock().write_all(bytes),
            Backend::Memory(cursor) => cursor.write_all(bytes),
            Backend::File(file) => file.write_all(bytes),
            Backend::Stdin => Err(not_permitted("writing")),
        }
    }

    /// # Errors
    ///
    /// Fails if the stream is closed or the backend cannot flush.
    pub fn flush(&self) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        match inner.backend.as_mut().ok_or_else(closed)? {
            Backend::Stdout => io::stdout().flush(),
            Backend::Stderr => io::stderr().flush(),
            Backend::File(file) => file.flush(),
            Backend::Memory(_) | Backend::Stdin => Ok(()),
        }
    }

    /// Read up to and including the next `\n`, appending to `buf`.
    ///
    /// Returns the number of bytes read; 0 means end of input.
    ///
    /// # Errors
    ///
    /// Fails if the stream is closed, was not opened for reading, the bytes
    /// are not UTF-8, or the backend reports an error.
    pub fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        let mut inner = self.inner.borrow_mut();
        if !inner.mode.readable() {
            return Err(not_permitted("reading"));
        }
        match inner.backend.as_mut().ok_or_else(closed)? {
            Backend::Stdin => io::stdin().lock().read_line(buf),
            Backend::Memory(cursor) => cursor.read_line(buf),
            Backend::File(file) => read_line_unbuffered(file, buf),
            Backend::Stdout | Backend::Stderr => Err(not_permitted("reading")),
        }
    }

    /// Move the cursor back to the start.
    ///
    /// # Errors
    ///
    /// Fails for closed streams and for the process's standard streams,
    /// which cannot seek.
    pub fn rewind(&self) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        match inner.backend.as_mut().ok_or_else(closed)? {
            Backend::Memory(cursor) => {
                cursor.set_position(0);
                Ok(())
            }
            Backend::File(file) => file.seek(SeekFrom::Start(0)).map(|_| ()),
            Backend::Stdout | Backend::Stderr | Backend::Stdin => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "standard streams cannot be rewound",
            )),
        }
    }

    /// Full contents of an in-memory stream, regardless of cursor position.
    ///
    /// Returns `None` for other backends or once closed.
    #[must_use]
    pub fn buffer_contents(&self) -> Option<String> {
        match &self.inner.borrow().backend {
            Some(Backend::Memory(cursor)) => {
                Some(String::from_utf8_lossy(cursor.get_ref()).into_owned())
            }
            _ => None,
        }
    }
}

/// Read one line from a file without a buffer, so the cursor lands exactly
/// after the newline and later writes go where the caller expects.
fn read_line_unbuffered(file: &mut File, buf: &mut String) -> io::Result<usize> {
    let mut bytes = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match file.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                bytes.push(byte[0]);
                if byte[0] == b'\n' {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    let line = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    buf.push_str(&line);
    Ok(line.len())
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "stream is closed")
}

fn not_permitted(op: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("stream was not opened for {op}"),
    )
}
