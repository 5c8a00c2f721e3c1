//! Output destinations of the writer.

use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::io::{self, Write};

/// Defines an interface for the writer's output.
///
/// Chunks are appended in order and never taken back. Whether a rejected chunk is absent
/// from the output or partially written is up to the sink.
///
/// # Example
/// ```
/// use markup_writer::OutputSink;
///
/// struct Utf8Sink(String);
///
/// impl OutputSink for Utf8Sink {
///     fn handle_chunk(&mut self, chunk: &[u8]) -> std::io::Result<()> {
///         let chunk = std::str::from_utf8(chunk)
///             .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
///
///         self.0.push_str(chunk);
///
///         Ok(())
///     }
/// }
/// ```
pub trait OutputSink {
    /// Handles a chunk of output. The chunk is never empty.
    fn handle_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
}

impl<F: FnMut(&[u8]) -> io::Result<()>> OutputSink for F {
    #[inline]
    fn handle_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self(chunk)
    }
}

/// An in-memory, growable output buffer owned by the writer.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer(Vec<u8>);

impl OutputBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns the content as a string, replacing invalid UTF-8 sequences.
    ///
    /// The content is valid UTF-8 as long as the writer uses the UTF-8 output encoding.
    #[inline]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl OutputSink for OutputBuffer {
    #[inline]
    fn handle_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.0.extend_from_slice(chunk);

        Ok(())
    }
}

impl Debug for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OutputBuffer")
            .field(&self.to_str_lossy())
            .finish()
    }
}

/// Adapts any [`std::io::Write`] implementor (a file, a socket, stdout) as an output sink.
#[derive(Debug)]
pub struct IoSink<W: Write>(W);

impl<W: Write> IoSink<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        IoSink(writer)
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> OutputSink for IoSink<W> {
    #[inline]
    fn handle_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.0.write_all(chunk)
    }
}
