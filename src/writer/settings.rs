use crate::base::AsciiCompatibleEncoding;

/// Specifies settings for [`TagWriter`](crate::TagWriter).
///
/// # Example
/// ```
/// use markup_writer::{AsciiCompatibleEncoding, OutputBuffer, TagWriter, WriterSettings};
///
/// let settings = WriterSettings {
///     encoding: AsciiCompatibleEncoding::from_label("windows-1251").unwrap(),
/// };
///
/// let writer = TagWriter::with_settings(OutputBuffer::new(), settings);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WriterSettings {
    /// The character encoding of the output.
    ///
    /// Characters that can't be represented in it are written as numeric character references,
    /// which is only meaningful in text and attribute values.
    ///
    /// ### Default
    ///
    /// `UTF-8`.
    pub encoding: AsciiCompatibleEncoding,
}

impl WriterSettings {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}
