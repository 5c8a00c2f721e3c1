use crate::errors::EncodingError;
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

/// A charset encoding that can be used to write markup.
///
/// Markup delimiters must stay single ASCII bytes in the output, so only encodings that
/// are [ASCII-compatible](https://encoding.spec.whatwg.org/#ascii-compatible-encoding)
/// are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiCompatibleEncoding(&'static Encoding);

impl AsciiCompatibleEncoding {
    /// Returns `Some` if `Encoding` is ascii-compatible, or `None` otherwise.
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Option<Self> {
        encoding.is_ascii_compatible().then_some(Self(encoding))
    }

    /// Looks the encoding up by one of its
    /// [labels](https://encoding.spec.whatwg.org/#names-and-labels), e.g. `"windows-1251"`.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        let encoding = Encoding::for_label_no_replacement(label.as_bytes())
            .ok_or(EncodingError::UnknownEncoding)?;

        Self::try_from(encoding)
    }

    pub fn utf_8() -> Self {
        Self(UTF_8)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Converts a UTF-8 fragment into the bytes of this encoding.
    ///
    /// Characters that can't be represented are replaced with decimal numeric
    /// character references (`&#NNNN;`). UTF-8 fragments are passed through without copying.
    #[inline]
    pub(crate) fn encode<'s>(&self, fragment: &'s str) -> Cow<'s, [u8]> {
        if self.0 == UTF_8 {
            Cow::Borrowed(fragment.as_bytes())
        } else {
            self.0.encode(fragment).0
        }
    }
}

impl Default for AsciiCompatibleEncoding {
    #[inline]
    fn default() -> Self {
        Self::utf_8()
    }
}

impl From<AsciiCompatibleEncoding> for &'static Encoding {
    #[inline]
    fn from(ascii_enc: AsciiCompatibleEncoding) -> &'static Encoding {
        ascii_enc.0
    }
}

impl TryFrom<&'static Encoding> for AsciiCompatibleEncoding {
    type Error = EncodingError;

    #[inline]
    fn try_from(enc: &'static Encoding) -> Result<Self, EncodingError> {
        Self::new(enc).ok_or(EncodingError::NonAsciiCompatibleEncoding)
    }
}
