//! Error types returned by the writer and its value types.

use std::io;
use thiserror::Error;

/// An error that occurs when the writer fails to hand a fragment over to its output sink.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The output sink rejected an append. The fragment being written is absent from the output.
    #[error("Failed to write a markup fragment to the output sink: {0}")]
    WriteFailure(#[from] io::Error),
}

/// An error that occurs when an invalid output encoding is configured.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum EncodingError {
    /// The provided value doesn't match any of the encoding labels specified in the
    /// [Encoding Standard](https://encoding.spec.whatwg.org/#names-and-labels).
    #[error("Unknown character encoding has been provided.")]
    UnknownEncoding,

    /// The provided label is for one of the non-ASCII-compatible encodings (`UTF-16LE`, `UTF-16BE`,
    /// `ISO-2022-JP` and `replacement`). These encodings can't represent markup delimiters as
    /// single ASCII bytes and are not supported.
    #[error("Expected ASCII-compatible encoding.")]
    NonAsciiCompatibleEncoding,
}

/// An error that occurs when an invalid value is provided as a tag name.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum TagNameError {
    /// The provided value is empty.
    #[error("Tag name can't be empty.")]
    Empty,

    /// The first character of the provided value is not an ASCII alphabetical character.
    #[error("First character of the tag name should be an ASCII alphabetical character.")]
    InvalidFirstCharacter,

    /// The provided value contains a character that is forbidden by the HTML grammar in tag
    /// names (e.g. `'>'`).
    #[error("`{0}` character is forbidden in the tag name")]
    ForbiddenCharacter(char),
}

/// An error that occurs when an invalid value is provided as an attribute name.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum AttributeNameError {
    /// The provided value is empty.
    #[error("Attribute name can't be empty.")]
    Empty,

    /// The provided value contains a character that is forbidden by the HTML grammar in attribute
    /// names (e.g. `'='`).
    #[error("`{0}` character is forbidden in the attribute name")]
    ForbiddenCharacter(char),
}
