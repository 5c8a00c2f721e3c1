//! Reconstructs HTML/XML markup from the event stream of a markup parser.
//!
//! A parser (the driver) reports what it finds in document order through the [`TagVisitor`]
//! callbacks: tags, text, comments, CDATA sections, declarations and legacy conditional
//! comments. [`TagWriter`] is the reference visitor: it writes each event back as markup to an
//! [`OutputSink`], escaping text outside of raw-content elements such as `<script>`.
//!
//! # Example
//! ```
//! use markup_writer::{replay, Doctype, Event, Tag, TagType, TagWriter};
//!
//! let events = vec![
//!     Event::Doctype(Doctype::html5()),
//!     Event::Tag(Tag::new("p", TagType::Start)),
//!     Event::Text("Fish & Chips".into()),
//!     Event::Tag(Tag::new("p", TagType::End)),
//! ];
//!
//! let mut writer = TagWriter::new();
//!
//! replay(&events, &mut writer).unwrap();
//!
//! assert_eq!(
//!     writer.output().to_str_lossy(),
//!     "<!DOCTYPE html><p>Fish &amp; Chips</p>"
//! );
//! ```

#![forbid(unsafe_code)]

#[macro_use]
mod debug_trace;

mod base;
mod errors;
mod sink;
mod visitor;
mod writer;

pub mod html;

pub use self::base::AsciiCompatibleEncoding;
pub use self::errors::{AttributeNameError, EncodingError, TagNameError, WriteError};
pub use self::html::{Attribute, Doctype, Tag, TagType, TextType};
pub use self::sink::{IoSink, OutputBuffer, OutputSink};
pub use self::visitor::{
    replay, ConditionalComment, Event, TagVisitor, VisitorChain, XmlDeclaration,
};
pub use self::writer::{TagWriter, WriterSettings};
