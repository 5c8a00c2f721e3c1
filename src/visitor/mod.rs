//! The callback protocol between a markup parser and the consumers of its events.

mod chain;
mod event;

use crate::html::{Doctype, Tag};

pub use self::chain::VisitorChain;
pub use self::event::{replay, Event};

/// An XML declaration, e.g. `<?xml version="1.0" encoding="UTF-8"?>`.
///
/// Absent and empty values are treated the same way.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct XmlDeclaration<'a> {
    pub version: Option<&'a str>,
    pub encoding: Option<&'a str>,
    pub standalone: Option<&'a str>,
}

/// One half of a legacy conditional comment.
///
/// `expression` is the condition without the `if` keyword, e.g. `lt IE 9`. Closing
/// halves always read `endif` and ignore it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ConditionalComment<'a> {
    pub expression: &'a str,
    /// `<!--[if ...]>` or `<![if ...]>`, as opposed to `<![endif]...`.
    pub is_starting_tag: bool,
    /// Downlevel-hidden: the whole construct is a regular comment for non-IE parsers.
    pub is_hidden: bool,
    /// The construct is terminated with a comment closing sequence (`-->`).
    pub is_hidden_end_tag: bool,
}

impl<'a> ConditionalComment<'a> {
    /// `<!--[if expression]>`
    pub fn hidden_start(expression: &'a str) -> Self {
        ConditionalComment {
            expression,
            is_starting_tag: true,
            is_hidden: true,
            is_hidden_end_tag: false,
        }
    }

    /// `<![endif]-->`
    pub fn hidden_end() -> Self {
        ConditionalComment {
            expression: "",
            is_starting_tag: false,
            is_hidden: true,
            is_hidden_end_tag: true,
        }
    }

    /// `<![if expression]>`
    pub fn revealed_start(expression: &'a str) -> Self {
        ConditionalComment {
            expression,
            is_starting_tag: true,
            is_hidden: false,
            is_hidden_end_tag: false,
        }
    }

    /// `<![endif]>`
    pub fn revealed_end() -> Self {
        ConditionalComment {
            expression: "",
            is_starting_tag: false,
            is_hidden: false,
            is_hidden_end_tag: false,
        }
    }
}

/// Receives the structural events of one document, in document order.
///
/// Every method defaults to doing nothing, so a visitor only overrides the events it is
/// interested in. Returning an error aborts the current callback only: the driver decides
/// whether to keep feeding events.
pub trait TagVisitor {
    type Error;

    /// Called once before the first event of a document.
    #[inline]
    fn begin_document(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once after the last event of a document.
    #[inline]
    fn end_document(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn tag(&mut self, _tag: &Tag) -> Result<(), Self::Error> {
        Ok(())
    }

    /// An element whose whole body was captured by the parser, typically `<script>`.
    /// `body` is raw, unparsed content.
    #[inline]
    fn script_body(&mut self, _tag: &Tag, _body: Option<&str>) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn comment(&mut self, _text: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Decoded text content.
    #[inline]
    fn text(&mut self, _text: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn cdata(&mut self, _text: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn xml_declaration(&mut self, _decl: &XmlDeclaration<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn doctype(&mut self, _doctype: &Doctype) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn conditional_comment(
        &mut self,
        _comment: &ConditionalComment<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Notification about malformed input. The parser keeps going after reporting it.
    #[inline]
    fn error(&mut self, _message: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
