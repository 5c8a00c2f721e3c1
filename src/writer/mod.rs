//! The reference [`TagVisitor`] that turns an event stream back into markup.

mod format;
mod settings;

use self::format::*;
use crate::errors::WriteError;
use crate::html::{escape_body_text, Doctype, Tag, TagType};
use crate::sink::{OutputBuffer, OutputSink};
use crate::visitor::{ConditionalComment, TagVisitor, XmlDeclaration};

pub use self::settings::WriterSettings;

/// Writes markup for every event it receives to an [`OutputSink`].
///
/// Text is HTML-escaped unless the most recently written tag starts a raw-content element
/// (see [`Tag::is_raw`]). This raw-content state is the only state carried between events. It
/// is reset only by constructing a new writer, so a writer is meant to process a single
/// document: [`end_document`](TagVisitor::end_document) doesn't reset it.
///
/// Each callback formats its whole fragment first and hands it over to the sink in a single
/// [`handle_chunk`](OutputSink::handle_chunk) call. If the sink fails, the callback returns
/// [`WriteError::WriteFailure`] and the fragment is not retried.
///
/// # Example
/// ```
/// use markup_writer::{Tag, TagType, TagVisitor, TagWriter};
///
/// let mut writer = TagWriter::new();
///
/// writer.tag(&Tag::new("p", TagType::Start)).unwrap();
/// writer.text("1 < 2").unwrap();
/// writer.tag(&Tag::new("p", TagType::End)).unwrap();
///
/// assert_eq!(writer.output().to_str_lossy(), "<p>1 &lt; 2</p>");
/// ```
pub struct TagWriter<O: OutputSink = OutputBuffer> {
    output: O,
    settings: WriterSettings,
    in_raw_content: bool,
    fragment: String,
}

impl TagWriter<OutputBuffer> {
    /// Creates a writer that accumulates its output in an owned [`OutputBuffer`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(OutputBuffer::new())
    }
}

impl Default for TagWriter<OutputBuffer> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OutputSink> TagWriter<O> {
    #[inline]
    pub fn with_sink(output: O) -> Self {
        Self::with_settings(output, WriterSettings::default())
    }

    pub fn with_settings(output: O, settings: WriterSettings) -> Self {
        TagWriter {
            output,
            settings,
            in_raw_content: false,
            fragment: String::new(),
        }
    }

    /// Returns the output sink, e.g. to read the result after the document has been written.
    #[inline]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[inline]
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    #[inline]
    pub fn into_output(self) -> O {
        self.output
    }

    #[inline]
    pub fn settings(&self) -> &WriterSettings {
        &self.settings
    }

    /// Whether the next text event will be written verbatim.
    #[inline]
    pub fn is_in_raw_content(&self) -> bool {
        self.in_raw_content
    }

    fn emit(&mut self, format: impl FnOnce(&mut dyn FnMut(&str))) -> Result<(), WriteError> {
        self.fragment.clear();

        let fragment = &mut self.fragment;

        format(&mut |chunk| fragment.push_str(chunk));

        if self.fragment.is_empty() {
            return Ok(());
        }

        trace!(@output self.fragment);

        let bytes = self.settings.encoding.encode(&self.fragment);

        self.output.handle_chunk(&bytes)?;

        Ok(())
    }
}

impl<O: OutputSink> TagVisitor for TagWriter<O> {
    type Error = WriteError;

    fn begin_document(&mut self) -> Result<(), WriteError> {
        trace!(@event "begin_document");

        Ok(())
    }

    fn end_document(&mut self) -> Result<(), WriteError> {
        trace!(@event "end_document");

        Ok(())
    }

    fn tag(&mut self, tag: &Tag) -> Result<(), WriteError> {
        trace!(@event "tag", tag.name(), tag.tag_type());

        self.emit(|h| tag.write_to(h))?;
        self.in_raw_content = tag.is_raw();

        Ok(())
    }

    /// Writes the tag as a start tag even if it is self-closing, then the body verbatim, then
    /// the end tag of the same element.
    fn script_body(&mut self, tag: &Tag, body: Option<&str>) -> Result<(), WriteError> {
        trace!(@event "script_body", tag.name());

        self.emit(|h| {
            tag.write_as(TagType::Start, h);

            if let Some(body) = body.filter(|b| !b.is_empty()) {
                h(body);
            }

            tag.write_as(TagType::End, h);
        })?;

        // NOTE: the element is closed now.
        self.in_raw_content = false;

        Ok(())
    }

    fn comment(&mut self, text: &str) -> Result<(), WriteError> {
        trace!(@event "comment");

        self.emit(|h| write_comment(text, h))
    }

    fn text(&mut self, text: &str) -> Result<(), WriteError> {
        trace!(@event "text", self.in_raw_content);

        if self.in_raw_content {
            self.emit(|h| h(text))
        } else {
            self.emit(|h| escape_body_text(text, &mut |chunk| h(chunk)))
        }
    }

    fn cdata(&mut self, text: &str) -> Result<(), WriteError> {
        trace!(@event "cdata");

        self.emit(|h| write_cdata(text, h))
    }

    fn xml_declaration(&mut self, decl: &XmlDeclaration<'_>) -> Result<(), WriteError> {
        trace!(@event "xml_declaration");

        self.emit(|h| write_xml_declaration(decl, h))
    }

    fn doctype(&mut self, doctype: &Doctype) -> Result<(), WriteError> {
        trace!(@event "doctype", doctype.name());

        self.emit(|h| write_doctype(doctype, h))
    }

    fn conditional_comment(&mut self, comment: &ConditionalComment<'_>) -> Result<(), WriteError> {
        trace!(@event "conditional_comment", comment.is_starting_tag);

        self.emit(|h| write_conditional_comment(comment, h))
    }

    fn error(&mut self, message: &str) -> Result<(), WriteError> {
        trace!(@event "error", message);

        Ok(())
    }
}
