use super::{ConditionalComment, TagVisitor, XmlDeclaration};
use crate::html::{Doctype, Tag};

/// An owned structural event, one variant per [`TagVisitor`] callback.
///
/// Useful for recording an event stream and replaying it later into one or several
/// visitors.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event {
    BeginDocument,
    EndDocument,
    Tag(Tag),
    ScriptBody {
        tag: Tag,
        body: Option<String>,
    },
    Comment(String),
    Text(String),
    CData(String),
    XmlDeclaration {
        version: Option<String>,
        encoding: Option<String>,
        standalone: Option<String>,
    },
    Doctype(Doctype),
    ConditionalComment {
        expression: String,
        is_starting_tag: bool,
        is_hidden: bool,
        is_hidden_end_tag: bool,
    },
    Error(String),
}

impl Event {
    /// Invokes the visitor callback that corresponds to this event.
    pub fn dispatch<V: TagVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        trace!(@event self.kind());

        match self {
            Event::BeginDocument => visitor.begin_document(),
            Event::EndDocument => visitor.end_document(),
            Event::Tag(tag) => visitor.tag(tag),
            Event::ScriptBody { tag, body } => visitor.script_body(tag, body.as_deref()),
            Event::Comment(text) => visitor.comment(text),
            Event::Text(text) => visitor.text(text),
            Event::CData(text) => visitor.cdata(text),
            Event::XmlDeclaration {
                version,
                encoding,
                standalone,
            } => visitor.xml_declaration(&XmlDeclaration {
                version: version.as_deref(),
                encoding: encoding.as_deref(),
                standalone: standalone.as_deref(),
            }),
            Event::Doctype(doctype) => visitor.doctype(doctype),
            Event::ConditionalComment {
                expression,
                is_starting_tag,
                is_hidden,
                is_hidden_end_tag,
            } => visitor.conditional_comment(&ConditionalComment {
                expression,
                is_starting_tag: *is_starting_tag,
                is_hidden: *is_hidden,
                is_hidden_end_tag: *is_hidden_end_tag,
            }),
            Event::Error(message) => visitor.error(message),
        }
    }

    /// A short name of the event kind, used in traces.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::BeginDocument => "begin_document",
            Event::EndDocument => "end_document",
            Event::Tag(_) => "tag",
            Event::ScriptBody { .. } => "script_body",
            Event::Comment(_) => "comment",
            Event::Text(_) => "text",
            Event::CData(_) => "cdata",
            Event::XmlDeclaration { .. } => "xml_declaration",
            Event::Doctype(_) => "doctype",
            Event::ConditionalComment { .. } => "conditional_comment",
            Event::Error(_) => "error",
        }
    }
}

/// Dispatches the events to the visitor in order, stopping at the first error.
pub fn replay<'e, V: TagVisitor + ?Sized>(
    events: impl IntoIterator<Item = &'e Event>,
    visitor: &mut V,
) -> Result<(), V::Error> {
    for event in events {
        event.dispatch(visitor)?;
    }

    Ok(())
}
