use super::{ConditionalComment, TagVisitor, XmlDeclaration};
use crate::html::{Doctype, Tag};

/// Forwards every event to a list of visitors, in the order they were added.
///
/// If a visitor fails, the visitors after it don't receive the event and the error is
/// returned to the driver.
pub struct VisitorChain<'v, E> {
    visitors: Vec<&'v mut dyn TagVisitor<Error = E>>,
}

impl<'v, E> VisitorChain<'v, E> {
    #[inline]
    pub fn new() -> Self {
        VisitorChain {
            visitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with(mut self, visitor: &'v mut dyn TagVisitor<Error = E>) -> Self {
        self.push(visitor);

        self
    }

    #[inline]
    pub fn push(&mut self, visitor: &'v mut dyn TagVisitor<Error = E>) {
        self.visitors.push(visitor);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    #[inline]
    fn for_each(
        &mut self,
        mut f: impl FnMut(&mut dyn TagVisitor<Error = E>) -> Result<(), E>,
    ) -> Result<(), E> {
        for visitor in &mut self.visitors {
            f(&mut **visitor)?;
        }

        Ok(())
    }
}

impl<E> Default for VisitorChain<'_, E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TagVisitor for VisitorChain<'_, E> {
    type Error = E;

    fn begin_document(&mut self) -> Result<(), E> {
        self.for_each(|v| v.begin_document())
    }

    fn end_document(&mut self) -> Result<(), E> {
        self.for_each(|v| v.end_document())
    }

    fn tag(&mut self, tag: &Tag) -> Result<(), E> {
        self.for_each(|v| v.tag(tag))
    }

    fn script_body(&mut self, tag: &Tag, body: Option<&str>) -> Result<(), E> {
        self.for_each(|v| v.script_body(tag, body))
    }

    fn comment(&mut self, text: &str) -> Result<(), E> {
        self.for_each(|v| v.comment(text))
    }

    fn text(&mut self, text: &str) -> Result<(), E> {
        self.for_each(|v| v.text(text))
    }

    fn cdata(&mut self, text: &str) -> Result<(), E> {
        self.for_each(|v| v.cdata(text))
    }

    fn xml_declaration(&mut self, decl: &XmlDeclaration<'_>) -> Result<(), E> {
        self.for_each(|v| v.xml_declaration(decl))
    }

    fn doctype(&mut self, doctype: &Doctype) -> Result<(), E> {
        self.for_each(|v| v.doctype(doctype))
    }

    fn conditional_comment(&mut self, comment: &ConditionalComment<'_>) -> Result<(), E> {
        self.for_each(|v| v.conditional_comment(comment))
    }

    fn error(&mut self, message: &str) -> Result<(), E> {
        self.for_each(|v| v.error(message))
    }
}
