use super::escape::escape_attr_value;
use super::TextType;
use crate::errors::{AttributeNameError, TagNameError};
use std::fmt::{self, Debug, Display};

/// The kind of a tag occurrence.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TagType {
    /// `<name ...>`
    Start,
    /// `</name>`
    End,
    /// `<name ... />`
    SelfClosing,
}

/// An attribute of a [`Tag`].
#[derive(Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    fn name_from_str(name: &str) -> Result<String, AttributeNameError> {
        if name.is_empty() {
            Err(AttributeNameError::Empty)
        } else if let Some(ch) = name.chars().find(|&ch| {
            matches!(
                ch,
                ' ' | '\n' | '\r' | '\t' | '\x0C' | '/' | '>' | '=' | '"' | '\'' | '<'
            )
        }) {
            Err(AttributeNameError::ForbiddenCharacter(ch))
        } else {
            Ok(name.to_string())
        }
    }

    /// Creates an attribute, validating its name.
    ///
    /// An attribute without a value is written as a bare name, e.g. `disabled`.
    pub fn try_new(name: &str, value: Option<&str>) -> Result<Self, AttributeNameError> {
        Ok(Attribute {
            name: Attribute::name_from_str(name)?,
            value: value.map(str::to_string),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn write_to(&self, output_handler: &mut dyn FnMut(&str)) {
        output_handler(&self.name);

        if let Some(value) = &self.value {
            output_handler("=\"");
            escape_attr_value(value, &mut |chunk| output_handler(chunk));
            output_handler("\"");
        }
    }
}

impl Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

/// One occurrence of an opening, closing or self-closing tag in the event stream.
#[derive(Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    tag_type: TagType,
    attributes: Vec<Attribute>,
    raw: Option<bool>,
}

impl Tag {
    /// Creates a tag without attributes.
    ///
    /// The name is taken as is, the way a parser reports it. Use [`Tag::try_new`] for names
    /// that come from elsewhere.
    pub fn new(name: impl Into<String>, tag_type: TagType) -> Self {
        Tag {
            name: name.into(),
            tag_type,
            attributes: Vec::new(),
            raw: None,
        }
    }

    /// Creates a tag without attributes, validating its name.
    pub fn try_new(name: &str, tag_type: TagType) -> Result<Self, TagNameError> {
        Ok(Tag::new(Tag::name_from_str(name)?, tag_type))
    }

    fn name_from_str(name: &str) -> Result<String, TagNameError> {
        match name.chars().next() {
            Some(ch) if !ch.is_ascii_alphabetic() => Err(TagNameError::InvalidFirstCharacter),
            Some(_) => {
                if let Some(ch) = name.chars().find(|&ch| {
                    matches!(ch, ' ' | '\n' | '\r' | '\t' | '\x0C' | '/' | '>' | '<')
                }) {
                    Err(TagNameError::ForbiddenCharacter(ch))
                } else {
                    Ok(name.to_string())
                }
            }
            None => Err(TagNameError::Empty),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the tag, validating the new name.
    ///
    /// Unless overridden with [`Tag::set_raw`], the raw-content flag follows the new name.
    pub fn set_name(&mut self, name: &str) -> Result<(), TagNameError> {
        self.name = Tag::name_from_str(name)?;

        Ok(())
    }

    #[inline]
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    #[inline]
    pub fn set_tag_type(&mut self, tag_type: TagType) {
        self.tag_type = tag_type;
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the attribute value, if the attribute is present and has a value.
    ///
    /// Names are compared ASCII case-insensitively.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .and_then(Attribute::value)
    }

    /// Sets the attribute value, replacing the value of an existing attribute with the same name
    /// in place, or appending a new attribute otherwise.
    ///
    /// Pass `None` as `value` to get a valueless attribute.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), AttributeNameError> {
        let attr = Attribute::try_new(name, value)?;

        match self
            .attributes
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => existing.value = attr.value,
            None => self.attributes.push(attr),
        }

        Ok(())
    }

    /// Builder-style [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(
        mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Self, AttributeNameError> {
        self.set_attribute(name, value)?;

        Ok(self)
    }

    /// Removes the attribute. Returns `true` if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let len = self.attributes.len();

        self.attributes.retain(|a| !a.name.eq_ignore_ascii_case(name));

        self.attributes.len() != len
    }

    /// Whether the body following this tag must be written verbatim.
    ///
    /// Unless overridden with [`Tag::set_raw`], this is the case for start tags of elements whose
    /// body is parsed as raw text, e.g. `<script>` or `<style>`. The flag is derived from the
    /// current name and type, so it follows [`Tag::set_tag_type`] and [`Tag::set_name`].
    #[inline]
    pub fn is_raw(&self) -> bool {
        self.raw.unwrap_or_else(|| {
            self.tag_type == TagType::Start && TextType::for_element(&self.name).is_raw()
        })
    }

    /// Overrides the raw-content flag derived from the tag name and type.
    #[inline]
    pub fn set_raw(&mut self, raw: bool) {
        self.raw = Some(raw);
    }

    /// Serializes the tag as its own type.
    #[inline]
    pub fn write_to(&self, output_handler: &mut dyn FnMut(&str)) {
        self.write_as(self.tag_type, output_handler);
    }

    /// Serializes the tag as if it had the given type.
    pub fn write_as(&self, tag_type: TagType, output_handler: &mut dyn FnMut(&str)) {
        if tag_type == TagType::End {
            output_handler("</");
            output_handler(&self.name);
            output_handler(">");

            return;
        }

        output_handler("<");
        output_handler(&self.name);

        for attr in &self.attributes {
            output_handler(" ");
            attr.write_to(output_handler);
        }

        if tag_type == TagType::SelfClosing {
            // NOTE: always separate `/` from the last attribute, otherwise
            // it could be read as a part of an unquoted value by lenient parsers.
            if !self.attributes.is_empty() {
                output_handler(" ");
            }

            output_handler("/>");
        } else {
            output_handler(">");
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut res = Ok(());

        self.write_to(&mut |chunk| {
            if res.is_ok() {
                res = f.write_str(chunk);
            }
        });

        res
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name())
            .field("tag_type", &self.tag_type)
            .field("attributes", &self.attributes())
            .field("raw", &self.is_raw())
            .finish()
    }
}
