use std::fmt::{self, Debug};

/// A [document type declaration](https://developer.mozilla.org/en-US/docs/Glossary/Doctype).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Doctype {
    name: Option<String>,
    public_id: Option<String>,
    system_id: Option<String>,
}

impl Doctype {
    pub fn new(name: Option<&str>, public_id: Option<&str>, system_id: Option<&str>) -> Self {
        Doctype {
            name: name.map(str::to_string),
            public_id: public_id.map(str::to_string),
            system_id: system_id.map(str::to_string),
        }
    }

    /// `<!DOCTYPE html>`
    pub fn html5() -> Self {
        Doctype::new(Some("html"), None, None)
    }

    /// The name of the doctype, e.g. `html`.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn public_id(&self) -> Option<&str> {
        self.public_id.as_deref()
    }

    #[inline]
    pub fn system_id(&self) -> Option<&str> {
        self.system_id.as_deref()
    }
}

impl Debug for Doctype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Doctype")
            .field("name", &self.name())
            .field("public_id", &self.public_id())
            .field("system_id", &self.system_id())
            .finish()
    }
}
