mod doctype;
mod escape;
mod tag;
mod text_type;

pub use self::doctype::Doctype;
pub use self::escape::{escape_attr_value, escape_body_text};
pub use self::tag::{Attribute, Tag, TagType};
pub use self::text_type::TextType;
