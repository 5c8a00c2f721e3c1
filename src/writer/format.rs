use crate::html::Doctype;
use crate::visitor::{ConditionalComment, XmlDeclaration};

#[inline]
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub(super) fn write_comment(text: &str, output_handler: &mut dyn FnMut(&str)) {
    output_handler("<!--");
    output_handler(text);
    output_handler("-->");
}

pub(super) fn write_cdata(text: &str, output_handler: &mut dyn FnMut(&str)) {
    output_handler("<![CDATA[");
    output_handler(text);
    output_handler("]]>");
}

pub(super) fn write_xml_declaration(
    decl: &XmlDeclaration<'_>,
    output_handler: &mut dyn FnMut(&str),
) {
    output_handler("<?xml");

    let attrs = [
        ("version", decl.version),
        ("encoding", decl.encoding),
        ("standalone", decl.standalone),
    ];

    for (name, value) in attrs {
        if let Some(value) = non_empty(value) {
            output_handler(" ");
            output_handler(name);
            output_handler("=\"");
            output_handler(value);
            output_handler("\"");
        }
    }

    output_handler("?>");
}

pub(super) fn write_doctype(doctype: &Doctype, output_handler: &mut dyn FnMut(&str)) {
    output_handler("<!DOCTYPE");

    if let Some(name) = non_empty(doctype.name()) {
        output_handler(" ");
        output_handler(name);
    }

    let public_id = non_empty(doctype.public_id());
    let system_id = non_empty(doctype.system_id());

    if let Some(public_id) = public_id {
        output_handler(" PUBLIC \"");
        output_handler(public_id);
        output_handler("\"");
    }

    if let Some(system_id) = system_id {
        if public_id.is_none() {
            output_handler(" SYSTEM");
        }

        output_handler(" \"");
        output_handler(system_id);
        output_handler("\"");
    }

    output_handler(">");
}

pub(super) fn write_conditional_comment(
    comment: &ConditionalComment<'_>,
    output_handler: &mut dyn FnMut(&str),
) {
    if comment.is_starting_tag {
        // NOTE: a downlevel-revealed opener with a hidden end tag is
        // wrapped in a complete comment, i.e. `<!--[if !IE]><!-->`.
        let revealed_in_comment = !comment.is_hidden && comment.is_hidden_end_tag;

        if comment.is_hidden || revealed_in_comment {
            output_handler("<!--[if ");
        } else {
            output_handler("<![if ");
        }

        output_handler(comment.expression);
        output_handler("]>");

        if revealed_in_comment {
            output_handler("<!-->");
        }
    } else if comment.is_hidden_end_tag {
        output_handler("<![endif]-->");
    } else {
        output_handler("<![endif]>");
    }
}
