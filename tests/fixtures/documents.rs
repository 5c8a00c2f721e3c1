use crate::harness::*;
use markup_writer::*;

#[test]
fn html_document() {
    let link = Tag::new("link", TagType::SelfClosing)
        .with_attribute("rel", Some("stylesheet"))
        .unwrap()
        .with_attribute("href", Some("ie.css"))
        .unwrap();

    let events = vec![
        Event::BeginDocument,
        Event::Doctype(Doctype::html5()),
        Event::Tag(start("html")),
        Event::Tag(start("head")),
        Event::ConditionalComment {
            expression: "lt IE 9".into(),
            is_starting_tag: true,
            is_hidden: true,
            is_hidden_end_tag: false,
        },
        Event::Tag(link),
        Event::ConditionalComment {
            expression: String::new(),
            is_starting_tag: false,
            is_hidden: true,
            is_hidden_end_tag: true,
        },
        Event::Tag(start("style")),
        text("p > a { color: red }"),
        Event::Tag(end("style")),
        Event::ScriptBody {
            tag: start("script"),
            body: Some("if (a < b) { go(); }".into()),
        },
        Event::Tag(end("head")),
        Event::Tag(start("body")),
        Event::Comment(" main ".into()),
        Event::Tag(
            start("p")
                .with_attribute("title", Some("\"quoted\" & more"))
                .unwrap(),
        ),
        text("1 < 2 & 3 > 2"),
        Event::Tag(end("p")),
        Event::Error("stray end tag".into()),
        Event::Tag(end("body")),
        Event::Tag(end("html")),
        Event::EndDocument,
    ];

    assert_eq!(
        write_events(&events),
        concat!(
            "<!DOCTYPE html><html><head>",
            "<!--[if lt IE 9]><link rel=\"stylesheet\" href=\"ie.css\" /><![endif]-->",
            "<style>p > a { color: red }</style>",
            "<script>if (a < b) { go(); }</script>",
            "</head><body><!-- main -->",
            "<p title=\"&quot;quoted&quot; &amp; more\">1 &lt; 2 &amp; 3 &gt; 2</p>",
            "</body></html>",
        )
    );
}

#[test]
fn xml_document() {
    let events = vec![
        Event::XmlDeclaration {
            version: Some("1.0".into()),
            encoding: Some("UTF-8".into()),
            standalone: None,
        },
        Event::Doctype(Doctype::new(Some("note"), None, Some("note.dtd"))),
        Event::Tag(start("note")),
        Event::CData("<not> & markup".into()),
        Event::Tag(Tag::new("empty", TagType::SelfClosing)),
        Event::Tag(end("note")),
    ];

    assert_eq!(
        write_events(&events),
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<!DOCTYPE note SYSTEM "note.dtd">"#,
            "<note><![CDATA[<not> & markup]]><empty/></note>",
        )
    );
}

#[test]
fn legacy_doctype() {
    let doctype = Doctype::new(
        Some("html"),
        Some("-//W3C//DTD XHTML 1.0 Strict//EN"),
        Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"),
    );

    assert_eq!(
        write_events(&[Event::Doctype(doctype)]),
        concat!(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "#,
            r#""http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#
        )
    );
}

#[test]
fn downlevel_revealed_conditional_comments() {
    let events = vec![
        Event::ConditionalComment {
            expression: "!IE".into(),
            is_starting_tag: true,
            is_hidden: false,
            is_hidden_end_tag: true,
        },
        Event::Tag(start("p")),
        text("not IE"),
        Event::Tag(end("p")),
        Event::ConditionalComment {
            expression: "!IE".into(),
            is_starting_tag: false,
            is_hidden: false,
            is_hidden_end_tag: true,
        },
    ];

    assert_eq!(
        write_events(&events),
        "<!--[if !IE]><!--><p>not IE</p><![endif]-->"
    );
}

#[test]
fn output_to_io_writer() {
    let mut writer = TagWriter::with_sink(IoSink::new(Vec::new()));

    writer.tag(&start("em")).unwrap();
    writer.text("a&b").unwrap();
    writer.tag(&end("em")).unwrap();

    assert_eq!(writer.into_output().into_inner(), b"<em>a&amp;b</em>");
}

#[test]
fn windows_1251_output() {
    let settings = WriterSettings {
        encoding: AsciiCompatibleEncoding::from_label("windows-1251").unwrap(),
    };

    let mut writer = TagWriter::with_settings(OutputBuffer::new(), settings);

    writer.tag(&start("p")).unwrap();
    writer.text("\u{041F}\u{0440}\u{0438} \u{00E9}").unwrap();
    writer.tag(&end("p")).unwrap();

    assert_eq!(
        writer.output().as_bytes(),
        b"<p>\xCF\xF0\xE8 &#233;</p>"
    );
}
