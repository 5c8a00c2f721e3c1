use crate::harness::*;
use markup_writer::*;
use rand::prelude::*;
use std::io;

const NAMES: [&str; 6] = ["p", "script", "style", "title", "div", "xmp"];
const TEXT_ALPHABET: [char; 8] = ['a', '<', '>', '&', ' ', '/', ';', '\u{00E9}'];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.gen_range(1..24);

    (0..len).map(|_| *TEXT_ALPHABET.choose(rng).unwrap()).collect()
}

fn random_stream(rng: &mut StdRng) -> Vec<Event> {
    let len = rng.gen_range(1..30);

    (0..len)
        .map(|_| {
            let name = *NAMES.choose(rng).unwrap();

            match rng.gen_range(0..4) {
                0 => Event::Tag(start(name)),
                1 => Event::Tag(end(name)),
                _ => Event::Text(random_text(rng)),
            }
        })
        .collect()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[test]
fn text_is_escaped_unless_raw_tag_precedes_it() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let events = random_stream(&mut rng);
        let mut chunks = Vec::new();

        {
            let mut writer = TagWriter::with_sink(|c: &[u8]| -> io::Result<()> {
                chunks.push(String::from_utf8(c.to_vec()).unwrap());
                Ok(())
            });

            replay(&events, &mut writer).unwrap();
        }

        // NOTE: every event in the stream produces exactly one non-empty fragment.
        assert_eq!(chunks.len(), events.len());

        let mut raw = false;

        for (event, chunk) in events.iter().zip(&chunks) {
            match event {
                Event::Tag(tag) => {
                    assert_eq!(chunk, &tag.to_string());
                    raw = tag.is_raw();
                }
                Event::Text(text) if raw => assert_eq!(chunk, text),
                Event::Text(text) => {
                    assert!(!chunk.contains(['<', '>']), "{chunk:?}");
                    assert_eq!(&unescape(chunk), text);
                }
                _ => unreachable!(),
            }
        }
    }
}

#[test]
fn owned_buffer_is_concatenation_of_fragments() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let events = random_stream(&mut rng);
        let mut concatenated = Vec::new();

        {
            let mut writer = TagWriter::with_sink(|c: &[u8]| -> io::Result<()> {
                concatenated.extend_from_slice(c);
                Ok(())
            });

            replay(&events, &mut writer).unwrap();
        }

        assert_eq!(write_events(&events).into_bytes(), concatenated);
    }
}

#[test]
fn raw_tags() {
    let raw_text_elements = [
        "script",
        "style",
        "xmp",
        "iframe",
        "noembed",
        "noframes",
        "noscript",
        "plaintext",
    ];

    for name in raw_text_elements {
        let out = write_events(&[Event::Tag(start(name)), text("<&>")]);

        assert_eq!(out, format!("<{name}><&>"));
    }

    for name in ["p", "title", "textarea", "svg"] {
        let out = write_events(&[Event::Tag(start(name)), text("<&>")]);

        assert_eq!(out, format!("<{name}>&lt;&amp;&gt;"));
    }
}
