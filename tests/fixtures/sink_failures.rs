use crate::harness::*;
use markup_writer::*;
use std::error::Error as _;
use std::io;

/// Accepts `limit` chunks, then fails every append.
struct FailingSink {
    chunks: Vec<Vec<u8>>,
    limit: usize,
}

impl FailingSink {
    fn new(limit: usize) -> Self {
        FailingSink {
            chunks: Vec::new(),
            limit,
        }
    }

    fn output(&self) -> String {
        String::from_utf8(self.chunks.concat()).unwrap()
    }
}

impl OutputSink for FailingSink {
    fn handle_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        if self.chunks.len() == self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "sink is full"));
        }

        self.chunks.push(chunk.to_vec());

        Ok(())
    }
}

fn events() -> Vec<Event> {
    vec![
        Event::BeginDocument,
        Event::Tag(start("ul")),
        Event::Tag(start("li")),
        text("one"),
        Event::Tag(end("li")),
        Event::Comment("two".into()),
        Event::Tag(end("ul")),
        Event::EndDocument,
    ]
}

#[test]
fn failure_on_nth_fragment() {
    let mut writer = TagWriter::with_sink(FailingSink::new(3));

    let err = replay(&events(), &mut writer).unwrap_err();

    assert!(matches!(err, WriteError::WriteFailure(_)));
    assert_eq!(err.source().unwrap().to_string(), "sink is full");

    assert_eq!(writer.output().output(), "<ul><li>one");
}

#[test]
fn driver_may_continue_after_failure() {
    let mut writer = TagWriter::with_sink(FailingSink::new(1));

    writer.tag(&start("p")).unwrap();
    writer.text("dropped").unwrap_err();

    writer.output_mut().limit = 2;
    writer.tag(&end("p")).unwrap();

    assert_eq!(writer.output().output(), "<p></p>");
}

#[test]
fn hooks_never_touch_the_sink() {
    let mut writer = TagWriter::with_sink(FailingSink::new(0));

    writer.begin_document().unwrap();
    writer.error("malformed attribute").unwrap();
    writer.text("").unwrap();
    writer.end_document().unwrap();

    assert!(writer.output().chunks.is_empty());
}
