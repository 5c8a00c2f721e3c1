use markup_writer::{replay, Event, Tag, TagType, TagWriter};

pub fn start(name: &str) -> Tag {
    Tag::new(name, TagType::Start)
}

pub fn end(name: &str) -> Tag {
    Tag::new(name, TagType::End)
}

pub fn text(text: &str) -> Event {
    Event::Text(text.to_string())
}

/// Replays the events into a fresh writer and returns its output.
pub fn write_events(events: &[Event]) -> String {
    let mut writer = TagWriter::new();

    replay(events, &mut writer).unwrap();

    writer.into_output().to_str_lossy().into_owned()
}
