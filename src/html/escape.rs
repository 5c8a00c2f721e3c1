use memchr::{memchr2, memchr3};

#[inline]
fn replace_bytes(
    text: &str,
    find: impl Fn(&[u8]) -> Option<usize>,
    replacement: impl Fn(u8) -> &'static str,
    output_handler: &mut impl FnMut(&str),
) {
    let mut tail = text;

    while let Some(pos) = find(tail.as_bytes()) {
        if pos > 0 {
            output_handler(&tail[..pos]);
        }

        output_handler(replacement(tail.as_bytes()[pos]));

        // NOTE: all replaced characters are ASCII, so `pos + 1` is
        // always a char boundary.
        tail = &tail[pos + 1..];
    }

    if !tail.is_empty() {
        output_handler(tail);
    }
}

/// Escapes text that is going to be placed in element content, outside of raw-content elements:
///     - `<` is replaced with `&lt;`
///     - `>` is replaced with `&gt;`
///     - `&` is replaced with `&amp;`
///
/// Unchanged runs of the input are passed to the handler as-is, without copying.
pub fn escape_body_text(text: &str, output_handler: &mut impl FnMut(&str)) {
    replace_bytes(
        text,
        |bytes| memchr3(b'<', b'>', b'&', bytes),
        |byte| match byte {
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => "&amp;",
        },
        output_handler,
    );
}

/// Escapes text that is going to be placed in a double-quoted attribute value:
///     - `&` is replaced with `&amp;`
///     - `"` is replaced with `&quot;`
pub fn escape_attr_value(value: &str, output_handler: &mut impl FnMut(&str)) {
    replace_bytes(
        value,
        |bytes| memchr2(b'&', b'"', bytes),
        |byte| match byte {
            b'"' => "&quot;",
            _ => "&amp;",
        },
        output_handler,
    );
}
