/// The text parsing mode an element's content is tokenized in.
///
/// See: <https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextType {
    /// Text inside a `<plaintext>` element.
    PlainText,
    /// Text inside `<title>` and `<textarea>` elements.
    RCData,
    /// Text inside `<style>`, `<xmp>`, `<iframe>`, `<noembed>`, `<noframes>` and `<noscript>` elements.
    RawText,
    /// Text inside a `<script>` element.
    ScriptData,
    /// Regular text.
    Data,
}

impl TextType {
    /// Returns the text type of the content of an element with the given name.
    ///
    /// Names are compared ASCII case-insensitively.
    pub fn for_element(name: &str) -> Self {
        const RAW_TEXT_ELEMENTS: [&str; 6] =
            ["style", "xmp", "iframe", "noembed", "noframes", "noscript"];

        let is = |candidate: &str| name.eq_ignore_ascii_case(candidate);

        if is("script") {
            TextType::ScriptData
        } else if RAW_TEXT_ELEMENTS.iter().any(|&n| is(n)) {
            TextType::RawText
        } else if is("title") || is("textarea") {
            TextType::RCData
        } else if is("plaintext") {
            TextType::PlainText
        } else {
            TextType::Data
        }
    }

    /// Content of this kind must be written verbatim, never HTML-escaped.
    #[inline]
    pub fn is_raw(self) -> bool {
        matches!(
            self,
            TextType::PlainText | TextType::RawText | TextType::ScriptData
        )
    }
}
