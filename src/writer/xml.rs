use crate::writer::WriterResult;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::io::Write;

pub(crate) struct XmlWriter<'a, W> {
    writer: quick_xml::Writer<W>,
    start_element: Option<BytesStart<'a>>,
}

impl<'a, W: Write> XmlWriter<'a, W> {
    /// Text content is written as-is, so no indentation is applied.
    pub(crate) fn new(writer: W) -> Self {
        Self {
            writer: quick_xml::Writer::new(writer),
            start_element: None,
        }
    }

    /// Write a doctype declaration: `<!DOCTYPE name>`
    pub(crate) fn write_doctype(&mut self, name: &str) -> WriterResult<&mut Self> {
        self.writer
            .write_event(Event::DocType(BytesText::from_escaped(name)))?;
        Ok(self)
    }

    /// Start an element: `<tag`
    pub(crate) fn start_element(&mut self, tag: &'a str) -> WriterResult<&mut Self> {
        // Close the previous element when nesting (e.g., `<parent><nested`)
        self.finish_start_element()?;

        self.start_element = Some(BytesStart::new(tag));
        Ok(self)
    }

    /// Append an attribute to the [started](Self::start_element) element: `<tag name="value"`
    pub(crate) fn add_attribute<'b>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'b str>>,
    ) -> &mut Self {
        if let (Some(element), Some(value)) = (&mut self.start_element, value.into()) {
            element.push_attribute(new_escaped_attribute(name, value));
        }
        self
    }

    // End states
    /// Finish writing a start element: **`<parent>`**
    ///
    /// See [`Self::finish_end_element`] to write the closing tag.
    pub(crate) fn finish_start_element(&mut self) -> WriterResult<()> {
        if let Some(element) = self.start_element.take() {
            self.writer.write_event(Event::Start(element))?;
        }
        Ok(())
    }

    /// Finish writing a parent element: **`<parent><inner/></parent>`**
    pub(crate) fn finish_end_element(&mut self, tag: &str) -> WriterResult<()> {
        self.finish_start_element()?;

        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// The given `text` is **unescaped**.
    ///
    /// Finish writing a text element: **`<elem>text</elem>`**
    pub(crate) fn finish_text_element(&mut self, text: &str) -> WriterResult<()> {
        if let Some(element) = self.start_element.take() {
            let text = BytesText::from_escaped(escape_text(text));
            self.writer.write_event(Event::Start(element.borrow()))?;
            self.writer.write_event(Event::Text(text))?;
            self.writer.write_event(Event::End(element.to_end()))?;
        }
        Ok(())
    }

    /// Finish writing a self-closing element: **`<elem/>`**
    pub(crate) fn finish_empty_element(&mut self) -> WriterResult<()> {
        if let Some(element) = self.start_element.take() {
            self.writer.write_event(Event::Empty(element))?;
        }
        Ok(())
    }

    pub(crate) fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

fn new_escaped_attribute<'a>(name: &'a str, value: &'a str) -> Attribute<'a> {
    Attribute {
        key: quick_xml::name::QName(name.as_bytes()),
        value: match escape_attribute(value.trim()) {
            Cow::Borrowed(borrowed) => Cow::Borrowed(borrowed.as_bytes()),
            Cow::Owned(owned) => Cow::Owned(owned.into_bytes()),
        },
    }
}

/// Escapes markup characters within text content, leaving whitespace intact.
fn escape_text(input: &str) -> Cow<'_, str> {
    escape(input, &['<', '>', '&'])
}

/// Escapes attribute values, including quotes and whitespace
/// that would otherwise be normalized by a reader.
fn escape_attribute(input: &str) -> Cow<'_, str> {
    escape(input, &['<', '>', '"', '&', '\'', '\t', '\n', '\r'])
}

fn escape<'a>(input: &'a str, chars: &[char]) -> Cow<'a, str> {
    let mut escaped = None;
    let mut last_pos = 0;

    for (i, matched) in input.match_indices(chars) {
        let out = escaped.get_or_insert_with(|| String::with_capacity(input.len() + 16));

        out.push_str(&input[last_pos..i]);
        out.push_str(get_entity(matched));
        last_pos = i + matched.len();
    }

    match escaped {
        None => Cow::Borrowed(input),
        Some(mut s) => {
            s.push_str(&input[last_pos..]);
            Cow::Owned(s)
        }
    }
}

fn get_entity(matched: &str) -> &'static str {
    match matched {
        "<" => "&lt;",
        ">" => "&gt;",
        "\"" => "&quot;",
        "&" => "&amp;",
        "'" => "&apos;",
        "\t" => "&#9;",
        "\n" => "&#10;",
        _ => "&#13;",
    }
}

macro_rules! write_element {
    // Empty (self-closing) element
    (writer: $w:expr, tag: $t:expr, $(attributes: $attrs:tt)?) => {
        $crate::writer::xml::write_element!(@helper $w, $t, $($attrs)?)
        .finish_empty_element()
    };
    // Text element
    (writer: $w:expr, tag: $t:expr, text: $text:expr, $(attributes: $attrs:tt)?) => {
        $crate::writer::xml::write_element!(@helper $w, $t, $($attrs)?)
        .finish_text_element($text)
    };
    // Parent element with inner content
    (writer: $w:expr, tag: $t:expr, $(attributes: $attrs:tt)? inner_content: $inner:block) => {{
        let tag = $t;
        $crate::writer::xml::write_element!(@helper $w, tag, $($attrs)?);
        $w.finish_start_element()?;
        $inner
        $w.finish_end_element(tag)
    }};

    // Helpers
    (@helper $w:expr, $t:expr, { $($name:path => $val:expr,)* }) => {{
        let mut element = $w.start_element($t)?;
        $(
        element = element.add_attribute($name, $val);
        )*
        element
    }};
    (@helper $w:expr, $t:expr,) => {
        $w.start_element($t)?
    };
}

pub(crate) use write_element;

#[cfg(test)]
mod tests {
    #[test]
    fn test_escape_text() {
        #[rustfmt::skip]
        let expected = [
            ("1 &lt; 2 &amp; 3", "1 < 2 & 3"),
            ("\"quoted\"\n\t'line'", "\"quoted\"\n\t'line'"),
            ("&lt;p&gt;", "<p>"),
            ("plain", "plain"),
        ];

        for (expected_escaped, original) in expected {
            assert_eq!(expected_escaped, super::escape_text(original));
        }
    }

    #[test]
    fn test_escape_attribute() {
        #[rustfmt::skip]
        let expected = [
            ("&lt;&gt;&apos;&quot;&amp;&#13;&#10;&#9;", "<>'\"&\r\n\t"),
            ("esc&lt;aped&amp;attr&gt;ibute&quot;value&apos;", "esc<aped&attr>ibute\"value'"),
            ("abc xyz", "abc xyz"),
        ];

        for (expected_escaped, original) in expected {
            assert_eq!(expected_escaped, super::escape_attribute(original));
        }
    }
}
