use crate::ebook::errors::FormatError;
use crate::parser::ParserResult;
use crate::xml::{Attribute, Element, Node};
use quick_xml::Reader;
use quick_xml::events::attributes::Attribute as BytesAttribute;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

pub(crate) type ByteReader<'a> = Reader<&'a [u8]>;

/// Maximum element nesting accepted by [`parse_document`].
pub(crate) const MAX_DEPTH: usize = 1024;

/// Structural failures the event reader itself does not report.
#[derive(thiserror::Error, Debug)]
pub(crate) enum TreeError {
    #[error("Document contains no root element")]
    NoRootElement,
    #[error("Unexpected end of document; unclosed element `<{0}>`")]
    UnclosedElement(String),
    #[error("Unexpected closing tag `</{0}>`")]
    UnexpectedEnd(String),
    #[error("Element nesting exceeds the maximum depth of {MAX_DEPTH}")]
    TooDeep,
}

impl From<TreeError> for FormatError {
    fn from(error: TreeError) -> Self {
        FormatError::Unparsable(Box::new(error))
    }
}

pub(crate) trait XmlReader<'a> {
    /// Iterator-like method to read the next [`Event`].
    fn next(&mut self) -> Option<ParserResult<Event<'a>>>;
}

impl<'a> XmlReader<'a> for ByteReader<'a> {
    fn next(&mut self) -> Option<ParserResult<Event<'a>>> {
        match self.read_event() {
            Ok(Event::Eof) => None,
            result => Some(result.map_err(|error| FormatError::Unparsable(Box::new(error)))),
        }
    }
}

/// Parses decoded XML into an owned [`Element`] tree.
///
/// Leniency:
/// - Predefined, numeric and common HTML entity references are resolved;
///   unknown references are kept literally.
/// - A dangling `&` is treated as text.
/// - Text and elements after the root element are ignored.
///
/// Nesting deeper than [`MAX_DEPTH`] is rejected.
pub(crate) fn parse_document(xml: &str) -> ParserResult<Element> {
    let mut reader = ByteReader::from_str(xml);
    reader.config_mut().allow_dangling_amp = true;

    let mut builder = TreeBuilder::default();

    while let Some(result) = reader.next() {
        match result? {
            Event::Start(start) => builder.open(to_element(&start))?,
            Event::Empty(start) => builder.append(to_element(&start)),
            Event::End(end) => builder.close(end.name().as_ref())?,
            Event::Text(text) => builder.push_text(&String::from_utf8_lossy(text.as_ref())),
            Event::CData(cdata) => builder.push_text(&String::from_utf8_lossy(cdata.as_ref())),
            Event::GeneralRef(reference) => {
                builder.push_text(&resolve_reference(&String::from_utf8_lossy(reference.as_ref())))
            }
            // Declarations, comments, processing instructions, doctypes
            _ => {}
        }
    }
    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    open: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn open(&mut self, element: Element) -> ParserResult<()> {
        if self.open.len() >= MAX_DEPTH {
            return Err(TreeError::TooDeep.into());
        }
        self.open.push(element);
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> ParserResult<()> {
        let element = self
            .open
            .pop()
            .ok_or_else(|| TreeError::UnexpectedEnd(String::from_utf8_lossy(name).into_owned()))?;

        self.append(element);
        Ok(())
    }

    fn append(&mut self, element: Element) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None if self.root.is_none() => self.root = Some(element),
            None => log::debug!("Ignoring top-level element after root: `<{}>`", element.name()),
        }
    }

    fn push_text(&mut self, text: &str) {
        // Text outside the root element is insignificant
        let Some(parent) = self.open.last_mut() else {
            return;
        };
        if text.is_empty() {
            return;
        }
        // Adjacent text and references form a single text node
        match parent.children.last_mut() {
            Some(Node::Text(previous)) => previous.push_str(text),
            _ => parent.children.push(Node::Text(text.to_owned())),
        }
    }

    fn finish(mut self) -> ParserResult<Element> {
        if let Some(unclosed) = self.open.pop() {
            return Err(TreeError::UnclosedElement(unclosed.name).into());
        }
        self.root.ok_or_else(|| TreeError::NoRootElement.into())
    }
}

fn to_element(start: &BytesStart) -> Element {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let attributes = start
        .attributes()
        // Tolerate duplicate attributes
        .with_checks(false)
        .filter_map(|result| match result {
            Ok(attribute) => Some(to_attribute(&attribute)),
            Err(error) => {
                log::warn!("Skipping malformed attribute within `<{name}>`: {error}");
                None
            }
        })
        .collect();

    Element::new(name, attributes)
}

fn to_attribute(attribute: &BytesAttribute) -> Attribute {
    let name = String::from_utf8_lossy(attribute.key.as_ref());
    let raw = String::from_utf8_lossy(&attribute.value);

    Attribute::new(name, unescape(&raw))
}

/// Unescapes attribute values, keeping malformed references literally.
fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }
    let mut value = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('&') {
        value.push_str(&rest[..start]);
        rest = &rest[start..];

        match rest[1..].find(';') {
            Some(end) if is_reference_name(&rest[1..=end]) => {
                value.push_str(&resolve_reference(&rest[1..=end]));
                rest = &rest[end + 2..];
            }
            // Dangling `&`
            _ => {
                value.push('&');
                rest = &rest[1..];
            }
        }
    }
    value.push_str(rest);
    Cow::Owned(value)
}

fn is_reference_name(name: &str) -> bool {
    const MAX_REFERENCE_LENGTH: usize = 32;

    !name.is_empty()
        && name.len() <= MAX_REFERENCE_LENGTH
        && !name.contains(|c: char| c.is_whitespace() || c == '&')
}

/// Resolves the name of a reference (the portion between `&` and `;`).
fn resolve_reference(name: &str) -> Cow<'static, str> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => number.parse().ok(),
        };
        if let Some(c) = code.and_then(char::from_u32) {
            return Cow::Owned(c.to_string());
        }
    } else if let Some(resolved) = named_entity(name) {
        return Cow::Borrowed(resolved);
    }

    log::warn!("Unresolved entity reference `&{name};` kept as text");
    Cow::Owned(format!("&{name};"))
}

fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        // XML
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        // HTML entities commonly found in FB2 files
        "nbsp" => "\u{00A0}",
        "shy" => "\u{00AD}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "laquo" => "\u{00AB}",
        "raquo" => "\u{00BB}",
        "bdquo" => "\u{201E}",
        "ldquo" => "\u{201C}",
        "rdquo" => "\u{201D}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "hellip" => "\u{2026}",
        "bull" => "\u{2022}",
        "middot" => "\u{00B7}",
        "copy" => "\u{00A9}",
        "reg" => "\u{00AE}",
        "trade" => "\u{2122}",
        "sect" => "\u{00A7}",
        "deg" => "\u{00B0}",
        "times" => "\u{00D7}",
        "euro" => "\u{20AC}",
        _ => return None,
    })
}
