//! FB2 metadata content within the `description` block.
//!
//! All accessors are fresh traversals of the owned tree;
//! missing fields yield [`None`] or an empty [`Vec`] rather than an error.

use crate::ebook::fb2::consts;
use crate::util::str::StringExt;
use crate::util::uri;
use crate::xml::{Element, Node};
use std::fmt::{Display, Formatter};

/// Metadata details of an [`Fb2`](super::Fb2), such as the title, authors and series.
///
/// Retrieved from the `description` element (`title-info`, `document-info`,
/// `publish-info`).
///
/// # Examples
/// - Retrieving the title and authors:
/// ```
/// # use fb2reader::{Fb2, Fb2Settings};
/// # fn main() -> fb2reader::ebook::errors::EbookResult<()> {
/// let fb2 = Fb2::open("tests/ebooks/example.fb2")?;
/// let metadata = fb2.metadata();
///
/// assert_eq!("The Example Book", metadata.title());
///
/// let author = &metadata.authors()[0];
/// assert_eq!("Jane Q. Doe", author.full_name());
/// assert_eq!(Some("Doe"), author.last_name());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fb2Metadata<'ebook> {
    description: &'ebook Element,
}

impl<'ebook> Fb2Metadata<'ebook> {
    pub(super) fn new(description: &'ebook Element) -> Self {
        Self { description }
    }

    /// The underlying `description` element.
    pub fn element(&self) -> &'ebook Element {
        self.description
    }

    /// The book title (`title-info/book-title`).
    ///
    /// Presence is checked when an [`Fb2`](super::Fb2) is opened,
    /// so this is only empty when [`Fb2Settings::strict`](super::Fb2Settings::strict)
    /// is disabled.
    pub fn title(&self) -> String {
        self.find_title().unwrap_or_default()
    }

    pub(super) fn find_title(&self) -> Option<String> {
        self.title_info()?
            .find(consts::BOOK_TITLE)
            .and_then(|title| title.text().into_non_empty())
    }

    /// The language of the book (`title-info/lang`), e.g., `ru`.
    pub fn language(&self) -> Option<String> {
        self.title_info_value(consts::LANG)
    }

    /// The language of the original, for translated books (`title-info/src-lang`).
    pub fn source_language(&self) -> Option<String> {
        self.title_info_value(consts::SRC_LANG)
    }

    /// The first `isbn` found within the description (usually `publish-info/isbn`).
    pub fn isbn(&self) -> Option<Identifier> {
        self.description
            .find(consts::ISBN)
            .and_then(|isbn| Identifier::new(IdentifierKind::Isbn, isbn.text()))
    }

    /// The document identifier (`document-info/id`).
    pub fn identifier(&self) -> Option<Identifier> {
        self.description
            .find(consts::DOCUMENT_INFO)?
            .get_child(consts::ID)
            .and_then(|id| Identifier::new(IdentifierKind::Document, id.text()))
    }

    /// The series the book belongs to (`title-info/sequence`).
    ///
    /// Returns [`None`] if there is no `sequence` or it lacks a `name`.
    pub fn series(&self) -> Option<Series> {
        self.title_info()?
            .get_child(consts::SEQUENCE)
            .and_then(Series::from_element)
    }

    /// Authors (`title-info/author`) in document order.
    pub fn authors(&self) -> Vec<Person> {
        self.persons(consts::AUTHOR)
    }

    /// Translators (`title-info/translator`) in document order.
    pub fn translators(&self) -> Vec<Person> {
        self.persons(consts::TRANSLATOR)
    }

    /// Trimmed genres (`title-info/genre`) in document order,
    /// duplicates and blank entries included.
    pub fn tags(&self) -> Vec<String> {
        self.title_info()
            .map(|title_info| {
                title_info
                    .children_by_name(consts::GENRE)
                    .map(|genre| genre.text().trim().to_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Comma-separated keywords (`title-info/keywords`).
    pub fn keywords(&self) -> Vec<String> {
        self.title_info_value(consts::KEYWORDS)
            .map(|keywords| {
                keywords
                    .split(',')
                    .filter_map(|keyword| keyword.to_owned().into_non_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The date of the book (`title-info/date`).
    ///
    /// The machine-readable `value` attribute is preferred over the text.
    pub fn date(&self) -> Option<String> {
        let date = self.title_info()?.get_child(consts::DATE)?;

        date.get_attribute(consts::VALUE)
            .and_then(|value| value.to_owned().into_non_empty())
            .or_else(|| date.text().into_non_empty())
    }

    /// The annotation of the book (`title-info/annotation`).
    ///
    /// Paragraph-like children are joined with a newline.
    /// Truncating or formatting the text is up to the caller.
    pub fn description(&self) -> Option<String> {
        let annotation = self.title_info()?.get_child(consts::ANNOTATION)?;
        let has_inline_text = annotation
            .children()
            .iter()
            .any(|node| matches!(node, Node::Text(text) if !text.trim().is_empty()));

        if has_inline_text {
            return annotation.text().into_non_empty();
        }

        let paragraphs: Vec<_> = annotation
            .child_elements()
            .filter_map(|paragraph| paragraph.text().into_non_empty())
            .collect();

        (!paragraphs.is_empty()).then(|| paragraphs.join("\n"))
    }

    /// Details of the printed edition (`publish-info`).
    pub fn publish_info(&self) -> Option<PublishInfo> {
        self.description
            .find(consts::PUBLISH_INFO)
            .map(PublishInfo::from_element)
    }

    /// The id of the `binary` referenced as the cover (`title-info/coverpage/image`).
    ///
    /// A leading `#` is removed and the reference is percent-decoded
    /// (`#cover%201.jpg` → `cover 1.jpg`).
    pub fn cover_reference(&self) -> Option<String> {
        self.title_info()?
            .get_child(consts::COVERPAGE)?
            .find(consts::IMAGE)?
            .get_attribute(consts::HREF)
            .map(|href| uri::fragment_id(href).into_owned())
            .filter(|id| !id.is_empty())
    }

    fn title_info(&self) -> Option<&'ebook Element> {
        self.description.find(consts::TITLE_INFO)
    }

    fn title_info_value(&self, name: &str) -> Option<String> {
        child_value(self.title_info()?, name)
    }

    fn persons(&self, name: &str) -> Vec<Person> {
        self.title_info()
            .map(|title_info| {
                title_info
                    .children_by_name(name)
                    .filter_map(Person::from_element)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A person associated with a book, such as an author or translator.
///
/// [`Self::full_name`] is derived from the available name parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Person {
    full_name: String,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    nickname: Option<String>,
}

impl Person {
    /// Creates a person from its name parts.
    ///
    /// Returns [`None`] if no part is present (or all are blank).
    ///
    /// # Examples
    /// ```
    /// # use fb2reader::fb2::metadata::Person;
    /// let person = Person::new(Some("Jane"), None, Some("Doe"), Some("jd")).unwrap();
    /// assert_eq!("Jane Doe", person.full_name());
    ///
    /// let nickname_only = Person::new(None, None, None, Some("jd")).unwrap();
    /// assert_eq!("jd", nickname_only.full_name());
    ///
    /// assert!(Person::new(None, Some("  "), None, None).is_none());
    /// ```
    pub fn new(
        first_name: Option<&str>,
        middle_name: Option<&str>,
        last_name: Option<&str>,
        nickname: Option<&str>,
    ) -> Option<Self> {
        let part = |part: Option<&str>| part.and_then(|part| part.to_owned().into_non_empty());

        Self::from_parts(
            part(first_name),
            part(middle_name),
            part(last_name),
            part(nickname),
            || None,
        )
    }

    fn from_element(element: &Element) -> Option<Self> {
        let person = Self::from_parts(
            child_value(element, consts::FIRST_NAME),
            child_value(element, consts::MIDDLE_NAME),
            child_value(element, consts::LAST_NAME),
            child_value(element, consts::NICKNAME),
            // Some files omit the name parts: `<author>Leo Tolstoy</author>`
            || match element.child_elements().next() {
                None => element.text().into_non_empty(),
                Some(_) => None,
            },
        );

        if person.is_none() {
            log::debug!("Skipping `<{}>` without any name", element.name());
        }
        person
    }

    fn from_parts(
        first_name: Option<String>,
        middle_name: Option<String>,
        last_name: Option<String>,
        nickname: Option<String>,
        fallback: impl FnOnce() -> Option<String>,
    ) -> Option<Self> {
        let parts: Vec<&str> = [&first_name, &middle_name, &last_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();

        let full_name = if parts.is_empty() {
            nickname.clone().or_else(fallback)?
        } else {
            parts.join(" ")
        };

        Some(Self {
            full_name,
            first_name,
            middle_name,
            last_name,
            nickname,
        })
    }

    /// Name parts joined in the order `first middle last`,
    /// or the nickname if there are no name parts.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// The series a book belongs to, along with its position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Series {
    name: String,
    index: Option<u32>,
}

impl Series {
    fn from_element(sequence: &Element) -> Option<Self> {
        let name = sequence
            .get_attribute(consts::NAME)
            .and_then(|name| name.to_owned().into_non_empty())?;
        let index = sequence
            .get_attribute(consts::NUMBER)
            .and_then(|number| number.trim().parse().ok());

        Some(Self { name, index })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The position within the series.
    ///
    /// [`None`] when absent or not a non-negative integer (e.g., `3a`).
    pub fn index(&self) -> Option<u32> {
        self.index
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "{} #{index}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// The kind of an [`Identifier`].
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// `isbn` of the printed edition.
    Isbn,
    /// `document-info/id`, unique to the FB2 document.
    Document,
}

/// A trimmed identifier value along with its [`IdentifierKind`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    kind: IdentifierKind,
    value: String,
}

impl Identifier {
    fn new(kind: IdentifierKind, value: String) -> Option<Self> {
        value.into_non_empty().map(|value| Self { kind, value })
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Details of the printed edition of a book (`publish-info`).
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PublishInfo {
    /// Title of the printed edition (`book-name`).
    pub book_name: Option<String>,
    pub publisher: Option<String>,
    pub city: Option<String>,
    pub year: Option<String>,
    pub isbn: Option<String>,
}

impl PublishInfo {
    fn from_element(element: &Element) -> Self {
        Self {
            book_name: child_value(element, consts::BOOK_NAME),
            publisher: child_value(element, consts::PUBLISHER),
            city: child_value(element, consts::CITY),
            year: child_value(element, consts::YEAR),
            isbn: child_value(element, consts::ISBN),
        }
    }
}

/// Trimmed text of the first child named `name`, or [`None`] if missing or blank.
fn child_value(parent: &Element, name: &str) -> Option<String> {
    parent
        .get_child(name)
        .and_then(|child| child.text().into_non_empty())
}
