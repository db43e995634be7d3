//! The FictionBook 2 ([`Fb2`]) module.
//!
//! Supports plain (`.fb2`) and zipped (`.fb2.zip`) FictionBook 2 documents.
//!
//! For more information regarding the format, see:
//! <http://www.gribuser.ru/xml/fictionbook/index.html.en>

mod archive;
pub mod binary;
mod consts;
pub mod metadata;
mod parser;
#[cfg(feature = "write")]
mod write;

use crate::ebook::errors::{BinaryError, EbookError, EbookResult};
use crate::ebook::fb2::binary::{Binary, BinaryAttachment};
use crate::ebook::fb2::metadata::Fb2Metadata;
use crate::ebook::fb2::parser::Fb2Parser;
use crate::writer::html::HtmlWriter;
use crate::xml::Element;
use std::fmt::{Debug, Formatter};
use std::fs;
use std::io::Read;
use std::path::Path;

/// FictionBook 2 (FB2)
///
/// Provides access to the following contents of an FB2 document:
/// - [`Fb2Metadata`]: Metadata details (title, authors, series, genres, identifiers)
/// - [`Self::body`]: Readable text of every `body`
/// - [`Binary`]: Embedded base64 attachments, such as the [cover image](Self::cover_image)
///
/// The document is parsed once upon opening.
/// Afterward, every accessor is a read-only traversal,
/// so an [`Fb2`] can be shared across threads (`Send + Sync`).
///
/// # Configuration
/// Parsing can be configured using [`Fb2Settings`].
///
/// # Examples
/// - Reading the contents of an FB2 file:
/// ```
/// # use fb2reader::Fb2;
/// # use fb2reader::ebook::errors::EbookResult;
/// # fn main() -> EbookResult<()> {
/// let fb2 = Fb2::open("tests/ebooks/example.fb2")?;
/// let metadata = fb2.metadata();
///
/// assert_eq!("The Example Book", metadata.title());
/// assert_eq!(Some("en".to_owned()), metadata.language());
///
/// // Retrieving the decoded cover image
/// let cover = fb2.cover_image()?.unwrap();
/// assert_eq!("cover.png", cover.name());
///
/// // Printing the text content
/// println!("{}", fb2.body().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq)]
pub struct Fb2 {
    root: Element,
}

impl Fb2 {
    /// Opens an [`Fb2`] from the given [`Path`] with default [`Fb2Settings`].
    ///
    /// The file may be a plain FB2 document or a zip archive containing one.
    ///
    /// # Errors
    /// - [`Io`](crate::ebook::errors::EbookError::Io): The file cannot be read (e.g., not found).
    /// - [`Archive`](crate::ebook::errors::EbookError::Archive): An unreadable zipped FB2.
    /// - [`Format`](crate::ebook::errors::EbookError::Format): Malformed XML
    ///   or missing FB2 structure.
    ///
    /// # See Also
    /// - [`Self::open_with`] to specify settings.
    /// - [`Self::from_bytes`] to open from a byte buffer.
    /// - [`try_open`] to collapse every error into [`None`].
    ///
    /// # Examples
    /// - Opening from an FB2 file:
    ///   ```no_run
    ///   # use fb2reader::Fb2;
    ///   let fb2 = Fb2::open("/ebooks/book.fb2");
    ///   ```
    /// - Opening from a zipped FB2 file:
    ///   ```no_run
    ///   # use fb2reader::Fb2;
    ///   let fb2 = Fb2::open("/ebooks/book.fb2.zip");
    ///   ```
    pub fn open(path: impl AsRef<Path>) -> EbookResult<Self> {
        Self::open_with(path, Fb2Settings::default())
    }

    /// Opens an [`Fb2`] from the given [`Path`] with the specified [`Fb2Settings`].
    ///
    /// See [`Self::open`] for more details.
    ///
    /// # Examples
    /// - Opening an FB2 with settings:
    /// ```
    /// # use fb2reader::{Fb2, Fb2Settings};
    /// # use fb2reader::ebook::errors::EbookResult;
    /// # fn main() -> EbookResult<()> {
    /// let fb2 = Fb2::open_with(
    ///     "tests/ebooks/invalid.fb2",
    ///     Fb2Settings::builder()
    ///         .strict(false)
    ///         .fallback_encoding("koi8-r"),
    /// )?;
    ///
    /// assert_eq!("", fb2.metadata().title());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open_with(path: impl AsRef<Path>, settings: impl Into<Fb2Settings>) -> EbookResult<Self> {
        let path = path.as_ref();
        log::debug!("Opening FB2: {}", path.display());

        Self::from_bytes(fs::read(path)?, settings)
    }

    /// With the specified [`Fb2Settings`], opens an FB2 from any implementation of [`Read`].
    ///
    /// # Errors
    /// See [`Self::open`].
    ///
    /// # Examples
    /// - Opening from a [`File`](std::fs::File) directly:
    /// ```no_run
    /// # use fb2reader::{Fb2, Fb2Settings};
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let file = std::fs::File::open("tests/ebooks/example.fb2")?;
    /// let fb2 = Fb2::read(file, Fb2Settings::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn read<R: Read>(mut reader: R, settings: impl Into<Fb2Settings>) -> EbookResult<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        Self::from_bytes(data, settings)
    }

    /// With the specified [`Fb2Settings`], opens an FB2 from raw bytes.
    ///
    /// The bytes may be in any encoding detectable from a byte order mark
    /// or the XML declaration; otherwise UTF-8, then
    /// [`Fb2Settings::fallback_encoding`], is assumed.
    ///
    /// # Errors
    /// See [`Self::open`].
    pub fn from_bytes(data: impl AsRef<[u8]>, settings: impl Into<Fb2Settings>) -> EbookResult<Self> {
        let settings = settings.into();
        let root = Fb2Parser::new(&settings).parse(data.as_ref())?;

        Ok(Self { root })
    }

    /// The root `FictionBook` element, for access to anything not covered by
    /// the provided accessors.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Metadata details from the `description` element.
    pub fn metadata(&self) -> Fb2Metadata<'_> {
        // `description` is guaranteed by the parser
        Fb2Metadata::new(self.root.find(consts::DESCRIPTION).unwrap_or(&self.root))
    }

    /// The concatenated text of every `body` in document order.
    ///
    /// Whitespace is kept as found in the document.
    ///
    /// Returns [`None`] if the document has no `body`,
    /// and an empty string if every `body` is empty.
    pub fn body(&self) -> Option<String> {
        let mut bodies = self.root.find_all(consts::BODY).peekable();
        bodies.peek()?;

        Some(bodies.map(Element::text).collect())
    }

    /// [`Self::body`] wrapped in a minimal HTML document,
    /// titled after [`Fb2Metadata::title`].
    ///
    /// Returns [`None`] if the document has no `body`.
    ///
    /// # Examples
    /// ```
    /// # use fb2reader::Fb2;
    /// # use fb2reader::ebook::errors::EbookResult;
    /// # fn main() -> EbookResult<()> {
    /// let fb2 = Fb2::open("tests/ebooks/minimal.fb2")?;
    /// let html = fb2.body_html()?.unwrap();
    ///
    /// assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    /// assert!(html.contains("<title>Minimal</title>"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn body_html(&self) -> EbookResult<Option<String>> {
        let Some(body) = self.body() else {
            return Ok(None);
        };
        let metadata = self.metadata();
        let title = metadata.title();
        let language = metadata.language();

        HtmlWriter::new(&title, language.as_deref())
            .write_document(&body)
            .map(Some)
    }

    /// Every `binary` in document order.
    pub fn binaries(&self) -> impl Iterator<Item = Binary<'_>> + '_ {
        self.root.find_all(consts::BINARY).map(Binary::new)
    }

    /// The first `binary` with the given `id`.
    ///
    /// When multiple binaries share an `id`, the first in document order wins.
    pub fn binary(&self, id: &str) -> Option<Binary<'_>> {
        self.binaries().find(|binary| binary.id() == Some(id))
    }

    /// Every `binary` decoded, with the cover image flagged by
    /// [`BinaryAttachment::is_cover`].
    ///
    /// # Errors
    /// [`BinaryError::InvalidBase64`] if any payload is not valid base64.
    pub fn attachments(&self) -> EbookResult<Vec<BinaryAttachment>> {
        let cover = self.metadata().cover_reference();
        let mut cover_found = false;

        self.binaries()
            .map(|binary| {
                let is_cover = !cover_found && cover.is_some() && binary.id() == cover.as_deref();
                cover_found |= is_cover;
                binary.to_attachment(is_cover).map_err(EbookError::from)
            })
            .collect()
    }

    /// The decoded cover image, referenced from `title-info/coverpage`.
    ///
    /// Returns [`None`] if the book declares no cover.
    ///
    /// # Errors
    /// The cover is explicitly declared, although:
    /// - [`BinaryError::NoBinaryFound`]: No `binary` has the referenced id.
    /// - [`BinaryError::InvalidBase64`]: The payload is not valid base64.
    ///
    /// # Examples
    /// - Retrieving the cover image:
    /// ```
    /// # use fb2reader::Fb2;
    /// # use fb2reader::ebook::errors::EbookResult;
    /// # fn main() -> EbookResult<()> {
    /// let fb2 = Fb2::open("tests/ebooks/example.fb2")?;
    /// let cover = fb2.cover_image()?.unwrap();
    ///
    /// assert!(cover.is_cover());
    /// assert_eq!(b"\x89PNG\r\n\x1a\n", &cover.data()[..8]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn cover_image(&self) -> EbookResult<Option<BinaryAttachment>> {
        let Some(id) = self.metadata().cover_reference() else {
            return Ok(None);
        };
        let binary = self
            .binary(&id)
            .ok_or(BinaryError::NoBinaryFound(id))?;

        Ok(Some(binary.to_attachment(true)?))
    }
}

impl Debug for Fb2 {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        let metadata = self.metadata();

        fmt.debug_struct("Fb2")
            .field("title", &metadata.title())
            .field("authors", &metadata.authors())
            .field("binaries", &self.binaries().count())
            .finish_non_exhaustive()
    }
}

/// Opens an [`Fb2`] with default [`Fb2Settings`], collapsing every error into [`None`].
///
/// The error is logged at `debug` level.
///
/// # See Also
/// - [`Fb2::open`] to retrieve the error.
///
/// # Examples
/// ```
/// assert!(fb2reader::try_open("tests/ebooks/example.fb2").is_some());
/// assert!(fb2reader::try_open("tests/ebooks/invalid.fb2").is_none());
/// assert!(fb2reader::try_open("tests/ebooks/missing.fb2").is_none());
/// ```
pub fn try_open(path: impl AsRef<Path>) -> Option<Fb2> {
    let path = path.as_ref();

    Fb2::open(path)
        .inspect_err(|error| log::debug!("Unable to open `{}`: {error}", path.display()))
        .ok()
}

/// FB2-specific settings upon parsing an [`Fb2`].
///
/// To create a mutable settings instance, see
/// [`Fb2Settings::builder`] or [`Fb2Settings::default`].
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Fb2Settings {
    /// When set to `true`, ensures an FB2 has a non-empty **title**
    /// (`title-info/book-title`).
    ///
    /// The `FictionBook` root and `description` are always required.
    ///
    /// Default: `true`
    pub strict: bool,
    /// The encoding label (e.g., `windows-1251`, `koi8-r`) assumed when a
    /// document has neither a byte order mark nor an `encoding` declaration
    /// and is not valid UTF-8.
    ///
    /// Unknown labels fall back to `windows-1251`.
    ///
    /// Default: `windows-1251`
    pub fallback_encoding: String,
}

impl Fb2Settings {
    /// Returns a builder to create an [`Fb2Settings`] instance.
    pub fn builder() -> Fb2SettingsBuilder {
        Fb2SettingsBuilder(Self::default())
    }
}

impl Default for Fb2Settings {
    fn default() -> Self {
        Self {
            strict: true,
            fallback_encoding: String::from("windows-1251"),
        }
    }
}

impl From<Fb2SettingsBuilder> for Fb2Settings {
    fn from(value: Fb2SettingsBuilder) -> Self {
        value.build()
    }
}

/// Builder to construct an [`Fb2Settings`] instance.
///
/// # Examples
/// - Passing a builder to open an [`Fb2`] with:
/// ```
/// # use fb2reader::{Fb2, Fb2Settings};
/// # use fb2reader::ebook::errors::EbookResult;
/// # fn main() -> EbookResult<()> {
/// let fb2 = Fb2::open_with(
///     "tests/ebooks/example.fb2",
///     Fb2Settings::builder().strict(false),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Fb2SettingsBuilder(Fb2Settings);

impl Fb2SettingsBuilder {
    /// Turn this builder into an [`Fb2Settings`] instance.
    pub fn build(self) -> Fb2Settings {
        self.0
    }

    /// See [`Fb2Settings::strict`].
    pub fn strict(mut self, strict: bool) -> Self {
        self.0.strict = strict;
        self
    }

    /// See [`Fb2Settings::fallback_encoding`].
    pub fn fallback_encoding(mut self, label: impl Into<String>) -> Self {
        self.0.fallback_encoding = label.into();
        self
    }
}
