//! Error-related types for an [`Fb2`](super::Fb2).
//!
//! # Hierarchy
//! - [`EbookError`]: Base error for every failure (I/O, archive, format, binary).
//!   - [`EbookError::Format`] ([`FormatError`]): The input is not a usable FB2 document.
//!     - [`FormatError::Unparsable`]: The input is not parseable XML at all.
//!     - [`FormatError::Fb2`] ([`Fb2FormatError`]): Parseable XML lacking
//!       required FB2 structure.
//!   - [`EbookError::Binary`] ([`BinaryError`]): An explicitly requested binary
//!     attachment is missing or corrupt.
//!   - [`EbookError::Archive`] ([`ArchiveError`]): A `.fb2.zip` archive is unreadable.
//!   - [`EbookError::Io`]: File access failed (e.g., file not found).

use std::error::Error;

/// Alias for `Result<T, EbookError>`.
pub type EbookResult<T> = Result<T, EbookError>;

/// Unified error type.
/// Possible errors for an [`Fb2`](super::Fb2).
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum EbookError {
    /// File access has failed, such as a missing file or
    /// a failed write from [`Fb2::save_cover_image`](super::Fb2::save_cover_image).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A zipped FB2 (`.fb2.zip`) could not be read.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// The input is malformed or lacks required FB2 structure.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// An explicitly requested binary attachment could not be retrieved.
    #[error(transparent)]
    Binary(#[from] BinaryError),
}

impl EbookError {
    /// Returns `true` if the input is not a valid FB2 document.
    ///
    /// This includes [malformed](Self::is_malformed) input.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns `true` if the input is not parseable XML at all.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Format(FormatError::Unparsable(_)))
    }

    /// Returns `true` if the error originates from a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(error) if error.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<Fb2FormatError> for EbookError {
    fn from(error: Fb2FormatError) -> Self {
        Self::Format(FormatError::Fb2(error))
    }
}

/// Possible format errors for an [`Fb2`](super::Fb2).
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// File content is not parseable XML.
    ///
    /// This may originate from the XML parser itself,
    /// or from input that contains no root element or unclosed elements.
    #[error(transparent)]
    Unparsable(#[from] Box<dyn Error + Send + Sync + 'static>),

    /// The XML is well-formed although required FB2 structure is missing.
    #[error(transparent)]
    Fb2(#[from] Fb2FormatError),
}

/// Possible structural errors from an [`Fb2`](super::Fb2).
///
/// When parsing, error variants flagged with `*` are ignored when
/// [`Fb2Settings::strict`](super::Fb2Settings::strict) is disabled.
/// - [`NoFictionBookFound`](Fb2FormatError::NoFictionBookFound)
/// - [`NoDescriptionFound`](Fb2FormatError::NoDescriptionFound)
/// - [`MissingTitle`](Fb2FormatError::MissingTitle)*
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Fb2FormatError {
    /// The root element is not `FictionBook`.
    #[error("Root element must be `FictionBook`, found `{0}`")]
    NoFictionBookFound(String),

    /// The `description` element is not found.
    #[error("Missing `description` element")]
    NoDescriptionFound,

    /// The `title-info/book-title` element is missing or empty.
    #[error("Missing `book-title` within `title-info`")]
    MissingTitle,
}

/// Possible errors upon retrieving a binary attachment.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum BinaryError {
    /// A reference (e.g., the cover page) points to a non-existent `binary` by id.
    #[error("Reference to a non-existent `binary` by id: {0}")]
    NoBinaryFound(String),

    /// The content of a `binary` is not valid base64.
    #[error("Invalid base64 content in `binary` with id `{id}`: {source}")]
    InvalidBase64 {
        id: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// Possible errors upon reading a zipped FB2 (`.fb2.zip`).
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ArchiveError {
    /// The archive itself is unreadable or corrupt.
    #[error("Unable to read archive: {source}")]
    UnreadableArchive {
        #[source]
        source: std::io::Error,
    },

    /// An entry within the archive could not be extracted.
    #[error("Unable to read archive entry `{name}`: {source}")]
    CannotRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The archive does not contain an entry ending with `.fb2`.
    #[error("Archive does not contain an `.fb2` entry")]
    NoFb2Entry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy() {
        let malformed = EbookError::from(FormatError::Unparsable("unexpected end".into()));
        assert!(malformed.is_invalid());
        assert!(malformed.is_malformed());

        let invalid = EbookError::from(Fb2FormatError::MissingTitle);
        assert!(invalid.is_invalid());
        assert!(!invalid.is_malformed());

        let binary = EbookError::from(BinaryError::NoBinaryFound("cover.jpg".to_owned()));
        assert!(!binary.is_invalid());
        assert!(!binary.is_not_found());

        let io = EbookError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(io.is_not_found());
        assert!(!io.is_invalid());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "Root element must be `FictionBook`, found `html`",
            EbookError::from(Fb2FormatError::NoFictionBookFound("html".to_owned())).to_string(),
        );
        assert_eq!(
            "Reference to a non-existent `binary` by id: cover.jpg",
            BinaryError::NoBinaryFound("cover.jpg".to_owned()).to_string(),
        );
    }
}
