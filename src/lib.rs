//! # fb2reader
//! - Repository: <https://github.com/devpilgrin/fb2reader>
//!
//! A library that parses FictionBook 2 (`.fb2` and `.fb2.zip`) ebooks,
//! extracting metadata, body text and embedded binary attachments.
//!
//! ## Features
//! - `write` (default): [`Fb2::save_cover_image`] and [`Fb2::save_body_as_html`].
//!
//! ## Examples
//! Opening an FB2 file and reading its metadata:
//! ```rust
//! # fn main() -> fb2reader::ebook::errors::EbookResult<()> {
//! let fb2 = fb2reader::Fb2::open("tests/ebooks/example.fb2")?;
//! let metadata = fb2.metadata();
//!
//! // Retrieving the title
//! println!("Title = {}", metadata.title());
//!
//! // Retrieving the authors
//! for author in metadata.authors() {
//!     println!("Author = {author}");
//! }
//!
//! // Retrieving the series
//! let series = metadata.series().unwrap();
//! assert_eq!("Examples", series.name());
//! assert_eq!(Some(2), series.index());
//! # Ok(())
//! # }
//! ```
//! Opening without raising errors:
//! ```rust
//! if let Some(fb2) = fb2reader::try_open("tests/ebooks/example.fb2") {
//!     let body = fb2.body().unwrap_or_default();
//!     println!("{body}");
//! }
//! ```
//! Accessing elements and attributes directly:
//! ```rust
//! # fn main() -> fb2reader::ebook::errors::EbookResult<()> {
//! # let fb2 = fb2reader::Fb2::open("tests/ebooks/example.fb2")?;
//! let sequence = fb2.root().find("sequence").unwrap();
//!
//! assert_eq!(Some("Examples"), sequence.get_attribute("name"));
//! assert_eq!(Some("2"), sequence.get_attribute("number"));
//! # Ok(())
//! # }
//! ```

mod parser;
mod util;
mod writer;

pub mod ebook;
pub mod xml;

pub use self::ebook::fb2::{Fb2, Fb2Settings, try_open};

pub mod fb2 {
    //! FB2-specific content.
    pub use super::ebook::fb2::{Fb2, Fb2Settings, Fb2SettingsBuilder, binary, metadata};
}

pub mod errors {
    //! Re-exports of [`ebook::errors`](super::ebook::errors).
    pub use super::ebook::errors::{
        ArchiveError, BinaryError, EbookError, EbookResult, Fb2FormatError, FormatError,
    };
}
