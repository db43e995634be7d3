//! FictionBook 2 parsing and extraction.
//!
//! - [`fb2`]: The [`Fb2`] document along with its metadata and binary attachments.
//! - [`errors`]: Error types returned upon opening or extracting content.

pub mod errors;
pub mod fb2;

pub use fb2::{Fb2, Fb2Settings};
