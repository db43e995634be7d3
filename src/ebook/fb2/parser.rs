use crate::ebook::errors::{EbookResult, Fb2FormatError};
use crate::ebook::fb2::metadata::Fb2Metadata;
use crate::ebook::fb2::{Fb2Settings, archive, consts};
use crate::parser::ParserResult;
use crate::parser::xml;
use crate::util::utf;
use crate::xml::Element;
use encoding_rs::{Encoding, WINDOWS_1251};
use std::borrow::Cow;

pub(super) struct Fb2Parser<'a> {
    config: &'a Fb2Settings,
}

impl<'a> Fb2Parser<'a> {
    pub(super) fn new(settings: &'a Fb2Settings) -> Self {
        Self { config: settings }
    }

    /// Parses raw (possibly zipped) FB2 bytes into the root `FictionBook` element.
    pub(super) fn parse(&self, data: &[u8]) -> EbookResult<Element> {
        let data = if archive::is_zip(data) {
            Cow::Owned(archive::extract_fb2(data)?)
        } else {
            Cow::Borrowed(data)
        };

        let content = utf::decode_xml(&data, self.fallback_encoding());
        let root = xml::parse_document(&content)?;

        self.validate(&root)?;
        Ok(root)
    }

    fn validate(&self, root: &Element) -> ParserResult<()> {
        if !root.is_local_name(consts::FICTION_BOOK) {
            return Err(Fb2FormatError::NoFictionBookFound(root.name().to_owned()).into());
        }
        let description = Self::mandatory(root.find(consts::DESCRIPTION), || {
            Fb2FormatError::NoDescriptionFound
        })?;

        let title = Fb2Metadata::new(description).find_title();
        if title.is_none() {
            if self.config.strict {
                return Err(Fb2FormatError::MissingTitle.into());
            }
            log::debug!("Missing `book-title`; continuing as strict mode is disabled");
        }
        Ok(())
    }

    fn fallback_encoding(&self) -> &'static Encoding {
        let label = &self.config.fallback_encoding;

        utf::encoding_for_label(label).unwrap_or_else(|| {
            log::warn!("Unknown fallback encoding `{label}`; using `windows-1251`");
            WINDOWS_1251
        })
    }

    fn mandatory<T>(
        value: Option<T>,
        if_missing: impl FnOnce() -> Fb2FormatError,
    ) -> ParserResult<T> {
        value.ok_or_else(|| if_missing().into())
    }
}
