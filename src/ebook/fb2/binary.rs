//! Embedded `binary` attachments (images) of an [`Fb2`](super::Fb2).

use crate::ebook::errors::BinaryError;
use crate::ebook::fb2::consts;
use crate::xml::Element;
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Base64 as found in FB2 files: padding is optional and
/// stray bits after the final symbol are tolerated.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// A `binary` element of an [`Fb2`](super::Fb2), with its payload left encoded.
///
/// The payload is decoded on demand with [`Self::decode`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Binary<'ebook> {
    element: &'ebook Element,
}

impl<'ebook> Binary<'ebook> {
    pub(super) fn new(element: &'ebook Element) -> Self {
        Self { element }
    }

    /// The `id` attribute, referenced by images (e.g., `cover.jpg`).
    pub fn id(&self) -> Option<&'ebook str> {
        self.element.get_attribute(consts::ID)
    }

    /// The `content-type` attribute (e.g., `image/jpeg`).
    pub fn content_type(&self) -> Option<&'ebook str> {
        self.element.get_attribute(consts::CONTENT_TYPE)
    }

    pub fn element(&self) -> &'ebook Element {
        self.element
    }

    /// Decodes the base64 payload, ignoring whitespace and line breaks.
    ///
    /// # Errors
    /// [`BinaryError::InvalidBase64`] if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, BinaryError> {
        let mut encoded = self.element.text();
        encoded.retain(|c| !c.is_ascii_whitespace());

        LENIENT_BASE64
            .decode(encoded)
            .map_err(|source| BinaryError::InvalidBase64 {
                id: self.id().unwrap_or_default().to_owned(),
                source,
            })
    }

    pub(crate) fn to_attachment(self, is_cover: bool) -> Result<BinaryAttachment, BinaryError> {
        if self.id().is_none() {
            log::warn!("Decoding `binary` without an `id`");
        }
        Ok(BinaryAttachment {
            name: self.id().unwrap_or_default().to_owned(),
            content_type: self.content_type().unwrap_or_default().to_owned(),
            data: self.decode()?,
            is_cover,
        })
    }
}

/// A decoded binary attachment, such as a cover image.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryAttachment {
    name: String,
    content_type: String,
    data: Vec<u8>,
    is_cover: bool,
}

impl BinaryAttachment {
    /// The `id` of the originating `binary` element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared content type; empty if not declared.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns `true` if the attachment is referenced as the cover page image.
    pub fn is_cover(&self) -> bool {
        self.is_cover
    }

    /// A file extension derived from the content type,
    /// or [`None`] if the content type has no subtype.
    ///
    /// # Examples
    /// ```
    /// # use fb2reader::Fb2;
    /// # fn main() -> fb2reader::ebook::errors::EbookResult<()> {
    /// let fb2 = Fb2::open("tests/ebooks/example.fb2")?;
    /// let cover = fb2.cover_image()?.unwrap();
    ///
    /// assert_eq!("image/png", cover.content_type());
    /// assert_eq!(Some("png"), cover.extension());
    /// # Ok(())
    /// # }
    /// ```
    pub fn extension(&self) -> Option<&str> {
        let (_, subtype) = self.content_type.split_once('/')?;
        // `image/svg+xml` → `svg`
        let extension = subtype.split(['+', ';']).next()?.trim();

        (!extension.is_empty()).then_some(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::xml::parse_document;

    fn binary(xml: &str) -> Element {
        parse_document(xml).unwrap()
    }

    #[test]
    fn test_decode() {
        #[rustfmt::skip]
        let expected: [(&[u8], &str); 4] = [
            (b"hello", r#"<binary id="a">aGVsbG8=</binary>"#),
            (b"hello", "<binary id=\"a\">\n  aGVs\r\n  bG8=\n</binary>"),
            // Missing padding
            (b"hello", r#"<binary id="a">aGVsbG8</binary>"#),
            (b"", r#"<binary id="a"/>"#),
        ];

        for (expected, xml) in expected {
            let element = binary(xml);
            assert_eq!(expected, Binary::new(&element).decode().unwrap(), "{xml}");
        }
    }

    #[test]
    fn test_decode_invalid() {
        let element = binary(r#"<binary id="broken.jpg">not*base64!</binary>"#);
        let error = Binary::new(&element).decode().unwrap_err();

        assert!(matches!(error, BinaryError::InvalidBase64 { ref id, .. } if id == "broken.jpg"));
    }

    #[test]
    fn test_attachment() {
        let element = binary(r#"<binary id="c.png" content-type="image/png">AAEC</binary>"#);
        let attachment = Binary::new(&element).to_attachment(true).unwrap();

        assert_eq!("c.png", attachment.name());
        assert_eq!("image/png", attachment.content_type());
        assert_eq!(b"\x00\x01\x02".as_slice(), attachment.data());
        assert!(attachment.is_cover());
    }

    #[test]
    fn test_extension() {
        #[rustfmt::skip]
        let expected = [
            (Some("jpeg"), "image/jpeg"),
            (Some("svg"), "image/svg+xml"),
            (Some("png"), "image/png; charset=binary"),
            (None, "image"),
            (None, "image/"),
            (None, ""),
        ];

        for (expected, content_type) in expected {
            let attachment = BinaryAttachment {
                name: String::new(),
                content_type: content_type.to_owned(),
                data: Vec::new(),
                is_cover: false,
            };
            assert_eq!(expected, attachment.extension(), "{content_type}");
        }
    }
}
