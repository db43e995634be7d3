use std::borrow::Cow;

pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Resolves an in-document reference (e.g., `#cover.jpg`) to the referenced id.
///
/// References without a leading `#` are tolerated and treated as the id itself.
pub(crate) fn fragment_id(href: &str) -> Cow<'_, str> {
    let href = href.trim();
    decode(href.strip_prefix('#').unwrap_or(href))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fragment_id() {
        #[rustfmt::skip]
        let expected = [
            ("cover.jpg", "#cover.jpg"),
            ("cover.jpg", "cover.jpg"),
            ("cover image.png", "#cover%20image.png"),
            ("cover.jpg", "  #cover.jpg \n"),
            ("", "#"),
        ];

        for (expected, href) in expected {
            assert_eq!(expected, super::fragment_id(href));
        }
    }
}
