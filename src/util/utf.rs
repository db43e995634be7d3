use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::borrow::Cow;

/// The XML declaration is expected within the first bytes of a document.
const DECLARATION_SCAN_LIMIT: usize = 1024;

/// Decodes raw document bytes into UTF-8.
///
/// Decoding order:
/// 1. A byte order mark (UTF-8, UTF-16LE, UTF-16BE).
/// 2. The `encoding` named in the XML declaration,
///    if it is a known label and not a Unicode encoding.
/// 3. Strict UTF-8.
/// 4. The `fallback` encoding.
pub(crate) fn decode_xml<'a>(data: &'a [u8], fallback: &'static Encoding) -> Cow<'a, str> {
    if let Some((encoding, bom_length)) = Encoding::for_bom(data) {
        return encoding
            .decode_without_bom_handling(&data[bom_length..])
            .0;
    }

    if let Some(encoding) = declared_encoding(data).filter(|encoding| !is_unicode(encoding)) {
        let (text, malformed) = encoding.decode_without_bom_handling(data);

        if malformed {
            log::warn!(
                "Input contains byte sequences invalid for declared encoding `{}`",
                encoding.name(),
            );
        }
        return text;
    }

    UTF_8
        .decode_without_bom_handling_and_without_replacement(data)
        .unwrap_or_else(|| {
            log::warn!(
                "Input is not valid UTF-8; decoding as `{}` instead",
                fallback.name(),
            );
            fallback.decode_without_bom_handling(data).0
        })
}

/// Resolves an encoding label (e.g., `cp1251`), returning [`None`] if unknown.
pub(crate) fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

fn is_unicode(encoding: &&'static Encoding) -> bool {
    [UTF_8, UTF_16LE, UTF_16BE].contains(encoding)
}

/// Retrieves the encoding from `<?xml ... encoding="..."?>`.
fn declared_encoding(data: &[u8]) -> Option<&'static Encoding> {
    let head = &data[..data.len().min(DECLARATION_SCAN_LIMIT)];
    let start = head.iter().position(|b| !b.is_ascii_whitespace())?;
    let head = head[start..].strip_prefix(b"<?xml")?;
    let end = head.windows(2).position(|window| window == b"?>")?;
    let declaration = &head[..end];

    let position = declaration
        .windows(b"encoding".len())
        .position(|window| window == b"encoding")?;
    let rest = declaration[position + b"encoding".len()..]
        .trim_ascii_start()
        .strip_prefix(b"=")?
        .trim_ascii_start();

    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let label = &rest[..rest.iter().position(|&b| b == quote)?];

    Encoding::for_label(label)
}
