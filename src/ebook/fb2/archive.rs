use crate::ebook::errors::ArchiveError;
use crate::util::str::StrExt;
use std::io;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";
const FB2_EXTENSION: &str = ".fb2";

/// Returns `true` if `data` starts with a zip local file header.
pub(super) fn is_zip(data: &[u8]) -> bool {
    data.starts_with(ZIP_SIGNATURE)
}

/// Extracts the first entry ending with `.fb2` (case-insensitive) from a zipped FB2.
pub(super) fn extract_fb2(data: &[u8]) -> Result<Vec<u8>, ArchiveError> {
    let mut zip =
        ZipArchive::new(Cursor::new(data)).map_err(|error| ArchiveError::UnreadableArchive {
            source: io::Error::from(error),
        })?;

    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|error| ArchiveError::UnreadableArchive {
                source: io::Error::from(error),
            })?;

        if !entry.is_file() || !entry.name().ends_with_ignore_case(FB2_EXTENSION) {
            continue;
        }
        let name = entry.name().to_owned();
        let mut buf = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or_default());

        log::debug!("Reading `{name}` from zipped FB2");
        return entry
            .read_to_end(&mut buf)
            .map(|_| buf)
            .map_err(|source| ArchiveError::CannotRead { name, source });
    }
    Err(ArchiveError::NoFb2Entry)
}
