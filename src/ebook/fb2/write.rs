use crate::ebook::errors::EbookResult;
use crate::ebook::fb2::Fb2;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const BODY_FILE_NAME: &str = "body.html";
const HTML_EXTENSION: &str = "html";

impl Fb2 {
    /// Writes the decoded [cover image](Self::cover_image) into `dir`,
    /// returning the path of the written file.
    ///
    /// The file is named `file_name` if given, otherwise after the `binary` id.
    /// If the name has no extension, one is derived from the content type
    /// (`image/jpeg` → `.jpeg`).
    /// Only the final component of the name is used, and `dir` is created if missing.
    ///
    /// Returns [`None`] if the book declares no cover.
    ///
    /// # Errors
    /// - [`Binary`](crate::ebook::errors::EbookError::Binary): See [`Self::cover_image`].
    /// - [`Io`](crate::ebook::errors::EbookError::Io): The file could not be written.
    ///
    /// # Examples
    /// ```no_run
    /// # use fb2reader::Fb2;
    /// # use fb2reader::ebook::errors::EbookResult;
    /// # fn main() -> EbookResult<()> {
    /// let fb2 = Fb2::open("tests/ebooks/example.fb2")?;
    ///
    /// if let Some(path) = fb2.save_cover_image("covers", None)? {
    ///     println!("Cover saved to {}", path.display());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn save_cover_image(
        &self,
        dir: impl AsRef<Path>,
        file_name: Option<&str>,
    ) -> EbookResult<Option<PathBuf>> {
        let Some(cover) = self.cover_image()? else {
            return Ok(None);
        };
        let path = output_path(
            dir.as_ref(),
            file_name.unwrap_or(cover.name()),
            cover.name(),
            cover.extension(),
        );

        write_file(&path, cover.data())?;
        Ok(Some(path))
    }

    /// Writes [`Self::body_html`] into `dir`, returning the path of the written file.
    ///
    /// The file is named `file_name` if given, otherwise `body.html`.
    /// Naming follows the same rules as [`Self::save_cover_image`].
    ///
    /// Returns [`None`] if the document has no `body`.
    ///
    /// # Errors
    /// [`Io`](crate::ebook::errors::EbookError::Io): The file could not be written.
    pub fn save_body_as_html(
        &self,
        dir: impl AsRef<Path>,
        file_name: Option<&str>,
    ) -> EbookResult<Option<PathBuf>> {
        let Some(html) = self.body_html()? else {
            return Ok(None);
        };
        let path = output_path(
            dir.as_ref(),
            file_name.unwrap_or(BODY_FILE_NAME),
            BODY_FILE_NAME,
            Some(HTML_EXTENSION),
        );

        write_file(&path, html.as_bytes())?;
        Ok(Some(path))
    }
}

fn write_file(path: &Path, data: &[u8]) -> EbookResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    log::debug!("Writing {} bytes to {}", data.len(), path.display());

    fs::write(path, data).map_err(Into::into)
}

/// `dir` joined with the final component of `file_name`
/// (or `fallback` if it has none), with `extension` added when missing.
fn output_path(dir: &Path, file_name: &str, fallback: &str, extension: Option<&str>) -> PathBuf {
    let name = Path::new(file_name)
        .file_name()
        .or_else(|| Path::new(fallback).file_name())
        .unwrap_or(OsStr::new(BODY_FILE_NAME));
    let mut path = dir.join(name);

    if let Some(extension) = extension
        && path.extension().is_none()
    {
        path.set_extension(extension);
    }
    path
}
