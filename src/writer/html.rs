use crate::writer::WriterResult;
use crate::writer::xml::{XmlWriter, write_element};

const HTML: &str = "html";
const HEAD: &str = "head";
const META: &str = "meta";
const TITLE: &str = "title";
const BODY: &str = "body";
const LANG: &str = "lang";
const CHARSET: &str = "charset";
const UTF_8: &str = "utf-8";

/// Wraps plain text in a minimal HTML document:
///
/// ```html
/// <!DOCTYPE html><html lang=".."><head><meta charset="utf-8"/><title>..</title></head><body>..</body></html>
/// ```
pub(crate) struct HtmlWriter<'a> {
    writer: XmlWriter<'a, Vec<u8>>,
    title: &'a str,
    language: Option<&'a str>,
}

impl<'a> HtmlWriter<'a> {
    pub(crate) fn new(title: &'a str, language: Option<&'a str>) -> Self {
        Self {
            writer: XmlWriter::new(Vec::new()),
            title,
            language,
        }
    }

    pub(crate) fn write_document(mut self, body: &str) -> WriterResult<String> {
        self.writer.write_doctype(HTML)?;
        self.write_html(body)?;

        // Only valid UTF-8 is written
        Ok(String::from_utf8_lossy(&self.writer.into_inner()).into_owned())
    }

    fn write_html(&mut self, body: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: HTML,
            attributes: {
                LANG => self.language,
            }
            inner_content: {
                self.write_head()?;
                self.write_body(body)?;
            }
        }
    }

    fn write_head(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: HEAD,
            inner_content: {
                self.write_charset()?;
                self.write_title()?;
            }
        }
    }

    fn write_charset(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: META,
            attributes: {
                CHARSET => UTF_8,
            }
        }
    }

    fn write_title(&mut self) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: TITLE,
            text: self.title,
        }
    }

    fn write_body(&mut self, body: &str) -> WriterResult<()> {
        write_element! {
            writer: self.writer,
            tag: BODY,
            text: body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HtmlWriter;

    #[test]
    fn test_write_document() {
        let html = HtmlWriter::new("Fish & Chips", Some("en"))
            .write_document("<b>not markup</b>\n  kept")
            .unwrap();

        assert_eq!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
             <title>Fish &amp; Chips</title></head>\
             <body>&lt;b&gt;not markup&lt;/b&gt;\n  kept</body></html>",
            html,
        );
    }

    #[test]
    fn test_write_document_without_language() {
        let html = HtmlWriter::new("", None).write_document("").unwrap();

        assert_eq!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"/>\
             <title></title></head><body></body></html>",
            html,
        );
    }
}
