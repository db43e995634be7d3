// General
pub(crate) const ID: &str = "id";
pub(crate) const HREF: &str = "href";
pub(crate) const NAME: &str = "name";
pub(crate) const NUMBER: &str = "number";
pub(crate) const VALUE: &str = "value";
pub(crate) const CONTENT_TYPE: &str = "content-type";

// Root structure
pub(crate) const FICTION_BOOK: &str = "FictionBook";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const BODY: &str = "body";
pub(crate) const BINARY: &str = "binary";

// Description blocks
pub(crate) const TITLE_INFO: &str = "title-info";
pub(crate) const DOCUMENT_INFO: &str = "document-info";
pub(crate) const PUBLISH_INFO: &str = "publish-info";

// Title-info elements
pub(crate) const BOOK_TITLE: &str = "book-title";
pub(crate) const BOOK_NAME: &str = "book-name";
pub(crate) const LANG: &str = "lang";
pub(crate) const SRC_LANG: &str = "src-lang";
pub(crate) const GENRE: &str = "genre";
pub(crate) const AUTHOR: &str = "author";
pub(crate) const TRANSLATOR: &str = "translator";
pub(crate) const ANNOTATION: &str = "annotation";
pub(crate) const KEYWORDS: &str = "keywords";
pub(crate) const DATE: &str = "date";
pub(crate) const SEQUENCE: &str = "sequence";
pub(crate) const COVERPAGE: &str = "coverpage";
pub(crate) const IMAGE: &str = "image";

// Person elements
pub(crate) const FIRST_NAME: &str = "first-name";
pub(crate) const MIDDLE_NAME: &str = "middle-name";
pub(crate) const LAST_NAME: &str = "last-name";
pub(crate) const NICKNAME: &str = "nickname";

// Publish-info elements
pub(crate) const ISBN: &str = "isbn";
pub(crate) const PUBLISHER: &str = "publisher";
pub(crate) const CITY: &str = "city";
pub(crate) const YEAR: &str = "year";
