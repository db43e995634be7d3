pub(crate) mod html;
pub(crate) mod xml;

pub(crate) type WriterResult<T> = crate::ebook::errors::EbookResult<T>;
