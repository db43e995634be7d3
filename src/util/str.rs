pub(crate) trait StringExt {
    fn trim_in_place(&mut self);

    /// Trims the string and returns [`None`] if nothing remains.
    fn into_non_empty(self) -> Option<String>;
}

impl StringExt for String {
    fn trim_in_place(&mut self) {
        self.truncate(self.trim_end().len());

        let start = self.len() - self.trim_start().len();
        if start > 0 {
            self.drain(..start);
        }
    }

    fn into_non_empty(mut self) -> Option<String> {
        self.trim_in_place();
        (!self.is_empty()).then_some(self)
    }
}

pub(crate) trait StrExt {
    fn ends_with_ignore_case(&self, end: &str) -> bool;

    /// The portion of a qualified name after its namespace prefix
    /// (e.g., `l:href` → `href`).
    fn local_name(&self) -> &str;
}

impl StrExt for str {
    fn ends_with_ignore_case(&self, end: &str) -> bool {
        self.len() >= end.len()
            && self.is_char_boundary(self.len() - end.len())
            && self[self.len() - end.len()..].eq_ignore_ascii_case(end)
    }

    fn local_name(&self) -> &str {
        self.rsplit_once(':').map_or(self, |(_, local)| local)
    }
}
