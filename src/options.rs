/// How the source table is laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field separator, `b','` by default.
    pub separator: u8,
    /// Whether the first line is a header row. Header rows are never counted as samples.
    pub has_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            has_header: false,
        }
    }
}

impl LoadOptions {
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}
