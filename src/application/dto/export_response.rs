/// ExportResponse - the rendered export artifact
#[derive(Debug, Clone)]
pub struct ExportResponse {
    /// Rendered document bytes
    pub content: Vec<u8>,
    /// File extension of the rendered document, without the dot
    pub extension: &'static str,
    /// Number of head records (group rows)
    pub group_count: usize,
    /// Number of table rows below the header
    pub row_count: usize,
}

impl ExportResponse {
    pub fn new(
        content: Vec<u8>,
        extension: &'static str,
        group_count: usize,
        row_count: usize,
    ) -> Self {
        Self {
            content,
            extension,
            group_count,
            row_count,
        }
    }
}
