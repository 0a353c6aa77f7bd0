use crate::inspection::domain::ReportRow;
use crate::shared::Result;

/// ReportRenderer port for turning shaped report rows into a document
pub trait ReportRenderer {
    /// Renders the rows into the bytes of the export artifact
    fn render(&self, rows: &[ReportRow]) -> Result<Vec<u8>>;

    /// File extension of the rendered artifact, without the dot
    fn extension(&self) -> &'static str;
}

impl<R: ReportRenderer + ?Sized> ReportRenderer for &R {
    fn render(&self, rows: &[ReportRow]) -> Result<Vec<u8>> {
        (**self).render(rows)
    }

    fn extension(&self) -> &'static str {
        (**self).extension()
    }
}
