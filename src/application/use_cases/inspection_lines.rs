use crate::inspection::domain::LineRecord;
use crate::ports::outbound::InspectionRepository;
use crate::shared::Result;

/// Detail rows fetched for one inspection (single page)
pub const DEFAULT_LINE_PAGE_SIZE: u32 = 500;

/// InspectionLinesUseCase - detail rows of one inspection head
pub struct InspectionLinesUseCase<R> {
    repository: R,
    page_size: u32,
}

impl<R: InspectionRepository> InspectionLinesUseCase<R> {
    pub fn new(repository: R, page_size: u32) -> Self {
        Self {
            repository,
            page_size: page_size.max(1),
        }
    }

    /// Fetches the first page of detail rows, in server order
    pub fn execute(&self, mfg_inspection_id: i64) -> Result<Vec<LineRecord>> {
        let page = self
            .repository
            .line_page(mfg_inspection_id, 1, self.page_size)?;
        if page.received >= self.page_size as usize {
            tracing::warn!(
                mfg_inspection_id,
                page_size = self.page_size,
                "detail rows may be truncated at one page"
            );
        }
        Ok(page.rows)
    }
}
