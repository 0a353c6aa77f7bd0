use super::{InspectionLinesUseCase, QueryInspectionsUseCase};
use crate::application::dto::{ExportResponse, FetchMode, QueryRequest};
use crate::inspection::services::{CollectionFetcher, ReportShaper};
use crate::ports::outbound::{InspectionRepository, ProgressReporter, ReportRenderer};
use crate::shared::error::InspectError;
use crate::shared::Result;

/// ExportInspectionsUseCase - renders the two-tier report of a query
///
/// The export always re-fetches every page regardless of the request's
/// fetch mode, then applies the same enrichment and item-name filter as a
/// query.
///
/// # Type Parameters
/// * `R` - InspectionRepository implementation
/// * `RR` - ReportRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportInspectionsUseCase<R, RR, PR> {
    repository: R,
    renderer: RR,
    progress_reporter: PR,
    fetcher: CollectionFetcher,
    line_page_size: u32,
}

impl<R, RR, PR> ExportInspectionsUseCase<R, RR, PR>
where
    R: InspectionRepository,
    RR: ReportRenderer,
    PR: ProgressReporter,
{
    pub fn new(
        repository: R,
        renderer: RR,
        progress_reporter: PR,
        fetcher: CollectionFetcher,
        line_page_size: u32,
    ) -> Self {
        Self {
            repository,
            renderer,
            progress_reporter,
            fetcher,
            line_page_size,
        }
    }

    /// Executes the export
    ///
    /// # Errors
    /// Returns `NothingToExport` when no record survives filtering, and
    /// propagates the first failing fetch.
    pub fn execute(&self, request: &QueryRequest) -> Result<ExportResponse> {
        let full_request = QueryRequest {
            fetch: FetchMode::Full,
            ..request.clone()
        };
        let query = QueryInspectionsUseCase::new(
            &self.repository,
            &self.progress_reporter,
            self.fetcher,
        );
        let heads = query.execute(&full_request)?.heads;

        if heads.is_empty() {
            return Err(InspectError::NothingToExport {
                from: request.window.start_str(),
                to: request.window.end_str(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "📑 Fetching inspection results for {} record(s)...",
            heads.len()
        ));

        let lines = InspectionLinesUseCase::new(&self.repository, self.line_page_size);
        let rows = ReportShaper::shape(
            &heads,
            |head| match head.head.mfg_inspection_id {
                Some(id) => lines.execute(id),
                None => Ok(Vec::new()),
            },
            &self.progress_reporter,
        )?;

        let content = self.renderer.render(&rows)?;
        self.progress_reporter.report_completion(&format!(
            "Rendered {} group(s), {} row(s)",
            heads.len(),
            rows.len()
        ));

        Ok(ExportResponse::new(
            content,
            self.renderer.extension(),
            heads.len(),
            rows.len(),
        ))
    }
}
