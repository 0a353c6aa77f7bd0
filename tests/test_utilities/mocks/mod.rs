/// Mock implementations for testing
mod mock_inspection_repository;
mod mock_progress_reporter;
mod mock_report_renderer;

#[allow(unused_imports)]
pub use mock_inspection_repository::{MockInspectionRepository, MOCK_PASSWORD};
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_report_renderer::MockReportRenderer;
