/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (remote API, file system, console, etc.).
pub mod formatter;
pub mod inspection_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_renderer;

pub use formatter::InspectionFormatter;
pub use inspection_repository::{Authenticator, Credentials, InspectionRepository};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_renderer::ReportRenderer;
