//! qf-inspect - process-inspection dashboard engine for QFactory
//!
//! This library fetches paginated inspection and job-order collections from
//! the QFactory JSON API, joins them on the job name, filters the result
//! with AND-token item-name queries and shapes it into a two-tier report
//! that can be rendered as an xlsx workbook.
//!
//! # Architecture
//!
//! - **Domain** (`inspection`): records, filters, the paging/join/filter/shaping services
//! - **Application** (`application`): use cases, DTOs and the session state
//! - **Ports** (`ports`): interfaces for the remote service and the outputs
//! - **Adapters** (`adapters`): HTTP client, console, filesystem, formatters, spreadsheet
//! - **Shared** (`shared`): error types and the result alias
//!
//! # Example
//!
//! ```no_run
//! use qf_inspect::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let client = Qf3Client::new(Qf3Settings::default())?;
//! let credentials = Credentials::new("ACME", "inspector", "secret");
//! let mut session = AppSession::login(client, &credentials, SessionSettings::default())?;
//!
//! let window = DateWindow::day(DateWindow::parse_date("2025-03-10")?);
//! let mut request = QueryRequest::new(window);
//! request.item_name_query = "AR%NNB".to_string();
//!
//! let response = session.run_query(&request, StderrProgressReporter::new())?;
//! println!("{}", MarkdownFormatter::new().format_heads(&response.heads)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod inspection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{Qf3Client, Qf3Settings};
    pub use crate::adapters::outbound::spreadsheet::XlsxReportRenderer;
    pub use crate::application::dto::{
        ExportResponse, FetchMode, OutputFormat, QueryRequest, QueryResponse,
    };
    pub use crate::application::use_cases::{
        ExportInspectionsUseCase, InspectionLinesUseCase, ListItemsUseCase,
        QueryInspectionsUseCase,
    };
    pub use crate::application::{AppSession, SessionSettings};
    pub use crate::inspection::domain::{
        DateWindow, EnrichedHead, EquipmentInfo, HeadFilter, HeadRecord, ItemFilter, ItemRecord,
        JobOrderFilter, JobOrderRecord, LineRecord, ListPage, ReportRow, RowKind,
        NO_DETAILS_LABEL, REPORT_COLUMNS,
    };
    pub use crate::inspection::services::{
        CollectionFetcher, Enricher, EquipmentIndex, JoinIndex, ReportShaper, TokenFilter,
    };
    pub use crate::ports::outbound::{
        Authenticator, Credentials, InspectionFormatter, InspectionRepository, OutputPresenter,
        ProgressReporter, ReportRenderer,
    };
    pub use crate::shared::error::{ExitCode, InspectError};
    pub use crate::shared::Result;
}
