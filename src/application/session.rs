use crate::application::dto::{ExportResponse, QueryRequest, QueryResponse};
use crate::application::use_cases::{
    ExportInspectionsUseCase, InspectionLinesUseCase, ListItemsUseCase, QueryInspectionsUseCase,
    DEFAULT_LINE_PAGE_SIZE,
};
use crate::inspection::domain::{EnrichedHead, ItemFilter, ItemRecord, LineRecord};
use crate::inspection::services::CollectionFetcher;
use crate::ports::outbound::{
    Authenticator, Credentials, InspectionRepository, ProgressReporter, ReportRenderer,
};
use crate::shared::error::InspectError;
use crate::shared::Result;

/// Paging settings shared by every cycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub fetcher: CollectionFetcher,
    pub line_page_size: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            fetcher: CollectionFetcher::default(),
            line_page_size: DEFAULT_LINE_PAGE_SIZE,
        }
    }
}

/// AppSession - state of one authenticated session
///
/// Owns the repository, the results of the last successful query and the
/// selected inspection. A session only exists after a successful login.
/// A query replaces the results wholesale and clears the selection; a
/// failed query leaves both untouched.
pub struct AppSession<R> {
    repository: R,
    settings: SessionSettings,
    results: Vec<EnrichedHead>,
    selected: Option<i64>,
}

impl<R: InspectionRepository> AppSession<R> {
    /// Logs in and opens a session over `repository`
    ///
    /// # Errors
    /// Fails with the authenticator's error; no session is created.
    pub fn login(
        repository: R,
        credentials: &Credentials,
        settings: SessionSettings,
    ) -> Result<Self>
    where
        R: Authenticator,
    {
        repository.login(credentials)?;
        tracing::info!(user = %credentials.user_key, "session established");
        Ok(Self::with_repository(repository, settings))
    }

    /// Opens a session over an already authenticated repository
    pub fn with_repository(repository: R, settings: SessionSettings) -> Self {
        Self {
            repository,
            settings,
            results: Vec::new(),
            selected: None,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Results of the last successful query
    pub fn results(&self) -> &[EnrichedHead] {
        &self.results
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Runs a query and, on success, replaces the held results
    pub fn run_query<P: ProgressReporter>(
        &mut self,
        request: &QueryRequest,
        progress: P,
    ) -> Result<QueryResponse> {
        let response =
            QueryInspectionsUseCase::new(&self.repository, progress, self.settings.fetcher)
                .execute(request)?;

        self.results = response.heads.clone();
        self.selected = None;
        Ok(response)
    }

    /// Clears results and selection
    pub fn reset(&mut self) {
        self.results.clear();
        self.selected = None;
    }

    /// Selects one of the held results by inspection id
    ///
    /// # Errors
    /// Returns a validation error when no held result carries the id.
    pub fn select(&mut self, mfg_inspection_id: i64) -> Result<()> {
        let known = self
            .results
            .iter()
            .any(|h| h.head.mfg_inspection_id == Some(mfg_inspection_id));
        if !known {
            return Err(InspectError::Validation {
                message: format!(
                    "Inspection {} is not among the current results",
                    mfg_inspection_id
                ),
            }
            .into());
        }
        self.selected = Some(mfg_inspection_id);
        Ok(())
    }

    /// Detail rows of the selected inspection; empty when nothing is selected
    pub fn selected_lines(&self) -> Result<Vec<LineRecord>> {
        match self.selected {
            Some(id) => self.lines(id),
            None => Ok(Vec::new()),
        }
    }

    /// Detail rows of any inspection, selected or not
    pub fn lines(&self, mfg_inspection_id: i64) -> Result<Vec<LineRecord>> {
        InspectionLinesUseCase::new(&self.repository, self.settings.line_page_size)
            .execute(mfg_inspection_id)
    }

    /// Renders the full report for `request`; held results are not touched
    pub fn export<RR: ReportRenderer, P: ProgressReporter>(
        &self,
        request: &QueryRequest,
        renderer: RR,
        progress: P,
    ) -> Result<ExportResponse> {
        ExportInspectionsUseCase::new(
            &self.repository,
            renderer,
            progress,
            self.settings.fetcher,
            self.settings.line_page_size,
        )
        .execute(request)
    }

    pub fn items<P: ProgressReporter>(
        &self,
        filter: &ItemFilter,
        progress: P,
    ) -> Result<Vec<ItemRecord>> {
        ListItemsUseCase::new(&self.repository, progress, self.settings.fetcher).execute(filter)
    }
}
