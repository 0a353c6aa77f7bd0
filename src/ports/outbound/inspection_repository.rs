use crate::inspection::domain::{
    HeadFilter, HeadRecord, ItemFilter, ItemRecord, JobOrderFilter, JobOrderRecord, LineRecord,
    ListPage,
};
use crate::shared::Result;
use std::fmt;

/// Login credentials for the remote service
#[derive(Clone)]
pub struct Credentials {
    pub company_code: String,
    pub user_key: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        company_code: impl Into<String>,
        user_key: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            company_code: company_code.into(),
            user_key: user_key.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("company_code", &self.company_code)
            .field("user_key", &self.user_key)
            .field("password", &"***")
            .finish()
    }
}

/// Authenticator port for establishing a session with the remote service
pub trait Authenticator {
    /// Logs in and keeps the session for subsequent calls
    ///
    /// # Errors
    /// Returns an error if:
    /// - The backend reports a non-success login
    /// - The network request fails or returns a non-2xx status
    fn login(&self, credentials: &Credentials) -> Result<()>;
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn login(&self, credentials: &Credentials) -> Result<()> {
        (**self).login(credentials)
    }
}

/// InspectionRepository port for single-page fetches of the remote collections
///
/// Every method issues exactly one request. `page` is 1-based and
/// `page_size` is at least 1. An exhausted collection is an empty page, not
/// an error; transport and HTTP failures are errors and are never retried.
pub trait InspectionRepository {
    /// Fetches one page of inspection head records
    fn head_page(&self, filter: &HeadFilter, page: u32, page_size: u32)
        -> Result<ListPage<HeadRecord>>;

    /// Fetches one page of detail lines for a head record
    fn line_page(
        &self,
        mfg_inspection_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<LineRecord>>;

    /// Fetches one page of job orders with equipment metadata
    fn job_order_page(
        &self,
        filter: &JobOrderFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<JobOrderRecord>>;

    /// Fetches one page of the item master listing
    fn item_page(&self, filter: &ItemFilter, page: u32, page_size: u32)
        -> Result<ListPage<ItemRecord>>;
}

impl<R: InspectionRepository + ?Sized> InspectionRepository for &R {
    fn head_page(
        &self,
        filter: &HeadFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<HeadRecord>> {
        (**self).head_page(filter, page, page_size)
    }

    fn line_page(
        &self,
        mfg_inspection_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<LineRecord>> {
        (**self).line_page(mfg_inspection_id, page, page_size)
    }

    fn job_order_page(
        &self,
        filter: &JobOrderFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<JobOrderRecord>> {
        (**self).job_order_page(filter, page, page_size)
    }

    fn item_page(
        &self,
        filter: &ItemFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<ItemRecord>> {
        (**self).item_page(filter, page, page_size)
    }
}
