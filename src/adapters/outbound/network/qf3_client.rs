use crate::inspection::domain::{
    HeadFilter, HeadRecord, ItemFilter, ItemRecord, JobOrderFilter, JobOrderRecord, LineRecord,
    ListPage,
};
use crate::inspection::policies::ResponseExtraction;
use crate::ports::outbound::{Authenticator, Credentials, InspectionRepository};
use crate::shared::error::InspectError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::time::{Duration, Instant};

const LOGIN_PATH: &str = "/common/login/post-login";
const HEAD_LIST_PATH: &str = "/qcm/operation_inspection-view/head-list";
const LINE_LIST_PATH: &str = "/qcm/operation_inspection-view/line-list";
const JOB_ORDER_LIST_PATH: &str = "/mfg/job_order_sum_view/joborder-list";
const ITEM_LIST_PATH: &str = "/base/item/list";

/// Number of response characters kept in the request trace
const TRACE_BODY_CHARS: usize = 2000;

/// Number of response characters quoted in HTTP status errors
const ERROR_BODY_CHARS: usize = 300;

/// Connection settings for the QFactory service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qf3Settings {
    pub base_url: String,
    pub language_code: String,
    pub company_id: i64,
    pub plant_id: i64,
}

impl Default for Qf3Settings {
    fn default() -> Self {
        Self {
            base_url: "https://qf3.qfactory.biz:8000".to_string(),
            language_code: "KO".to_string(),
            company_id: 100,
            plant_id: 11,
        }
    }
}

/// Diagnostic record of the most recent request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTrace {
    pub method: &'static str,
    pub url: String,
    pub status: u16,
    pub response_head: String,
}

/// Qf3Client adapter for the QFactory JSON API
///
/// This adapter implements the Authenticator and InspectionRepository
/// ports over blocking HTTPS. Session cookies live in the client's
/// in-memory cookie store and are dropped with the client.
///
/// # Failure policy
/// - Fixed 30 second timeout per call
/// - Non-2xx responses and transport faults are returned as errors
/// - No retries
pub struct Qf3Client {
    client: Client,
    settings: Qf3Settings,
    last_trace: RefCell<Option<RequestTrace>>,
}

impl Qf3Client {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client with the service's default headers
    pub fn new(settings: Qf3Settings) -> Result<Self> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        let origin = Self::origin_of(&base_url);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert(ORIGIN, HeaderValue::from_str(&origin)?);
        headers.insert(REFERER, HeaderValue::from_str(&format!("{}/", origin))?);

        let user_agent = format!("qf-inspect/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            settings: Qf3Settings {
                base_url,
                ..settings
            },
            last_trace: RefCell::new(None),
        })
    }

    pub fn settings(&self) -> &Qf3Settings {
        &self.settings
    }

    /// Trace of the most recent request that got a response, if any
    pub fn last_trace(&self) -> Option<RequestTrace> {
        self.last_trace.borrow().clone()
    }

    /// Browser origin of the service: the base URL without the API port
    fn origin_of(base_url: &str) -> String {
        base_url.replace(":8000", "")
    }

    fn post_json(&self, path: &str, payload: &Value) -> Result<Value> {
        let url = format!("{}{}", self.settings.base_url, path);
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .map_err(|e| InspectError::Transport {
                url: url.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| InspectError::Transport {
            url: url.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(
            method = "POST",
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request finished"
        );
        let response_head: String = body.chars().take(TRACE_BODY_CHARS).collect();
        tracing::trace!(url = %url, body = %response_head, "response head");

        *self.last_trace.borrow_mut() = Some(RequestTrace {
            method: "POST",
            url: url.clone(),
            status: status.as_u16(),
            response_head,
        });

        if !status.is_success() {
            return Err(InspectError::HttpStatus {
                url,
                status: status.as_u16(),
                body_head: body.chars().take(ERROR_BODY_CHARS).collect(),
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|e| {
            InspectError::InvalidResponse {
                url,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn fetch_page<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        payload: &Value,
    ) -> Result<ListPage<T>> {
        let response = self.post_json(path, payload)?;
        let page = ResponseExtraction::extract_page(&response);
        Ok(ResponseExtraction::decode_page(page))
    }

    pub(crate) fn login_payload(&self, credentials: &Credentials) -> Value {
        json!({
            "companyCode": credentials.company_code,
            "userKey": credentials.user_key,
            "password": credentials.password,
            "languageCode": self.settings.language_code,
        })
    }

    pub(crate) fn head_list_payload(&self, filter: &HeadFilter, page: u32, limit: u32) -> Value {
        json!({
            "companyId": self.settings.company_id,
            "plantId": self.settings.plant_id,
            "inspectionDateFrom": filter.window.start_str(),
            "inspectionDateTo": filter.window.end_str(),
            "itemCode": filter.item_code,
            "itemName": filter.item_name,
            "jobName": filter.job_name,
            "operationCode": filter.operation_code,
            "personId": filter.person_id,
            "checkClass": filter.check_class,
            "languageCode": self.settings.language_code,
            "start": 1,
            "page": page,
            "limit": limit.to_string(),
        })
    }

    pub(crate) fn line_list_payload(&self, mfg_inspection_id: i64, page: u32, limit: u32) -> Value {
        json!({
            "languageCode": self.settings.language_code,
            "companyId": self.settings.company_id,
            "plantId": self.settings.plant_id,
            "mfgInspectionId": mfg_inspection_id,
            "start": 1,
            "page": page,
            "limit": limit.to_string(),
            "node": "root",
        })
    }

    pub(crate) fn job_order_payload(&self, filter: &JobOrderFilter, page: u32, limit: u32) -> Value {
        json!({
            "languageCode": self.settings.language_code,
            "companyId": self.settings.company_id,
            "plantId": self.settings.plant_id,
            "releasedDateFrom": filter.window.start_str(),
            "releasedDateTo": filter.window.end_str(),
            "itemCode": filter.item_code,
            "itemName": filter.item_name,
            "jobName": filter.job_name,
            "jobComent": "",
            "workcenterCode": filter.workcenter_code,
            "workerResult": filter.worker_result,
            "status": {
                "CANCEL": false,
                "CLOSE": true,
                "COMPLETE": true,
                "EXECUTE": true,
                "HOLDING": true,
                "RELEASED": false,
                "UNRELEASE": false,
            },
            "start": 1,
            "page": page,
            "limit": limit.to_string(),
        })
    }

    pub(crate) fn item_list_payload(&self, filter: &ItemFilter, page: u32, limit: u32) -> Value {
        let start = u64::from(page.saturating_sub(1)) * u64::from(limit) + 1;
        json!({
            "languageCode": self.settings.language_code,
            "companyId": self.settings.company_id,
            "status": filter.status,
            "itemPlant": filter.item_plant,
            "itemCode": filter.item_code,
            "itemName": filter.item_name,
            "itemType": filter.item_type,
            "productGroup": filter.product_group,
            "buyMake": filter.buy_make,
            "controlLot": filter.control_lot,
            "start": start,
            "page": page,
            "limit": limit,
        })
    }

    /// Interprets a login response; anything but `"success": true` is a failure
    fn check_login_response(response: &Value) -> Result<()> {
        if response.get("success").and_then(Value::as_bool) == Some(true) {
            return Ok(());
        }

        let message = ["message", "msg", "errorMessage"]
            .iter()
            .find_map(|key| response.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| response.to_string().chars().take(ERROR_BODY_CHARS).collect());

        Err(InspectError::AuthenticationFailed { message }.into())
    }
}

impl Authenticator for Qf3Client {
    fn login(&self, credentials: &Credentials) -> Result<()> {
        tracing::info!(
            company_code = %credentials.company_code,
            user_key = %credentials.user_key,
            "logging in"
        );
        let response = self.post_json(LOGIN_PATH, &self.login_payload(credentials))?;
        Self::check_login_response(&response)
    }
}

impl InspectionRepository for Qf3Client {
    fn head_page(
        &self,
        filter: &HeadFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<HeadRecord>> {
        self.fetch_page(HEAD_LIST_PATH, &self.head_list_payload(filter, page, page_size))
    }

    fn line_page(
        &self,
        mfg_inspection_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<LineRecord>> {
        self.fetch_page(
            LINE_LIST_PATH,
            &self.line_list_payload(mfg_inspection_id, page, page_size),
        )
    }

    fn job_order_page(
        &self,
        filter: &JobOrderFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<JobOrderRecord>> {
        self.fetch_page(
            JOB_ORDER_LIST_PATH,
            &self.job_order_payload(filter, page, page_size),
        )
    }

    fn item_page(
        &self,
        filter: &ItemFilter,
        page: u32,
        page_size: u32,
    ) -> Result<ListPage<ItemRecord>> {
        self.fetch_page(ITEM_LIST_PATH, &self.item_list_payload(filter, page, page_size))
    }
}
