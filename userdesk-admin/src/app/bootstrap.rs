use std::sync::Arc;
use std::time::Duration;

use iced::Task;
use log::{info, warn};

use crate::common::messages::DomainMessage;
use crate::domains::navigation::{self, Route};
use crate::infra::api_client::{
    ApiClient, ApiResult, DEFAULT_TIMEOUT, normalize_base_url,
};
use crate::infra::services::{UserAdminApiAdapter, UserAdminService};
use crate::infra::testing::StubUserAdminService;
use crate::state::State;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

const API_URL_VAR: &str = "USERDESK_API_URL";
const TIMEOUT_VAR: &str = "USERDESK_HTTP_TIMEOUT_SECS";
const TEST_STUBS_VAR: &str = "USERDESK_USE_TEST_STUBS";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Arc<str>,
    pub timeout: Duration,
    pub use_test_stubs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl AppConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Arc::from(normalize_base_url(api_url.into())),
            timeout: DEFAULT_TIMEOUT,
            use_test_stubs: false,
        }
    }

    /// Read the configuration from the process environment. Unusable values
    /// are logged and replaced by their defaults.
    pub fn from_environment() -> Self {
        let api_url = match std::env::var(API_URL_VAR) {
            Ok(raw) => parse_api_url(raw).unwrap_or_else(|| {
                warn!("{} is not a valid URL, using {}", API_URL_VAR, DEFAULT_API_URL);
                DEFAULT_API_URL.to_string()
            }),
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        let timeout = match std::env::var(TIMEOUT_VAR) {
            Ok(raw) => parse_timeout(&raw).unwrap_or_else(|| {
                warn!(
                    "{}='{}' is not a positive number of seconds, using {}s",
                    TIMEOUT_VAR,
                    raw,
                    DEFAULT_TIMEOUT.as_secs()
                );
                DEFAULT_TIMEOUT
            }),
            Err(_) => DEFAULT_TIMEOUT,
        };

        let use_test_stubs = std::env::var(TEST_STUBS_VAR)
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )
            })
            .unwrap_or(false);

        Self {
            api_url: Arc::from(api_url),
            timeout,
            use_test_stubs,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }
}

/// Normalize `raw` and accept it only if it parses as an absolute URL.
fn parse_api_url(raw: String) -> Option<String> {
    let normalized = normalize_base_url(raw);
    url::Url::parse(&normalized)
        .ok()
        .filter(|url| url.has_host())
        .map(|_| normalized)
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

/// Build the service the domains talk to: the HTTP adapter, or the in-memory
/// stub when test stubs are enabled.
pub fn build_service(config: &AppConfig) -> ApiResult<Arc<dyn UserAdminService>> {
    if config.use_test_stubs {
        info!("Using in-memory user service");
        return Ok(Arc::new(StubUserAdminService::with_sample_users()));
    }

    let client = ApiClient::with_timeout(config.api_url(), config.timeout)?;
    info!("Using user API at {}", client.base_url());
    Ok(Arc::new(UserAdminApiAdapter::new(Arc::new(client))))
}

/// Initial state plus the task that mounts the list screen.
pub fn boot(service: Arc<dyn UserAdminService>) -> (State, Task<DomainMessage>) {
    let mut state = State::new(service);
    let task = navigation::update::enter(&mut state, Route::Users);
    (state, task)
}
