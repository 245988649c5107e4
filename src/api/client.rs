//! HTTP client for the KKM management service
//!
//! The service is a black box behind the [`Backend`] trait: five JSON
//! endpoints covering registry sync, port scanning, device search and
//! command dispatch. Tests substitute their own implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use url::Url;

use crate::config::AppConfig;
use crate::errors::{KkmCtlError, Result};
use crate::models::{CommandResult, DeviceProfile, PortScanResponse, RegistryResponse, SearchResponse};

/// Content type the service expects on every request
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// The KKM management service API surface
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/GetServSetting` — full registry of configured devices
    async fn fetch_registry(&self) -> Result<RegistryResponse>;

    /// `PUT /api/SetServSetting` — replace/upsert one profile, returns
    /// the full updated registry
    async fn store_profile(&self, profile: &DeviceProfile) -> Result<RegistryResponse>;

    /// `GET /api/getPorts` — enumerate serial ports on the service host
    async fn scan_ports(&self) -> Result<PortScanResponse>;

    /// `GET /api/SearchKKM` — full port+baud sweep for attached registrars
    async fn search_devices(&self) -> Result<SearchResponse>;

    /// `POST /api/run/{device}/{command}?params[i]=..` — dispatch one command
    async fn run_command(
        &self,
        device_id: &str,
        command: &str,
        params: &[i64],
    ) -> Result<CommandResult>;
}

/// reqwest-backed implementation of [`Backend`]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Build a client for a service URL, validating scheme and shape
    pub fn new(server_url: &str) -> Result<Self> {
        Self::with_timeout(server_url, Duration::from_secs(AppConfig::default().request_timeout_secs))
    }

    pub fn with_timeout(server_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(server_url)
            .map_err(|e| KkmCtlError::Config(format!("invalid service URL '{}': {}", server_url, e)))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(KkmCtlError::Config(format!(
                    "unsupported URL scheme '{}', expected http or https",
                    other
                )));
            }
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| KkmCtlError::Backend(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: server_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_registry(&self) -> Result<RegistryResponse> {
        self.get_json("api/GetServSetting").await
    }

    async fn store_profile(&self, profile: &DeviceProfile) -> Result<RegistryResponse> {
        let url = self.endpoint("api/SetServSetting");
        log::debug!("PUT {} ({})", url, profile.device_id);
        let response = self
            .client
            .put(&url)
            .json(profile)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn scan_ports(&self) -> Result<PortScanResponse> {
        self.get_json("api/getPorts").await
    }

    async fn search_devices(&self) -> Result<SearchResponse> {
        self.get_json("api/SearchKKM").await
    }

    async fn run_command(
        &self,
        device_id: &str,
        command: &str,
        params: &[i64],
    ) -> Result<CommandResult> {
        let url = self.endpoint(&format!("api/run/{}/{}", device_id, command));
        let query: Vec<(String, String)> = params
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("params[{}]", i), p.to_string()))
            .collect();
        log::debug!("POST {} params {:?}", url, params);
        let response = self
            .client
            .post(&url)
            .query(&query)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
