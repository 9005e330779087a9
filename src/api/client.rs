// ABOUTME: HTTP client for the TubeShare channel search and authentication endpoints
// Carries session credentials (cookie store plus optional configured cookie) on every request

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

use super::ApiError;
use crate::config::AppConfig;
use crate::models::Channel;

const FETCH_CHANNELS_PATH: &str = "fetchChannels";
const AUTH_CHECK_PATH: &str = "authcheck";
const LOGOUT_PATH: &str = "api/auth/logout";

#[derive(Debug, Clone)]
pub struct TubeShareClient {
    base_url: Url,
    http: reqwest::Client,
}

impl TubeShareClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session_cookie: Option<&str>,
    ) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: unsupported scheme {}",
                base_url,
                base_url.scheme()
            )));
        }
        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie {
            let value =
                HeaderValue::from_str(cookie).map_err(|_| ApiError::InvalidSessionCookie)?;
            headers.insert(COOKIE, value);
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("tubeshare/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            config.request_timeout(),
            config.session_cookie.as_deref(),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    /// `GET /fetchChannels?q=<query>`, decoded as an ordered list of channels.
    pub async fn fetch_channels(&self, query: &str) -> Result<Vec<Channel>, ApiError> {
        let url = self.endpoint(FETCH_CHANNELS_PATH)?;
        debug!("Fetching channels for query {:?}", query);

        let response = self.http.get(url).query(&[("q", query)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Channel search returned HTTP {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let channels: Vec<Channel> = serde_json::from_slice(&body)?;
        debug!("Channel search returned {} results", channels.len());
        Ok(channels)
    }

    /// `GET /authcheck`. Only HTTP 200 counts as a live session.
    pub async fn check_auth(&self) -> Result<bool, ApiError> {
        let url = self.endpoint(AUTH_CHECK_PATH)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        info!("Auth check returned HTTP {}", status);
        Ok(status == StatusCode::OK)
    }

    /// `POST /api/auth/logout`. The response status is not inspected.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint(LOGOUT_PATH)?;
        let response = self.http.post(url).send().await?;
        debug!("Logout returned HTTP {}", response.status());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client =
            TubeShareClient::new("http://localhost:8080/tube", Duration::from_secs(1), None).unwrap();
        assert_eq!(
            client.endpoint(FETCH_CHANNELS_PATH).unwrap().as_str(),
            "http://localhost:8080/tube/fetchChannels"
        );
        assert_eq!(
            client.endpoint(LOGOUT_PATH).unwrap().as_str(),
            "http://localhost:8080/tube/api/auth/logout"
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = TubeShareClient::new("ftp://example.com", Duration::from_secs(1), None);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));

        let result = TubeShareClient::new("not a url", Duration::from_secs(1), None);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }
}
