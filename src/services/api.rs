use crate::models::{error::AppError, series::QueryData};
use crate::services::retry::retry_rate_limited;

// CONSTANTS
const FALLBACK_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SERIES_PATH: &str = "data/series.json";

// API CONFIGURATION
/// Where a graph's series is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    series_path: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Full URL of the series endpoint.
    pub fn series_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.series_path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    series_path: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the base URL. Defaults to the page's origin.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the path of the series resource below the base URL.
    pub fn series_path(mut self, path: impl Into<String>) -> Self {
        self.series_path = Some(path.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(page_origin),
            series_path: self
                .series_path
                .unwrap_or_else(|| DEFAULT_SERIES_PATH.to_string()),
        }
    }
}

// Only reached in the browser; tests always pass an explicit base URL.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
}

// SERIES CLIENT
/// HTTP client for a series endpoint.
pub struct SeriesClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SeriesClient {
    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the series, retrying while rate limited.
    pub async fn fetch_series(&self) -> Result<QueryData, AppError> {
        let url = self.config.series_url();
        let url = url.as_str();
        retry_rate_limited(|| self.fetch(url)).await
    }

    /// Executes a single fetch attempt.
    async fn fetch(&self, url: &str) -> Result<QueryData, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(error_for_status(status, &body));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))?;

        parse_series(&text)
    }
}

/// Parses a `{"result": [...]}` payload.
pub fn parse_series(body: &str) -> Result<QueryData, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Failed to parse series: {e}")))
}

/// Converts a reqwest error into an appropriate AppError.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

/// Creates an error based on HTTP status code.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        429 => AppError::RateLimited,
        404 => AppError::NotFound(format!("Series not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches a series using the given configuration.
pub async fn fetch_series(config: ApiConfig) -> Result<QueryData, AppError> {
    SeriesClient::with_config(config)?.fetch_series().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn local_config() -> ApiConfig {
        ApiConfig::builder()
            .base_url("http://localhost:8080/")
            .build()
    }

    #[test]
    fn test_default_series_path() {
        assert_eq!(
            local_config().series_url(),
            "http://localhost:8080/data/series.json"
        );
    }

    #[test]
    fn test_custom_series_path() {
        let config = ApiConfig::builder()
            .base_url("https://metrics.example.com")
            .series_path("/api/v1/requests")
            .build();
        assert_eq!(
            config.series_url(),
            "https://metrics.example.com/api/v1/requests"
        );
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        ));
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, "missing"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_GATEWAY, "upstream"),
            AppError::ApiError(msg) if msg.contains("Server error")
        ));
    }

    #[test]
    fn test_parse_series() {
        let body = r#"{"result": [
            {"timestamp": "2025-10-04T00:00:00Z", "value": 12.5},
            {"timestamp": "2025-10-05T00:00:00Z", "value": 3}
        ]}"#;

        let data = parse_series(body).unwrap();
        assert_eq!(data.result.len(), 2);
        assert_eq!(data.result[1].value, 3.0);
    }

    #[test]
    fn test_parse_malformed_series() {
        let err = parse_series("{\"result\": 7}").unwrap_err();
        assert!(matches!(err, AppError::DataError(_)));
    }
}
