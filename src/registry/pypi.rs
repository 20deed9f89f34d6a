//! PyPI JSON API adapter
//!
//! Fetches the latest published version from PyPI.
//! API endpoint: https://pypi.org/pypi/{package}/json

use crate::domain::Version;
use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionResolver};
use async_trait::async_trait;
use serde::Deserialize;

/// PyPI base URL
const PYPI_BASE_URL: &str = "https://pypi.org";

/// PyPI adapter
pub struct PyPIAdapter {
    client: HttpClient,
    base_url: String,
}

/// PyPI package metadata response
#[derive(Debug, Deserialize)]
struct PyPIResponse {
    info: PackageInfo,
}

/// The `info` object of the response
#[derive(Debug, Deserialize)]
struct PackageInfo {
    /// Latest non-yanked release
    version: Option<String>,
}

impl PyPIAdapter {
    /// Create a new PyPI adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_BASE_URL)
    }

    /// Create an adapter against a PyPI-compatible mirror
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/pypi/{}/json", self.base_url, package)
    }

    fn latest_from_response(
        &self,
        package: &str,
        response: PyPIResponse,
    ) -> Result<Version, RegistryError> {
        let raw = response.info.version.ok_or_else(|| {
            RegistryError::invalid_response(package, self.registry_name(), "missing info.version")
        })?;

        Version::parse(&raw)
            .map_err(|e| RegistryError::invalid_version(package, self.registry_name(), e))
    }
}

#[async_trait]
impl VersionResolver for PyPIAdapter {
    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn latest_version(&self, package: &str) -> Result<Version, RegistryError> {
        let url = self.build_url(package);
        let response: PyPIResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        self.latest_from_response(package, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::test_server::serve_once;
    use std::time::Duration;

    fn adapter() -> PyPIAdapter {
        PyPIAdapter::new(HttpClient::new().unwrap())
    }

    fn decode(body: &str) -> PyPIResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_pypi_adapter_registry_name() {
        assert_eq!(adapter().registry_name(), "PyPI");
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            adapter().build_url("requests"),
            "https://pypi.org/pypi/requests/json"
        );
    }

    #[test]
    fn test_build_url_with_dashes() {
        assert_eq!(
            adapter().build_url("flask-restful"),
            "https://pypi.org/pypi/flask-restful/json"
        );
    }

    #[test]
    fn test_build_url_custom_base_trailing_slash() {
        let adapter =
            PyPIAdapter::with_base_url(HttpClient::new().unwrap(), "http://mirror.local/");
        assert_eq!(
            adapter.build_url("numpy"),
            "http://mirror.local/pypi/numpy/json"
        );
    }

    #[test]
    fn test_latest_from_response() {
        let body = r#"{
            "info": {"name": "requests", "version": "2.32.3"},
            "releases": {"2.32.3": []}
        }"#;
        let version = adapter()
            .latest_from_response("requests", decode(body))
            .unwrap();
        assert_eq!(version.to_string(), "2.32.3");
        assert_eq!(version.next_major(), 3);
    }

    #[test]
    fn test_latest_from_response_missing_version() {
        let body = r#"{"info": {"name": "requests"}}"#;
        let err = adapter()
            .latest_from_response("requests", decode(body))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidResponse { .. }));
        assert!(err.to_string().contains("missing info.version"));
    }

    #[test]
    fn test_latest_from_response_null_version() {
        let body = r#"{"info": {"version": null}}"#;
        let err = adapter()
            .latest_from_response("requests", decode(body))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidResponse { .. }));
    }

    #[test]
    fn test_latest_from_response_unparseable_version() {
        let body = r#"{"info": {"version": "not-a-version"}}"#;
        let err = adapter()
            .latest_from_response("requests", decode(body))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidVersion { .. }));
    }

    #[test]
    fn test_response_without_info_fails_to_decode() {
        let result: Result<PyPIResponse, _> = serde_json::from_str(r#"{"releases": {}}"#);
        assert!(result.is_err());
    }

    fn local_adapter(base_url: &str) -> PyPIAdapter {
        let client = HttpClient::with_config(Duration::from_secs(5), "test-agent/1.0").unwrap();
        PyPIAdapter::with_base_url(client, base_url)
    }

    #[tokio::test]
    async fn test_latest_version_from_local_index() {
        let server = serve_once("200 OK", r#"{"info":{"version":"2.0.1"}}"#).await;
        let adapter = local_adapter(&server.base_url);

        let version = adapter.latest_version("requests").await.unwrap();

        assert_eq!(version.to_string(), "2.0.1");
        assert_eq!(version.next_major(), 3);
        let head = server.request.await.unwrap();
        assert!(head.starts_with("GET /pypi/requests/json HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_latest_version_unknown_package() {
        let server = serve_once("404 Not Found", "").await;
        let adapter = local_adapter(&server.base_url);

        let err = adapter.latest_version("no-such-pkg").await.unwrap_err();

        assert!(matches!(
            err,
            RegistryError::PackageNotFound { ref package, .. } if package == "no-such-pkg"
        ));
    }

    #[tokio::test]
    async fn test_latest_version_missing_field_from_local_index() {
        let server = serve_once("200 OK", r#"{"info":{"name":"requests"}}"#).await;
        let adapter = local_adapter(&server.base_url);

        let err = adapter.latest_version("requests").await.unwrap_err();

        assert!(matches!(err, RegistryError::InvalidResponse { .. }));
    }
}
