//! Spot API HTTP transport for Ocean AWS
//!
//! Thin reqwest client: bearer token authentication, optional account
//! scoping, and decoding of the `{"request": ..., "response": ...}` wrapper
//! the Spot API puts around every payload.

use crate::api::OceanAwsApi;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use spotctl_cloud::payload::aws::{Cluster, LaunchSpec};

pub const DEFAULT_BASE_URL: &str = "https://api.spotinst.io";

const CLUSTER_PATH: &str = "/ocean/aws/k8s/cluster";
const LAUNCH_SPEC_PATH: &str = "/ocean/aws/k8s/launchSpec";

/// Connection settings for the Spot API
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub token: String,
    pub account: Option<String>,
    pub user_agent: String,
}

impl HttpConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            account: None,
            user_agent: format!("spotctl-cloud-aws/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Ocean AWS client over HTTPS
pub struct HttpOceanAws {
    client: reqwest::Client,
    config: HttpConfig,
}

impl HttpOceanAws {
    pub fn new(config: HttpConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Resource URL under the base URL; `id` is pushed as one escaped segment
    fn url(&self, path: &str, id: Option<&str>) -> Result<Url> {
        let base = &self.config.base_url;
        let mut url =
            Url::parse(base).map_err(|e| ApiError::InvalidBaseUrl(format!("{base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(base.clone()))?
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()))
            .extend(id);

        Ok(url)
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        id: Option<&str>,
        body: Option<&B>,
    ) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, id)?;
        let path = url.path().to_string();
        tracing::debug!("Spot API request: {} {}", method, path);

        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.config.token)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent);

        if let Some(account) = &self.config.account {
            request = request.query(&[("accountId", account)]);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        decode_response(method.as_str(), &path, status.as_u16(), &text)
    }

    async fn call_one<B, T>(
        &self,
        method: Method,
        path: &str,
        id: Option<&str>,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let items = self.call(method.clone(), path, id, body).await?;
        items.into_iter().next().ok_or_else(|| {
            let target = match id {
                Some(id) => format!("{path}/{id}"),
                None => path.to_string(),
            };
            ApiError::EmptyResponse(format!("{method} {target}"))
        })
    }
}

/// Decode a Spot API body, turning non-2xx statuses into [`ApiError::Response`]
pub(crate) fn decode_response<T: DeserializeOwned>(
    method: &str,
    path: &str,
    status: u16,
    body: &str,
) -> Result<Vec<T>> {
    if !(200..300).contains(&status) {
        let first = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| envelope.response.errors.into_iter().next());

        let (code, message) = match first {
            Some(e) => (e.code, e.message),
            None => (String::new(), body.trim().to_string()),
        };

        return Err(ApiError::Response {
            method: method.to_string(),
            path: path.to_string(),
            status,
            code,
            message,
        });
    }

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.response.items)
}

#[async_trait]
impl OceanAwsApi for HttpOceanAws {
    async fn list_clusters(&self) -> Result<Vec<Cluster>> {
        self.call::<(), _>(Method::GET, CLUSTER_PATH, None, None)
            .await
    }

    async fn read_cluster(&self, cluster_id: &str) -> Result<Cluster> {
        self.call_one::<(), _>(Method::GET, CLUSTER_PATH, Some(cluster_id), None)
            .await
    }

    async fn create_cluster(&self, cluster: &Cluster) -> Result<Cluster> {
        let body = ClusterRequest { cluster };
        self.call_one(Method::POST, CLUSTER_PATH, None, Some(&body))
            .await
    }

    async fn update_cluster(&self, cluster_id: &str, cluster: &Cluster) -> Result<Cluster> {
        // The ID travels in the path only.
        let mut cluster = cluster.clone();
        cluster.id = None;

        let body = ClusterRequest { cluster: &cluster };
        self.call_one(Method::PUT, CLUSTER_PATH, Some(cluster_id), Some(&body))
            .await
    }

    async fn delete_cluster(&self, cluster_id: &str) -> Result<()> {
        self.call::<(), serde_json::Value>(Method::DELETE, CLUSTER_PATH, Some(cluster_id), None)
            .await?;
        Ok(())
    }

    async fn list_launch_specs(&self) -> Result<Vec<LaunchSpec>> {
        self.call::<(), _>(Method::GET, LAUNCH_SPEC_PATH, None, None)
            .await
    }

    async fn read_launch_spec(&self, spec_id: &str) -> Result<LaunchSpec> {
        self.call_one::<(), _>(Method::GET, LAUNCH_SPEC_PATH, Some(spec_id), None)
            .await
    }

    async fn create_launch_spec(&self, spec: &LaunchSpec) -> Result<LaunchSpec> {
        let body = LaunchSpecRequest { launch_spec: spec };
        self.call_one(Method::POST, LAUNCH_SPEC_PATH, None, Some(&body))
            .await
    }

    async fn update_launch_spec(&self, spec_id: &str, spec: &LaunchSpec) -> Result<LaunchSpec> {
        let mut spec = spec.clone();
        spec.id = None;

        let body = LaunchSpecRequest { launch_spec: &spec };
        self.call_one(Method::PUT, LAUNCH_SPEC_PATH, Some(spec_id), Some(&body))
            .await
    }

    async fn delete_launch_spec(&self, spec_id: &str) -> Result<()> {
        self.call::<(), serde_json::Value>(Method::DELETE, LAUNCH_SPEC_PATH, Some(spec_id), None)
            .await?;
        Ok(())
    }
}

// ============ API Types ============

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    response: ApiResponse<T>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(default)]
    errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorItem {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct ClusterRequest<'a> {
    cluster: &'a Cluster,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LaunchSpecRequest<'a> {
    launch_spec: &'a LaunchSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_items() {
        let body = r#"{
            "request": { "id": "req-1", "method": "GET" },
            "response": {
                "status": { "code": 200, "message": "OK" },
                "kind": "spotinst:ocean:aws:k8s",
                "items": [ { "id": "o-1", "name": "a" }, { "id": "o-2", "name": "b" } ],
                "count": 2
            }
        }"#;

        let clusters: Vec<Cluster> = decode_response("GET", CLUSTER_PATH, 200, body).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn test_decode_error_response() {
        let body = r#"{
            "request": { "id": "req-2" },
            "response": {
                "status": { "code": 400, "message": "Bad Request" },
                "errors": [ { "code": "VALIDATION_ERROR", "message": "region is read-only" } ]
            }
        }"#;

        let err = decode_response::<Cluster>("PUT", "/ocean/aws/k8s/cluster/o-1", 400, body)
            .unwrap_err();
        match err {
            ApiError::Response {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "VALIDATION_ERROR");
                assert_eq!(message, "region is read-only");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_error_without_json_body() {
        let err = decode_response::<Cluster>("GET", CLUSTER_PATH, 502, "Bad Gateway\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "GET /ocean/aws/k8s/cluster: 502 : Bad Gateway"
        );
    }

    #[test]
    fn test_decode_empty_success_body() {
        let items: Vec<serde_json::Value> =
            decode_response("DELETE", "/ocean/aws/k8s/cluster/o-1", 200, "").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_request_wrappers() {
        let spec = LaunchSpec {
            name: Some("gpu".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(LaunchSpecRequest { launch_spec: &spec }).unwrap();
        assert_eq!(body["launchSpec"]["name"], "gpu");

        let cluster = Cluster::default();
        let body = serde_json::to_value(ClusterRequest { cluster: &cluster }).unwrap();
        assert_eq!(body, serde_json::json!({ "cluster": {} }));
    }

    #[test]
    fn test_url_join() {
        let api = HttpOceanAws::new(HttpConfig::new("t").with_base_url("http://localhost:8080/"));
        assert_eq!(
            api.url(CLUSTER_PATH, None).unwrap().as_str(),
            "http://localhost:8080/ocean/aws/k8s/cluster"
        );
        assert_eq!(
            api.url(LAUNCH_SPEC_PATH, Some("ols-1")).unwrap().as_str(),
            "http://localhost:8080/ocean/aws/k8s/launchSpec/ols-1"
        );
        assert_eq!(api.config().base_url, "http://localhost:8080/");
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let api = HttpOceanAws::new(HttpConfig::new("t").with_base_url("https://proxy.local/spot"));
        assert_eq!(
            api.url(CLUSTER_PATH, Some("o-1")).unwrap().path(),
            "/spot/ocean/aws/k8s/cluster/o-1"
        );
    }

    #[test]
    fn test_url_escapes_id() {
        let api = HttpOceanAws::new(HttpConfig::new("t"));
        let url = api.url(CLUSTER_PATH, Some("o-1/x?accountId=act-2#y")).unwrap();
        assert_eq!(url.path(), "/ocean/aws/k8s/cluster/o-1%2Fx%3FaccountId=act-2%23y");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let api = HttpOceanAws::new(HttpConfig::new("t").with_base_url("not a url"));
        assert!(matches!(
            api.url(CLUSTER_PATH, None),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
