// directory-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-process calls
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client
///
/// Calls the Router through `tower::ServiceExt::oneshot`, so the full
/// middleware stack runs without a socket.
///
/// ```ignore
/// let router = build_app(&state).with_state(state);
/// let client = OneshotHttpClient::new(router);
/// let employees: Vec<Employee> = client.get("/api/employees").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state applied
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    fn build_request_with_body<B: serde::Serialize>(
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        Self::build_request(method, path, Body::from(bytes))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(ClientError::from_status(status, &body));
        }

        serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = Self::build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::build_request_with_body(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::build_request_with_body(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = Self::build_request(Method::DELETE, path, Body::empty())?;
        self.execute(request).await
    }
}
