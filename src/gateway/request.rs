//! Request and response values passed through the gateway.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};

/// Description of one backend call, independent of any connection.
///
/// A request is rebuilt from this value on every attempt, so a replay after
/// a refresh sends exactly what the caller asked for.
///
/// # Example
/// ```
/// use shadewalk::gateway::ApiRequest;
///
/// let request = ApiRequest::post("/api/favorites")
///     .json(&serde_json::json!({ "segment_id": 3, "road_name": "Neungdong-ro" }))
///     .unwrap();
/// assert_eq!(request.path(), "/api/favorites");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    recover_on_expiry: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            recover_on_expiry: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Append the fields of a flat struct as query parameters.
    pub fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self> {
        let value = serde_json::to_value(params)?;
        let serde_json::Value::Object(fields) = value else {
            return Err(ApiError::InvalidArgument(
                "query parameters must serialize to an object".to_string(),
            ));
        };
        for (key, value) in fields {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => self.query.push((key, s)),
                serde_json::Value::Number(_) | serde_json::Value::Bool(_) => {
                    self.query.push((key, value.to_string()))
                }
                _ => {
                    return Err(ApiError::InvalidArgument(format!(
                        "query parameter {key} must be a scalar"
                    )))
                }
            }
        }
        Ok(self)
    }

    /// Opt out of expiry recovery.
    ///
    /// Used for calls that establish credentials (login, signup): a 401 there
    /// means bad input, not an expired session.
    pub fn without_recovery(mut self) -> Self {
        self.recover_on_expiry = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn recovers_on_expiry(&self) -> bool {
        self.recover_on_expiry
    }
}

/// A request together with its expiry-retry mark.
///
/// A logical request is replayed at most once after a refresh.
#[derive(Debug, Clone)]
pub struct RetryableRequest {
    pub request: ApiRequest,
    pub already_retried: bool,
}

impl RetryableRequest {
    pub fn new(request: ApiRequest) -> Self {
        Self {
            request,
            already_retried: false,
        }
    }

    /// Claim the single retry. Returns `false` if it was already used.
    pub fn mark_retried(&mut self) -> bool {
        if self.already_retried {
            return false;
        }
        self.already_retried = true;
        true
    }
}

/// Backend response, returned verbatim.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Like [`ApiResponse::json`], but an empty body decodes to `T::default()`.
    pub fn json_or_default<T: DeserializeOwned + Default>(&self) -> Result<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }
        self.json()
    }

    /// Turn a non-2xx response into an upstream error.
    pub(crate) fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_response(self.status, &self.text()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Bounds {
        min_lat: f64,
        max_lat: f64,
        zoom_level: u8,
        label: Option<String>,
    }

    #[test]
    fn query_flattens_scalars_and_skips_nulls() {
        // serde_json maps are key-ordered.
        let request = ApiRequest::get("/api/roads/nearby")
            .query(&Bounds {
                min_lat: 37.5,
                max_lat: 37.6,
                zoom_level: 16,
                label: None,
            })
            .unwrap();
        assert_eq!(
            request.query_pairs(),
            &[
                ("max_lat".to_string(), "37.6".to_string()),
                ("min_lat".to_string(), "37.5".to_string()),
                ("zoom_level".to_string(), "16".to_string()),
            ]
        );
    }

    #[test]
    fn query_rejects_non_objects() {
        let err = ApiRequest::get("/x").query(&[1, 2]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn retry_mark_is_claimed_once() {
        let mut request = RetryableRequest::new(ApiRequest::get("/api/favorites"));
        assert!(request.mark_retried());
        assert!(!request.mark_retried());
        assert!(request.already_retried);
    }

    #[test]
    fn empty_body_decodes_to_default() {
        let response = ApiResponse::new(StatusCode::NO_CONTENT, HeaderMap::new(), Vec::new());
        let decoded: Vec<u32> = response.json_or_default().unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn error_for_status_keeps_success_verbatim() {
        let response = ApiResponse::new(StatusCode::CREATED, HeaderMap::new(), b"{}".to_vec());
        let response = response.error_for_status().unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.body(), b"{}");
    }
}
