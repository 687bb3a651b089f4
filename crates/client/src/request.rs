//! Request options and response error decoding

use credential::Credential;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use shared::{ClientError, Result, ValidationError};

/// Per-call options for `ApiClient::request`
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// Serialize `body` as the JSON request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Add a header. `Authorization` is ignored when the request is sent.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Final header set: JSON content type unless the caller overrides it, and
/// an `Authorization` header that always comes from the stored credential.
pub(crate) fn merge_headers(credential: &Credential, mut headers: HeaderMap) -> Result<HeaderMap> {
    headers.remove(AUTHORIZATION);
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    let mut auth = HeaderValue::from_str(&credential.bearer()).map_err(|_| {
        ClientError::InvalidInput("credential contains characters not allowed in an HTTP header".to_string())
    })?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    Ok(headers)
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// Map a non-success response to `RequestFailed`
///
/// The message is the body's `error` field when present, otherwise the
/// status text.
pub(crate) fn request_failure(status: StatusCode, body: &[u8]) -> ClientError {
    let status_text = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string());

    let parsed = serde_json::from_slice::<ErrorBody>(body).unwrap_or_default();
    let message = parsed.error.filter(|m| !m.is_empty()).unwrap_or(status_text);
    let errors = parsed
        .errors
        .and_then(|v| serde_json::from_value::<Vec<ValidationError>>(v).ok())
        .unwrap_or_default();

    ClientError::RequestFailed {
        status,
        message,
        errors,
    }
}
