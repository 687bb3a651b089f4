//! ApiClient - Authenticated access to the ARMOR profile API

use credential::{Credential, CredentialStore};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use shared::{
    ClientConfig, ClientError, CreateProfileRequest, Profile, ProfileSummary, Result, Section,
    SectionData, SectionUpdate,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::request::{merge_headers, request_failure, RequestOptions};

/// Client for the ARMOR REST API
///
/// Cloning is cheap: clones share the connection pool and the credential
/// store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.credentials.has())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `config.base_url` using `credentials` for auth
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url().to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store a credential for subsequent calls
    pub fn set_credential(&self, credential: impl Into<Credential>) -> Result<()> {
        self.credentials.set(credential.into())
    }

    /// Forget the stored credential
    pub fn clear_credential(&self) -> Result<()> {
        self.credentials.clear()
    }

    pub fn has_credential(&self) -> bool {
        self.credentials.has()
    }

    /// Fail with `Unauthenticated` before any input is looked at
    fn require_credential(&self) -> Result<()> {
        if self.credentials.has() {
            Ok(())
        } else {
            Err(ClientError::Unauthenticated)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send an authenticated request to `base_url + path`
    ///
    /// Returns `Ok(None)` for 204 responses. A 401 clears the stored
    /// credential before failing with `InvalidCredential`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<T>> {
        let credential = self.credentials.get().ok_or(ClientError::Unauthenticated)?;
        let headers = merge_headers(&credential, options.headers)?;

        debug!(method = %options.method, path, "sending request");

        let mut builder = self
            .http
            .request(options.method, self.url(path))
            .headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "received response");

        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.credentials.clear() {
                warn!(error = %err, "failed to clear rejected credential");
            }
            warn!(path, "server rejected credential, stored credential cleared");
            return Err(ClientError::InvalidCredential);
        }

        if !status.is_success() {
            // An unreadable error body is treated like an unparsable one.
            let body = response.bytes().await.unwrap_or_default();
            return Err(request_failure(status, &body));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn request_body<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(path, options)
            .await?
            .ok_or_else(|| ClientError::EmptyResponse {
                path: path.to_string(),
            })
    }

    // ============== Profiles ==============

    /// `GET /profiles`
    pub async fn list_profiles(&self) -> Result<Vec<ProfileSummary>> {
        self.request_body("/profiles", RequestOptions::get()).await
    }

    /// `POST /profiles`; `description` defaults to the empty string
    pub async fn create_profile(&self, name: &str, description: Option<&str>) -> Result<Profile> {
        self.require_credential()?;
        if name.trim().is_empty() {
            return Err(ClientError::InvalidInput("profile name is required".to_string()));
        }

        let body = CreateProfileRequest {
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
        };
        let options = RequestOptions::new(Method::POST).json(&body)?;
        self.request_body("/profiles", options).await
    }

    /// `GET /profiles/{id}`
    pub async fn get_profile(&self, id: &str) -> Result<Profile> {
        self.require_credential()?;
        let path = profile_path(id)?;
        self.request_body(&path, RequestOptions::get()).await
    }

    /// `DELETE /profiles/{id}`
    pub async fn delete_profile(&self, id: &str) -> Result<()> {
        self.require_credential()?;
        let path = profile_path(id)?;
        self.request::<IgnoredAny>(&path, RequestOptions::new(Method::DELETE))
            .await?;
        Ok(())
    }

    // ============== Sections ==============

    /// `GET /profiles/{id}/{section}`
    pub async fn get_section(&self, id: &str, section: Section) -> Result<SectionData> {
        self.require_credential()?;
        let path = section_path(id, section)?;
        self.request_body(&path, RequestOptions::get()).await
    }

    /// `PUT /profiles/{id}/{section}` with `data` as the raw JSON body
    pub async fn update_section<B: Serialize + ?Sized>(
        &self,
        id: &str,
        section: Section,
        data: &B,
    ) -> Result<SectionUpdate> {
        self.require_credential()?;
        let path = section_path(id, section)?;
        let options = RequestOptions::new(Method::PUT).json(data)?;
        self.request_body(&path, options).await
    }

    // ============== Probe ==============

    /// Check whether `candidate` would be accepted by the server
    ///
    /// Does not read or write the credential store. Every failure,
    /// including transport errors, yields `false`.
    pub async fn check_password(&self, candidate: &str) -> bool {
        let result = self
            .http
            .get(self.url("/profiles"))
            .header(AUTHORIZATION, format!("Bearer {}", candidate))
            .send()
            .await;

        match result {
            Ok(response) => {
                debug!(status = response.status().as_u16(), "credential probe answered");
                response.status().is_success()
            }
            Err(err) => {
                debug!(error = %err, "credential probe failed");
                false
            }
        }
    }
}

fn profile_path(id: &str) -> Result<String> {
    if id.is_empty() || id.contains('/') {
        return Err(ClientError::InvalidInput(format!("invalid profile id '{}'", id)));
    }
    Ok(format!("/profiles/{}", id))
}

fn section_path(id: &str, section: Section) -> Result<String> {
    Ok(format!("{}/{}", profile_path(id)?, section.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use credential::MemoryCredentialStore;
    use mockito::{Matcher, Server, ServerGuard};
    use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
    use serde_json::{json, Value};

    const PASSWORD: &str = "armor";

    fn client_for(server: &ServerGuard, store: &MemoryCredentialStore) -> ApiClient {
        let config = ClientConfig::default().with_base_url(format!("{}/api", server.url()));
        ApiClient::new(&config, Arc::new(store.clone())).unwrap()
    }

    fn profile_body() -> Value {
        json!({
            "id": "p1",
            "name": "Acme",
            "description": "desc",
            "mission": null,
            "assets": null,
            "adversaries": null,
            "threats": null,
            "risks": null,
            "mitigations": null,
            "completeness": {"overall": 0, "sections": []},
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        })
    }

    // ============== Construction Tests ==============

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("localhost:8080");
        let result = ApiClient::new(&config, Arc::new(MemoryCredentialStore::new()));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_base_url("http://host/api/");
        let client = ApiClient::new(&config, Arc::new(MemoryCredentialStore::new())).unwrap();
        assert_eq!(client.base_url(), "http://host/api");
        assert_eq!(client.url("/profiles"), "http://host/api/profiles");
    }

    #[test]
    fn test_debug_hides_credential() {
        let store = MemoryCredentialStore::with_credential("top-secret");
        let client = ApiClient::new(&ClientConfig::default(), Arc::new(store)).unwrap();

        let debug = format!("{:?}", client);
        assert!(debug.contains("authenticated: true"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn test_credential_helpers_use_store() {
        let store = MemoryCredentialStore::new();
        let client = ApiClient::new(&ClientConfig::default(), Arc::new(store.clone())).unwrap();

        client.set_credential("abc").unwrap();
        assert!(client.has_credential());
        assert!(store.has());

        client.clear_credential().unwrap();
        assert!(!client.has_credential());
    }

    // ============== Authentication Tests ==============

    #[tokio::test]
    async fn test_no_credential_makes_no_network_call() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::new());

        assert!(matches!(client.list_profiles().await, Err(ClientError::Unauthenticated)));
        assert!(matches!(client.get_profile("p1").await, Err(ClientError::Unauthenticated)));
        assert!(matches!(client.delete_profile("p1").await, Err(ClientError::Unauthenticated)));
        assert!(matches!(
            client.create_profile("Acme", None).await,
            Err(ClientError::Unauthenticated)
        ));
        assert!(matches!(
            client.get_section("p1", Section::Assets).await,
            Err(ClientError::Unauthenticated)
        ));
        assert!(matches!(
            client.update_section("p1", Section::Assets, &json!({})).await,
            Err(ClientError::Unauthenticated)
        ));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_credential_reported_before_bad_input() {
        let client = ApiClient::new(&ClientConfig::default(), Arc::new(MemoryCredentialStore::new()))
            .unwrap();

        assert!(matches!(
            client.create_profile("", None).await,
            Err(ClientError::Unauthenticated)
        ));
        assert!(matches!(client.get_profile("").await, Err(ClientError::Unauthenticated)));
        assert!(matches!(
            client.delete_profile("a/b").await,
            Err(ClientError::Unauthenticated)
        ));
        assert!(matches!(
            client.get_section("", Section::Mission).await,
            Err(ClientError::Unauthenticated)
        ));
        assert!(matches!(
            client.update_section("", Section::Mission, &json!({})).await,
            Err(ClientError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_bearer_header_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/profiles")
            .match_header("authorization", "Bearer armor")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let profiles = client.list_profiles().await.unwrap();

        assert!(profiles.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_401_clears_credential() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/profiles")
            .with_status(401)
            .with_body("Unauthorized\n")
            .expect(1)
            .create_async()
            .await;

        let store = MemoryCredentialStore::with_credential("wrong");
        let client = client_for(&server, &store);

        let err = client.list_profiles().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidCredential));
        assert!(!store.has());

        // Next call fails locally without reaching the server
        let err = client.list_profiles().await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthenticated));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_401_on_one_clone_affects_others() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/api/profiles/p1")
            .with_status(401)
            .create_async()
            .await;

        let store = MemoryCredentialStore::with_credential(PASSWORD);
        let client = client_for(&server, &store);
        let other = client.clone();

        assert!(client.delete_profile("p1").await.is_err());
        assert!(!other.has_credential());
    }

    // ============== Request Executor Tests ==============

    #[tokio::test]
    async fn test_caller_headers_merged() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/custom")
            .match_header("authorization", "Bearer armor")
            .match_header("content-type", "text/plain")
            .match_header("x-trace", "1")
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let options = RequestOptions::get()
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .header(AUTHORIZATION, HeaderValue::from_static("Bearer forged"))
            .header(HeaderName::from_static("x-trace"), HeaderValue::from_static("1"));

        let body: Option<Value> = client.request("/custom", options).await.unwrap();
        assert_eq!(body, Some(json!({"ok": true})));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_field_becomes_message() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles/missing")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "X"}"#)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let err = client.get_profile("missing").await.unwrap_err();

        assert_eq!(err.to_string(), "X");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_plain_text_error_uses_status_text() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles/missing")
            .with_status(404)
            .with_header("content-type", "text/plain; charset=utf-8")
            .with_body("Profile not found\n")
            .create_async()
            .await;

        let store = MemoryCredentialStore::with_credential(PASSWORD);
        let client = client_for(&server, &store);
        let err = client.get_profile("missing").await.unwrap_err();

        assert_eq!(err.to_string(), "Not Found");
        // Only 401 touches the store
        assert!(store.has());
    }

    #[tokio::test]
    async fn test_validation_failure_carries_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("PUT", "/api/profiles/p1/assets")
            .with_status(400)
            .with_body(
                json!({
                    "error": "Validation failed",
                    "errors": [{"path": "/assets", "message": "expected array"}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let err = client
            .update_section("p1", Section::Assets, &json!({"assets": "nope"}))
            .await
            .unwrap_err();

        match err {
            ClientError::RequestFailed {
                status,
                message,
                errors,
            } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Validation failed");
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].message, "expected array");
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_json_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        assert!(matches!(client.list_profiles().await, Err(ClientError::Json(_))));
    }

    #[tokio::test]
    async fn test_204_where_body_expected() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles/p1")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let err = client.get_profile("p1").await.unwrap_err();

        assert!(matches!(err, ClientError::EmptyResponse { ref path } if path == "/profiles/p1"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:1/api");
        let store = MemoryCredentialStore::with_credential(PASSWORD);
        let client = ApiClient::new(&config, Arc::new(store.clone())).unwrap();

        let err = client.list_profiles().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(store.has());
    }

    // ============== Profile Operation Tests ==============

    #[tokio::test]
    async fn test_create_profile() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/profiles")
            .match_body(Matcher::JsonString(
                r#"{"name":"Acme","description":"desc"}"#.to_string(),
            ))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(profile_body().to_string())
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let profile = client.create_profile("Acme", Some("desc")).await.unwrap();

        assert_eq!(profile.id, "p1");
        assert_eq!(profile.completeness.overall, 0.0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_profile_description_defaults_to_empty() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/profiles")
            .match_body(Matcher::Json(json!({"name": "Acme", "description": ""})))
            .with_status(201)
            .with_body(profile_body().to_string())
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        client.create_profile("Acme", None).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_profile_requires_name() {
        let client = ApiClient::new(
            &ClientConfig::default(),
            Arc::new(MemoryCredentialStore::with_credential(PASSWORD)),
        )
        .unwrap();

        let err = client.create_profile("  ", None).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_list_profiles_keeps_server_order() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles")
            .with_status(200)
            .with_body(
                json!([
                    {"id": "b", "name": "Beta", "description": "", "completeness": 50.0,
                     "created_at": "2024-01-02T00:00:00Z", "updated_at": "2024-01-02T00:00:00Z"},
                    {"id": "a", "name": "Alpha", "description": "", "completeness": 0,
                     "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let ids: Vec<String> = client
            .list_profiles()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_get_profile() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles/p1")
            .with_status(200)
            .with_body(profile_body().to_string())
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let profile = client.get_profile("p1").await.unwrap();

        assert_eq!(profile.name, "Acme");
        assert!(profile.section(Section::Threats).is_null());
    }

    #[tokio::test]
    async fn test_delete_profile_204() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/profiles/p1")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        assert!(client.delete_profile("p1").await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_profile_id_rejected_locally() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        assert!(matches!(client.get_profile("").await, Err(ClientError::InvalidInput(_))));
        assert!(matches!(
            client.get_section("a/b", Section::Risks).await,
            Err(ClientError::InvalidInput(_))
        ));

        mock.assert_async().await;
    }

    // ============== Section Operation Tests ==============

    #[tokio::test]
    async fn test_get_section_unmodified() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles/p1/assets")
            .with_status(200)
            .with_body(r#"{"data":{"hosts":[]}}"#)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let section = client.get_section("p1", Section::Assets).await.unwrap();

        assert_eq!(serde_json::to_value(&section).unwrap(), json!({"data": {"hosts": []}}));
    }

    #[tokio::test]
    async fn test_get_unwritten_section_is_null() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles/p1/risks")
            .with_status(200)
            .with_body(r#"{"data":null}"#)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let section = client.get_section("p1", Section::Risks).await.unwrap();
        assert!(section.data.is_null());
    }

    #[tokio::test]
    async fn test_update_section_sends_raw_body() {
        let payload = json!({"mission_statement": "Keep the lights on", "impact_areas": ["ops"]});

        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/profiles/p1/mission")
            .match_header("authorization", "Bearer armor")
            .match_body(Matcher::Json(payload.clone()))
            .with_status(200)
            .with_body(json!({"success": true, "data": payload}).to_string())
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let update = client
            .update_section("p1", Section::Mission, &payload)
            .await
            .unwrap();

        assert!(update.success);
        assert_eq!(update.data, payload);
        mock.assert_async().await;
    }

    // ============== Probe Tests ==============

    #[tokio::test]
    async fn test_check_password_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/profiles")
            .match_header("authorization", "Bearer candidate")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let store = MemoryCredentialStore::new();
        let client = client_for(&server, &store);

        assert!(client.check_password("candidate").await);
        // The probe never writes the store
        assert!(!store.has());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_password_rejected() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles")
            .with_status(401)
            .create_async()
            .await;

        let store = MemoryCredentialStore::with_credential("stored");
        let client = client_for(&server, &store);

        assert!(!client.check_password("wrong").await);
        // ...and never clears it either
        assert!(store.has());
    }

    #[tokio::test]
    async fn test_check_password_non_2xx_is_false() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/profiles")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::new());
        assert!(!client.check_password("armor").await);
    }

    #[tokio::test]
    async fn test_check_password_transport_error_is_false() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:1/api");
        let client = ApiClient::new(&config, Arc::new(MemoryCredentialStore::new())).unwrap();

        assert!(!client.check_password("armor").await);
    }

    // ============== Concurrency Tests ==============

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/api/profiles")
            .with_status(200)
            .with_body("[]")
            .expect(2)
            .create_async()
            .await;
        let get = server
            .mock("GET", "/api/profiles/p1")
            .with_status(200)
            .with_body(profile_body().to_string())
            .create_async()
            .await;

        let client = client_for(&server, &MemoryCredentialStore::with_credential(PASSWORD));
        let (a, b, c) = tokio::join!(
            client.list_profiles(),
            client.list_profiles(),
            client.get_profile("p1")
        );

        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(c.unwrap().id, "p1");
        list.assert_async().await;
        get.assert_async().await;
    }
}
