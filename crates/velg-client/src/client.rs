//! Base HTTP client for the platform API.
//!
//! [`ApiClient`] turns `(method, path, query, body)` into a request and the
//! reply into an [`ApiResponse`]. It never returns a Rust error for an
//! ordinary failure: transport problems become `NETWORK_ERROR`, non-2xx
//! replies become `HTTP_<status>` (or the server's own code), and a 2xx
//! body that does not decode becomes `INVALID_RESPONSE`.
//!
//! Whether a call carries credentials is chosen per call with [`Access`],
//! so services never branch on the session themselves.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use velg_types::{ApiError, ApiResponse};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::services::{
    BuildingsApi, ConnectionsApi, EchoesApi, LocationsApi, MembersApi, SettingsApi,
    SimulationsApi,
};
use crate::state::AppState;

/// Query string pairs.
pub type Query = [(String, String)];

/// Which credentials a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Authenticated endpoint; the bearer token is attached when present.
    #[default]
    Authenticated,
    /// Public endpoint under the public prefix, never with credentials.
    Public,
    /// Public endpoint for anonymous visitors, authenticated otherwise.
    PublicIfAnonymous,
}

impl Access {
    /// Whether the request goes to the public tree.
    pub const fn is_public(self, authenticated: bool) -> bool {
        match self {
            Self::Authenticated => false,
            Self::Public => true,
            Self::PublicIfAnonymous => !authenticated,
        }
    }
}

/// HTTP client bound to one API root and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    state: AppState,
}

impl ApiClient {
    /// Build a client for the given config and session.
    pub fn new(config: ClientConfig, state: AppState) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            config,
            state,
        })
    }

    /// The session this client reads credentials from.
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The active configuration.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Verbs
    // -----------------------------------------------------------------------

    /// Authenticated GET.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> ApiResponse<T> {
        self.request(Method::GET, path, query, None, Access::Authenticated)
            .await
    }

    /// Anonymous GET under the public prefix.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> ApiResponse<T> {
        self.request(Method::GET, path, query, None, Access::Public)
            .await
    }

    /// GET with an explicit access mode.
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        access: Access,
    ) -> ApiResponse<T> {
        self.request(Method::GET, path, query, None, access).await
    }

    /// Authenticated POST with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        let body = encode_body(body)?;
        self.request(Method::POST, path, &[], Some(body), Access::Authenticated)
            .await
    }

    /// Authenticated PUT with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        let body = encode_body(body)?;
        self.request(Method::PUT, path, &[], Some(body), Access::Authenticated)
            .await
    }

    /// Authenticated PATCH, optionally with a JSON body.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> ApiResponse<T> {
        self.request(Method::PATCH, path, &[], body, Access::Authenticated)
            .await
    }

    /// Authenticated DELETE.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(Method::DELETE, path, &[], None, Access::Authenticated)
            .await
    }

    // -----------------------------------------------------------------------
    // Resource services
    // -----------------------------------------------------------------------

    /// Simulations endpoints.
    pub const fn simulations(&self) -> SimulationsApi<'_> {
        SimulationsApi::new(self)
    }

    /// Membership endpoints.
    pub const fn members(&self) -> MembersApi<'_> {
        MembersApi::new(self)
    }

    /// Settings endpoints.
    pub const fn settings(&self) -> SettingsApi<'_> {
        SettingsApi::new(self)
    }

    /// City, zone and street endpoints.
    pub const fn locations(&self) -> LocationsApi<'_> {
        LocationsApi::new(self)
    }

    /// Cross-simulation connection endpoints.
    pub const fn connections(&self) -> ConnectionsApi<'_> {
        ConnectionsApi::new(self)
    }

    /// Event echo endpoints.
    pub const fn echoes(&self) -> EchoesApi<'_> {
        EchoesApi::new(self)
    }

    /// Building endpoints.
    pub const fn buildings(&self) -> BuildingsApi<'_> {
        BuildingsApi::new(self)
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Issue one request and normalize the reply.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<Value>,
        access: Access,
    ) -> ApiResponse<T> {
        let (authenticated, token) = self
            .state
            .read(|s| (s.is_authenticated(), s.access_token.clone()));
        let public = access.is_public(authenticated);
        let url = self.url(path, public);

        debug!(%method, path, public, "api request");

        let mut builder = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = token.filter(|_| !public) {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body.filter(|_| method != Method::GET) {
            builder = builder.json(&body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, path, error = %e, "api request failed to send");
                return Err(ApiError::network(e.to_string()));
            }
        };

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!(
                %method,
                path,
                status = status.as_u16(),
                error = %e,
                "api response body unreadable"
            );
            ApiError::network(e.to_string())
        })?;

        if !status.is_success() {
            let err = error_from_body(status, &text);
            warn!(
                %method,
                path,
                status = status.as_u16(),
                code = %err.code,
                "api request returned an error"
            );
            return Err(err);
        }

        decode_success(&text).inspect_err(|err| {
            warn!(
                %method,
                path,
                status = status.as_u16(),
                code = %err.code,
                "api response did not decode"
            );
        })
    }

    fn url(&self, path: &str, public: bool) -> String {
        if public {
            format!("{}{}{path}", self.config.base_url, self.config.public_prefix)
        } else {
            format!("{}{path}", self.config.base_url)
        }
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> ApiResponse<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::invalid_request(e.to_string()))
}

/// Parse a reply body as JSON; blank bodies are `null`.
fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(text)
    }
}

/// Build the error for a non-2xx reply.
///
/// The server's `code` wins over `HTTP_<status>`; the message is taken
/// from `message`, then `detail`, then the status reason.
fn error_from_body(status: StatusCode, text: &str) -> ApiError {
    let body = parse_body(text).unwrap_or(Value::Null);
    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
    };

    let message = field("message")
        .or_else(|| field("detail"))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_owned());
    match field("code") {
        Some(code) => ApiError::new(code, message),
        None => ApiError::from_status(status.as_u16(), message),
    }
}

/// Decode a 2xx reply.
///
/// List replies carry `meta` next to `data` and decode from the whole body
/// into [`velg_types::PaginatedResponse`]. Other replies decode from `data`
/// when the envelope has one, else from the body itself.
fn decode_success<T: DeserializeOwned>(text: &str) -> ApiResponse<T> {
    let body = parse_body(text).map_err(|e| ApiError::invalid_response(e.to_string()))?;
    let payload = match body {
        Value::Object(mut map) if map.contains_key("data") && !map.contains_key("meta") => {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(payload).map_err(|e| ApiError::invalid_response(e.to_string()))
}

#[cfg(test)]
mod tests {
    use velg_types::{ErrorKind, PaginatedResponse};

    use super::*;

    #[test]
    fn access_modes_resolve() {
        assert!(!Access::Authenticated.is_public(false));
        assert!(Access::Public.is_public(true));
        assert!(Access::PublicIfAnonymous.is_public(false));
        assert!(!Access::PublicIfAnonymous.is_public(true));
    }

    #[test]
    fn server_code_and_message_win() {
        let err = error_from_body(
            StatusCode::CONFLICT,
            r#"{"code":"SLUG_TAKEN","message":"Slug already in use"}"#,
        );
        assert_eq!(err, ApiError::new("SLUG_TAKEN", "Slug already in use"));
    }

    #[test]
    fn detail_is_used_when_message_is_missing() {
        let err = error_from_body(StatusCode::NOT_FOUND, r#"{"detail":"Simulation not found"}"#);
        assert_eq!(err.code, "HTTP_404");
        assert_eq!(err.message, "Simulation not found");
    }

    #[test]
    fn status_reason_is_the_last_resort() {
        let err = error_from_body(StatusCode::UNAUTHORIZED, "<html>nope</html>");
        assert_eq!(err.code, "HTTP_401");
        assert_eq!(err.message, "Unauthorized");
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn data_is_unwrapped() {
        let value: ApiResponse<String> = decode_success(r#"{"success":true,"data":"ok"}"#);
        assert_eq!(value, Ok(String::from("ok")));
    }

    #[test]
    fn bare_bodies_decode_directly() {
        let value: ApiResponse<Vec<u8>> = decode_success("[1,2,3]");
        assert_eq!(value, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn paginated_bodies_keep_meta() {
        let page: ApiResponse<PaginatedResponse<u8>> = decode_success(
            r#"{"success":true,"data":[2,1],"meta":{"count":2,"total":5,"limit":2,"offset":0}}"#,
        );
        assert!(page.is_ok());
        if let Ok(page) = page {
            assert_eq!(page.data, vec![2, 1]);
            assert_eq!(page.meta.total, 5);
        }
    }

    #[test]
    fn empty_body_is_unit() {
        let value: ApiResponse<()> = decode_success("");
        assert_eq!(value, Ok(()));
    }

    #[test]
    fn shape_mismatch_is_invalid_response() {
        let value: ApiResponse<u32> = decode_success(r#"{"data":"not a number"}"#);
        assert!(value.is_err_and(|e| e.code == velg_types::envelope::INVALID_RESPONSE));
    }
}
