//! Authorized request execution for JSON APIs. Every remote operation is
//! described by an [`ApiRequest`] and executed through the helpers here, which
//! attach the current bearer token, enforce the fail-fast rule for
//! authenticated calls without a token, and classify failures into the
//! crate-wide error taxonomy. The token travels only in the `Authorization`
//! header, never in query strings.
//!
//! Mutating requests are never retried here; idempotent retries are a caller
//! decision.

use super::{config::AppConfig, errors::AppError};
use crate::features::auth::token;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortSignal;

/// Default request timeout (milliseconds) applied when the caller does not
/// supply its own abort signal.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Description of one remote operation, constructed per call.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<String>,
    requires_auth: bool,
    base: Option<String>,
    bearer: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            requires_auth: true,
            base: None,
            bearer: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::Put, path)
    }

    #[allow(dead_code)]
    pub fn patch(path: &str) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Marks the request as public; no token is attached or required.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Targets the identity provider (or any explicit base) instead of the
    /// resource API.
    pub fn base(mut self, base_url: &str) -> Self {
        self.base = Some(base_url.to_string());
        self
    }

    /// Overrides the session token for this call. Used during login, before a
    /// session exists.
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        self.body = Some(payload);
        Ok(self)
    }

    fn url(&self) -> String {
        let base = match &self.base {
            Some(base) => base.clone(),
            None => AppConfig::load().api_base_url,
        };
        build_url(&base, &self.path, &self.query)
    }

    /// Resolves the bearer token for this request. Authenticated requests
    /// without a token fail here, before any transport call.
    fn resolve_token(&self) -> Result<Option<String>, AppError> {
        if let Some(token) = &self.bearer {
            return Ok(Some(token.clone()));
        }
        if !self.requires_auth {
            return Ok(None);
        }
        match token::current_token() {
            Some(token) => Ok(Some(token)),
            None => Err(AppError::Auth("You must be signed in.".to_string())),
        }
    }
}

/// Raw normalized response: status plus body text.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a request and returns the raw response on 2xx.
pub async fn execute(
    request: &ApiRequest,
    signal: Option<&AbortSignal>,
) -> Result<ApiResponse, AppError> {
    let token = request.resolve_token()?;
    let response = transport_send(request, token.as_deref(), signal).await?;
    classify(response)
}

/// Executes a request and decodes the JSON body, unwrapping a `data` envelope
/// when the backend frames its payloads.
pub async fn execute_json<T: DeserializeOwned>(
    request: &ApiRequest,
    signal: Option<&AbortSignal>,
) -> Result<T, AppError> {
    let response = execute(request, signal).await?;
    decode_payload(&response.body)
}

/// Executes a request whose success response carries no body (204 and kin).
pub async fn execute_empty(
    request: &ApiRequest,
    signal: Option<&AbortSignal>,
) -> Result<(), AppError> {
    execute(request, signal).await.map(|_| ())
}

/// Builds a URL from a base, a path, and percent-encoded query pairs.
pub(crate) fn build_url(base: &str, path: &str, query: &[(String, String)]) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim();

    let mut url = if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    };

    for (index, (key, value)) in query.iter().enumerate() {
        let separator = if index == 0 { '?' } else { '&' };
        url.push(separator);
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    url
}

/// Classifies a response by status: 2xx passes through, 401/403 become auth
/// failures, everything else is a server error with a sanitized body.
fn classify(response: ApiResponse) -> Result<ApiResponse, AppError> {
    match response.status {
        200..=299 => Ok(response),
        401 | 403 => Err(AppError::Auth(sanitize_body(response.body))),
        status => Err(AppError::Server {
            status,
            message: sanitize_body(response.body),
        }),
    }
}

#[derive(serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Decodes a JSON payload, accepting both `{ "data": ... }` framing and bare
/// bodies so callers never special-case transport shapes.
pub(crate) fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(body) {
        return Ok(envelope.data);
    }
    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
async fn transport_send(
    request: &ApiRequest,
    token: Option<&str>,
    signal: Option<&AbortSignal>,
) -> Result<ApiResponse, AppError> {
    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let url = request.url();
    let mut builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };

    builder = builder.header("Accept", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    // Without a caller signal, an internal timeout aborts hung transports.
    let mut _timeout = None;
    let caller_owned = signal.is_some();
    match signal {
        Some(signal) => {
            builder = builder.abort_signal(Some(signal));
        }
        None => {
            let controller = AbortController::new()
                .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
            builder = builder.abort_signal(Some(&controller.signal()));
            let timeout_controller = controller.clone();
            _timeout = Some(Timeout::new(DEFAULT_TIMEOUT_MS, move || {
                timeout_controller.abort();
            }));
        }
    }

    let built = match &request.body {
        Some(payload) => builder
            .header("Content-Type", "application/json")
            .body(payload.clone()),
        None => builder.build(),
    }
    .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = built
        .send()
        .await
        .map_err(|err| map_transport_error(err, caller_owned))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Ok(ApiResponse { status, body })
}

/// Maps transport failures: caller-driven aborts become `Cancelled`, the
/// internal timeout abort and everything else surface as network errors.
#[cfg(target_arch = "wasm32")]
fn map_transport_error(err: gloo_net::Error, caller_owned: bool) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("abort") {
        if caller_owned {
            AppError::Cancelled
        } else {
            AppError::Network("Request timed out. Please try again.".to_string())
        }
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn transport_send(
    _request: &ApiRequest,
    _token: Option<&str>,
    _signal: Option<&AbortSignal>,
) -> Result<ApiResponse, AppError> {
    transport_probe::record_call();
    Err(AppError::Network(
        "Transport is only available in the browser.".to_string(),
    ))
}

/// Counts would-be transport calls on non-wasm builds, where no fetch API
/// exists. Tests use this to assert a request never reached the wire.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) mod transport_probe {
    use std::cell::Cell;

    thread_local! {
        static CALLS: Cell<usize> = const { Cell::new(0) };
    }

    pub fn record_call() {
        CALLS.with(|calls| calls.set(calls.get() + 1));
    }

    #[cfg(test)]
    pub fn calls() -> usize {
        CALLS.with(|calls| calls.get())
    }

    #[cfg(test)]
    pub fn reset() {
        CALLS.with(|calls| calls.set(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session;
    use futures::executor::block_on;

    #[test]
    fn build_url_joins_and_encodes() {
        assert_eq!(
            build_url("https://api.test/", "/products", &[]),
            "https://api.test/products"
        );
        assert_eq!(
            build_url(
                "https://api.test",
                "products",
                &[
                    ("search".to_string(), "blue shirt".to_string()),
                    ("page".to_string(), "2".to_string()),
                ]
            ),
            "https://api.test/products?search=blue%20shirt&page=2"
        );
        assert_eq!(build_url("", "/products", &[]), "/products");
    }

    #[test]
    fn decode_payload_accepts_wrapped_and_bare_bodies() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Item {
            name: String,
        }

        let bare: Item = decode_payload(r#"{"name":"widget"}"#).unwrap();
        assert_eq!(bare.name, "widget");

        let wrapped: Item = decode_payload(r#"{"data":{"name":"widget"}}"#).unwrap();
        assert_eq!(wrapped.name, "widget");

        let list: Vec<Item> = decode_payload(r#"{"data":[{"name":"a"},{"name":"b"}]}"#).unwrap();
        assert_eq!(list.len(), 2);

        assert!(decode_payload::<Item>("not json").is_err());
    }

    #[test]
    fn classify_maps_statuses_to_error_kinds() {
        let ok = classify(ApiResponse {
            status: 200,
            body: "{}".to_string(),
        });
        assert!(ok.is_ok());

        let auth = classify(ApiResponse {
            status: 401,
            body: "expired".to_string(),
        });
        assert_eq!(auth.unwrap_err(), AppError::Auth("expired".to_string()));

        let server = classify(ApiResponse {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(
            server.unwrap_err(),
            AppError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body("  ".to_string()), "Request failed.");
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), MAX_ERROR_CHARS);
    }

    #[test]
    fn authenticated_request_without_token_fails_before_transport() {
        session::reset_for_tests();
        transport_probe::reset();

        let request = ApiRequest::get("/products");
        let result = block_on(execute(&request, None));

        assert!(matches!(result, Err(AppError::Auth(_))));
        assert_eq!(transport_probe::calls(), 0);
    }

    #[test]
    fn public_request_reaches_transport_without_token() {
        session::reset_for_tests();
        transport_probe::reset();

        let request = ApiRequest::get("/shipping-rate/public").public();
        let result = block_on(execute(&request, None));

        // The native stub has no fetch API, but the call must get that far.
        assert!(matches!(result, Err(AppError::Network(_))));
        assert_eq!(transport_probe::calls(), 1);
    }
}
