//! HTTP client for the Industrias SP API.

mod options;

use std::sync::Arc;
use std::time::Duration;

use industrias_core::auth::CredentialProvider;
use industrias_core::error::{classify_status, format_http_error, ErrorKind};
use industrias_core::request::{
    join_url, merge_headers, FormPart, HeaderList, Method, MultipartForm, RequestBody,
};
use industrias_core::retry::RetryPolicy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::session::{RedirectHandler, SessionGuard};

pub use options::RequestOptions;

/// Header carrying the per-call request identifier.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client for the Industrias SP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    policy: RetryPolicy,
    guard: SessionGuard,
}

impl ApiClient {
    /// Create a client from configuration and the injected seams.
    pub fn new(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialProvider>,
        redirect: Arc<dyn RedirectHandler>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("industrias-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            policy: config.retry_policy(),
            guard: SessionGuard::new(credentials, redirect, config.login_path.clone()),
        })
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn session(&self) -> &SessionGuard {
        &self.guard
    }

    /// Perform a call and parse the JSON response.
    ///
    /// Transport failures, timeouts and 5xx responses are retried with
    /// linear backoff until the policy's attempt budget is spent. A 401
    /// tears the session down and is never retried; other non-2xx statuses
    /// fail immediately.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = join_url(&self.base_url, path);
        let token = self.guard.credentials().token().await?;
        let headers = merge_headers(&options.headers, token.as_deref(), &options.body);
        let policy = if options.retry {
            self.policy
        } else {
            RetryPolicy::no_retry(self.policy.timeout)
        };
        let request_id = Uuid::new_v4();

        let mut attempt = 0;
        loop {
            debug!(
                %request_id,
                method = %options.method,
                url = %url,
                attempt = attempt + 1,
                "Sending request"
            );

            let failure = match self
                .attempt(&url, &options, &headers, request_id, policy.timeout)
                .await
            {
                Ok(value) => return Ok(value),
                Err(e) => e,
            };

            match failure.kind() {
                Some(ErrorKind::Auth) => {
                    if let Err(e) = self.guard.expire_session().await {
                        error!(%request_id, error = %e, "Failed to clear credentials");
                    }
                    return Err(ClientError::SessionExpired);
                }
                Some(kind) if policy.should_retry(kind, attempt) => {
                    if kind == ErrorKind::Server && !options.method.is_idempotent() {
                        warn!(
                            %request_id,
                            method = %options.method,
                            url = %url,
                            "Retrying non-idempotent request after server error"
                        );
                    }
                    let delay = policy.backoff_delay(attempt);
                    warn!(
                        %request_id,
                        url = %url,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %failure,
                        "Transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Some(kind) if kind.is_retryable() => {
                    error!(
                        %request_id,
                        url = %url,
                        attempts = attempt + 1,
                        error = %failure,
                        "Request failed after retries"
                    );
                    return Err(failure);
                }
                _ => {
                    debug!(%request_id, url = %url, error = %failure, "Request failed");
                    return Err(failure);
                }
            }
        }
    }

    /// Single attempt: send, classify, parse.
    async fn attempt<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
        headers: &HeaderList,
        request_id: Uuid,
        timeout: Duration,
    ) -> Result<T> {
        let builder = self.build_request(url, options, headers, request_id, timeout)?;
        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(url, timeout, e))?;
        self.handle_response(url, timeout, response).await
    }

    fn build_request(
        &self,
        url: &str,
        options: &RequestOptions,
        headers: &HeaderList,
        request_id: Uuid,
        timeout: Duration,
    ) -> Result<reqwest::RequestBuilder> {
        let mut builder = self
            .client
            .request(to_reqwest_method(options.method), url)
            .timeout(timeout)
            .header(REQUEST_ID_HEADER, request_id.to_string());

        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }

        let builder = match &options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(value)?),
            RequestBody::Text(text) => builder.body(text.clone()),
            RequestBody::Multipart(form) => builder.multipart(to_reqwest_form(form)?),
        };

        Ok(builder)
    }

    /// Handle a response according to its status class.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Duration,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status().as_u16();
        match classify_status(status) {
            None => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| transport_error(url, timeout, e))?;
                parse_json(&bytes)
            }
            Some(ErrorKind::Auth) => Err(ClientError::SessionExpired),
            Some(kind) => {
                let body = response.text().await.unwrap_or_default();
                let message = format_http_error(status, url, &body);
                Err(match kind {
                    ErrorKind::Server => ClientError::Server { status, message },
                    _ => ClientError::Client { status, message },
                })
            }
        }
    }

    /// Check for a token before dispatching; redirect to login without one.
    pub async fn protected<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.guard.require_token().await?;
        self.request(path, options).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::get()).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(path, RequestOptions::post().json(body)?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(path, RequestOptions::put().json(body)?).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(path, RequestOptions::patch().json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::delete()).await
    }

    /// POST a multipart form, e.g. a product image upload.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: MultipartForm) -> Result<T> {
        self.request(path, RequestOptions::post().multipart(form)).await
    }
}

/// Parse a success body; an empty body reads as JSON `null`.
fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

fn transport_error(url: &str, timeout: Duration, error: reqwest::Error) -> ClientError {
    if error.is_builder() {
        return ClientError::InvalidInput(error.to_string());
    }

    let message = if error.is_timeout() {
        format!("timed out after {}ms", timeout.as_millis())
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };

    ClientError::Network {
        url: url.to_string(),
        message,
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Rebuild a reqwest form; reqwest forms are single-use.
fn to_reqwest_form(form: &MultipartForm) -> Result<reqwest::multipart::Form> {
    let mut out = reqwest::multipart::Form::new();
    for part in form.parts() {
        out = match part {
            FormPart::Text { name, value } => out.text(name.clone(), value.clone()),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => {
                let mut file =
                    reqwest::multipart::Part::bytes(bytes.clone()).file_name(file_name.clone());
                if let Some(mime) = mime {
                    file = file
                        .mime_str(mime)
                        .map_err(|e| ClientError::InvalidInput(e.to_string()))?;
                }
                out.part(name.clone(), file)
            }
        };
    }
    Ok(out)
}
