//! Per-request options.

use industrias_core::request::{HeaderList, Method, MultipartForm, RequestBody};
use serde::Serialize;

use crate::error::Result;

/// Method, body and headers of one API call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: RequestBody,
    pub headers: HeaderList,
    /// Whether transient failures are retried (default: true).
    pub retry: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            body: RequestBody::Empty,
            headers: HeaderList::new(),
            retry: true,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn put() -> Self {
        Self::new(Method::Put)
    }

    pub fn patch() -> Self {
        Self::new(Method::Patch)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    /// Serialize `body` as the JSON payload.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Make a single attempt, whatever the failure.
    pub fn without_retry(mut self) -> Self {
        self.retry = false;
        self
    }
}
