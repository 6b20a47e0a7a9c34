//! Request CLI commands.

use std::path::Path;

use clap::{Parser, ValueEnum};
use industrias_core::request::{Method, MultipartForm};

use crate::client::RequestOptions;
use crate::error::{ClientError, Result};

/// CLI method (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<CliMethod> for Method {
    fn from(m: CliMethod) -> Self {
        match m {
            CliMethod::Get => Method::Get,
            CliMethod::Post => Method::Post,
            CliMethod::Put => Method::Put,
            CliMethod::Patch => Method::Patch,
            CliMethod::Delete => Method::Delete,
        }
    }
}

/// Send a JSON request.
#[derive(Debug, Parser)]
pub struct RequestCommand {
    /// HTTP method.
    #[arg(value_enum)]
    pub method: CliMethod,
    /// API path, e.g. `/products` or `orders/12`.
    pub path: String,
    /// JSON body.
    #[arg(long)]
    pub data: Option<String>,
    /// Extra header as `Name: value`.
    #[arg(long = "header", short = 'H')]
    pub headers: Vec<String>,
    /// Make a single attempt.
    #[arg(long)]
    pub no_retry: bool,
}

/// Upload a multipart form with POST.
#[derive(Debug, Parser)]
pub struct UploadCommand {
    /// API path, e.g. `/products/7/image`.
    pub path: String,
    /// Text field as `name=value`.
    #[arg(long = "field")]
    pub fields: Vec<String>,
    /// File field as `name=path`.
    #[arg(long = "file")]
    pub files: Vec<String>,
}

impl RequestCommand {
    /// Request options described by the flags.
    pub fn options(&self) -> Result<RequestOptions> {
        let mut options = RequestOptions::new(self.method.into());

        if let Some(data) = &self.data {
            let body: serde_json::Value = serde_json::from_str(data)?;
            options = options.json(&body)?;
        }

        for raw in &self.headers {
            let (name, value) = parse_header(raw)
                .ok_or_else(|| ClientError::InvalidInput(format!("invalid header: {}", raw)))?;
            options = options.header(name, value);
        }

        if self.no_retry {
            options = options.without_retry();
        }

        Ok(options)
    }
}

impl UploadCommand {
    /// Multipart form built from the fields, reading each file from disk.
    pub async fn form(&self) -> Result<MultipartForm> {
        let mut form = MultipartForm::new();

        for raw in &self.fields {
            let (name, value) = parse_pair(raw)
                .ok_or_else(|| ClientError::InvalidInput(format!("invalid field: {}", raw)))?;
            form = form.text(name, value);
        }

        for raw in &self.files {
            let (name, path) = parse_pair(raw)
                .ok_or_else(|| ClientError::InvalidInput(format!("invalid file: {}", raw)))?;
            let path = Path::new(path);
            let bytes = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string());
            form = form.file(name, file_name, None, bytes);
        }

        Ok(form)
    }
}

/// Split `name=value`.
pub fn parse_pair(raw: &str) -> Option<(&str, &str)> {
    raw.split_once('=')
        .filter(|(name, _)| !name.trim().is_empty())
        .map(|(name, value)| (name.trim(), value))
}

/// Split `Name: value`.
pub fn parse_header(raw: &str) -> Option<(&str, &str)> {
    raw.split_once(':')
        .filter(|(name, _)| !name.trim().is_empty())
        .map(|(name, value)| (name.trim(), value.trim()))
}
