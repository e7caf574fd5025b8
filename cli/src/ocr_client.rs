//! HTTP client for the OCR service.

use std::path::Path;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

/// Default OCR endpoint.
pub const DEFAULT_API_URL: &str = "https://alefba.roshan-ai.ir/api/read_document/";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub type ClientResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Uploads PDF files to the OCR service one at a time.
#[derive(Debug, Clone)]
pub struct OcrClient {
    http: Client,
    api_url: String,
    token: String,
}

impl OcrClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> ClientResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            token: token.into(),
        })
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Upload `path` and return the extracted text.
    ///
    /// A non-success status or an unparseable body is an error; an empty
    /// string means the service found no text.
    pub async fn extract(&self, path: &Path) -> ClientResult<String> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = Form::new().part("document", part);

        let response = self
            .http
            .post(&self.api_url)
            .header(AUTHORIZATION, self.auth_header())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("OCR service returned {}", status).into());
        }

        let body = response.text().await?;
        Ok(ocrpdf::parse_response(&body)?)
    }

    /// Probe the endpoint with the configured token.
    pub async fn check(&self) -> ClientResult<StatusCode> {
        let response = self
            .http
            .get(&self.api_url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;
        Ok(response.status())
    }
}
