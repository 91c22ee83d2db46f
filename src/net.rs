// src/net.rs
// Transport seam for both external endpoints. The pipelines never talk to
// reqwest directly; tests substitute a scripted Transport instead.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use thiserror::Error;

const USER_AGENT: &str = concat!("mdl_scrape/", env!("CARGO_PKG_VERSION"));

/// The minimal view of an HTTP response the pipelines need: status code,
/// Location header (for the redirect probe) and body text.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

/// Network-level failure: DNS, refused connection, timeout, TLS. Distinct
/// from a response carrying a non-200 status, which is not an error here.
#[derive(Clone, Debug, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}

pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Production transport. Redirects are never followed: the identity probe
/// reads the target off the Location header instead.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = resp.text()?;
        Ok(HttpResponse { status, location, body })
    }
}
