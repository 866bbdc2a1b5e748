use crate::errors::AppResult;
use crate::version;
use reqwest::blocking::{Body, Client};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::time::Duration;

/// Bound on the whole round trip: connect, send and receive.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Request body. Files go out with a known length, everything else is
/// streamed without a length.
pub enum Payload {
    File(File),
    Stream(Box<dyn Read + Send>),
}

impl Payload {
    pub fn is_sized(&self) -> bool {
        matches!(self, Payload::File(_))
    }
}

impl Read for Payload {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Payload::File(file) => file.read(buf),
            Payload::Stream(reader) => reader.read(buf),
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::File(file) => f.debug_tuple("File").field(file).finish(),
            Payload::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// A single coverage POST, ready to be sent.
#[derive(Debug)]
pub struct UploadRequest {
    pub url: String,
    pub user_agent: String,
    pub content_type: &'static str,
    pub body: Payload,
}

impl UploadRequest {
    pub fn json(url: &str, body: Payload) -> Self {
        Self {
            url: url.to_string(),
            user_agent: version::user_agent(),
            content_type: JSON_CONTENT_TYPE,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    pub status: u16,
    pub body: String,
}

/// Sends an [`UploadRequest`] somewhere and reports what came back.
///
/// Implementations return transport failures as errors; any HTTP status,
/// including non-2xx, is a successful round trip.
pub trait Transport {
    fn post(&self, request: UploadRequest) -> AppResult<UploadResponse>;
}

/// Blocking HTTP transport.
pub struct HttpTransport {
    client: Client,
    /// The value the client was built with.
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> AppResult<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn build_client(timeout: Duration) -> AppResult<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

impl Transport for HttpTransport {
    fn post(&self, request: UploadRequest) -> AppResult<UploadResponse> {
        log::debug!(
            "POST {} (User-Agent: {}, Content-Type: {}, sized body: {})",
            request.url,
            request.user_agent,
            request.content_type,
            request.body.is_sized()
        );

        let body = match request.body {
            Payload::File(file) => Body::from(file),
            Payload::Stream(reader) => Body::new(reader),
        };

        let response = self
            .client
            .post(&request.url)
            .header(USER_AGENT, request.user_agent.as_str())
            .header(CONTENT_TYPE, request.content_type)
            .body(body)
            .send()?;

        let status = response.status().as_u16();

        // The status code is what matters; a body we cannot read is reported as empty.
        let body = response.text().unwrap_or_else(|e| {
            log::warn!(
                "Failed to read response body from {} (non-critical): {}",
                request.url,
                e
            );
            String::new()
        });

        log::debug!(
            "Response from {} (first 300 chars): {}",
            request.url,
            body.chars().take(300).collect::<String>()
        );

        Ok(UploadResponse { status, body })
    }
}
