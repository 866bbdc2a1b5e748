// Uploader module - sends one coverage payload to the collection endpoint
//
// Validation, input acquisition and response handling live here; the wire
// side is behind the `Transport` trait in `http_client`.

pub mod http_client;

pub use http_client::{
    HttpTransport, Payload, Transport, UploadRequest, UploadResponse, JSON_CONTENT_TYPE,
    REQUEST_TIMEOUT,
};

use crate::config::InputSource;
use crate::errors::{AppError, AppResult};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uploader {
    input: InputSource,
    reporter_id: String,
    endpoint_url: String,
}

/// Outcome of an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub status: u16,
    pub body: String,
}

impl fmt::Display for UploadReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}\n{}", self.status, self.body)
    }
}

impl Uploader {
    pub fn new(input: InputSource, reporter_id: String, endpoint_url: String) -> Self {
        Self {
            input,
            reporter_id,
            endpoint_url,
        }
    }

    pub fn input(&self) -> &InputSource {
        &self.input
    }

    pub fn reporter_id(&self) -> &str {
        &self.reporter_id
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.reporter_id.is_empty() {
            return Err(AppError::MissingReporterId);
        }
        Ok(())
    }

    /// Upload over HTTP, reading the process's stdin when the input is `-`.
    pub fn upload(&self) -> AppResult<UploadReceipt> {
        self.validate()?;
        let transport = HttpTransport::new()?;
        self.upload_via(&transport, io::stdin())
    }

    /// Upload through `transport`, with `stdin` standing in for standard input.
    ///
    /// Nothing is opened and nothing is sent unless the reporter id is present
    /// and the input could be opened.
    pub fn upload_via<T, R>(&self, transport: &T, stdin: R) -> AppResult<UploadReceipt>
    where
        T: Transport + ?Sized,
        R: Read + Send + 'static,
    {
        self.validate()?;

        let payload = self.open_payload(stdin)?;

        log::info!("Uploading coverage from {} to {}", self.input, self.endpoint_url);
        // TODO: decide with the collection service how the reporter id should be
        // transmitted; it is only checked for presence today.
        log::debug!("Reporter id is checked locally and not attached to the request");

        let response = transport.post(UploadRequest::json(&self.endpoint_url, payload))?;

        if !(200..300).contains(&response.status) {
            log::debug!(
                "Upload to {} rejected with status {}",
                self.endpoint_url,
                response.status
            );
            return Err(AppError::upload_rejected(
                &self.endpoint_url,
                response.status,
                &response.body,
            ));
        }

        log::info!("Upload accepted with status {}", response.status);
        Ok(UploadReceipt {
            status: response.status,
            body: response.body,
        })
    }

    fn open_payload<R>(&self, stdin: R) -> AppResult<Payload>
    where
        R: Read + Send + 'static,
    {
        match &self.input {
            InputSource::Stdin => {
                log::debug!("Reading coverage payload from standard input");
                Ok(Payload::Stream(Box::new(stdin)))
            }
            InputSource::File(path) => {
                log::debug!("Opening coverage payload {}", path.display());
                let file = File::open(path)?;
                Ok(Payload::File(file))
            }
        }
    }
}
