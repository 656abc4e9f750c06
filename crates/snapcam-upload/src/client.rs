use crate::UploadError;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

/// Response to an upload request: status code plus body text. No schema is
/// assumed for the body beyond being printable.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub status: u16,
    pub body: String,
}

/// Upload collaborator seam. The pipeline talks to this trait so tests can
/// substitute a mock transport.
pub trait UploadClient {
    /// POST `bytes` to `url` as a single multipart field `file` =
    /// (`filename`, bytes, `image/jpeg`). One attempt, no retry.
    fn post_file(
        &self,
        url: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, UploadError>;
}

/// reqwest-backed upload client.
pub struct HttpUploadClient {
    client: Client,
}

impl HttpUploadClient {
    /// Build a client with reqwest's defaults; the timeout is whatever the
    /// client enforces, nothing is overridden here.
    pub fn new() -> Result<Self, UploadError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl UploadClient for HttpUploadClient {
    fn post_file(
        &self,
        url: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, UploadError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("image/jpeg")?;
        let form = Form::new().part("file", part);

        log::debug!("POST {url} ({filename})");
        let response = self.client.post(url).multipart(form).send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(UploadResponse { status, body })
    }
}
