//! HTTP upload client for the snapcam pipeline.
//!
//! One multipart POST per call: a single part named `file` carrying the JPEG
//! bytes, the filename, and the `image/jpeg` content type. No retries, no
//! authentication, default client timeout.

pub mod client;
pub mod error;

pub use client::{HttpUploadClient, UploadClient, UploadResponse};
pub use error::UploadError;
