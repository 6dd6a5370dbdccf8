use serde::{Deserialize, Serialize};

/// Multipart field name expected by `POST /upload`
pub const UPLOAD_FIELD: &str = "image";

/// Stored image returned by the upload service (`data` of the envelope)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}
