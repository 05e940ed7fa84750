//! Detection result contract
//!
//! These are the types exchanged between the detection endpoint and the
//! detection page. The JSON shape is fixed by the page script:
//!
//! ```json
//! {
//!   "originalImage": "data:image/png;base64,...",
//!   "detectedImage": "/static/images/mock_pcb_detected.jpg",
//!   "defects": [
//!     { "type": "Short Circuit", "confidence": 0.91,
//!       "location": { "x": 250, "y": 300, "width": 50, "height": 10 } }
//!   ],
//!   "processingTime": 1.27
//! }
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Pixel-space rectangle around a defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A single detected defect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defect {
    /// Defect category, e.g. "Missing Component"
    #[serde(rename = "type")]
    pub defect_type: String,
    /// Detector confidence in `[0, 1]`
    pub confidence: f64,
    pub location: BoundingBox,
}

impl Defect {
    /// Create a defect, rejecting confidences outside `[0, 1]`
    pub fn new(
        defect_type: impl Into<String>,
        confidence: f64,
        location: BoundingBox,
    ) -> Result<Self, SharedError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SharedError::validation(
                "confidence",
                format!("{} is outside [0, 1]", confidence),
            ));
        }
        Ok(Self {
            defect_type: defect_type.into(),
            confidence,
            location,
        })
    }
}

/// Result returned by the detection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Reference to the uploaded image (URL or `data:` URL)
    pub original_image: String,
    /// Reference to the annotated image
    pub detected_image: String,
    pub defects: Vec<Defect>,
    /// Processing time in seconds
    pub processing_time: f64,
}

/// An image received from the upload form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Accept an upload only if it is a non-empty `image/*` payload
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, SharedError> {
        let content_type = content_type
            .ok_or_else(|| SharedError::upload("Missing content type for image"))?;
        if !content_type.starts_with("image/") {
            return Err(SharedError::upload(format!(
                "Expected an image file, got {}",
                content_type
            )));
        }
        if bytes.is_empty() {
            return Err(SharedError::upload("Uploaded image is empty"));
        }
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// The upload as a `data:` URL suitable for an `<img src>`
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
    }
}
