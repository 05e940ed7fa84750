//! Mock Detection Service
//!
//! `DefectDetector` is the seam a real inspection engine would plug into.
//! The only implementation, `MockDetector`, waits for a configured delay and
//! returns two fixed defects with randomized confidences.
//!
//! ```text
//! detection/
//! ├── mod.rs      - DefectDetector and MockDetector
//! └── handlers.rs - POST /api/detect
//! ```

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

use crate::shared::config::DetectionConfig;
use crate::shared::detection::{BoundingBox, Defect, DetectionResult, ImageUpload};
use crate::shared::SharedError;

pub mod handlers;

pub use handlers::detect;

/// Confidence range for mock defects
const CONFIDENCE_RANGE: std::ops::Range<f64> = 0.70..0.99;

/// Reported processing time range in seconds
const PROCESSING_TIME_RANGE: std::ops::Range<f64> = 0.5..2.5;

/// Inspect an uploaded PCB image
#[async_trait]
pub trait DefectDetector: Send + Sync {
    async fn detect(&self, upload: &ImageUpload) -> Result<DetectionResult, SharedError>;
}

/// Canned detector returning randomized mock results
#[derive(Debug, Clone)]
pub struct MockDetector {
    delay: Duration,
    detected_image: String,
}

impl MockDetector {
    pub fn new(delay: Duration, detected_image: impl Into<String>) -> Self {
        Self {
            delay,
            detected_image: detected_image.into(),
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms), config.detected_image.clone())
    }

    /// Build a result from `rng` without waiting
    pub fn mock_result<R: Rng>(
        &self,
        upload: &ImageUpload,
        rng: &mut R,
    ) -> Result<DetectionResult, SharedError> {
        let defects = vec![
            Defect::new(
                "Missing Component",
                rng.gen_range(CONFIDENCE_RANGE),
                BoundingBox {
                    x: 100,
                    y: 150,
                    width: 30,
                    height: 20,
                },
            )?,
            Defect::new(
                "Short Circuit",
                rng.gen_range(CONFIDENCE_RANGE),
                BoundingBox {
                    x: 250,
                    y: 300,
                    width: 50,
                    height: 10,
                },
            )?,
        ];

        Ok(DetectionResult {
            original_image: upload.data_url(),
            detected_image: self.detected_image.clone(),
            defects,
            processing_time: rng.gen_range(PROCESSING_TIME_RANGE),
        })
    }
}

#[async_trait]
impl DefectDetector for MockDetector {
    async fn detect(&self, upload: &ImageUpload) -> Result<DetectionResult, SharedError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let result = self.mock_result(upload, &mut rand::thread_rng())?;
        tracing::debug!(
            defects = result.defects.len(),
            bytes = upload.bytes.len(),
            "Mock detection finished"
        );
        Ok(result)
    }
}
