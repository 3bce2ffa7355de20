// Capability seams for the detection and OCR collaborators. The models are
// loaded once at process startup and shared behind these traits; the
// reconciler itself never touches them.

use crate::models::ValidationOutcome;
use crate::reconcile::CnicReconciler;
use crate::utils::CnicError;
use log::info;

/// A rectangular sub-image the detector believes contains text.
#[derive(Debug, Clone)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub confidence: f32,
    /// Cropped sub-image bytes handed to the recognizer.
    pub crop: Vec<u8>,
}

/// Locates text-bearing regions in a card photo, top to bottom.
pub trait RegionDetector {
    fn detect_regions(&self, image: &[u8]) -> Result<Vec<Region>, CnicError>;
}

/// Recognizes the text inside one detected region.
pub trait TextRecognizer {
    fn recognize_text(&self, region: &Region) -> Result<String, CnicError>;
}

/// Glues detection and recognition to the reconciler: image bytes in,
/// reconciliation outcome out.
pub struct ExtractionPipeline<D, R> {
    detector: D,
    recognizer: R,
    reconciler: CnicReconciler,
}

impl<D: RegionDetector, R: TextRecognizer> ExtractionPipeline<D, R> {
    pub fn new(detector: D, recognizer: R, reconciler: CnicReconciler) -> Self {
        Self {
            detector,
            recognizer,
            reconciler,
        }
    }

    /// Runs the full pipeline on one uploaded image.
    ///
    /// Zero detected regions is not an error: the reconciler sees an empty
    /// list and reports missing fields through its normal outcome.
    pub fn extract(&self, image: &[u8]) -> Result<ValidationOutcome, CnicError> {
        let regions = self.detector.detect_regions(image)?;
        info!("detected {} text regions", regions.len());

        let mut texts = Vec::with_capacity(regions.len());
        for region in &regions {
            texts.push(self.recognizer.recognize_text(region)?);
        }

        Ok(self.reconciler.reconcile(&texts))
    }
}
