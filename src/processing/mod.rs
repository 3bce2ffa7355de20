pub mod capture;

pub use capture::{ExtractionPipeline, Region, RegionDetector, TextRecognizer};
