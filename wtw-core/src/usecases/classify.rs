use super::prelude::*;
use crate::quality::{ImageFeatures, QualityClassifier};

/// Classify a photo without storing anything.
pub fn classify_photo(classifier: &QualityClassifier, photo: &str) -> Classification {
    classifier.classify_photo(photo)
}

/// Classify an encoded image and report the extracted
/// features, if it could be decoded.
pub fn classify_image_with_features(
    classifier: &QualityClassifier,
    image: &[u8],
) -> (Classification, Option<ImageFeatures>) {
    match classifier.analyze_image(image) {
        Ok((features, classification)) => (classification, Some(features)),
        Err(err) => {
            log::warn!("Failed to analyze image: {err}");
            (classifier.undecodable(), None)
        }
    }
}
