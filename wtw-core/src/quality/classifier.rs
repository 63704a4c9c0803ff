use super::{decode_image, decode_photo, DecodeError, ImageFeatures};
use crate::entities::*;

/// Tunable decision boundaries of the classification rules.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub clean_max_turbidity         : f64,
    pub clean_max_brown_ratio       : f64,
    pub clean_min_brightness        : f64,
    pub muddy_min_brown_ratio       : f64,
    pub muddy_min_turbidity         : f64,
    pub contaminated_min_turbidity  : f64,
    pub contaminated_max_brightness : f64,
    pub contaminated_min_channel_gap: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            clean_max_turbidity: 30.0,
            clean_max_brown_ratio: 0.10,
            clean_min_brightness: 100.0,
            muddy_min_brown_ratio: 0.15,
            muddy_min_turbidity: 50.0,
            contaminated_min_turbidity: 40.0,
            contaminated_max_brightness: 50.0,
            contaminated_min_channel_gap: 50.0,
        }
    }
}

/// Confidence reported for each outcome.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confidences {
    pub clean        : Confidence,
    pub muddy        : Confidence,
    pub contaminated : Confidence,
    /// No rule matched
    pub uncertain    : Confidence,
    /// The photo could not be decoded
    pub undecodable  : Confidence,
}

impl Default for Confidences {
    fn default() -> Self {
        Self {
            clean: Confidence::new(0.90),
            muddy: Confidence::new(0.80),
            contaminated: Confidence::new(0.75),
            uncertain: Confidence::new(0.50),
            undecodable: Confidence::new(0.30),
        }
    }
}

struct Rule {
    label: QualityLabel,
    confidence: fn(&Confidences) -> Confidence,
    matches: fn(&Thresholds, &ImageFeatures) -> bool,
}

fn looks_clear(t: &Thresholds, f: &ImageFeatures) -> bool {
    f.blue_mean > f.green_mean
        && f.blue_mean > f.red_mean
        && f.turbidity < t.clean_max_turbidity
        && f.brown_ratio < t.clean_max_brown_ratio
        && f.brightness > t.clean_min_brightness
}

fn looks_muddy(t: &Thresholds, f: &ImageFeatures) -> bool {
    f.brown_ratio > t.muddy_min_brown_ratio
        || f.turbidity > t.muddy_min_turbidity
        || (f.red_mean > f.blue_mean && f.green_mean > f.blue_mean)
}

fn looks_contaminated(t: &Thresholds, f: &ImageFeatures) -> bool {
    f.turbidity > t.contaminated_min_turbidity
        || f.brightness < t.contaminated_max_brightness
        || (f.red_mean - f.green_mean).abs() > t.contaminated_min_channel_gap
}

// Evaluated in order, the first match wins.
const RULES: [Rule; 3] = [
    Rule {
        label: QualityLabel::Clean,
        confidence: |c| c.clean,
        matches: looks_clear,
    },
    Rule {
        label: QualityLabel::Muddy,
        confidence: |c| c.muddy,
        matches: looks_muddy,
    },
    Rule {
        label: QualityLabel::Contaminated,
        confidence: |c| c.contaminated,
        matches: looks_contaminated,
    },
];

/// Heuristic classifier of visual water quality.
///
/// Stateless: the same features (or photo) always
/// yield the same classification.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct QualityClassifier {
    pub thresholds: Thresholds,
    pub confidences: Confidences,
}

impl QualityClassifier {
    pub const fn new(thresholds: Thresholds, confidences: Confidences) -> Self {
        Self {
            thresholds,
            confidences,
        }
    }

    pub fn classify_features(&self, features: &ImageFeatures) -> Classification {
        RULES
            .iter()
            .find(|rule| (rule.matches)(&self.thresholds, features))
            .map(|rule| Classification {
                label: rule.label,
                confidence: (rule.confidence)(&self.confidences),
            })
            // Unresolved photos are reported as muddy rather than unknown
            .unwrap_or(Classification {
                label: QualityLabel::Muddy,
                confidence: self.confidences.uncertain,
            })
    }

    /// Decode and analyze a photo payload.
    pub fn analyze_photo(
        &self,
        payload: &str,
    ) -> Result<(ImageFeatures, Classification), DecodeError> {
        let img = decode_photo(payload)?;
        let features = ImageFeatures::extract(&img);
        Ok((features, self.classify_features(&features)))
    }

    /// Analyze the raw bytes of an image file.
    pub fn analyze_image(
        &self,
        bytes: &[u8],
    ) -> Result<(ImageFeatures, Classification), DecodeError> {
        let img = decode_image(bytes)?;
        let features = ImageFeatures::extract(&img);
        Ok((features, self.classify_features(&features)))
    }

    /// Classify a photo payload.
    ///
    /// Undecodable photos never fail, they are
    /// classified as unknown with low confidence.
    pub fn classify_photo(&self, payload: &str) -> Classification {
        match self.analyze_photo(payload) {
            Ok((_, classification)) => classification,
            Err(err) => {
                log::warn!("Failed to analyze photo: {err}");
                self.undecodable()
            }
        }
    }

    pub fn undecodable(&self) -> Classification {
        Classification {
            label: QualityLabel::Unknown,
            confidence: self.confidences.undecodable,
        }
    }
}
