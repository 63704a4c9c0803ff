use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Visual water quality as estimated from a photo
/// or as decided by an administrator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QualityLabel {
    Clean,
    Muddy,
    Contaminated,
    Unknown,
}

/// Confidence of a classification in the range [0, 1].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(1.0)
    }

    pub fn new(val: f64) -> Self {
        let new = Self(val);
        debug_assert!(new.is_valid());
        new
    }

    pub fn try_new(val: f64) -> Option<Self> {
        Some(Self(val)).filter(|c| c.is_valid())
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<Confidence> for f64 {
    fn from(from: Confidence) -> Self {
        from.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: QualityLabel,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn parse_labels_case_insensitive() {
        assert_eq!(Ok(QualityLabel::Clean), "clean".parse());
        assert_eq!(Ok(QualityLabel::Muddy), "Muddy".parse());
        assert_eq!(Ok(QualityLabel::Contaminated), "CONTAMINATED".parse());
        assert!("dirty".parse::<QualityLabel>().is_err());
    }

    #[test]
    fn labels_round_trip_as_lowercase_strings() {
        for label in QualityLabel::iter() {
            let s = label.to_string();
            assert_eq!(s, s.to_lowercase());
            assert_eq!(Ok(label), s.parse());
        }
    }

    #[test]
    fn confidence_range() {
        assert!(Confidence::try_new(0.0).is_some());
        assert!(Confidence::try_new(1.0).is_some());
        assert!(Confidence::try_new(-0.01).is_none());
        assert!(Confidence::try_new(1.01).is_none());
        assert!(Confidence::try_new(f64::NAN).is_none());
    }
}
