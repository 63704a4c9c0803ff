use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{geo::*, id::*, quality::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SourceType {
    Well,
    Spring,
    River,
    Lake,
    Pond,
    Other,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSource {
    pub id             : Id,
    pub created_at     : Timestamp,
    pub created_by     : String,
    pub name           : String,
    pub pos            : MapPoint,
    pub source_type    : SourceType,
    // None if no photo has been supplied
    pub classification : Option<Classification>,
    pub notes          : String,
    pub photo          : Option<String>,
    pub admin_override : Option<QualityLabel>,
}

impl WaterSource {
    /// The label shown to users: the override of an administrator
    /// takes precedence over the automatic classification.
    pub fn display_label(&self) -> QualityLabel {
        self.admin_override
            .or_else(|| self.classification.map(|c| c.label))
            .unwrap_or(QualityLabel::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn display_label_without_classification() {
        let source = WaterSource::build().finish();
        assert_eq!(QualityLabel::Unknown, source.display_label());
    }

    #[test]
    fn display_label_from_classification() {
        let source = WaterSource::build()
            .classification(QualityLabel::Muddy, 0.8)
            .finish();
        assert_eq!(QualityLabel::Muddy, source.display_label());
    }

    #[test]
    fn override_takes_precedence() {
        let source = WaterSource::build()
            .classification(QualityLabel::Clean, 0.9)
            .admin_override(QualityLabel::Contaminated)
            .finish();
        assert_eq!(QualityLabel::Contaminated, source.display_label());
        let source = WaterSource::build()
            .admin_override(QualityLabel::Clean)
            .finish();
        assert_eq!(QualityLabel::Clean, source.display_label());
    }

    #[test]
    fn parse_source_types() {
        assert_eq!(Ok(SourceType::Well), "well".parse());
        assert_eq!(Ok(SourceType::Spring), "Spring".parse());
        assert!("tank".parse::<SourceType>().is_err());
    }
}
