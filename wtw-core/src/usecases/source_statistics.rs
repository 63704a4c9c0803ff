use super::prelude::*;
use strum::IntoEnumIterator as _;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelCount {
    pub label: QualityLabel,
    pub count: usize,
    /// 0 to 100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceStatistics {
    pub total: usize,
    /// One entry per quality label
    pub labels: Vec<LabelCount>,
    /// Mean position of all sources
    pub center: Option<MapPoint>,
}

pub fn source_statistics<R: WaterSourceRepo>(repo: &R) -> Result<SourceStatistics> {
    let sources = repo.all_water_sources()?;
    let total = sources.len();
    let labels = QualityLabel::iter()
        .map(|label| {
            let count = sources
                .iter()
                .filter(|s| s.display_label() == label)
                .count();
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            };
            LabelCount {
                label,
                count,
                percentage,
            }
        })
        .collect();
    let center = (total > 0)
        .then(|| {
            let (lat_sum, lng_sum) = sources.iter().fold((0.0, 0.0), |(lat, lng), s| {
                (lat + s.pos.lat(), lng + s.pos.lng())
            });
            MapPoint::try_from_lat_lng_deg(lat_sum / total as f64, lng_sum / total as f64)
        })
        .flatten();
    Ok(SourceStatistics {
        total,
        labels,
        center,
    })
}
