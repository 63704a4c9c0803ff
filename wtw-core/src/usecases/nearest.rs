use super::{parse_position, prelude::*};
use crate::ranking::{rank_by_distance, Ranking};

/// The optional position of the observer.
///
/// Without both coordinates no ranking is available.
fn observer_position(lat: Option<f64>, lng: Option<f64>) -> Result<Option<MapPoint>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => parse_position(lat, lng).map(Some),
        _ => Ok(None),
    }
}

fn check_limit(limit: usize) -> Result<usize> {
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    Ok(limit)
}

pub fn nearest_water_sources<R: WaterSourceRepo>(
    repo: &R,
    lat: Option<f64>,
    lng: Option<f64>,
    limit: usize,
) -> Result<Ranking<WaterSource>> {
    let limit = check_limit(limit)?;
    let Some(observer) = observer_position(lat, lng)? else {
        return Ok(Ranking::Unavailable);
    };
    let sources = repo.all_water_sources()?;
    Ok(rank_by_distance(Some(observer), sources, limit))
}

pub fn nearest_alerts<R: AlertRepo>(
    repo: &R,
    lat: Option<f64>,
    lng: Option<f64>,
    limit: usize,
) -> Result<Ranking<Alert>> {
    let limit = check_limit(limit)?;
    let Some(observer) = observer_position(lat, lng)? else {
        return Ok(Ranking::Unavailable);
    };
    let alerts = repo.all_alerts()?;
    Ok(rank_by_distance(Some(observer), alerts, limit))
}
