//! Proximity ranking of geotagged records.

use crate::entities::*;

pub trait Geotagged {
    fn pos(&self) -> MapPoint;
}

impl Geotagged for WaterSource {
    fn pos(&self) -> MapPoint {
        self.pos
    }
}

impl Geotagged for Alert {
    fn pos(&self) -> MapPoint {
        self.pos
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance: Distance,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Ranking<T> {
    /// The position of the observer is unknown
    Unavailable,
    /// Ascending by distance
    Ranked(Vec<Ranked<T>>),
}

impl<T> Ranking<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ranked(_))
    }

    pub fn into_items(self) -> Option<Vec<Ranked<T>>> {
        match self {
            Self::Unavailable => None,
            Self::Ranked(items) => Some(items),
        }
    }
}

/// Sort the records by their distance to the observer and
/// keep the nearest `limit` ones.
///
/// Records with equal distance keep their original order.
pub fn rank_by_distance<T, I>(observer: Option<MapPoint>, items: I, limit: usize) -> Ranking<T>
where
    T: Geotagged,
    I: IntoIterator<Item = T>,
{
    let Some(observer) = observer else {
        return Ranking::Unavailable;
    };
    let mut ranked: Vec<_> = items
        .into_iter()
        .map(|item| {
            let distance = MapPoint::distance(observer, item.pos());
            Ranked { item, distance }
        })
        .collect();
    // Vec::sort_by is stable
    ranked.sort_by(|a, b| a.distance.to_meters().total_cmp(&b.distance.to_meters()));
    ranked.truncate(limit);
    Ranking::Ranked(ranked)
}
