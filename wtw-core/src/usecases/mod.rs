mod add_comment;
mod cast_vote;
mod classify;
mod create_alert;
mod create_new_source;
mod error;
mod load_sources;
mod nearest;
mod set_admin_override;
mod source_statistics;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_comment::*, cast_vote::*, classify::*, create_alert::*, create_new_source::*,
    error::Error, load_sources::*, nearest::*, set_admin_override::*, source_statistics::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
    #[cfg(test)]
    pub use crate::repositories::Error as RepoError;
}

use self::prelude::*;

pub fn get_water_source<R: WaterSourceRepo>(repo: &R, id: &str) -> Result<WaterSource> {
    Ok(repo.get_water_source(id)?)
}

fn parse_position(lat: f64, lng: f64) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)
}
