// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use wtw_core::{
    db::Db,
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod alert;
mod comment;
mod source;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_water_source_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::water_source::dsl;
    schema::water_source::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::debug!("Failed to resolve water source id '{id}': {e}");
            e
        })
        .map_err(from_diesel_err)
}

fn load_map_point(lat: f64, lon: f64) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lon)
        .ok_or_else(|| anyhow!("Invalid position: {lat},{lon}").into())
}

fn load_quality_label(label: &str) -> Result<QualityLabel> {
    label
        .parse()
        .map_err(|_| anyhow!("Invalid quality label: {label}").into())
}

impl<'a> Db for DbReadWrite<'a> {}
impl<'a> Db for DbConnection<'a> {}
impl<'a> Db for DbReadOnly<'a> {}
