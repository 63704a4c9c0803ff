// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait WaterSourceRepo {
    fn create_water_source(&self, source: WaterSource) -> Result<()>;

    // Including the photo
    fn get_water_source(&self, id: &str) -> Result<WaterSource>;

    // In insertion order, without photos
    fn all_water_sources(&self) -> Result<Vec<WaterSource>>;
    fn count_water_sources(&self) -> Result<usize>;

    // The classification stays untouched
    fn set_admin_override(&self, id: &str, label: Option<QualityLabel>) -> Result<()>;
}

pub trait VoteRepo {
    /// Store the vote and replace any previous vote of the
    /// same voter for the same source.
    ///
    /// Returns the kind of the replaced vote.
    fn replace_vote(&self, vote: Vote) -> Result<Option<VoteKind>>;

    fn load_votes_of_source(&self, source_id: &str) -> Result<Vec<Vote>>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    // In insertion order
    fn load_comments_of_source(&self, source_id: &str) -> Result<Vec<Comment>>;
}

pub trait AlertRepo {
    fn create_alert(&self, alert: Alert) -> Result<()>;

    // In insertion order
    fn all_alerts(&self) -> Result<Vec<Alert>>;
}
