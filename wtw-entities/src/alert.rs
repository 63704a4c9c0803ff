use crate::{geo::*, id::*, time::*};

/// A hazard notice published by an administrator.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id         : Id,
    pub created_at : Timestamp,
    pub created_by : String,
    pub title      : String,
    pub message    : String,
    pub pos        : MapPoint,
}
