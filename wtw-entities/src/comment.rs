use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub source_id  : Id,
    pub created_at : Timestamp,
    pub created_by : String,
    pub text       : String,
    pub is_admin   : bool,
}
