use crate::repositories::*;

pub trait Db: WaterSourceRepo + VoteRepo + CommentRepository + AlertRepo {}
