use strum::{AsRefStr, Display, EnumString};

use crate::id::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoteKind {
    Up,
    Down,
}

/// At most one vote exists per source and voter.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub source_id : Id,
    pub voter     : String,
    pub kind      : VoteKind,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub up: u64,
    pub down: u64,
}

impl VoteTally {
    pub fn score(self) -> i64 {
        self.up as i64 - self.down as i64
    }
}

impl<'a> FromIterator<&'a Vote> for VoteTally {
    fn from_iter<I: IntoIterator<Item = &'a Vote>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut tally, vote| {
                match vote.kind {
                    VoteKind::Up => tally.up += 1,
                    VoteKind::Down => tally.down += 1,
                }
                tally
            })
    }
}
