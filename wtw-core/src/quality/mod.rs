//! Visual water quality estimation from a single photo.

mod classifier;
mod features;
mod photo;

pub use self::{classifier::*, features::*, photo::*};

#[cfg(test)]
pub(crate) use self::photo::tests as photo_tests;
