//! # wtw-core
//!
//! Business logic of Where's the Well: photo analysis,
//! proximity ranking and the use cases operating on the
//! repositories.

pub mod authorization;
pub mod db;
pub mod quality;
pub mod ranking;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use wtw_entities::{
        alert::*, author::*, comment::*, geo::*, id::*, quality::*, source::*, time::*, vote::*,
    };
}
