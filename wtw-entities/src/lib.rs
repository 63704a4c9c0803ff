#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # wtw-entities
//!
//! Reusable, agnostic domain entities for Where's the Well.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod alert;
pub mod author;
pub mod comment;
pub mod geo;
pub mod id;
pub mod quality;
pub mod source;
pub mod time;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
