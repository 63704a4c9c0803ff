#[macro_use]
extern crate log;

mod add_comment;
mod cast_vote;
mod create_alert;
mod create_water_source;
mod set_admin_override;

pub mod prelude {
    pub use super::{
        add_comment::*, cast_vote::*, create_alert::*, create_water_source::*,
        set_admin_override::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use wtw_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use wtw_db_sqlite::Connections;
}
