pub use wtw_core::{quality, ranking, repositories};

pub mod entities {
    pub use wtw_core::entities::*;
    #[cfg(test)]
    pub use wtw_entities::builders::*;
}

pub mod usecases {
    pub use wtw_core::usecases::*;
}

pub mod prelude {
    pub use wtw_application::error::{AppError, BError};

    pub use super::{entities::*, repositories::*};
}
