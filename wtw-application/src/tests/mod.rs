pub mod prelude {

    pub use wtw_core::{
        entities::*,
        quality::QualityClassifier,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use image::{ImageOutputFormat, Rgb, RgbImage};
    use std::io::Cursor;

    pub fn new_well() -> usecases::NewWaterSource {
        usecases::NewWaterSource {
            name: "Well A".into(),
            lat: 40.0,
            lng: -74.0,
            source_type: "well".into(),
            ..Default::default()
        }
    }

    pub fn blue_water_photo() -> String {
        let img = RgbImage::from_pixel(4, 4, Rgb([40, 120, 220]));
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageOutputFormat::Png).unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(png.into_inner()))
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub classifier: QualityClassifier,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            wtw_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                classifier: QualityClassifier::default(),
            }
        }

        pub fn create_water_source(&self, new_source: usecases::NewWaterSource) -> String {
            flows::create_water_source(&self.db_connections, &self.classifier, new_source)
                .unwrap()
                .id
                .into()
        }

        pub fn try_get_water_source(&self, id: &str) -> Option<WaterSource> {
            match self.db_connections.shared().unwrap().get_water_source(id) {
                Ok(source) => Some(source),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn count_water_sources(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_water_sources()
                .unwrap()
        }
    }
}
