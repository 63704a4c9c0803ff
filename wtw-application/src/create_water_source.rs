use super::*;
use wtw_core::quality::QualityClassifier;

pub fn create_water_source(
    connections: &sqlite::Connections,
    classifier: &QualityClassifier,
    new_source: usecases::NewWaterSource,
) -> Result<WaterSource> {
    // Analyze the photo before acquiring the exclusive
    // database connection, decoding images takes time.
    let storable = usecases::prepare_new_water_source(classifier, new_source)?;
    let source = connections.exclusive()?.transaction(|conn| {
        usecases::store_new_water_source(conn, storable).map_err(|err| {
            warn!("Failed to store new water source: {err}");
            err
        })
    })?;
    match source.classification {
        Some(Classification { label, confidence }) => info!(
            "Created water source {} classified as {label} ({:.2})",
            source.id,
            f64::from(confidence)
        ),
        None => info!("Created water source {} without photo", source.id),
    }
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_source_without_photo() {
        let fixture = BackendFixture::new();
        let id = fixture.create_water_source(new_well());
        let source = fixture.try_get_water_source(&id).unwrap();
        assert_eq!("Well A", source.name);
        assert!(source.classification.is_none());
        assert!(source.admin_override.is_none());
    }

    #[test]
    fn create_source_with_undecodable_photo() {
        let fixture = BackendFixture::new();
        let id = fixture.create_water_source(usecases::NewWaterSource {
            photo: Some("data:image/png;base64,bm9wZQ==".into()),
            ..new_well()
        });
        let source = fixture.try_get_water_source(&id).unwrap();
        assert_eq!(
            Some(QualityLabel::Unknown),
            source.classification.map(|c| c.label)
        );
    }

    #[test]
    fn create_source_with_photo() {
        let fixture = BackendFixture::new();
        let photo = blue_water_photo();
        let id = fixture.create_water_source(usecases::NewWaterSource {
            photo: Some(photo.clone()),
            ..new_well()
        });
        let source = fixture.try_get_water_source(&id).unwrap();
        let classification = source.classification.unwrap();
        assert_eq!(QualityLabel::Clean, classification.label);
        assert_eq!(0.9, f64::from(classification.confidence));
        assert_eq!(Some(photo), source.photo);
    }

    #[test]
    fn reject_invalid_source_without_storing_it() {
        let fixture = BackendFixture::new();
        let res = flows::create_water_source(
            &fixture.db_connections,
            &fixture.classifier,
            usecases::NewWaterSource {
                lat: 91.0,
                ..new_well()
            },
        );
        assert!(matches!(
            res,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::InvalidPosition
            )))
        ));
        assert_eq!(0, fixture.count_water_sources());
    }
}
