use super::{parse_position, prelude::*};
use crate::{
    quality::QualityClassifier,
    util::validate::{AutoCorrect, Validate},
};

#[rustfmt::skip]
#[derive(Debug, Default, Clone)]
pub struct NewWaterSource {
    pub name        : String,
    pub lat         : f64,
    pub lng         : f64,
    pub source_type : String,
    pub notes       : Option<String>,
    pub photo       : Option<String>,
    pub created_by  : Option<String>,
}

#[derive(Debug, Clone)]
pub struct Storable(WaterSource);

impl Storable {
    pub fn classification(&self) -> Option<Classification> {
        self.0.classification
    }
}

/// Validate the new source and classify its photo.
///
/// Doesn't access the database and could be done
/// before starting a transaction.
pub fn prepare_new_water_source(
    classifier: &QualityClassifier,
    new_source: NewWaterSource,
) -> Result<Storable> {
    prepare_with(new_source, |photo| classifier.classify_photo(photo))
}

// Decoding photos is expensive, invalid sources are rejected before.
fn prepare_with<F>(new_source: NewWaterSource, classify: F) -> Result<Storable>
where
    F: FnOnce(&str) -> Classification,
{
    let NewWaterSource {
        name,
        lat,
        lng,
        source_type,
        notes,
        photo,
        created_by,
    } = new_source;
    let pos = parse_position(lat, lng)?;
    let source_type = source_type
        .trim()
        .parse::<SourceType>()
        .map_err(|_| Error::InvalidSourceType)?;
    let photo = photo.filter(|p| !p.trim().is_empty());
    let mut source = WaterSource {
        id: Id::new(),
        created_at: Timestamp::now(),
        created_by: author_or_anonymous(created_by.as_deref()),
        name,
        pos,
        source_type,
        classification: None,
        notes: notes.unwrap_or_default(),
        photo: None,
        admin_override: None,
    }
    .auto_correct();
    source.validate()?;
    source.classification = photo.as_deref().map(classify);
    source.photo = photo;
    if source.classification.is_some() {
        source.validate()?;
    }
    Ok(Storable(source))
}

pub fn store_new_water_source<R: WaterSourceRepo>(
    repo: &R,
    storable: Storable,
) -> Result<WaterSource> {
    let Storable(source) = storable;
    log::debug!("Storing new water source: {}", source.id);
    repo.create_water_source(source.clone())?;
    Ok(source)
}
