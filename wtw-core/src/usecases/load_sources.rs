use super::prelude::*;
use crate::util::sort::sort_sources_newest_first;

/// All sources, the most recent first.
///
/// Optionally filtered by their display label.
pub fn load_water_sources<R: WaterSourceRepo>(
    repo: &R,
    quality: Option<&str>,
) -> Result<Vec<WaterSource>> {
    let quality = quality
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::parse::<QualityLabel>)
        .transpose()
        .map_err(|_| Error::InvalidQualityLabel)?;
    let mut sources = repo.all_water_sources()?;
    if let Some(quality) = quality {
        sources.retain(|s| s.display_label() == quality);
    }
    sort_sources_newest_first(&mut sources);
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wtw_entities::builders::*;

    fn db_with_sources() -> MockDb {
        let db = MockDb::default();
        db.sources.borrow_mut().extend([
            WaterSource::build()
                .id("a")
                .created_at(Timestamp::from_secs(1))
                .classification(QualityLabel::Clean, 0.9)
                .finish(),
            WaterSource::build()
                .id("b")
                .created_at(Timestamp::from_secs(2))
                .classification(QualityLabel::Clean, 0.9)
                .admin_override(QualityLabel::Contaminated)
                .finish(),
            WaterSource::build()
                .id("c")
                .created_at(Timestamp::from_secs(3))
                .finish(),
        ]);
        db
    }

    fn ids(sources: Vec<WaterSource>) -> Vec<String> {
        sources.into_iter().map(|s| s.id.into()).collect()
    }

    #[test]
    fn newest_first() {
        let db = db_with_sources();
        assert_eq!(vec!["c", "b", "a"], ids(load_water_sources(&db, None).unwrap()));
    }

    #[test]
    fn filter_by_display_label() {
        let db = db_with_sources();
        assert_eq!(
            vec!["a"],
            ids(load_water_sources(&db, Some("clean")).unwrap())
        );
        assert_eq!(
            vec!["b"],
            ids(load_water_sources(&db, Some("Contaminated")).unwrap())
        );
        assert_eq!(
            vec!["c"],
            ids(load_water_sources(&db, Some("unknown")).unwrap())
        );
        assert_eq!(3, load_water_sources(&db, Some("")).unwrap().len());
        assert!(matches!(
            load_water_sources(&db, Some("salty")),
            Err(Error::InvalidQualityLabel)
        ));
    }
}
