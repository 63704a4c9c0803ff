pub use wtw_boundary::*;

use crate::core::{entities as e, ranking, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_water_source(from: NewWaterSource) -> usecases::NewWaterSource {
        let NewWaterSource {
            name,
            lat,
            lng,
            source_type,
            notes,
            photo,
            author,
        } = from;
        usecases::NewWaterSource {
            name,
            lat,
            lng,
            source_type,
            notes,
            photo,
            created_by: author,
        }
    }

    pub fn new_vote(from: NewVote) -> usecases::NewVote {
        let NewVote { voter, kind } = from;
        usecases::NewVote { voter, kind }
    }

    pub fn new_comment(from: NewComment) -> usecases::NewComment {
        let NewComment {
            author,
            text,
            is_admin,
        } = from;
        usecases::NewComment {
            author,
            text,
            is_admin,
        }
    }

    pub fn new_alert(from: NewAlert) -> usecases::NewAlert {
        let NewAlert {
            title,
            message,
            lat,
            lng,
            acting_identity,
        } = from;
        usecases::NewAlert {
            title,
            message,
            lat,
            lng,
            created_by: acting_identity,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn water_source_with_votes(source: e::WaterSource, tally: e::VoteTally) -> WaterSource {
        WaterSource {
            votes: Some(tally.into()),
            ..source.into()
        }
    }

    pub fn ranking<T, J>(from: ranking::Ranking<T>) -> Ranking<J>
    where
        J: From<T>,
    {
        match from {
            ranking::Ranking::Unavailable => Ranking::Unavailable,
            ranking::Ranking::Ranked(items) => Ranking::Ranked {
                items: items
                    .into_iter()
                    .map(|ranking::Ranked { item, distance }| Ranked {
                        item: item.into(),
                        distance_km: distance.to_km(),
                        distance_label: distance.to_string(),
                    })
                    .collect(),
            },
        }
    }

    pub fn source_statistics(from: usecases::SourceStatistics) -> SourceStatistics {
        let usecases::SourceStatistics {
            total,
            labels,
            center,
        } = from;
        SourceStatistics {
            total,
            labels: labels
                .into_iter()
                .map(
                    |usecases::LabelCount {
                         label,
                         count,
                         percentage,
                     }| LabelCount {
                        label: label.into(),
                        count,
                        percentage,
                    },
                )
                .collect(),
            center: center.map(Into::into),
        }
    }
}
