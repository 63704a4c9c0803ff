use super::*;
use wtw_entities as e;

impl From<e::quality::QualityLabel> for QualityLabel {
    fn from(from: e::quality::QualityLabel) -> Self {
        use e::quality::QualityLabel as E;
        match from {
            E::Clean => Self::Clean,
            E::Muddy => Self::Muddy,
            E::Contaminated => Self::Contaminated,
            E::Unknown => Self::Unknown,
        }
    }
}

impl From<QualityLabel> for e::quality::QualityLabel {
    fn from(from: QualityLabel) -> Self {
        use QualityLabel as B;
        match from {
            B::Clean => Self::Clean,
            B::Muddy => Self::Muddy,
            B::Contaminated => Self::Contaminated,
            B::Unknown => Self::Unknown,
        }
    }
}

impl From<e::vote::VoteKind> for VoteKind {
    fn from(from: e::vote::VoteKind) -> Self {
        match from {
            e::vote::VoteKind::Up => Self::Up,
            e::vote::VoteKind::Down => Self::Down,
        }
    }
}

impl From<e::quality::Classification> for Classification {
    fn from(from: e::quality::Classification) -> Self {
        let e::quality::Classification { label, confidence } = from;
        Self {
            label: label.into(),
            confidence: confidence.into(),
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::vote::VoteTally> for VoteTally {
    fn from(from: e::vote::VoteTally) -> Self {
        Self {
            up: from.up,
            down: from.down,
            score: from.score(),
        }
    }
}

impl From<e::vote::Vote> for Vote {
    fn from(from: e::vote::Vote) -> Self {
        let e::vote::Vote {
            source_id: _,
            voter,
            kind,
        } = from;
        Self {
            voter,
            kind: kind.into(),
        }
    }
}

impl From<e::source::WaterSource> for WaterSource {
    fn from(from: e::source::WaterSource) -> Self {
        let label = from.display_label().into();
        let e::source::WaterSource {
            id,
            created_at,
            created_by,
            name,
            pos,
            source_type,
            classification,
            notes,
            photo,
            admin_override,
        } = from;
        Self {
            id: id.into(),
            created: created_at.as_secs(),
            created_by,
            name,
            lat: pos.lat(),
            lng: pos.lng(),
            source_type: source_type.to_string(),
            notes,
            label,
            classification: classification.map(Into::into),
            admin_override: admin_override.map(Into::into),
            votes: None,
            photo,
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            source_id: _,
            created_at,
            created_by,
            text,
            is_admin,
        } = from;
        Self {
            id: id.into(),
            created: created_at.as_secs(),
            author: created_by,
            text,
            is_admin,
        }
    }
}

impl From<e::alert::Alert> for Alert {
    fn from(from: e::alert::Alert) -> Self {
        let e::alert::Alert {
            id,
            created_at,
            created_by,
            title,
            message,
            pos,
        } = from;
        Self {
            id: id.into(),
            created: created_at.as_secs(),
            created_by,
            title,
            message,
            lat: pos.lat(),
            lng: pos.lng(),
        }
    }
}
