use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum QualityLabel {
    Clean,
    Muddy,
    Contaminated,
    Unknown,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Classification {
    pub label: QualityLabel,
    pub confidence: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ClassifyRequest {
    #[serde(default)]
    pub photo: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewWaterSource {
    pub name        : String,
    pub lat         : f64,
    pub lng         : f64,
    pub source_type : String,
    #[serde(default)]
    pub notes       : Option<String>,
    #[serde(default)]
    pub photo       : Option<String>,
    #[serde(default)]
    pub author      : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct WaterSource {
    pub id             : String,
    pub created        : i64,
    pub created_by     : String,
    pub name           : String,
    pub lat            : f64,
    pub lng            : f64,
    pub source_type    : String,
    pub notes          : String,
    /// Label shown to users
    pub label          : QualityLabel,
    /// Raw output of the classifier, if a photo has been supplied
    pub classification : Option<Classification>,
    pub admin_override : Option<QualityLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes          : Option<VoteTally>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo          : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewVote {
    pub voter: String,
    pub kind: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Vote {
    pub voter: String,
    pub kind: VoteKind,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct VoteTally {
    pub up: u64,
    pub down: u64,
    pub score: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewComment {
    #[serde(default)]
    pub author: Option<String>,
    pub text: String,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Comment {
    pub id: String,
    pub created: i64,
    pub author: String,
    pub text: String,
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct OverrideRequest {
    /// `None` clears the override
    #[serde(default)]
    pub label: Option<String>,
    pub acting_identity: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewAlert {
    pub title: String,
    pub message: String,
    pub lat: f64,
    pub lng: f64,
    pub acting_identity: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Alert {
    pub id: String,
    pub created: i64,
    pub created_by: String,
    pub title: String,
    pub message: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    pub distance_km: f64,
    pub distance_label: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Ranking<T> {
    Unavailable,
    Ranked { items: Vec<Ranked<T>> },
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LabelCount {
    pub label: QualityLabel,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SourceStatistics {
    pub total: usize,
    pub labels: Vec<LabelCount>,
    pub center: Option<Coordinate>,
}

/// Acknowledgement of a mutating request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Success {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Success {
    pub const fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
        }
    }
}

/// Body of every failed request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{error}"))]
pub struct Error {
    /// Always `false`, mirrors [`Success`]
    pub success: bool,
    pub http_status: u16,
    pub error: String,
}

impl Error {
    pub fn new(http_status: u16, error: impl Into<String>) -> Self {
        Self {
            success: false,
            http_status,
            error: error.into(),
        }
    }
}
