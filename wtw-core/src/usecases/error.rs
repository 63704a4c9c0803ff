use crate::{
    authorization, repositories,
    util::validate::{AlertInvalidation, SourceInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The title is invalid")]
    Title,
    #[error("The message is invalid")]
    Message,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Missing voter")]
    EmptyVoter,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Confidence out of range")]
    InvalidConfidence,
    #[error("Invalid quality label")]
    InvalidQualityLabel,
    #[error("Invalid source type")]
    InvalidSourceType,
    #[error("Invalid vote kind")]
    InvalidVoteKind,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<authorization::Error> for Error {
    fn from(err: authorization::Error) -> Self {
        match err {
            authorization::Error::NotAdministrator => Self::Forbidden,
        }
    }
}

impl From<SourceInvalidation> for Error {
    fn from(err: SourceInvalidation) -> Self {
        match err {
            SourceInvalidation::Name => Self::Name,
            SourceInvalidation::Position => Self::InvalidPosition,
            SourceInvalidation::Confidence => Self::InvalidConfidence,
        }
    }
}

impl From<AlertInvalidation> for Error {
    fn from(err: AlertInvalidation) -> Self {
        match err {
            AlertInvalidation::Title => Self::Title,
            AlertInvalidation::Message => Self::Message,
            AlertInvalidation::Position => Self::InvalidPosition,
        }
    }
}
