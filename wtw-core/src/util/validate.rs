use crate::entities::*;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

fn trimmed(s: String) -> String {
    let t = s.trim();
    if t.len() == s.len() {
        s
    } else {
        t.to_owned()
    }
}

#[derive(Debug, Error)]
pub enum SourceInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Invalid position")]
    Position,
    #[error("Confidence out of range")]
    Confidence,
}

impl AutoCorrect for WaterSource {
    fn auto_correct(mut self) -> Self {
        self.name = trimmed(self.name);
        self.notes = trimmed(self.notes);
        self.created_by = author_or_anonymous(Some(&self.created_by));
        self
    }
}

impl Validate for WaterSource {
    type Error = SourceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(Self::Error::Name);
        }
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        if self
            .classification
            .is_some_and(|c| !c.confidence.is_valid())
        {
            return Err(Self::Error::Confidence);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum AlertInvalidation {
    #[error("Missing title")]
    Title,
    #[error("Missing message")]
    Message,
    #[error("Invalid position")]
    Position,
}

impl AutoCorrect for Alert {
    fn auto_correct(mut self) -> Self {
        self.title = trimmed(self.title);
        self.message = trimmed(self.message);
        self
    }
}

impl Validate for Alert {
    type Error = AlertInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.is_empty() {
            return Err(Self::Error::Title);
        }
        if self.message.is_empty() {
            return Err(Self::Error::Message);
        }
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}
