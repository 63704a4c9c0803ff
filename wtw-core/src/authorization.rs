use thiserror::Error;

/// The reserved identity of the administrator.
pub const ADMINISTRATOR: &str = "admin";

#[derive(Debug, Error)]
pub enum Error {
    #[error("administrator identity required")]
    NotAdministrator,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Identities are free text, only the administrator is reserved.
pub fn is_administrator(identity: &str) -> bool {
    identity.trim().eq_ignore_ascii_case(ADMINISTRATOR)
}

pub fn authorize_administrator(identity: &str) -> Result<()> {
    if !is_administrator(identity) {
        log::warn!("Denied administrative action for '{identity}'");
        return Err(Error::NotAdministrator);
    }
    Ok(())
}
