use super::prelude::*;
use crate::authorization::authorize_administrator;

/// Override the displayed quality label of a source or
/// clear the override with `None`.
pub fn set_admin_override<R: WaterSourceRepo>(
    repo: &R,
    source_id: &str,
    label: Option<&str>,
    acting_identity: &str,
) -> Result<()> {
    authorize_administrator(acting_identity)?;
    let label = label
        .map(|l| l.trim().parse::<QualityLabel>())
        .transpose()
        .map_err(|_| Error::InvalidQualityLabel)?;
    repo.set_admin_override(source_id, label)?;
    match label {
        Some(label) => log::info!("Overridden quality of water source {source_id}: {label}"),
        None => log::info!("Cleared quality override of water source {source_id}"),
    }
    Ok(())
}
