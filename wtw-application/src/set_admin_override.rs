use super::*;

pub fn set_admin_override(
    connections: &sqlite::Connections,
    source_id: &str,
    label: Option<&str>,
    acting_identity: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_admin_override(conn, source_id, label, acting_identity).map_err(|err| {
            warn!("Failed to override quality of water source {source_id}: {err}");
            err
        })
    })?)
}
