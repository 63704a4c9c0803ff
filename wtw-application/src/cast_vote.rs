use super::*;

pub fn cast_vote(
    connections: &sqlite::Connections,
    source_id: &str,
    new_vote: usecases::NewVote,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::cast_vote(conn, source_id, new_vote).map_err(|err| {
            warn!("Failed to cast vote on water source {source_id}: {err}");
            err
        })
    })?)
}
