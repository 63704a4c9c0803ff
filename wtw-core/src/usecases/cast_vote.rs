use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewVote {
    pub voter : String,
    pub kind  : String,
}

/// Cast a vote on a source.
///
/// A later vote of the same voter replaces the earlier one.
pub fn cast_vote<R>(repo: &R, source_id: &str, new_vote: NewVote) -> Result<()>
where
    R: WaterSourceRepo + VoteRepo,
{
    let NewVote { voter, kind } = new_vote;
    let voter = voter.trim();
    if voter.is_empty() {
        return Err(Error::EmptyVoter);
    }
    let kind = kind
        .trim()
        .parse::<VoteKind>()
        .map_err(|_| Error::InvalidVoteKind)?;
    // The source must exist
    let source = repo.get_water_source(source_id)?;
    let vote = Vote {
        source_id: source.id,
        voter: voter.to_owned(),
        kind,
    };
    if let Some(replaced) = repo.replace_vote(vote)? {
        log::debug!("Replaced {replaced} vote of '{voter}' on {source_id} by {kind} vote");
    }
    Ok(())
}

pub fn load_votes<R>(repo: &R, source_id: &str) -> Result<Vec<Vote>>
where
    R: WaterSourceRepo + VoteRepo,
{
    repo.get_water_source(source_id)?;
    Ok(repo.load_votes_of_source(source_id)?)
}

pub fn vote_tally<R: VoteRepo>(repo: &R, source_id: &str) -> Result<VoteTally> {
    let votes = repo.load_votes_of_source(source_id)?;
    Ok(votes.iter().collect())
}
