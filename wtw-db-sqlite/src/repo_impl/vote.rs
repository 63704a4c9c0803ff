use super::*;

impl<'a> VoteRepo for DbReadWrite<'a> {
    fn replace_vote(&self, vote: Vote) -> Result<Option<VoteKind>> {
        replace_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn load_votes_of_source(&self, source_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_source(&mut self.conn.borrow_mut(), source_id)
    }
}

impl<'a> VoteRepo for DbConnection<'a> {
    fn replace_vote(&self, vote: Vote) -> Result<Option<VoteKind>> {
        replace_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn load_votes_of_source(&self, source_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_source(&mut self.conn.borrow_mut(), source_id)
    }
}

impl<'a> VoteRepo for DbReadOnly<'a> {
    fn replace_vote(&self, _vote: Vote) -> Result<Option<VoteKind>> {
        unreachable!();
    }
    fn load_votes_of_source(&self, source_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_source(&mut self.conn.borrow_mut(), source_id)
    }
}

fn load_vote_kind(kind: &str) -> Result<VoteKind> {
    kind.parse()
        .map_err(|_| anyhow!("Invalid vote kind: {kind}").into())
}

// Must be invoked within a transaction, the lookup
// and the following update are not atomic.
fn replace_vote(conn: &mut SqliteConnection, vote: Vote) -> Result<Option<VoteKind>> {
    use schema::source_vote::dsl;
    let Vote {
        source_id,
        voter,
        kind,
    } = vote;
    let parent_rowid = resolve_water_source_rowid(conn, source_id.as_str())?;
    let replaced = schema::source_vote::table
        .select(dsl::kind)
        .filter(dsl::parent_rowid.eq(parent_rowid))
        .filter(dsl::voter.eq(&voter))
        .first::<String>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .as_deref()
        .map(load_vote_kind)
        .transpose()?;
    let _count = if replaced.is_some() {
        diesel::update(
            schema::source_vote::table
                .filter(dsl::parent_rowid.eq(parent_rowid))
                .filter(dsl::voter.eq(&voter)),
        )
        .set(dsl::kind.eq(kind.as_ref()))
        .execute(conn)
    } else {
        let new_vote = models::NewSourceVote {
            parent_rowid,
            voter: &voter,
            kind: kind.as_ref(),
        };
        diesel::insert_into(schema::source_vote::table)
            .values(&new_vote)
            .execute(conn)
    }
    .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(replaced)
}

fn load_votes_of_source(conn: &mut SqliteConnection, source_id: &str) -> Result<Vec<Vote>> {
    use schema::{source_vote::dsl, water_source::dsl as source_dsl};
    schema::source_vote::table
        .inner_join(schema::water_source::table)
        .select((dsl::voter, dsl::kind))
        .filter(source_dsl::id.eq(source_id))
        .order_by(dsl::rowid)
        .load::<models::SourceVote>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::SourceVote { voter, kind }| {
            Ok(Vote {
                source_id: source_id.into(),
                voter,
                kind: load_vote_kind(&kind)?,
            })
        })
        .collect()
}
