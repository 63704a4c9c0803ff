use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_source(&self, source_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_source(&mut self.conn.borrow_mut(), source_id)
    }
}

impl<'a> CommentRepository for DbConnection<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_source(&self, source_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_source(&mut self.conn.borrow_mut(), source_id)
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!();
    }
    fn load_comments_of_source(&self, source_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_source(&mut self.conn.borrow_mut(), source_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let Comment {
        id,
        source_id,
        created_at,
        created_by,
        text,
        is_admin,
    } = comment;
    let parent_rowid = resolve_water_source_rowid(conn, source_id.as_str())?;
    let new_source_comment = models::NewSourceComment {
        parent_rowid,
        id: id.as_str(),
        created_at: created_at.as_millis(),
        created_by: &created_by,
        text: &text,
        is_admin,
    };
    let _count = diesel::insert_into(schema::source_comment::table)
        .values(&new_source_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comments_of_source(conn: &mut SqliteConnection, source_id: &str) -> Result<Vec<Comment>> {
    use schema::{source_comment::dsl, water_source::dsl as source_dsl};
    Ok(schema::source_comment::table
        .inner_join(schema::water_source::table)
        .select((
            dsl::id,
            dsl::created_at,
            dsl::created_by,
            dsl::text,
            dsl::is_admin,
        ))
        .filter(source_dsl::id.eq(source_id))
        .order_by(dsl::rowid)
        .load::<models::SourceComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::SourceComment {
                 id,
                 created_at,
                 created_by,
                 text,
                 is_admin,
             }| Comment {
                id: id.into(),
                source_id: source_id.into(),
                created_at: Timestamp::from_millis(created_at),
                created_by,
                text,
                is_admin,
            },
        )
        .collect())
}
