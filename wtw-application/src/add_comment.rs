use super::*;

pub fn add_comment(
    connections: &sqlite::Connections,
    source_id: &str,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::add_comment(conn, source_id, new_comment).map_err(|err| {
            warn!("Failed to add comment to water source {source_id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn pinned_administrator_comments() {
        let fixture = BackendFixture::new();
        let id = fixture.create_water_source(new_well());
        for (author, text) in [("bob", "first"), ("admin", "pinned"), ("eve", "latest")] {
            flows::add_comment(
                &fixture.db_connections,
                &id,
                usecases::NewComment {
                    author: Some(author.into()),
                    text: text.into(),
                    is_admin: None,
                },
            )
            .unwrap();
        }
        let db = fixture.db_connections.shared().unwrap();
        let comments = usecases::load_comments(&db, &id).unwrap();
        let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(vec!["pinned", "latest", "first"], texts);
        assert!(comments[0].is_admin);
    }
}
