use super::prelude::*;
use crate::{authorization::is_administrator, util::sort::sort_comments_for_display};

#[rustfmt::skip]
#[derive(Debug, Default, Clone)]
pub struct NewComment {
    pub author   : Option<String>,
    pub text     : String,
    /// Defaults to whether the author is the administrator
    pub is_admin : Option<bool>,
}

pub fn add_comment<R>(repo: &R, source_id: &str, new_comment: NewComment) -> Result<Comment>
where
    R: WaterSourceRepo + CommentRepository,
{
    let NewComment {
        author,
        text,
        is_admin,
    } = new_comment;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    let created_by = author_or_anonymous(author.as_deref());
    let author_is_admin = is_administrator(&created_by);
    let is_admin = is_admin.unwrap_or(author_is_admin);
    if is_admin && !author_is_admin {
        log::warn!("Denied administrator comment of '{created_by}'");
        return Err(Error::Forbidden);
    }
    let source = repo.get_water_source(source_id)?;
    let comment = Comment {
        id: Id::new(),
        source_id: source.id,
        created_at: Timestamp::now(),
        created_by,
        text: text.to_owned(),
        is_admin,
    };
    repo.create_comment(comment.clone())?;
    Ok(comment)
}

/// Administrator comments are pinned on top of the
/// most recent ones.
pub fn load_comments<R>(repo: &R, source_id: &str) -> Result<Vec<Comment>>
where
    R: WaterSourceRepo + CommentRepository,
{
    repo.get_water_source(source_id)?;
    let mut comments = repo.load_comments_of_source(source_id)?;
    sort_comments_for_display(&mut comments);
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wtw_entities::builders::*;

    fn db_with_source(id: &str) -> MockDb {
        let db = MockDb::default();
        db.sources
            .borrow_mut()
            .push(WaterSource::build().id(id).finish());
        db
    }

    fn comment(author: &str, text: &str) -> NewComment {
        NewComment {
            author: Some(author.into()),
            text: text.into(),
            is_admin: None,
        }
    }

    #[test]
    fn anonymous_comment() {
        let db = db_with_source("s");
        let comment = add_comment(
            &db,
            "s",
            NewComment {
                text: " tastes fine ".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!("Anonymous", comment.created_by);
        assert_eq!("tastes fine", comment.text);
        assert!(!comment.is_admin);
    }

    #[test]
    fn administrator_comments_are_pinned() {
        let db = db_with_source("s");
        add_comment(&db, "s", comment("alice", "first")).unwrap();
        add_comment(&db, "s", comment("Admin", "boil before use")).unwrap();
        add_comment(&db, "s", comment("bob", "second")).unwrap();
        let texts: Vec<_> = load_comments(&db, "s")
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(vec!["boil before use", "second", "first"], texts);
    }

    #[test]
    fn administrator_may_comment_as_user() {
        let db = db_with_source("s");
        let comment = add_comment(
            &db,
            "s",
            NewComment {
                is_admin: Some(false),
                ..comment("admin", "just a user")
            },
        )
        .unwrap();
        assert!(!comment.is_admin);
    }

    #[test]
    fn reject_administrator_flag_of_users() {
        let db = db_with_source("s");
        let res = add_comment(
            &db,
            "s",
            NewComment {
                is_admin: Some(true),
                ..comment("bob", "trust me")
            },
        );
        assert!(matches!(res, Err(Error::Forbidden)));
        assert!(db.comments.borrow().is_empty());
    }

    #[test]
    fn reject_empty_comments_and_unknown_sources() {
        let db = db_with_source("s");
        assert!(matches!(
            add_comment(&db, "s", comment("bob", "  ")),
            Err(Error::EmptyComment)
        ));
        assert!(matches!(
            add_comment(&db, "x", comment("bob", "text")),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(matches!(
            load_comments(&db, "x"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
