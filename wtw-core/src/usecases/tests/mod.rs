use super::prelude::*;
use crate::db::Db;
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub sources: RefCell<Vec<WaterSource>>,
    pub votes: RefCell<Vec<Vote>>,
    pub comments: RefCell<Vec<Comment>>,
    pub alerts: RefCell<Vec<Alert>>,
}

trait Key {
    fn id(&self) -> &str;
}

impl Key for WaterSource {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Comment {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Alert {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

impl WaterSourceRepo for MockDb {
    fn create_water_source(&self, source: WaterSource) -> RepoResult<()> {
        create(&mut self.sources.borrow_mut(), source)
    }

    fn get_water_source(&self, id: &str) -> RepoResult<WaterSource> {
        get(&self.sources.borrow(), id)
    }

    fn all_water_sources(&self) -> RepoResult<Vec<WaterSource>> {
        Ok(self
            .sources
            .borrow()
            .iter()
            .cloned()
            .map(|mut s| {
                s.photo = None;
                s
            })
            .collect())
    }

    fn count_water_sources(&self) -> RepoResult<usize> {
        Ok(self.sources.borrow().len())
    }

    fn set_admin_override(&self, id: &str, label: Option<QualityLabel>) -> RepoResult<()> {
        let mut sources = self.sources.borrow_mut();
        let source = sources
            .iter_mut()
            .find(|s| s.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        source.admin_override = label;
        Ok(())
    }
}

impl VoteRepo for MockDb {
    fn replace_vote(&self, vote: Vote) -> RepoResult<Option<VoteKind>> {
        let mut votes = self.votes.borrow_mut();
        if let Some(existing) = votes
            .iter_mut()
            .find(|v| v.source_id == vote.source_id && v.voter == vote.voter)
        {
            let replaced = existing.kind;
            *existing = vote;
            return Ok(Some(replaced));
        }
        votes.push(vote);
        Ok(None)
    }

    fn load_votes_of_source(&self, source_id: &str) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.source_id.as_str() == source_id)
            .cloned()
            .collect())
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment)
    }

    fn load_comments_of_source(&self, source_id: &str) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.source_id.as_str() == source_id)
            .cloned()
            .collect())
    }
}

impl AlertRepo for MockDb {
    fn create_alert(&self, alert: Alert) -> RepoResult<()> {
        create(&mut self.alerts.borrow_mut(), alert)
    }

    fn all_alerts(&self) -> RepoResult<Vec<Alert>> {
        Ok(self.alerts.borrow().clone())
    }
}

impl Db for MockDb {}

#[test]
fn list_sources_without_photos() {
    use crate::quality::photo_tests::{png_data_url, uniform_image};
    use wtw_entities::builders::*;
    let db = MockDb::default();
    let mut source = WaterSource::build().finish();
    source.photo = Some(png_data_url(&uniform_image(1, 1, [0, 0, 255])));
    db.create_water_source(source.clone()).unwrap();
    assert!(db.all_water_sources().unwrap()[0].photo.is_none());
    assert!(db.get_water_source(source.id.as_str()).unwrap().photo.is_some());
}
