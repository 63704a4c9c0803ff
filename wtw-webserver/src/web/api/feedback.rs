use super::*;

#[post("/sources/<id>/votes", data = "<body>")]
pub fn post_vote(
    db: sqlite::Connections,
    id: String,
    body: JsonResult<json::NewVote>,
) -> Result<json::Success> {
    let new_vote = from_json::new_vote(body?.into_inner());
    flows::cast_vote(&db, &id, new_vote)?;
    Ok(Json(json::Success::ok()))
}

#[get("/sources/<id>/votes")]
pub fn get_votes(db: sqlite::Connections, id: String) -> Result<Vec<json::Vote>> {
    let votes = usecases::load_votes(&db.shared()?, &id)?;
    Ok(Json(votes.into_iter().map(Into::into).collect()))
}

#[post("/sources/<id>/comments", data = "<body>")]
pub fn post_comment(
    db: sqlite::Connections,
    id: String,
    body: JsonResult<json::NewComment>,
) -> Result<json::Success> {
    let new_comment = from_json::new_comment(body?.into_inner());
    let comment = flows::add_comment(&db, &id, new_comment)?;
    Ok(Json(json::Success::with_id(comment.id)))
}

/// Comments of administrators first, then the most recent.
#[get("/sources/<id>/comments")]
pub fn get_comments(db: sqlite::Connections, id: String) -> Result<Vec<json::Comment>> {
    let comments = usecases::load_comments(&db.shared()?, &id)?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}
