use super::*;

#[post("/classify", data = "<body>")]
pub fn post_classify(
    cfg: &State<Cfg>,
    body: JsonResult<json::ClassifyRequest>,
) -> Result<json::Classification> {
    let json::ClassifyRequest { photo } = body?.into_inner();
    let photo = photo
        .filter(|photo| !photo.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("No photo data provided"))?;
    let classification = usecases::classify_photo(&cfg.classifier, &photo);
    Ok(Json(classification.into()))
}
