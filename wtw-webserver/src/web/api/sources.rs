use super::*;

#[post("/sources", data = "<body>")]
pub fn post_source(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    body: JsonResult<json::NewWaterSource>,
) -> Result<json::Success> {
    let new_source = from_json::new_water_source(body?.into_inner());
    let source = flows::create_water_source(&db, &cfg.classifier, new_source)?;
    Ok(Json(json::Success::with_id(source.id)))
}

#[get("/sources?<quality>")]
pub fn get_sources(
    db: sqlite::Connections,
    quality: Option<String>,
) -> Result<Vec<json::WaterSource>> {
    let sources = usecases::load_water_sources(&db.shared()?, quality.as_deref())?;
    Ok(Json(sources.into_iter().map(Into::into).collect()))
}

#[get("/sources/<id>", rank = 2)]
pub fn get_source(db: sqlite::Connections, id: String) -> Result<json::WaterSource> {
    let (source, tally) = {
        let db = db.shared()?;
        let source = usecases::get_water_source(&db, &id)?;
        let tally = usecases::vote_tally(&db, &id)?;
        (source, tally)
    };
    Ok(Json(to_json::water_source_with_votes(source, tally)))
}

#[get("/sources/nearest?<lat>&<lng>&<limit>")]
pub fn get_nearest_sources(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    lat: Option<form::Result<'_, f64>>,
    lng: Option<form::Result<'_, f64>>,
    limit: Option<form::Result<'_, usize>>,
) -> Result<json::Ranking<json::WaterSource>> {
    let lat = optional_query_param(lat, "lat")?;
    let lng = optional_query_param(lng, "lng")?;
    let limit = optional_query_param(limit, "limit")?.unwrap_or(cfg.nearest_sources_limit);
    let ranking = usecases::nearest_water_sources(&db.shared()?, lat, lng, limit)?;
    Ok(Json(to_json::ranking(ranking)))
}

#[get("/sources/stats")]
pub fn get_source_statistics(db: sqlite::Connections) -> Result<json::SourceStatistics> {
    let statistics = usecases::source_statistics(&db.shared()?)?;
    Ok(Json(to_json::source_statistics(statistics)))
}

#[put("/sources/<id>/override", data = "<body>")]
pub fn put_override(
    db: sqlite::Connections,
    id: String,
    body: JsonResult<json::OverrideRequest>,
) -> Result<json::Success> {
    let json::OverrideRequest {
        label,
        acting_identity,
    } = body?.into_inner();
    flows::set_admin_override(&db, &id, label.as_deref(), &acting_identity)?;
    Ok(Json(json::Success::ok()))
}
