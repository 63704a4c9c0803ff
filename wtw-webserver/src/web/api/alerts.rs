use super::*;

#[post("/alerts", data = "<body>")]
pub fn post_alert(db: sqlite::Connections, body: JsonResult<json::NewAlert>) -> Result<json::Success> {
    let new_alert = from_json::new_alert(body?.into_inner());
    let alert = flows::create_alert(&db, new_alert)?;
    Ok(Json(json::Success::with_id(alert.id)))
}

#[get("/alerts")]
pub fn get_alerts(db: sqlite::Connections) -> Result<Vec<json::Alert>> {
    let alerts = usecases::load_alerts(&db.shared()?)?;
    Ok(Json(alerts.into_iter().map(Into::into).collect()))
}

#[get("/alerts/nearest?<lat>&<lng>&<limit>")]
pub fn get_nearest_alerts(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    lat: Option<form::Result<'_, f64>>,
    lng: Option<form::Result<'_, f64>>,
    limit: Option<form::Result<'_, usize>>,
) -> Result<json::Ranking<json::Alert>> {
    let lat = optional_query_param(lat, "lat")?;
    let lng = optional_query_param(lng, "lng")?;
    let limit = optional_query_param(limit, "limit")?.unwrap_or(cfg.nearest_alerts_limit);
    let ranking = usecases::nearest_alerts(&db.shared()?, lat, lng, limit)?;
    Ok(Json(to_json::ranking(ranking)))
}
