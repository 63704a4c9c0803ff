use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self,
    form::{self, error::ErrorKind as FormErrorKind},
    get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};
use wtw_application::prelude as flows;
use wtw_boundary::Error as JsonErrorResponse;

use super::{guards::*, sqlite, Cfg};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::usecases,
};

mod alerts;
mod classify;
mod error;
mod feedback;
mod sources;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   classification   --- //
        classify::post_classify,
        // ---   sources   --- //
        sources::post_source,
        sources::get_sources,
        sources::get_source,
        sources::get_nearest_sources,
        sources::get_source_statistics,
        sources::put_override,
        // ---   feedback   --- //
        feedback::post_vote,
        feedback::get_votes,
        feedback::post_comment,
        feedback::get_comments,
        // ---   alerts   --- //
        alerts::post_alert,
        alerts::get_alerts,
        alerts::get_nearest_alerts,
        // ---   util   --- //
        util::get_version,
    ]
}

/// A missing query parameter is `None`, an unparsable one is rejected.
fn optional_query_param<T>(
    param: Option<form::Result<'_, T>>,
    name: &str,
) -> result::Result<Option<T>, ApiError> {
    match param {
        None => Ok(None),
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(errs)) if errs.iter().all(|e| matches!(e.kind, FormErrorKind::Missing)) => {
            Ok(None)
        }
        Some(Err(errs)) => {
            debug!("Rejected query parameter '{name}': {errs}");
            Err(ApiError::invalid_query_param(name))
        }
    }
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse::new(status.code, err.to_string());
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
