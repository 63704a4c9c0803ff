#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = water_source)]
pub struct NewWaterSource<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub created_by: &'a str,
    pub name: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub source_type: &'a str,
    pub quality_label: Option<&'a str>,
    pub confidence: Option<f64>,
    pub notes: &'a str,
    pub photo: Option<&'a str>,
    pub admin_override: Option<&'a str>,
}

/// All columns except the photo
#[derive(Queryable)]
pub struct WaterSource {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub source_type: String,
    pub quality_label: Option<String>,
    pub confidence: Option<f64>,
    pub notes: String,
    pub admin_override: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = source_vote)]
pub struct NewSourceVote<'a> {
    pub parent_rowid: i64,
    pub voter: &'a str,
    pub kind: &'a str,
}

#[derive(Queryable)]
pub struct SourceVote {
    pub voter: String,
    pub kind: String,
}

#[derive(Insertable)]
#[diesel(table_name = source_comment)]
pub struct NewSourceComment<'a> {
    pub parent_rowid: i64,
    pub id: &'a str,
    pub created_at: i64,
    pub created_by: &'a str,
    pub text: &'a str,
    pub is_admin: bool,
}

#[derive(Queryable)]
pub struct SourceComment {
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub text: String,
    pub is_admin: bool,
}

#[derive(Insertable)]
#[diesel(table_name = hazard_alert)]
pub struct NewHazardAlert<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub created_by: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Queryable)]
pub struct HazardAlert {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub title: String,
    pub message: String,
    pub lat: f64,
    pub lon: f64,
}
