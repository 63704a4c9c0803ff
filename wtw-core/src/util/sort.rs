use crate::entities::*;
use std::cmp::Reverse;

/// Administrator comments first, then the most recent ones.
///
/// Expects the comments in insertion order, comments created
/// at the same time are ordered by reverse insertion.
pub fn sort_comments_for_display(comments: &mut [Comment]) {
    comments.reverse();
    comments.sort_by_key(|c| (Reverse(c.is_admin), Reverse(c.created_at)));
}

/// The most recent first.
///
/// Expects the sources in insertion order, sources created
/// at the same time are ordered by reverse insertion.
pub fn sort_sources_newest_first(sources: &mut [WaterSource]) {
    sources.reverse();
    sources.sort_by_key(|s| Reverse(s.created_at));
}

pub fn sort_alerts_newest_first(alerts: &mut [Alert]) {
    alerts.reverse();
    alerts.sort_by_key(|a| Reverse(a.created_at));
}
