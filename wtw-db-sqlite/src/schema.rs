///////////////////////////////////////////////////////////////////////
// Water sources
///////////////////////////////////////////////////////////////////////

table! {
    water_source (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        created_by -> Text,
        name -> Text,
        lat -> Double,
        lon -> Double,
        source_type -> Text,
        quality_label -> Nullable<Text>,
        confidence -> Nullable<Double>,
        notes -> Text,
        photo -> Nullable<Text>,
        admin_override -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Feedback
///////////////////////////////////////////////////////////////////////

table! {
    source_vote (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        voter -> Text,
        kind -> Text,
    }
}

joinable!(source_vote -> water_source (parent_rowid));

table! {
    source_comment (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        created_by -> Text,
        text -> Text,
        is_admin -> Bool,
    }
}

joinable!(source_comment -> water_source (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Alerts
///////////////////////////////////////////////////////////////////////

table! {
    hazard_alert (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        created_by -> Text,
        title -> Text,
        message -> Text,
        lat -> Double,
        lon -> Double,
    }
}

allow_tables_to_appear_in_same_query!(water_source, source_vote, source_comment, hazard_alert);
