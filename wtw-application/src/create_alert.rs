use super::*;

pub fn create_alert(
    connections: &sqlite::Connections,
    new_alert: usecases::NewAlert,
) -> Result<Alert> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_alert(conn, new_alert).map_err(|err| {
            warn!("Failed to create alert: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_alert(created_by: &str) -> usecases::NewAlert {
        usecases::NewAlert {
            title: "Spill".into(),
            message: "Avoid the river".into(),
            lat: 40.0,
            lng: -74.0,
            created_by: created_by.into(),
        }
    }

    #[test]
    fn create_alert_and_rank_it() {
        let fixture = BackendFixture::new();
        flows::create_alert(&fixture.db_connections, new_alert("admin")).unwrap();
        let db = fixture.db_connections.shared().unwrap();
        let ranked = usecases::nearest_alerts(&db, Some(40.001), Some(-74.001), 5)
            .unwrap()
            .into_items()
            .unwrap();
        assert_eq!(1, ranked.len());
        assert_eq!("Spill", ranked[0].item.title);
    }

    #[test]
    fn deny_alerts_of_users() {
        let fixture = BackendFixture::new();
        assert!(flows::create_alert(&fixture.db_connections, new_alert("bob")).is_err());
        let db = fixture.db_connections.shared().unwrap();
        assert!(usecases::load_alerts(&db).unwrap().is_empty());
    }
}
