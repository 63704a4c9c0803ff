use super::{parse_position, prelude::*};
use crate::{
    authorization::authorize_administrator,
    util::{
        sort::sort_alerts_newest_first,
        validate::{AutoCorrect, Validate},
    },
};

#[rustfmt::skip]
#[derive(Debug, Default, Clone)]
pub struct NewAlert {
    pub title      : String,
    pub message    : String,
    pub lat        : f64,
    pub lng        : f64,
    pub created_by : String,
}

pub fn create_alert<R: AlertRepo>(repo: &R, new_alert: NewAlert) -> Result<Alert> {
    let NewAlert {
        title,
        message,
        lat,
        lng,
        created_by,
    } = new_alert;
    authorize_administrator(&created_by)?;
    let pos = parse_position(lat, lng)?;
    let alert = Alert {
        id: Id::new(),
        created_at: Timestamp::now(),
        created_by: created_by.trim().to_owned(),
        title,
        message,
        pos,
    }
    .auto_correct();
    alert.validate()?;
    repo.create_alert(alert.clone())?;
    log::info!("Created alert '{}' at {}", alert.title, alert.pos);
    Ok(alert)
}

/// All alerts, the most recent first.
pub fn load_alerts<R: AlertRepo>(repo: &R) -> Result<Vec<Alert>> {
    let mut alerts = repo.all_alerts()?;
    sort_alerts_newest_first(&mut alerts);
    Ok(alerts)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn spill(created_by: &str) -> NewAlert {
        NewAlert {
            title: "Oil spill".into(),
            message: "Do not drink from the river".into(),
            lat: 48.1,
            lng: 11.5,
            created_by: created_by.into(),
        }
    }

    #[test]
    fn only_the_administrator_creates_alerts() {
        let db = MockDb::default();
        assert!(matches!(
            create_alert(&db, spill("bob")),
            Err(Error::Forbidden)
        ));
        assert!(db.alerts.borrow().is_empty());
        let alert = create_alert(&db, spill("ADMIN")).unwrap();
        assert_eq!("Oil spill", alert.title);
        assert_eq!(1, db.alerts.borrow().len());
    }

    #[test]
    fn reject_invalid_alerts() {
        let db = MockDb::default();
        assert!(matches!(
            create_alert(
                &db,
                NewAlert {
                    title: " ".into(),
                    ..spill("admin")
                }
            ),
            Err(Error::Title)
        ));
        assert!(matches!(
            create_alert(
                &db,
                NewAlert {
                    message: "".into(),
                    ..spill("admin")
                }
            ),
            Err(Error::Message)
        ));
        assert!(matches!(
            create_alert(
                &db,
                NewAlert {
                    lat: -91.0,
                    ..spill("admin")
                }
            ),
            Err(Error::InvalidPosition)
        ));
        assert!(db.alerts.borrow().is_empty());
    }

    #[test]
    fn list_newest_alerts_first() {
        let db = MockDb::default();
        create_alert(&db, NewAlert { title: "first".into(), ..spill("admin") }).unwrap();
        create_alert(&db, NewAlert { title: "second".into(), ..spill("admin") }).unwrap();
        let titles: Vec<_> = load_alerts(&db).unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(vec!["second", "first"], titles);
    }
}
