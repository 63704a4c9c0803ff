use super::*;

impl<'a> AlertRepo for DbReadWrite<'a> {
    fn create_alert(&self, alert: Alert) -> Result<()> {
        create_alert(&mut self.conn.borrow_mut(), alert)
    }
    fn all_alerts(&self) -> Result<Vec<Alert>> {
        all_alerts(&mut self.conn.borrow_mut())
    }
}

impl<'a> AlertRepo for DbConnection<'a> {
    fn create_alert(&self, alert: Alert) -> Result<()> {
        create_alert(&mut self.conn.borrow_mut(), alert)
    }
    fn all_alerts(&self) -> Result<Vec<Alert>> {
        all_alerts(&mut self.conn.borrow_mut())
    }
}

impl<'a> AlertRepo for DbReadOnly<'a> {
    fn create_alert(&self, _alert: Alert) -> Result<()> {
        unreachable!();
    }
    fn all_alerts(&self) -> Result<Vec<Alert>> {
        all_alerts(&mut self.conn.borrow_mut())
    }
}

fn create_alert(conn: &mut SqliteConnection, alert: Alert) -> Result<()> {
    let Alert {
        id,
        created_at,
        created_by,
        title,
        message,
        pos,
    } = alert;
    let new_hazard_alert = models::NewHazardAlert {
        id: id.as_str(),
        created_at: created_at.as_millis(),
        created_by: &created_by,
        title: &title,
        message: &message,
        lat: pos.lat(),
        lon: pos.lng(),
    };
    let _count = diesel::insert_into(schema::hazard_alert::table)
        .values(&new_hazard_alert)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn all_alerts(conn: &mut SqliteConnection) -> Result<Vec<Alert>> {
    use schema::hazard_alert::dsl;
    schema::hazard_alert::table
        .order_by(dsl::rowid)
        .load::<models::HazardAlert>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::HazardAlert {
                 rowid: _,
                 id,
                 created_at,
                 created_by,
                 title,
                 message,
                 lat,
                 lon,
             }| {
                Ok(Alert {
                    id: id.into(),
                    created_at: Timestamp::from_millis(created_at),
                    created_by,
                    title,
                    message,
                    pos: load_map_point(lat, lon)?,
                })
            },
        )
        .collect()
}
