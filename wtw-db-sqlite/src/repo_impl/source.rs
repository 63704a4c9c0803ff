use super::*;

impl<'a> WaterSourceRepo for DbReadWrite<'a> {
    fn create_water_source(&self, source: WaterSource) -> Result<()> {
        create_water_source(&mut self.conn.borrow_mut(), source)
    }
    fn get_water_source(&self, id: &str) -> Result<WaterSource> {
        get_water_source(&mut self.conn.borrow_mut(), id)
    }
    fn all_water_sources(&self) -> Result<Vec<WaterSource>> {
        all_water_sources(&mut self.conn.borrow_mut())
    }
    fn count_water_sources(&self) -> Result<usize> {
        count_water_sources(&mut self.conn.borrow_mut())
    }
    fn set_admin_override(&self, id: &str, label: Option<QualityLabel>) -> Result<()> {
        set_admin_override(&mut self.conn.borrow_mut(), id, label)
    }
}

impl<'a> WaterSourceRepo for DbConnection<'a> {
    fn create_water_source(&self, source: WaterSource) -> Result<()> {
        create_water_source(&mut self.conn.borrow_mut(), source)
    }
    fn get_water_source(&self, id: &str) -> Result<WaterSource> {
        get_water_source(&mut self.conn.borrow_mut(), id)
    }
    fn all_water_sources(&self) -> Result<Vec<WaterSource>> {
        all_water_sources(&mut self.conn.borrow_mut())
    }
    fn count_water_sources(&self) -> Result<usize> {
        count_water_sources(&mut self.conn.borrow_mut())
    }
    fn set_admin_override(&self, id: &str, label: Option<QualityLabel>) -> Result<()> {
        set_admin_override(&mut self.conn.borrow_mut(), id, label)
    }
}

impl<'a> WaterSourceRepo for DbReadOnly<'a> {
    fn create_water_source(&self, _source: WaterSource) -> Result<()> {
        unreachable!();
    }
    fn get_water_source(&self, id: &str) -> Result<WaterSource> {
        get_water_source(&mut self.conn.borrow_mut(), id)
    }
    fn all_water_sources(&self) -> Result<Vec<WaterSource>> {
        all_water_sources(&mut self.conn.borrow_mut())
    }
    fn count_water_sources(&self) -> Result<usize> {
        count_water_sources(&mut self.conn.borrow_mut())
    }
    fn set_admin_override(&self, _id: &str, _label: Option<QualityLabel>) -> Result<()> {
        unreachable!();
    }
}

fn create_water_source(conn: &mut SqliteConnection, source: WaterSource) -> Result<()> {
    let WaterSource {
        id,
        created_at,
        created_by,
        name,
        pos,
        source_type,
        classification,
        notes,
        photo,
        admin_override,
    } = source;
    let new_water_source = models::NewWaterSource {
        id: id.as_str(),
        created_at: created_at.as_millis(),
        created_by: &created_by,
        name: &name,
        lat: pos.lat(),
        lon: pos.lng(),
        source_type: source_type.as_ref(),
        quality_label: classification.as_ref().map(|c| c.label.as_ref()),
        confidence: classification.map(|c| c.confidence.into()),
        notes: &notes,
        photo: photo.as_deref(),
        admin_override: admin_override.as_ref().map(AsRef::as_ref),
    };
    let _count = diesel::insert_into(schema::water_source::table)
        .values(&new_water_source)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_water_source(
    source: models::WaterSource,
    photo: Option<String>,
) -> Result<WaterSource> {
    let models::WaterSource {
        rowid: _,
        id,
        created_at,
        created_by,
        name,
        lat,
        lon,
        source_type,
        quality_label,
        confidence,
        notes,
        admin_override,
    } = source;
    let classification = match (quality_label, confidence) {
        (Some(label), Some(confidence)) => Some(Classification {
            label: load_quality_label(&label)?,
            confidence: Confidence::try_new(confidence)
                .ok_or_else(|| anyhow!("Invalid confidence: {confidence}"))?,
        }),
        (None, None) => None,
        _ => {
            // Prevented by a table constraint
            return Err(anyhow!("Incomplete classification of water source {id}").into());
        }
    };
    Ok(WaterSource {
        id: id.into(),
        created_at: Timestamp::from_millis(created_at),
        created_by,
        name,
        pos: load_map_point(lat, lon)?,
        source_type: source_type
            .parse()
            .map_err(|_| anyhow!("Invalid source type: {source_type}"))?,
        classification,
        notes,
        photo,
        admin_override: admin_override
            .as_deref()
            .map(load_quality_label)
            .transpose()?,
    })
}

fn get_water_source(conn: &mut SqliteConnection, id: &str) -> Result<WaterSource> {
    use schema::water_source::dsl;
    let (source, photo) = schema::water_source::table
        .select((
            (
                dsl::rowid,
                dsl::id,
                dsl::created_at,
                dsl::created_by,
                dsl::name,
                dsl::lat,
                dsl::lon,
                dsl::source_type,
                dsl::quality_label,
                dsl::confidence,
                dsl::notes,
                dsl::admin_override,
            ),
            dsl::photo,
        ))
        .filter(dsl::id.eq(id))
        .first::<(models::WaterSource, Option<String>)>(conn)
        .map_err(from_diesel_err)?;
    load_water_source(source, photo)
}

fn all_water_sources(conn: &mut SqliteConnection) -> Result<Vec<WaterSource>> {
    use schema::water_source::dsl;
    schema::water_source::table
        .select((
            dsl::rowid,
            dsl::id,
            dsl::created_at,
            dsl::created_by,
            dsl::name,
            dsl::lat,
            dsl::lon,
            dsl::source_type,
            dsl::quality_label,
            dsl::confidence,
            dsl::notes,
            dsl::admin_override,
        ))
        .order_by(dsl::rowid)
        .load::<models::WaterSource>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|source| load_water_source(source, None))
        .collect()
}

fn count_water_sources(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::water_source::dsl;
    Ok(schema::water_source::table
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn set_admin_override(
    conn: &mut SqliteConnection,
    id: &str,
    label: Option<QualityLabel>,
) -> Result<()> {
    use schema::water_source::dsl;
    let label: Option<&str> = label.as_ref().map(AsRef::as_ref);
    let count = diesel::update(schema::water_source::table.filter(dsl::id.eq(id)))
        .set(dsl::admin_override.eq(label))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
