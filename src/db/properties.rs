use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str =
    "id, address, city, price, bedrooms, bathrooms, sqft, year_built, property_type";

/// Loads the full dataset in stable id order. This runs once per
/// request, so the dashboard always reflects the current table
/// contents; a failure here means the dataset is unavailable, not that
/// a filter misbehaved.
pub fn load_all(conn: &Connection) -> Result<Vec<PropertyRecord>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM properties ORDER BY id"
        ))
        .map_err(|e| ServerError::DataUnavailable(e.to_string()))?;

    let rows = stmt
        .query_map([], record_from_row)
        .map_err(|e| ServerError::DataUnavailable(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| ServerError::DataUnavailable(e.to_string()))?);
    }
    Ok(records)
}

/// Single-record lookup. The primary key makes the id unambiguous; a
/// miss is `Ok(None)`, never an arbitrary row.
pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<PropertyRecord>, ServerError> {
    conn.query_row(
        &format!("SELECT {SELECT_COLUMNS} FROM properties WHERE id = ?1"),
        params![id],
        record_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(e.to_string()))
}

pub fn count(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))
        .map_err(|e| ServerError::DbError(e.to_string()))
}

/// Inserts one record; the caller decides what a primary-key conflict
/// means (the seed importer logs and skips it).
pub fn insert(conn: &Connection, record: &PropertyRecord) -> rusqlite::Result<()> {
    conn.execute(
        r#"
        INSERT INTO properties
            (id, address, city, price, bedrooms, bathrooms, sqft, year_built, property_type)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
        params![
            record.id,
            record.address,
            record.city,
            record.price,
            record.bedrooms,
            record.bathrooms,
            record.sqft,
            record.year_built,
            record.property_type,
        ],
    )?;
    Ok(())
}

fn record_from_row(row: &Row) -> rusqlite::Result<PropertyRecord> {
    Ok(PropertyRecord {
        id: row.get(0)?,
        address: row.get(1)?,
        city: row.get(2)?,
        price: row.get(3)?,
        bedrooms: row.get(4)?,
        bathrooms: row.get(5)?,
        sqft: row.get(6)?,
        year_built: row.get(7)?,
        property_type: row.get(8)?,
    })
}
