use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

/// One captured lead. The table is insert-only; nothing updates or
/// deletes a row once written.
#[derive(Debug, Clone)]
pub struct Lead {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub email: String,
    pub submitted_at: NaiveDateTime,
}

pub fn insert(
    conn: &Connection,
    property_id: i64,
    name: &str,
    email: &str,
    submitted_at: NaiveDateTime,
) -> Result<(), ServerError> {
    conn.execute(
        "INSERT INTO leads (property_id, name, email, submitted_at) VALUES (?1, ?2, ?3, ?4)",
        params![property_id, name, email, submitted_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;
    Ok(())
}

/// All captured leads, newest first, for the agent dashboard.
pub fn list_all(conn: &Connection) -> Result<Vec<Lead>, ServerError> {
    let mut stmt = conn.prepare(
        "SELECT id, property_id, name, email, submitted_at FROM leads ORDER BY id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Lead {
            id: row.get(0)?,
            property_id: row.get(1)?,
            name: row.get(2)?,
            email: row.get(3)?,
            submitted_at: row.get(4)?,
        })
    })?;

    let mut leads = Vec::new();
    for lead in rows {
        leads.push(lead?);
    }
    Ok(leads)
}
