use crate::db::connection::Database;
use crate::db::properties;
use crate::domain::property::{PropertyRecord, COLUMNS};
use crate::errors::ServerError;
use std::fs;
use std::path::Path;

/// Seeds the properties table from a CSV file. A row without a
/// parseable id, or with an id the primary key rejects, is logged and
/// skipped; one bad line does not abort the rest of the file. Returns
/// the number of rows imported.
pub fn import_properties_csv(db: &Database, path: &str) -> Result<usize, ServerError> {
    if !Path::new(path).exists() {
        log::warn!("seed file {path} not found, starting with an empty dataset");
        return Ok(0);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| ServerError::DataUnavailable(format!("failed to read {path}: {e}")))?;

    let mut lines = text.lines();
    let header = match lines.next() {
        Some(line) => parse_line(line),
        None => return Ok(0),
    };
    if header.len() != COLUMNS.len()
        || !header.iter().zip(COLUMNS.iter()).all(|(h, c)| h.as_str() == *c)
    {
        return Err(ServerError::DataUnavailable(format!(
            "unexpected seed header in {path}: {header:?}"
        )));
    }

    let mut imported = 0usize;
    db.with_conn(|conn| {
        for (offset, line) in lines.enumerate() {
            // Header is line 1, first data row is line 2.
            let lineno = offset + 2;
            if line.trim().is_empty() {
                continue;
            }
            let record = match record_from_line(line) {
                Some(record) => record,
                None => {
                    log::warn!("seed line {lineno}: no parseable id, row skipped");
                    continue;
                }
            };
            match properties::insert(conn, &record) {
                Ok(()) => imported += 1,
                Err(e) => log::warn!("seed line {lineno}: insert failed ({e}), row skipped"),
            }
        }
        Ok(())
    })?;

    log::info!("imported {imported} properties from {path}");
    Ok(imported)
}

fn record_from_line(line: &str) -> Option<PropertyRecord> {
    let fields = parse_line(line);
    let get = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
    let id = get(0).trim().parse::<i64>().ok()?;
    Some(PropertyRecord {
        id,
        address: non_empty(get(1)),
        city: non_empty(get(2)),
        price: get(3).trim().parse().ok(),
        bedrooms: get(4).trim().parse().ok(),
        bathrooms: get(5).trim().parse().ok(),
        sqft: get(6).trim().parse().ok(),
        year_built: get(7).trim().parse().ok(),
        property_type: non_empty(get(8)),
    })
}

fn non_empty(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Splits one CSV line, honoring double-quoted fields with doubled
/// inner quotes. Fields spanning multiple lines are not supported; the
/// seed and export formats never produce them.
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
