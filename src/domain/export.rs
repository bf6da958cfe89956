use crate::domain::property::{PropertyRecord, COLUMNS};

/// Serializes filtered rows (never a page slice) back to CSV for
/// download: fixed header, one line per row, blank cells for missing
/// values. The caller is responsible for having filtered the rows
/// through the same criteria the dashboard used.
pub fn to_csv(rows: &[PropertyRecord]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for row in rows {
        let fields = [
            row.id.to_string(),
            text(&row.address),
            text(&row.city),
            float(row.price),
            int(row.bedrooms),
            float(row.bathrooms),
            int(row.sqft),
            int(row.year_built),
            text(&row.property_type),
        ];
        let escaped: Vec<String> = fields.iter().map(|f| escape(f)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

fn int(field: Option<i64>) -> String {
    field.map(|v| v.to_string()).unwrap_or_default()
}

fn float(field: Option<f64>) -> String {
    field.map(|v| v.to_string()).unwrap_or_default()
}

/// Minimal quoting: only fields containing a comma, quote, or newline
/// are wrapped, with inner quotes doubled.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
