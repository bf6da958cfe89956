use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::db::properties;
use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;
use astra::{Body, Request, Response};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh file-backed test database using the production schema.
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "propboard_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("failed to initialize test db");
    db
}

pub fn test_config() -> AppConfig {
    AppConfig {
        agent_password: "sesame".to_string(),
        ..AppConfig::default()
    }
}

pub fn seed_properties(db: &Database, records: &[PropertyRecord]) {
    db.with_conn(|conn| {
        for record in records {
            properties::insert(conn, record).map_err(ServerError::from)?;
        }
        Ok(())
    })
    .expect("failed to seed test properties");
}

pub fn sample_record(
    id: i64,
    city: &str,
    price: f64,
    bedrooms: i64,
    property_type: &str,
) -> PropertyRecord {
    PropertyRecord {
        id,
        address: Some(format!("{id} Test Ln")),
        city: Some(city.to_string()),
        price: Some(price),
        bedrooms: Some(bedrooms),
        bathrooms: Some(2.0),
        sqft: Some(1400),
        year_built: Some(2001),
        property_type: Some(property_type.to_string()),
    }
}

/// Twelve rows across three cities; Austin holds the 100/200/300 trio
/// the aggregation tests key on.
pub fn seeded_db(tag: &str) -> Database {
    let db = make_db(tag);
    seed_properties(
        &db,
        &[
            sample_record(1, "Austin", 100.0, 2, "Condo"),
            sample_record(2, "Austin", 200.0, 3, "House"),
            sample_record(3, "Austin", 300.0, 4, "House"),
            sample_record(4, "Dallas", 150.0, 2, "Condo"),
            sample_record(5, "Dallas", 450.0, 4, "House"),
            sample_record(6, "Dallas", 240.0, 3, "Townhouse"),
            sample_record(7, "Houston", 275.0, 3, "Townhouse"),
            sample_record(8, "Houston", 320.0, 4, "House"),
            sample_record(9, "Houston", 195.0, 2, "Condo"),
            sample_record(10, "Houston", 410.0, 4, "House"),
            sample_record(11, "Dallas", 510.0, 5, "House"),
            sample_record(12, "Austin", 260.0, 3, "Townhouse"),
        ],
    );
    db
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn get_with_cookie(path: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .header("Cookie", cookie)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_form(path: &str, body: &str) -> Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn post_form_with_cookie(path: &str, body: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Cookie", cookie)
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("failed to read response body");
    String::from_utf8(bytes).expect("response body was not utf-8")
}

/// Property ids linked from a rendered page, in document order.
pub fn linked_property_ids(body: &str) -> Vec<i64> {
    let mut ids = Vec::new();
    for part in body.split("href=\"/property/").skip(1) {
        let end = part.find('"').unwrap_or(0);
        if let Ok(id) = part[..end].parse::<i64>() {
            ids.push(id);
        }
    }
    ids
}
