use crate::router::handle;
use crate::tests::utils::{body_string, get, linked_property_ids, seeded_db, test_config};

fn csv_ids(csv: &str) -> Vec<i64> {
    csv.lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .filter_map(|field| field.parse().ok())
        .collect()
}

#[test]
fn export_is_a_csv_attachment() {
    let db = seeded_db("exportheaders");
    let resp = handle(get("/export"), &db, &test_config()).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/csv"));

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.contains("filtered_properties.csv"));
}

#[test]
fn export_contains_all_filtered_rows_not_one_page() {
    let db = seeded_db("exportall");
    let mut resp = handle(get("/export"), &db, &test_config()).unwrap();
    let csv = body_string(&mut resp);

    assert_eq!(
        csv.lines().next().unwrap(),
        "id,address,city,price,bedrooms,bathrooms,sqft,year_built,property_type"
    );
    // All 12 rows, while the dashboard would page after 5.
    assert_eq!(csv_ids(&csv), (1..=12).collect::<Vec<i64>>());
}

#[test]
fn export_and_dashboard_agree_on_what_matched() {
    let db = seeded_db("parity");
    let query = "city=a&min_price=150&property_type=house";

    let mut csv_resp = handle(get(&format!("/export?{query}")), &db, &test_config()).unwrap();
    let exported = csv_ids(&body_string(&mut csv_resp));

    // Walk every dashboard page for the same criteria and collect the
    // rendered ids.
    let mut rendered = Vec::new();
    let mut page = 1;
    loop {
        let path = format!("/dashboard?{query}&page={page}");
        let mut resp = handle(get(&path), &db, &test_config()).unwrap();
        let ids = linked_property_ids(&body_string(&mut resp));
        if ids.is_empty() {
            break;
        }
        rendered.extend(ids);
        page += 1;
    }

    assert!(!exported.is_empty());
    assert_eq!(exported, rendered);
}

#[test]
fn export_skips_unparseable_bounds_like_the_dashboard() {
    let db = seeded_db("exportskip");
    let mut with_junk = handle(get("/export?max_price=oops"), &db, &test_config()).unwrap();
    let mut without = handle(get("/export"), &db, &test_config()).unwrap();
    assert_eq!(body_string(&mut with_junk), body_string(&mut without));
}
