use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, linked_property_ids, make_db, seeded_db, test_config};

#[test]
fn root_redirects_to_dashboard() {
    let db = seeded_db("root");
    let resp = handle(get("/"), &db, &test_config()).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/dashboard"
    );
}

#[test]
fn first_page_shows_five_rows() {
    let db = seeded_db("firstpage");
    let mut resp = handle(get("/dashboard"), &db, &test_config()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert_eq!(linked_property_ids(&body), vec![1, 2, 3, 4, 5]);
    assert!(body.contains("12</strong> matching properties"));
    assert!(body.contains("page 1 of 3"));
}

#[test]
fn page_two_continues_where_page_one_stopped() {
    let db = seeded_db("secondpage");
    let mut resp = handle(get("/dashboard?page=2"), &db, &test_config()).unwrap();
    let body = body_string(&mut resp);
    assert_eq!(linked_property_ids(&body), vec![6, 7, 8, 9, 10]);
}

#[test]
fn city_filter_is_case_insensitive_and_substring() {
    let db = seeded_db("cityfilter");
    let mut resp = handle(get("/dashboard?city=aus"), &db, &test_config()).unwrap();
    let body = body_string(&mut resp);
    assert_eq!(linked_property_ids(&body), vec![1, 2, 3, 12]);
    assert!(!body.contains("Dallas"));
}

#[test]
fn filters_combine_conjunctively() {
    let db = seeded_db("conjunction");
    let mut resp = handle(
        get("/dashboard?city=houston&min_price=300&property_type=house"),
        &db,
        &test_config(),
    )
    .unwrap();
    let body = body_string(&mut resp);
    assert_eq!(linked_property_ids(&body), vec![8, 10]);
}

#[test]
fn unparseable_price_bound_is_ignored() {
    let db = seeded_db("badbound");
    let mut resp = handle(
        get("/dashboard?min_price=abc&bedrooms=5"),
        &db,
        &test_config(),
    )
    .unwrap();
    let body = body_string(&mut resp);
    // The broken bound filters nothing; the bedrooms filter still applies.
    assert_eq!(linked_property_ids(&body), vec![11]);
}

#[test]
fn query_params_are_percent_decoded_before_filtering() {
    let db = seeded_db("decoding");
    // %41 is "A"; the undecoded string would match nothing.
    let mut resp = handle(get("/dashboard?city=%41ustin"), &db, &test_config()).unwrap();
    let body = body_string(&mut resp);
    assert_eq!(linked_property_ids(&body), vec![1, 2, 3, 12]);
}

#[test]
fn page_past_the_end_renders_empty_not_error() {
    let db = seeded_db("pastend");
    // city=aus filters to 4 rows, one page.
    let mut resp = handle(get("/dashboard?city=aus&page=3"), &db, &test_config()).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(linked_property_ids(&body).is_empty());
    assert!(body.contains("Nothing on this page."));
    assert!(body.contains("page 3 of 1"));
}

#[test]
fn non_numeric_page_is_a_bad_request() {
    let db = seeded_db("badpage");
    let err = handle(get("/dashboard?page=x"), &db, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(get("/dashboard?page=0"), &db, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn chart_shows_mean_price_per_city() {
    let db = seeded_db("chart");
    let mut resp = handle(get("/dashboard?city=Austin"), &db, &test_config()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Average Price by City"));
    // Austin: (100 + 200 + 300 + 260) / 4
    assert!(body.contains("$215"));
}

#[test]
fn empty_dataset_renders_without_chart_or_pages() {
    let db = make_db("empty");
    let mut resp = handle(get("/dashboard"), &db, &test_config()).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("0</strong> matching properties"));
    assert!(!body.contains("Average Price by City"));
    assert!(!body.contains("page 1 of"));
}

#[test]
fn pagination_links_preserve_filters() {
    let db = seeded_db("pagerlinks");
    let mut resp = handle(get("/dashboard?city=a&page=2"), &db, &test_config()).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("/dashboard?city=a&amp;page=1"));
}

#[test]
fn unknown_route_is_not_found() {
    let db = seeded_db("unknown");
    let err = handle(get("/nope"), &db, &test_config()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
