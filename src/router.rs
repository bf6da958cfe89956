use crate::auth::{cookies, sessions};
use crate::config::AppConfig;
use crate::db::connection::Database;
use crate::db::{leads, properties};
use crate::domain::export;
use crate::domain::query::{self, FilterCriteria, FilterParams, PageRequest};
use crate::errors::ServerError;
use crate::responses::{
    csv_response, css_response, html_response, redirect, redirect_with_cookie, ResultResp,
};
use crate::templates::pages;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

pub fn handle(mut req: Request, db: &Database, cfg: &AppConfig) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect("/dashboard"),
        ("GET", "/dashboard") => dashboard(&req, db),
        ("GET", "/export") => export_filtered_csv(&req, db),
        ("GET", "/agent-login") => html_response(pages::agent_login_page(false)),
        ("POST", "/agent-login") => agent_login(&mut req, db, cfg),
        ("GET", "/agent-dashboard") => agent_dashboard(&req, db),
        ("POST", "/agent-logout") => agent_logout(&req, db),
        ("GET", "/static/main.css") => css_response(include_str!("../static/main.css")),
        _ => {
            if method == "GET" {
                if let Some(raw_id) = path.strip_prefix("/property/") {
                    return property_detail(db, raw_id);
                }
            }
            if method == "POST" {
                if let Some(raw_id) = path.strip_prefix("/lead/") {
                    return capture_lead(&mut req, db, raw_id);
                }
            }
            Err(ServerError::NotFound)
        }
    }
}

/// The main listing view: filters, page slice, aggregate chart. The
/// dataset is reloaded on every request, so edits to the table show up
/// immediately.
fn dashboard(req: &Request, db: &Database) -> ResultResp {
    let query_params = parse_query(req);
    let params = FilterParams::from_query(&query_params);
    let criteria = FilterCriteria::parse(&params);
    let page_request = PageRequest::from_param(query_params.get("page").map(String::as_str))?;

    let dataset = db.with_conn(|conn| properties::load_all(conn))?;
    let filtered = query::apply_filters(dataset, &criteria);
    let averages = query::average_price_by_city(&filtered);
    let (slice, total_pages) = query::paginate(&filtered, &page_request);

    let vm = pages::DashboardVm {
        rows: slice.to_vec(),
        page: page_request.page,
        total_pages,
        total_matches: filtered.len(),
        averages,
        params,
    };
    html_response(pages::dashboard_page(&vm))
}

/// CSV download of the filtered (never paginated) rows. Criteria are
/// parsed through the same routine the dashboard uses, so both views
/// always agree on what matched.
fn export_filtered_csv(req: &Request, db: &Database) -> ResultResp {
    let query_params = parse_query(req);
    let params = FilterParams::from_query(&query_params);
    let criteria = FilterCriteria::parse(&params);

    let dataset = db.with_conn(|conn| properties::load_all(conn))?;
    let filtered = query::apply_filters(dataset, &criteria);

    csv_response(export::to_csv(&filtered), "filtered_properties.csv")
}

fn property_detail(db: &Database, raw_id: &str) -> ResultResp {
    let id: i64 = raw_id.parse().map_err(|_| ServerError::NotFound)?;
    let record = db
        .with_conn(|conn| properties::find_by_id(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(pages::property_detail_page(&record))
}

fn capture_lead(req: &mut Request, db: &Database, raw_id: &str) -> ResultResp {
    let property_id: i64 = raw_id.parse().map_err(|_| ServerError::NotFound)?;
    let form = parse_form_body(req)?;
    let name = required_field(&form, "name")?;
    let email = required_field(&form, "email")?;

    let submitted_at = chrono::Utc::now().naive_utc();
    db.with_conn(|conn| leads::insert(conn, property_id, &name, &email, submitted_at))?;
    log::info!("lead captured for property {property_id}");

    html_response(pages::lead_thanks_page(property_id))
}

fn agent_login(req: &mut Request, db: &Database, cfg: &AppConfig) -> ResultResp {
    let form = parse_form_body(req)?;
    let submitted = form.get("password").map(String::as_str).unwrap_or("");

    if !sessions::verify_password(submitted, &cfg.agent_password) {
        return html_response(pages::agent_login_page(true));
    }

    let now = sessions::now_unix();
    let token = db.with_conn(|conn| sessions::create_session(conn, now))?;
    redirect_with_cookie(
        "/agent-dashboard",
        &cookies::session_cookie(&token, sessions::SESSION_TTL_SECS),
    )
}

/// The lead list, gated on a live session. No session, an expired one,
/// or a revoked one all land back on the login form.
fn agent_dashboard(req: &Request, db: &Database) -> ResultResp {
    let Some(token) = cookies::session_token(cookie_header(req)) else {
        return redirect("/agent-login");
    };
    let now = sessions::now_unix();
    if !db.with_conn(|conn| sessions::session_is_live(conn, &token, now))? {
        return redirect("/agent-login");
    }

    let all_leads = db.with_conn(|conn| leads::list_all(conn))?;
    html_response(pages::agent_dashboard_page(&all_leads))
}

fn agent_logout(req: &Request, db: &Database) -> ResultResp {
    if let Some(token) = cookies::session_token(cookie_header(req)) {
        let now = sessions::now_unix();
        db.with_conn(|conn| sessions::revoke_session(conn, &token, now))?;
    }
    redirect_with_cookie("/agent-login", &cookies::clear_session_cookie())
}

fn cookie_header(req: &Request) -> Option<&str> {
    req.headers().get("Cookie").and_then(|v| v.to_str().ok())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    }
}

fn parse_form_body(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|_| ServerError::BadRequest("unreadable request body".into()))?;
    Ok(form_urlencoded::parse(&bytes).into_owned().collect())
}

fn required_field(form: &HashMap<String, String>, name: &str) -> Result<String, ServerError> {
    match form.get(name).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ServerError::BadRequest(format!("missing form field: {name}"))),
    }
}
