use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;
use std::collections::HashMap;
use url::form_urlencoded;

/// Rows shown per dashboard page.
pub const PAGE_SIZE: usize = 5;

/// Filter values exactly as they arrived in the query string. Kept
/// separate from the parsed criteria so the form can echo what the
/// visitor typed and so pagination/export links can carry the same
/// filters verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub city: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
    pub property_type: String,
}

impl FilterParams {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        Self {
            city: get("city"),
            min_price: get("min_price"),
            max_price: get("max_price"),
            bedrooms: get("bedrooms"),
            property_type: get("property_type"),
        }
    }

    /// Rebuilds the query string for links that must preserve the
    /// active filters. Empty fields are omitted; `page` is appended
    /// last when given.
    pub fn query_string(&self, page: Option<usize>) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (key, value) in [
            ("city", &self.city),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
            ("bedrooms", &self.bedrooms),
            ("property_type", &self.property_type),
        ] {
            if !value.is_empty() {
                ser.append_pair(key, value);
            }
        }
        if let Some(page) = page {
            ser.append_pair("page", &page.to_string());
        }
        ser.finish()
    }
}

/// Parsed predicates. A field is `None` when the parameter was absent,
/// empty, or failed to parse; an absent predicate filters nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<i64>,
    pub property_type: Option<String>,
}

impl FilterCriteria {
    /// The single place filter input becomes predicates. The dashboard
    /// and the CSV export both construct their criteria here, so the
    /// two views cannot disagree about what matched.
    pub fn parse(params: &FilterParams) -> Self {
        Self {
            city: non_empty(&params.city),
            min_price: params.min_price.parse().ok(),
            max_price: params.max_price.parse().ok(),
            bedrooms: params.bedrooms.parse().ok(),
            property_type: non_empty(&params.property_type),
        }
    }

    fn matches(&self, row: &PropertyRecord) -> bool {
        if let Some(city) = &self.city {
            if !contains_ci(row.city.as_deref(), city) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if !row.price.map_or(false, |p| p >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if !row.price.map_or(false, |p| p <= max) {
                return false;
            }
        }
        if let Some(bedrooms) = self.bedrooms {
            if row.bedrooms != Some(bedrooms) {
                return false;
            }
        }
        if let Some(kind) = &self.property_type {
            if !contains_ci(row.property_type.as_deref(), kind) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Case-insensitive substring test; a missing field never matches.
fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    match field {
        Some(haystack) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

/// Keeps the rows satisfying every active predicate, in their original
/// relative order.
pub fn apply_filters(rows: Vec<PropertyRecord>, criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    rows.into_iter().filter(|r| criteria.matches(r)).collect()
}

/// 1-based page selection over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub page: usize,
}

impl PageRequest {
    /// Missing input defaults to page 1. Unlike the filter bounds there
    /// is no silent fallback here: input that is not a positive integer
    /// is a BadRequest for the caller to surface.
    pub fn from_param(raw: Option<&str>) -> Result<Self, ServerError> {
        let page = match raw {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ServerError::BadRequest(format!(
                        "page must be a positive integer, got {raw:?}"
                    )))
                }
            },
        };
        Ok(Self { page })
    }
}

/// Returns the requested page slice and the total page count. An empty
/// input has zero pages; a page past the end is valid and yields an
/// empty slice.
pub fn paginate<'a>(
    rows: &'a [PropertyRecord],
    request: &PageRequest,
) -> (&'a [PropertyRecord], usize) {
    let total_pages = (rows.len() + PAGE_SIZE - 1) / PAGE_SIZE;
    let start = (request.page - 1).saturating_mul(PAGE_SIZE);
    if start >= rows.len() {
        return (&[], total_pages);
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    (&rows[start..end], total_pages)
}

/// One bar of the dashboard chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CityAverage {
    pub city: String,
    pub average_price: f64,
}

/// Mean price per city over the filtered rows, grouped by exact city
/// value (the city filter is case-insensitive, the grouping is not), in
/// first-seen order. Rows without a city are not grouped, rows without
/// a price do not contribute to the mean, and a city with no priced
/// rows is omitted entirely.
pub fn average_price_by_city(rows: &[PropertyRecord]) -> Vec<CityAverage> {
    let mut groups: Vec<(String, f64, u32)> = Vec::new();
    for row in rows {
        let (Some(city), Some(price)) = (&row.city, row.price) else {
            continue;
        };
        match groups.iter_mut().find(|(name, _, _)| name == city) {
            Some((_, sum, count)) => {
                *sum += price;
                *count += 1;
            }
            None => groups.push((city.clone(), price, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(city, sum, count)| CityAverage {
            city,
            average_price: sum / f64::from(count),
        })
        .collect()
}
