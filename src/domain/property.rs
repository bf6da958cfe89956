/// One listing row as served to the dashboard, the detail view, and the
/// CSV export. Only the id is mandatory: every other column may be
/// absent in the underlying data, in which case it renders blank and
/// never matches a filter over that field.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub id: i64,
    pub address: Option<String>,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub sqft: Option<i64>,
    pub year_built: Option<i64>,
    pub property_type: Option<String>,
}

/// Column order shared by the seed importer and the CSV export.
pub const COLUMNS: [&str; 9] = [
    "id",
    "address",
    "city",
    "price",
    "bedrooms",
    "bathrooms",
    "sqft",
    "year_built",
    "property_type",
];
