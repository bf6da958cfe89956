use crate::domain::property::PropertyRecord;
use crate::domain::query::{CityAverage, FilterParams};
use crate::templates::components::price_chart;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    /// Raw filter values, echoed into the form and into every link
    /// that must keep the filters (pagination, export).
    pub params: FilterParams,
    /// The current page slice, not the full filtered set.
    pub rows: Vec<PropertyRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub averages: Vec<CityAverage>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Property Dashboard",
        html! {
            main class="container" {
                h1 { "Property Listings" }

                (filter_form(&vm.params))

                section class="card" {
                    p {
                        strong { (vm.total_matches) } " matching properties"
                        @if vm.total_pages > 0 {
                            " (page " (vm.page) " of " (vm.total_pages) ")"
                        }
                    }

                    @if vm.rows.is_empty() {
                        @if vm.total_matches == 0 {
                            p { "No properties match the current filters." }
                        } @else {
                            p { "Nothing on this page." }
                        }
                    } @else {
                        (listing_table(&vm.rows))
                    }

                    (pagination(vm))

                    p {
                        a href=(format!("/export?{}", vm.params.query_string(None))) {
                            "Export filtered CSV"
                        }
                    }
                }

                @if !vm.averages.is_empty() {
                    (price_chart(&vm.averages))
                }
            }
        },
    )
}

fn filter_form(params: &FilterParams) -> Markup {
    html! {
        section class="card" {
            form method="get" action="/dashboard" class="filters" {
                label { "City"
                    input type="text" name="city" value=(params.city);
                }
                label { "Min price"
                    input type="text" name="min_price" value=(params.min_price);
                }
                label { "Max price"
                    input type="text" name="max_price" value=(params.max_price);
                }
                label { "Bedrooms"
                    input type="text" name="bedrooms" value=(params.bedrooms);
                }
                label { "Type"
                    input type="text" name="property_type" value=(params.property_type);
                }
                button type="submit" { "Apply" }
                a href="/dashboard" { "Reset" }
            }
        }
    }
}

fn listing_table(rows: &[PropertyRecord]) -> Markup {
    html! {
        table class="listings" {
            thead {
                tr {
                    th { "Id" }
                    th { "Address" }
                    th { "City" }
                    th { "Price" }
                    th { "Beds" }
                    th { "Baths" }
                    th { "Sqft" }
                    th { "Year" }
                    th { "Type" }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td { a href=(format!("/property/{}", row.id)) { (row.id) } }
                        td { (text(&row.address)) }
                        td { (text(&row.city)) }
                        td { (price(row.price)) }
                        td { (int(row.bedrooms)) }
                        td { (float(row.bathrooms)) }
                        td { (int(row.sqft)) }
                        td { (int(row.year_built)) }
                        td { (text(&row.property_type)) }
                    }
                }
            }
        }
    }
}

fn pagination(vm: &DashboardVm) -> Markup {
    html! {
        @if vm.total_pages > 1 {
            nav class="pager" {
                @if vm.page > 1 {
                    a href=(format!("/dashboard?{}", vm.params.query_string(Some(vm.page - 1)))) {
                        "Previous"
                    }
                }
                @if vm.page < vm.total_pages {
                    a href=(format!("/dashboard?{}", vm.params.query_string(Some(vm.page + 1)))) {
                        "Next"
                    }
                }
            }
        }
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn price(field: Option<f64>) -> String {
    field.map(|v| format!("${v:.0}")).unwrap_or_default()
}

fn float(field: Option<f64>) -> String {
    field.map(|v| v.to_string()).unwrap_or_default()
}

fn int(field: Option<i64>) -> String {
    field.map(|v| v.to_string()).unwrap_or_default()
}
