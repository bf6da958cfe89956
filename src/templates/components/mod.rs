pub mod chart;

pub use chart::price_chart;
