mod agent_dashboard;
mod agent_login;
mod dashboard;
mod lead_thanks;
mod property_detail;

pub use agent_dashboard::agent_dashboard_page;
pub use agent_login::agent_login_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use lead_thanks::lead_thanks_page;
pub use property_detail::property_detail_page;
