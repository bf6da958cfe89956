pub mod cookies;
pub mod sessions;
