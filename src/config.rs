use std::env;

/// Runtime settings. `Default` gives a working local setup; each field
/// can be overridden through an environment variable of the same name
/// (uppercased, PROPBOARD_ prefix).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Schema applied at startup.
    pub schema_path: String,
    /// CSV used to seed the properties table when it is empty.
    pub seed_path: String,
    /// Shared password for the agent area.
    pub agent_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            db_path: "propboard.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            seed_path: "data/properties.csv".to_string(),
            agent_password: "letmein".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            bind_addr: env_or("PROPBOARD_BIND_ADDR", base.bind_addr),
            db_path: env_or("PROPBOARD_DB_PATH", base.db_path),
            schema_path: env_or("PROPBOARD_SCHEMA_PATH", base.schema_path),
            seed_path: env_or("PROPBOARD_SEED_PATH", base.seed_path),
            agent_password: env_or("PROPBOARD_AGENT_PASSWORD", base.agent_password),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    match env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => default,
    }
}
