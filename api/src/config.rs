use std::env;

#[derive(Clone)]
pub struct Config {
    /// Tracing filter directive, e.g. "info,user_api=debug"
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| "info,user_api=debug".to_string()),
        }
    }
}
