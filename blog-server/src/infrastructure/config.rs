use anyhow::{anyhow, Context};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub http_port: u16,
    pub static_dir: PathBuf,
    pub seed_posts: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let http_port = lookup("HTTP_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .context("invalid HTTP_PORT")?;
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));
        let seed_posts = match lookup("SEED_POSTS") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| anyhow!("invalid SEED_POSTS: {}", value))?,
            None => true,
        };
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:8000,http://127.0.0.1:8000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            http_port,
            static_dir,
            seed_posts,
            cors_allowed_origins,
        })
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
