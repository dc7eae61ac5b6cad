use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,

    /// Base URL of the remote attendance API, without a trailing slash
    pub api_base_url: String,
    pub login_path: String,
    pub register_path: String,

    pub session_file: String,
    pub log_dir: String,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,
    pub rate_protected_per_min: u32,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var_or(key, default)
        .parse()
        .with_context(|| format!("{key} must be a valid number"))
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:3000"),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            // some deployments expose /authenticate and /addemployee instead
            login_path: normalize_path(var_or("LOGIN_PATH", "/login")),
            register_path: normalize_path(var_or("REGISTER_PATH", "/register")),

            session_file: var_or("SESSION_FILE", "session.json"),
            log_dir: var_or("LOG_DIR", "logs"),

            rate_login_per_min: parse_or("RATE_LOGIN_PER_MIN", "60")?,
            rate_register_per_min: parse_or("RATE_REGISTER_PER_MIN", "30")?,
            rate_protected_per_min: parse_or("RATE_PROTECTED_PER_MIN", "1000")?,
        })
    }

    /// Config pointing at the given backend with default paths and limits.
    pub fn for_backend(api_base_url: &str, session_file: &str) -> Self {
        Self {
            server_addr: "127.0.0.1:3000".to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            login_path: "/login".to_string(),
            register_path: "/register".to_string(),
            session_file: session_file.to_string(),
            log_dir: "logs".to_string(),
            rate_login_per_min: 60,
            rate_register_per_min: 30,
            rate_protected_per_min: 1000,
        }
    }
}
