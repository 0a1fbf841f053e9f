use std::env;
use std::sync::Arc;

pub const DEFAULT_PRODUCTS_URL: &str = "https://api.vercel.app/products";
const DEFAULT_PORT: u16 = 3000;

/// Settings read once per cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub products_url: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let products_url = match env::var("PRODUCTS_URL") {
            Ok(url) if !url.trim().is_empty() => {
                tracing::info!(%url, "Using PRODUCTS_URL override for product proxy");
                url
            }
            _ => DEFAULT_PRODUCTS_URL.to_string(),
        };

        let port = match env::var("PORT").map(|p| p.parse::<u16>()) {
            Ok(Ok(port)) => port,
            Ok(Err(e)) => {
                tracing::warn!("Ignoring invalid PORT: {e}");
                DEFAULT_PORT
            }
            Err(_) => DEFAULT_PORT,
        };

        Self { products_url, port }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
