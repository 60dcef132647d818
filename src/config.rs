use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// File backing the session slot. Sessions stay in memory when unset.
    #[serde(default)]
    pub session_file: Option<PathBuf>,

    /// Recommendations returned when a request does not ask for a limit
    #[serde(default = "default_recommendation_limit")]
    pub default_recommendation_limit: usize,

    /// Recommendations shown on the dashboard
    #[serde(default = "default_dashboard_limit")]
    pub dashboard_recommendation_limit: usize,

    /// Artificial delay before login and dashboard scoring, in milliseconds
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recommendation_limit() -> usize {
    crate::services::scoring::DEFAULT_LIMIT
}

fn default_dashboard_limit() -> usize {
    9
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_file: None,
            default_recommendation_limit: default_recommendation_limit(),
            dashboard_recommendation_limit: default_dashboard_limit(),
            simulated_latency_ms: 0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
