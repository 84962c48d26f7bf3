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

    /// CSV file backing the feedback ledger. Empty selects the in-memory ledger.
    #[serde(default = "default_feedback_path")]
    pub feedback_path: String,

    /// Number of recommendations returned when a request omits `k`
    #[serde(default = "default_k")]
    pub default_k: i64,

    /// YouTube Data API key; external search is disabled without it
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    /// YouTube Data API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Maximum number of external search results per request
    #[serde(default = "default_external_result_limit")]
    pub external_result_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_feedback_path() -> String {
    "feedback.csv".to_string()
}

fn default_k() -> i64 {
    3
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_external_result_limit() -> usize {
    3
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
