pub const DEFAULT_COMPLETIONS_URL: &str = "http://127.0.0.1:5000/v1/completions";

// Sampling parameters sent with every completion request.
pub const MAX_TOKENS: u16 = 200;
pub const TEMPERATURE: f64 = 1.0;
pub const TOP_P: f64 = 0.9;

#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    /// Full URL of the upstream `/v1/completions` endpoint.
    pub completions_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            completions_url: DEFAULT_COMPLETIONS_URL.to_string(),
        }
    }
}
