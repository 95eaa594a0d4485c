//! Application Configuration
//!
//! Endpoint and storage names. The endpoint can be overridden at build time
//! with the `DIIA_ENDPOINT` environment variable.

/// Record endpoint used when `DIIA_ENDPOINT` is not set
pub const DEFAULT_ENDPOINT: &str = "https://rozigrish-diia-pranks-1.onrender.com/";
/// Query parameter carrying the identifier, both in the page URL and the request
pub const ID_PARAM: &str = "id";
/// Local storage key holding the saved signature
pub const SIGNATURE_KEY: &str = "signature";
/// Shown for any transport failure
pub const FALLBACK_MESSAGE: &str = "Не вдалося завантажити дані";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub id_param: String,
    pub signature_key: String,
    pub fallback_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            id_param: ID_PARAM.to_string(),
            signature_key: SIGNATURE_KEY.to_string(),
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults plus any build-time overrides
    pub fn from_build_env() -> Self {
        Self::default().with_endpoint_override(option_env!("DIIA_ENDPOINT"))
    }

    fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.endpoint = endpoint.to_string();
        }
        self
    }
}
