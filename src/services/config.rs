use std::env;

const ENDPOINT_ENV: &str = "AGE_LENSE_ENDPOINT";
const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict/custom";

/// Settings injected into the prediction client at construction.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub endpoint_url: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        PredictorConfig {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl PredictorConfig {
    /// Load at startup: env override on top of the compiled-in default.
    pub fn load() -> Self {
        let endpoint_url = env::var(ENDPOINT_ENV).unwrap_or_else(|_| {
            log::info!(
                "{} not set, using default endpoint: {}",
                ENDPOINT_ENV,
                DEFAULT_ENDPOINT
            );
            DEFAULT_ENDPOINT.to_string()
        });

        PredictorConfig { endpoint_url }
    }
}
