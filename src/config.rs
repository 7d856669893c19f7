use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, read once at startup and passed into the
/// components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub serving_host: String,
    pub serving_port: u16,
    pub serving_model: String,
    pub request_timeout: Duration,
    pub media_root: PathBuf,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let serving_host =
            env::var("TF_SERVING_HOST").unwrap_or_else(|_| "localhost".to_string());
        let serving_port = env::var("TF_SERVING_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8501);
        let serving_model = env::var("TF_SERVING_MODEL_NAME")
            .unwrap_or_else(|_| "leaf_disease_model".to_string());
        let timeout_secs = env::var("INFERENCE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8000);

        Self {
            serving_host,
            serving_port,
            serving_model,
            request_timeout: Duration::from_secs(timeout_secs),
            media_root: PathBuf::from(media_root),
            port,
        }
    }

    /// TensorFlow-Serving REST prediction endpoint for the configured model.
    pub fn serving_url(&self) -> String {
        format!(
            "http://{}:{}/v1/models/{}:predict",
            self.serving_host, self.serving_port, self.serving_model
        )
    }
}
