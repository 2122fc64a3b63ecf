//! Configuration singleton using the OnceCell pattern.

use school::SchoolConfig;
use tokio::sync::OnceCell;

static CONFIG: OnceCell<SchoolConfig> = OnceCell::const_new();

/// Get or load the front-end configuration.
///
/// A missing file means defaults; a malformed file is logged and ignored.
pub async fn get_config() -> &'static SchoolConfig {
    CONFIG
        .get_or_init(|| async {
            dotenvy::dotenv().ok();

            let path = std::env::var("PIANOSCHOOL_CONFIG")
                .unwrap_or_else(|_| SchoolConfig::filename().to_string());
            let file = tokio::fs::read_to_string(&path).await.ok();
            let base_url = std::env::var("API_BASE_URL").ok();

            match SchoolConfig::resolve(file.as_deref(), base_url.clone()) {
                Ok(config) => {
                    tracing::info!("Using backend at {}", config.api.base_url);
                    config
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed {}: {}", path, e);
                    SchoolConfig::resolve(None, base_url).unwrap_or_default()
                }
            }
        })
        .await
}
