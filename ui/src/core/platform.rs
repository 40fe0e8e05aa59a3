//! Where the API lives for the current target.

use api::{ApiConfig, NATIVE_ORIGIN};
use tracing::warn;

/// Origin relative API bases are joined onto.
#[cfg(target_arch = "wasm32")]
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| NATIVE_ORIGIN.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn origin() -> String {
    NATIVE_ORIGIN.to_string()
}

/// Absolute API configuration for this platform. A malformed override falls
/// back to the default base so the app still starts.
pub fn api_config() -> ApiConfig {
    let origin = origin();
    match ApiConfig::from_env().resolve(&origin) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "ignoring API base override");
            ApiConfig::default()
                .resolve(&origin)
                .unwrap_or_else(|_| ApiConfig::new(format!("{NATIVE_ORIGIN}/api")))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_platform_resolves_absolute_base() {
        let config = api_config();
        assert!(config.base_url.starts_with("http"));
    }
}
