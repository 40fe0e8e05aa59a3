//! API base URL configuration.

use crate::ApiError;

/// Default base path; the web build is served behind a proxy that forwards `/api`.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Origin a relative base is joined onto when there is no browser location.
pub const NATIVE_ORIGIN: &str = "http://localhost:4000";

/// Environment variable overriding the base URL (runtime on native, build time everywhere).
pub const BASE_URL_ENV: &str = "BARBER_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Runtime env (native only), then the build-time value, then `/api`.
    pub fn from_env() -> Self {
        if let Some(base) = runtime_override() {
            return Self::new(base);
        }

        match option_env!("BARBER_API_BASE_URL") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::default(),
        }
    }

    /// Make the base absolute. Relative bases (`/api`) are joined onto `origin`.
    pub fn resolve(self, origin: &str) -> Result<Self, ApiError> {
        let base = self.base_url.trim();
        if base.starts_with("http://") || base.starts_with("https://") {
            return Ok(Self::new(base.trim_end_matches('/')));
        }
        if !base.starts_with('/') {
            return Err(ApiError::InvalidBaseUrl(base.to_string()));
        }

        let origin = origin.trim().trim_end_matches('/');
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(format!("{origin}{base}")));
        }
        Ok(Self::new(format!("{origin}{}", base.trim_end_matches('/'))))
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    None
}
