//! Backend origin configuration and URL resolution.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const BASE_URL_ENV: &str = "EV_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slashes.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config baked in at compile time from `EV_API_BASE_URL`.
    ///
    /// The WASM bundle has no process environment, so the browser build uses
    /// this one.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("EV_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Config read from the process environment at runtime.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV).map_or_else(|_| Self::default(), Self::new)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/vehicles`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Absolute URL for a backend-served image path.
    #[must_use]
    pub fn image_url(&self, path: Option<&str>) -> String {
        full_image_url(&self.base_url, path)
    }
}

/// Resolve a backend resource path (e.g. `/uploads/vehicles/1.jpg`) against
/// `base_url`.
///
/// Absolute `http://`/`https://` URLs come back unchanged; `None` or an empty
/// path yields an empty string.
#[must_use]
pub fn full_image_url(base_url: &str, path: Option<&str>) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return String::new();
    };
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
