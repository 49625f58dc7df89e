//! Inventory API location.
//!
//! The console talks to one fixed backend. Its root URL comes from the
//! `PRODUCT_API_URL` environment variable, then `[api] base_url` in config.toml, then
//! the production default.

/// Production inventory API root.
pub const DEFAULT_API_BASE_URL: &str = "https://ekarobarbackend-production.up.railway.app/";

/// Environment variable overriding the API root.
pub const API_URL_ENV: &str = "PRODUCT_API_URL";

/// Picks the API root from an environment value and a config-file value.
///
/// Blank values are ignored so an empty `PRODUCT_API_URL=` in `.env` does not
/// shadow the config file.
#[must_use]
pub fn resolve_api_base_url(from_env: Option<String>, from_file: Option<&str>) -> String {
    from_env
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .or_else(|| from_file.map(str::trim).filter(|url| !url.is_empty()))
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins_over_file() {
        let url = resolve_api_base_url(
            Some("http://env.example/".to_string()),
            Some("http://file.example/"),
        );
        assert_eq!(url, "http://env.example/");
    }

    #[test]
    fn test_file_used_when_env_blank() {
        let url = resolve_api_base_url(Some("   ".to_string()), Some(" http://file.example/ "));
        assert_eq!(url, "http://file.example/");
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_api_base_url(None, None), DEFAULT_API_BASE_URL);
        assert_eq!(resolve_api_base_url(None, Some("")), DEFAULT_API_BASE_URL);
    }
}
