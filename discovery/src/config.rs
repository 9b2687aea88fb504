//! Provider endpoints, credentials, and deadlines loaded via OrthoConfig.
//!
//! Every field is optional; accessors supply defaults. A credential that is
//! missing, blank, or still set to its template placeholder counts as
//! unconfigured, and the matching resolver serves fallback data only.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::domain::{DEFAULT_IMAGE_SEARCH_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};

const DEFAULT_REST_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";
const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";
const DEFAULT_OPENTRIPMAP_BASE_URL: &str = "https://api.opentripmap.com/0.1/en";

/// Placeholder shipped in environment templates for the photo key.
pub const UNSPLASH_PLACEHOLDER: &str = "your_unsplash_key_here";
/// Placeholder shipped in environment templates for the weather key.
pub const OPENWEATHER_PLACEHOLDER: &str = "your_openweather_key_here";
/// Placeholder shipped in environment templates for the places key.
pub const OPENTRIPMAP_PLACEHOLDER: &str = "your_actual_opentripmap_key_here";

/// An API key held in a zeroising buffer.
///
/// # Examples
/// ```
/// use discovery::ApiCredential;
///
/// assert!(ApiCredential::configured(Some("  "), "placeholder").is_none());
/// assert!(ApiCredential::configured(Some("placeholder"), "placeholder").is_none());
/// let key = ApiCredential::configured(Some("k-123"), "placeholder").unwrap();
/// assert_eq!(key.expose(), "k-123");
/// assert_eq!(format!("{key:?}"), "ApiCredential(<redacted>)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(Zeroizing<String>);

impl ApiCredential {
    /// Wrap a raw key.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Wrap `raw` unless it is absent, blank, or equal to `placeholder`.
    pub fn configured(raw: Option<&str>, placeholder: &str) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() || trimmed == placeholder {
            return None;
        }
        Some(Self::new(trimmed))
    }

    /// The key itself, for building request URLs.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(<redacted>)")
    }
}

/// Settings for the discovery service.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DISCOVERY")]
pub struct DiscoverySettings {
    /// REST Countries API root.
    pub rest_countries_base_url: Option<String>,
    /// OpenWeatherMap API root.
    pub openweather_base_url: Option<String>,
    /// OpenWeatherMap key.
    pub openweather_api_key: Option<String>,
    /// Unsplash API root.
    pub unsplash_base_url: Option<String>,
    /// Unsplash access key.
    pub unsplash_access_key: Option<String>,
    /// OpenTripMap API root.
    pub opentripmap_base_url: Option<String>,
    /// OpenTripMap key.
    pub opentripmap_api_key: Option<String>,
    /// Deadline in milliseconds for ordinary provider requests.
    pub request_timeout_ms: Option<u64>,
    /// Deadline in milliseconds for single-result image searches.
    pub image_search_timeout_ms: Option<u64>,
}

impl DiscoverySettings {
    /// REST Countries root, falling back to the public endpoint.
    pub fn rest_countries_base_url(&self) -> &str {
        self.rest_countries_base_url
            .as_deref()
            .unwrap_or(DEFAULT_REST_COUNTRIES_BASE_URL)
    }

    /// OpenWeatherMap root, falling back to the public endpoint.
    pub fn openweather_base_url(&self) -> &str {
        self.openweather_base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENWEATHER_BASE_URL)
    }

    /// Unsplash root, falling back to the public endpoint.
    pub fn unsplash_base_url(&self) -> &str {
        self.unsplash_base_url
            .as_deref()
            .unwrap_or(DEFAULT_UNSPLASH_BASE_URL)
    }

    /// OpenTripMap root, falling back to the public endpoint.
    pub fn opentripmap_base_url(&self) -> &str {
        self.opentripmap_base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENTRIPMAP_BASE_URL)
    }

    /// The weather key when it is usable.
    pub fn openweather_credential(&self) -> Option<ApiCredential> {
        ApiCredential::configured(self.openweather_api_key.as_deref(), OPENWEATHER_PLACEHOLDER)
    }

    /// The photo key when it is usable.
    pub fn unsplash_credential(&self) -> Option<ApiCredential> {
        ApiCredential::configured(self.unsplash_access_key.as_deref(), UNSPLASH_PLACEHOLDER)
    }

    /// The places key when it is usable.
    pub fn opentripmap_credential(&self) -> Option<ApiCredential> {
        ApiCredential::configured(self.opentripmap_api_key.as_deref(), OPENTRIPMAP_PLACEHOLDER)
    }

    /// Deadline for ordinary provider requests.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_ms
            .map_or(DEFAULT_REQUEST_TIMEOUT, Duration::from_millis)
    }

    /// Deadline for single-result image searches.
    pub fn image_search_timeout(&self) -> Duration {
        self.image_search_timeout_ms
            .map_or(DEFAULT_IMAGE_SEARCH_TIMEOUT, Duration::from_millis)
    }
}

impl fmt::Debug for DiscoverySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: Option<&String>) -> Option<&'static str> {
            value.map(|_| "<redacted>")
        }
        f.debug_struct("DiscoverySettings")
            .field("rest_countries_base_url", &self.rest_countries_base_url)
            .field("openweather_base_url", &self.openweather_base_url)
            .field("openweather_api_key", &redact(self.openweather_api_key.as_ref()))
            .field("unsplash_base_url", &self.unsplash_base_url)
            .field("unsplash_access_key", &redact(self.unsplash_access_key.as_ref()))
            .field("opentripmap_base_url", &self.opentripmap_base_url)
            .field("opentripmap_api_key", &redact(self.opentripmap_api_key.as_ref()))
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("image_search_timeout_ms", &self.image_search_timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for discovery configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 9] = [
        "DISCOVERY_REST_COUNTRIES_BASE_URL",
        "DISCOVERY_OPENWEATHER_BASE_URL",
        "DISCOVERY_OPENWEATHER_API_KEY",
        "DISCOVERY_UNSPLASH_BASE_URL",
        "DISCOVERY_UNSPLASH_ACCESS_KEY",
        "DISCOVERY_OPENTRIPMAP_BASE_URL",
        "DISCOVERY_OPENTRIPMAP_API_KEY",
        "DISCOVERY_REQUEST_TIMEOUT_MS",
        "DISCOVERY_IMAGE_SEARCH_TIMEOUT_MS",
    ];

    fn load_from_empty_args() -> DiscoverySettings {
        DiscoverySettings::load_from_iter([OsString::from("discovery")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.rest_countries_base_url(), DEFAULT_REST_COUNTRIES_BASE_URL);
        assert_eq!(settings.openweather_base_url(), DEFAULT_OPENWEATHER_BASE_URL);
        assert_eq!(settings.unsplash_base_url(), DEFAULT_UNSPLASH_BASE_URL);
        assert_eq!(settings.opentripmap_base_url(), DEFAULT_OPENTRIPMAP_BASE_URL);
        assert_eq!(settings.request_timeout(), Duration::from_millis(8_000));
        assert_eq!(settings.image_search_timeout(), Duration::from_millis(5_000));
        assert!(settings.openweather_credential().is_none());
        assert!(settings.unsplash_credential().is_none());
        assert!(settings.opentripmap_credential().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DISCOVERY_REST_COUNTRIES_BASE_URL", Some("http://127.0.0.1:9000".to_owned())),
            ("DISCOVERY_OPENWEATHER_BASE_URL", None),
            ("DISCOVERY_OPENWEATHER_API_KEY", Some("weather-key".to_owned())),
            ("DISCOVERY_UNSPLASH_BASE_URL", None),
            ("DISCOVERY_UNSPLASH_ACCESS_KEY", Some(UNSPLASH_PLACEHOLDER.to_owned())),
            ("DISCOVERY_OPENTRIPMAP_BASE_URL", None),
            ("DISCOVERY_OPENTRIPMAP_API_KEY", Some("   ".to_owned())),
            ("DISCOVERY_REQUEST_TIMEOUT_MS", Some("250".to_owned())),
            ("DISCOVERY_IMAGE_SEARCH_TIMEOUT_MS", Some("100".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.rest_countries_base_url(), "http://127.0.0.1:9000");
        assert_eq!(
            settings.openweather_credential().map(|key| key.expose().to_owned()),
            Some("weather-key".to_owned())
        );
        assert!(settings.unsplash_credential().is_none());
        assert!(settings.opentripmap_credential().is_none());
        assert_eq!(settings.request_timeout(), Duration::from_millis(250));
        assert_eq!(settings.image_search_timeout(), Duration::from_millis(100));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some(OPENTRIPMAP_PLACEHOLDER), None)]
    #[case(Some(" otm-key "), Some("otm-key"))]
    fn credentials_ignore_placeholders(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let credential = ApiCredential::configured(raw, OPENTRIPMAP_PLACEHOLDER);
        assert_eq!(credential.as_ref().map(ApiCredential::expose), expected);
    }

    #[rstest]
    fn debug_output_redacts_keys() {
        let settings = DiscoverySettings {
            rest_countries_base_url: None,
            openweather_base_url: None,
            openweather_api_key: Some("weather-secret".to_owned()),
            unsplash_base_url: None,
            unsplash_access_key: Some("super-secret".to_owned()),
            opentripmap_base_url: None,
            opentripmap_api_key: None,
            request_timeout_ms: Some(100),
            image_search_timeout_ms: None,
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("weather-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
