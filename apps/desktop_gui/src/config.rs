use std::fs;

use serde::Deserialize;
use url::Url;

/// Hosted mock API the page has always posted to.
pub const DEFAULT_ENDPOINT_URL: &str = "https://67187dfdb910c6a6e02c55b2.mockapi.io/ContactInfo";

const CONFIG_FILE: &str = "contact_desk.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileSettings {
    endpoint_url: Option<String>,
}

/// Layered endpoint resolution: built-in default, then `contact_desk.toml`
/// in the working directory, then `CONTACT_ENDPOINT_URL`, then the CLI flag.
pub fn load_settings(cli_endpoint: Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(CONFIG_FILE) {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("CONTACT_ENDPOINT_URL") {
        settings.endpoint_url = v;
    }

    if let Some(v) = cli_endpoint {
        settings.endpoint_url = v;
    }

    validate_endpoint(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) {
        if let Some(v) = file_cfg.endpoint_url {
            settings.endpoint_url = v;
        }
    }
}

fn validate_endpoint(mut settings: Settings) -> Settings {
    if Url::parse(&settings.endpoint_url).is_err() {
        tracing::warn!(
            endpoint = %settings.endpoint_url,
            "endpoint override is not a valid URL, using default"
        );
        settings.endpoint_url = DEFAULT_ENDPOINT_URL.into();
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_override_replaces_endpoint() {
        let mut settings = Settings::default();
        apply_file_overrides(
            &mut settings,
            "endpoint_url = \"http://127.0.0.1:9000/ContactInfo\"\n",
        );
        assert_eq!(settings.endpoint_url, "http://127.0.0.1:9000/ContactInfo");
    }

    #[test]
    fn unparseable_file_keeps_default() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "endpoint_url = [not toml");
        assert_eq!(settings.endpoint_url, DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn invalid_endpoint_falls_back_to_default() {
        let settings = validate_endpoint(Settings {
            endpoint_url: "not a url".into(),
        });
        assert_eq!(settings.endpoint_url, DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn valid_endpoint_is_kept() {
        let settings = validate_endpoint(Settings {
            endpoint_url: "http://localhost:3000/ContactInfo".into(),
        });
        assert_eq!(settings.endpoint_url, "http://localhost:3000/ContactInfo");
    }
}
