use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

/// Settings of the shared API client
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Headers sent with every request
    #[serde(default = "default_headers")]
    pub default_headers: BTreeMap<String, String>,
    /// Where to send the user once the server rejects the session
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_headers: default_headers(),
            login_path: default_login_path(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

fn default_login_path() -> String {
    "/login".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8080/api"
login_path = "/login"

[api.default_headers]
"Content-Type" = "application/json"
"#;

/// Load configuration from TOML text
///
/// Falls back to the embedded default when no document is given.
pub fn load_config(contents: Option<&str>) -> anyhow::Result<Config> {
    match contents {
        Some(contents) => {
            log::info!("Loading API configuration from provided document");
            Ok(toml::from_str(contents)?)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}
