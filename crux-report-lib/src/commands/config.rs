use crate::Result;
use crate::request::MAX_URLS;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "crux-report.toml";

/// Narrowest URL column that still leaves room for a host and an ellipsis
const MIN_URL_WIDTH: usize = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root URL of the analysis service API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Time allowed for one request to the service
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Maximum number of URLs per analysis
    #[serde(default = "default_max_urls")]
    pub max_urls: usize,

    /// Width URLs are shortened to in console output
    #[serde(default = "default_url_display_width")]
    pub url_display_width: usize,

    /// Unit for metric values without a unit of their own
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

const fn default_max_urls() -> usize {
    MAX_URLS
}

const fn default_url_display_width() -> usize {
    50
}

fn default_unit() -> String {
    "ms".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading crux-report configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading crux-report configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or the base URL is unusable
    fn validate(&self) -> Result<()> {
        if !(1..=MAX_URLS).contains(&self.max_urls) {
            return Err(app_err!("max_urls must be between 1 and {MAX_URLS}, got {}", self.max_urls));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.url_display_width < MIN_URL_WIDTH {
            return Err(app_err!(
                "url_display_width must be at least {MIN_URL_WIDTH}, got {}",
                self.url_display_width
            ));
        }

        check_base_url(&self.base_url)
    }

    /// Replace the service URL, holding it to the same rule as the file setting
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an http or https URL
    pub fn override_base_url(&mut self, base_url: &str) -> Result<()> {
        check_base_url(base_url)?;
        base_url.clone_into(&mut self.base_url);
        Ok(())
    }
}

fn check_base_url(base_url: &str) -> Result<()> {
    match Url::parse(base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(app_err!("base_url must be an http or https URL, got '{base_url}'")),
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
