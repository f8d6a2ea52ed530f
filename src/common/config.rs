//! Configuration file handling

use serde::Deserialize;
use std::path::PathBuf;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Browser session settings
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Output locations for logs and screenshots
    #[serde(default)]
    pub output: OutputConfig,
}

/// Browser kind used for a session
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrowserKind {
    /// Firefox (geckodriver)
    #[default]
    Firefox,
    /// Chrome/Chromium (chromedriver)
    Chrome,
}

/// Settings for launching a browser session
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Which browser to drive
    #[serde(default)]
    pub kind: BrowserKind,

    /// URL of the WebDriver server (chromedriver/geckodriver/selenium)
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a visible window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Implicit wait applied to element lookups, in seconds
    #[serde(default = "default_implicit_wait")]
    pub implicit_wait_secs: u64,

    /// Page loaded when a session opens
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            kind: BrowserKind::default(),
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            implicit_wait_secs: default_implicit_wait(),
            base_url: default_base_url(),
        }
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}
fn default_headless() -> bool {
    true
}
fn default_implicit_wait() -> u64 {
    5
}
fn default_base_url() -> String {
    "about:blank".to_string()
}

/// Overrides for log and screenshot locations
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Root directory for per-suite run logs
    pub log_dir: Option<PathBuf>,

    /// Directory screenshots are saved into
    pub screenshot_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| super::Error::file_read(&path, &e))?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.browser.kind, BrowserKind::Firefox);
        assert_eq!(config.browser.webdriver_url, "http://localhost:4444");
        assert!(config.browser.headless);
        assert_eq!(config.browser.implicit_wait_secs, 5);
        assert_eq!(config.browser.base_url, "about:blank");
        assert!(config.output.log_dir.is_none());
    }

    #[test]
    fn test_parse_browser_section() {
        let config: Config = toml::from_str(
            r#"
            [browser]
            kind = "chrome"
            webdriver_url = "http://localhost:9515"
            headless = false

            [output]
            screenshot_dir = "/tmp/shots"
            "#,
        )
        .unwrap();
        assert_eq!(config.browser.kind, BrowserKind::Chrome);
        assert_eq!(config.browser.webdriver_url, "http://localhost:9515");
        assert!(!config.browser.headless);
        assert_eq!(
            config.output.screenshot_dir.as_deref(),
            Some(std::path::Path::new("/tmp/shots"))
        );
    }

    #[test]
    fn test_unknown_browser_kind_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [browser]
            kind = "netscape"
            "#,
        );
        assert!(result.is_err());
    }
}
