//! A live browser session with test-oriented helpers
//!
//! Wraps a WebDriver session with the pieces test code keeps reaching for:
//! the `select` shorthand, screenshot capture named after the current URL,
//! alert helpers, and throwaway HTML pages for cases with no real site.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use tempfile::NamedTempFile;
use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::*;

use super::driver;
use super::selector::Selector;
use crate::common::config::Config;
use crate::common::{paths, Result};

/// A running browser session
pub struct Session {
    driver: WebDriver,
    screenshot_dir: PathBuf,
}

impl Session {
    /// Launch a browser and navigate to the configured base URL
    pub async fn open(config: &Config) -> Result<Self> {
        let driver = driver::launch(&config.browser).await?;
        driver.goto(&config.browser.base_url).await?;

        let screenshot_dir = config
            .output
            .screenshot_dir
            .clone()
            .or_else(paths::screenshot_dir)
            .unwrap_or_else(|| PathBuf::from("screenshots"));

        Ok(Self {
            driver,
            screenshot_dir,
        })
    }

    /// Bind a CSS selector to this session
    pub fn select(&self, css: &str) -> Selector {
        Selector::new(css, self.driver.clone())
    }

    /// Navigate to a URL
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    /// URL of the current page
    pub async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    /// Run a JavaScript snippet in the page
    pub async fn execute(&self, script: &str) -> Result<()> {
        self.driver.execute(script, Vec::new()).await?;
        Ok(())
    }

    /// Trigger a JavaScript alert, keep it open for `hold`, then accept it
    /// when `accept` is set
    pub async fn alert(&self, message: &str, hold: Duration, accept: bool) -> Result<()> {
        // JSON-encode so the message is a safe JS string literal
        let literal = serde_json::to_string(message)?;
        self.execute(&format!("alert({literal});")).await?;
        tokio::time::sleep(hold).await;
        if accept {
            self.driver.accept_alert().await?;
        }
        Ok(())
    }

    /// Whether a JavaScript alert is currently open
    pub async fn is_alert_present(&self) -> Result<bool> {
        match self.driver.get_alert_text().await {
            Ok(_) => Ok(true),
            Err(WebDriverError::NoSuchAlert(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Accept the open alert and return its message text
    pub async fn close_alert_and_get_text(&self) -> Result<String> {
        let text = self.driver.get_alert_text().await?;
        self.driver.accept_alert().await?;
        Ok(text)
    }

    /// Capture a PNG screenshot of the current page
    ///
    /// The file lands in the screenshot directory, named from a timestamp
    /// and the sanitized current URL. Returns the saved path.
    pub async fn save_screenshot(&self) -> Result<PathBuf> {
        let url = self.current_url().await?;
        let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
        let file_name = format!("{stamp}_{}.png", sanitize_for_filename(&url));

        paths::ensure_dir(&self.screenshot_dir)?;
        let path = self.screenshot_dir.join(file_name);
        self.driver.screenshot(&path).await?;
        Ok(path)
    }

    /// Close the browser and end the session
    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }

    /// Write a throwaway HTML page wrapping `body`
    ///
    /// For cases that have no target site to open. The file is removed when
    /// the returned handle drops, so keep it alive while the browser uses it.
    pub fn temp_html_page(body: &str) -> Result<NamedTempFile> {
        let html = format!(
            concat!(
                "<!DOCTYPE html>",
                "<html>",
                " <head>",
                "  <meta charset=\"UTF-8\">",
                "  <title>Created Temporary Html File</title>",
                "  <script src=\"https://code.jquery.com/jquery-3.7.1.min.js\"></script>",
                "  <link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\" rel=\"stylesheet\">",
                " </head>",
                " <body>{}</body>",
                "</html>"
            ),
            body
        );

        let mut file = tempfile::Builder::new()
            .prefix("dyntest-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    /// Write a throwaway HTML page and navigate to it
    ///
    /// Returns the file handle; keep it alive while the page is open.
    pub async fn open_temp_html_page(&self, body: &str) -> Result<NamedTempFile> {
        let file = Self::temp_html_page(body)?;
        self.goto(&Self::file_url(file.path())).await?;
        Ok(file)
    }

    /// `file://` URL for a local path, e.g. a temp HTML page
    ///
    /// Relative paths are resolved against the current directory first; a
    /// bare `file://rel.html` would name a host, not a path.
    pub fn file_url(path: &Path) -> String {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|dir| dir.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        };
        format!("file://{}", absolute.display())
    }
}

/// Replace characters that are unsafe in file names with underscores
fn sanitize_for_filename(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}
