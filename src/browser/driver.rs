//! WebDriver construction from configuration

use std::time::Duration;

use thirtyfour::prelude::*;

use crate::common::config::{BrowserConfig, BrowserKind};
use crate::common::Result;

/// Launch a WebDriver session against the configured server
///
/// Builds capabilities for the configured browser kind and applies the
/// implicit wait so element lookups poll instead of failing immediately.
pub async fn launch(config: &BrowserConfig) -> Result<WebDriver> {
    let driver = match config.kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if config.headless {
                caps.set_headless()?;
            }
            WebDriver::new(&config.webdriver_url, caps).await?
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if config.headless {
                caps.set_headless()?;
            }
            WebDriver::new(&config.webdriver_url, caps).await?
        }
    };

    driver
        .set_implicit_wait_timeout(Duration::from_secs(config.implicit_wait_secs))
        .await?;

    Ok(driver)
}
