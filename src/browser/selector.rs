//! CSS-selector convenience wrapper over element lookup

use std::fmt;

use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use thirtyfour::ElementRect;

use crate::common::{Error, Result};

/// A CSS selector bound to a driver session.
///
/// Every method resolves the selector fresh, so a `Selector` stays valid
/// across page mutations. Action methods return `&Self` so calls can be
/// strung together:
///
/// ```no_run
/// # async fn demo(s: dyntest::browser::Selector) -> dyntest::Result<()> {
/// s.clear().await?.send_keys("hello").await?.click().await?;
/// # Ok(()) }
/// ```
pub struct Selector {
    css: String,
    driver: WebDriver,
}

impl Selector {
    pub fn new(css: impl Into<String>, driver: WebDriver) -> Self {
        Self {
            css: css.into(),
            driver,
        }
    }

    /// First element matching the selector
    pub async fn first(&self) -> Result<WebElement> {
        Ok(self.driver.find(By::Css(self.css.as_str())).await?)
    }

    /// All elements matching the selector
    pub async fn all(&self) -> Result<Vec<WebElement>> {
        Ok(self.driver.find_all(By::Css(self.css.as_str())).await?)
    }

    /// Element at `index` within the matched list
    pub async fn nth(&self, index: usize) -> Result<WebElement> {
        let elements = self.all().await?;
        let count = elements.len();
        elements.into_iter().nth(index).ok_or_else(|| {
            Error::browser(format!(
                "selector '{}' matched {count} elements, index {index} is out of range",
                self.css
            ))
        })
    }

    /// Number of elements matching the selector
    pub async fn count(&self) -> Result<usize> {
        Ok(self.all().await?.len())
    }

    /// Whether any element matches the selector
    pub async fn exists(&self) -> Result<bool> {
        Ok(self.count().await? != 0)
    }

    /// First descendant of the first matched element, by CSS selector
    pub async fn find(&self, css: &str) -> Result<WebElement> {
        Ok(self.first().await?.find(By::Css(css)).await?)
    }

    /// All descendants of the first matched element, by CSS selector
    pub async fn find_all(&self, css: &str) -> Result<Vec<WebElement>> {
        Ok(self.first().await?.find_all(By::Css(css)).await?)
    }

    /// Interpret the first matched element as a `<select>`
    pub async fn as_select(&self) -> Result<SelectElement> {
        let element = self.first().await?;
        Ok(SelectElement::new(&element).await?)
    }

    /// Click the first matched element
    pub async fn click(&self) -> Result<&Self> {
        self.first().await?.click().await?;
        Ok(self)
    }

    /// Type into the first matched element
    pub async fn send_keys(&self, keys: &str) -> Result<&Self> {
        self.first().await?.send_keys(keys).await?;
        Ok(self)
    }

    /// Clear the first matched element's value
    pub async fn clear(&self) -> Result<&Self> {
        self.first().await?.clear().await?;
        Ok(self)
    }

    /// Visible text of the first matched element
    pub async fn text(&self) -> Result<String> {
        Ok(self.first().await?.text().await?)
    }

    /// The `value` attribute of the first matched element
    pub async fn value(&self) -> Result<Option<String>> {
        self.attr("value").await
    }

    /// An arbitrary attribute of the first matched element
    pub async fn attr(&self, name: &str) -> Result<Option<String>> {
        Ok(self.first().await?.attr(name).await?)
    }

    /// Tag name of the first matched element
    pub async fn tag_name(&self) -> Result<String> {
        Ok(self.first().await?.tag_name().await?)
    }

    /// A computed CSS property of the first matched element
    pub async fn css_value(&self, name: &str) -> Result<String> {
        Ok(self.first().await?.css_value(name).await?)
    }

    pub async fn is_displayed(&self) -> Result<bool> {
        Ok(self.first().await?.is_displayed().await?)
    }

    pub async fn is_selected(&self) -> Result<bool> {
        Ok(self.first().await?.is_selected().await?)
    }

    pub async fn is_enabled(&self) -> Result<bool> {
        Ok(self.first().await?.is_enabled().await?)
    }

    /// Position and size of the first matched element
    pub async fn rect(&self) -> Result<ElementRect> {
        Ok(self.first().await?.rect().await?)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}
