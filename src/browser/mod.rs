//! Thin browser-automation helpers on top of the WebDriver protocol
//!
//! Incidental glue around the thirtyfour client: the runner core never
//! depends on anything in here.

pub mod driver;
pub mod selector;
pub mod session;

pub use selector::Selector;
pub use session::Session;
