//! Common utilities shared between the runner core and the browser helpers

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
