//! Core building blocks shared by every layer: errors, configuration and
//! string helpers.

pub mod config;
pub mod error;
pub mod utils;

pub use config::{ApiSettings, AuthType, GeneratorConfig};
pub use error::{Error, Result};
