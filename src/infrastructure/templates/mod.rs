//! Template loading and rendering

pub mod environment;

pub use environment::{TemplateEnvironment, TemplateSource};
