//! OpenAPI document loading and pointer resolution

pub mod document;
pub mod loader;
pub mod resolver;

pub use document::{Document, scalar_text};
pub use loader::{SpecLoader, TypeScriptSpecLoader, YamlSpecLoader, loader_for};
pub use resolver::Resolution;
