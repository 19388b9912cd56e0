//! Infrastructure layer: document loading, templates and file output

pub mod openapi;
pub mod output;
pub mod templates;
