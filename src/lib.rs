//! Generates Docker-ready MCP server projects from OpenAPI documents.
//!
//! Every operation with an `operationId` becomes an MCP tool and every
//! schema under `components.schemas` becomes a resource. The generated
//! project is a Python server plus the files needed to build and run it in
//! a container.
//!
//! ```no_run
//! use openapi_mcp_generator::application::generate_mcp_server;
//! use openapi_mcp_generator::core::GeneratorConfig;
//!
//! # async fn run() -> openapi_mcp_generator::core::Result<()> {
//! let config = GeneratorConfig::new("openapi.yaml", "out");
//! let project_dir = generate_mcp_server(&config).await?;
//! println!("{}", project_dir.display());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;

pub use application::{GenerateServerUseCase, generate_mcp_server};
pub use crate::core::{Error, GeneratorConfig, Result};
