//! Generation domain: turns a loaded document into tool and resource
//! definitions, then into the context and file set of a project.

pub mod context;
pub mod parameters;
pub mod project;
pub mod resources;
pub mod tools;

pub use context::*;
pub use parameters::*;
pub use project::*;
pub use resources::*;
pub use tools::*;
