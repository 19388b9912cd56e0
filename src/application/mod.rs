//! Application layer - runs the generation use case end to end

pub mod generate_server;

pub use generate_server::*;
