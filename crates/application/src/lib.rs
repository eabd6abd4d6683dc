//! Ferrous Stub Application Layer
pub mod ports;
pub mod services;

pub use services::{BasicExecutor, Connector, MultiExecutor, Resolver};
