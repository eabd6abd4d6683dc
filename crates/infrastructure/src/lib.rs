//! Ferrous Stub Infrastructure Layer
pub mod client;
pub mod dns;

pub use client::StubClient;
