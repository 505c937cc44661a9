//! Scene Gateway – typed command bridge to a live 3D scene editor
//!
//! This crate implements the client side of the editor's line-delimited JSON
//! command protocol:
//! - A closed catalog of scene-editing operations with validated, typed inputs
//! - Partial updates that only send the fields a caller supplied
//! - One transient TCP connection per call, always released
//! - A typed error taxonomy covering validation, transport, decoding and engine rejections
//! - An NDJSON tool service exposing each operation as a named tool

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Command gateway: catalog, codec, transport
pub mod gateway;

/// Tool-invocation front end
pub mod service;

// Re-export key types for convenience
pub use gateway::{Gateway, GatewayConfig, GatewayError, GatewayResult};

/// Current version of the scene gateway
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
