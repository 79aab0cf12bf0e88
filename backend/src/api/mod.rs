//! HTTP API module.
//!
//! This module provides the HTTP server and response helpers for the IPCA service.

pub mod openapi;
pub mod server;
pub mod types;

pub use openapi::openapi_spec;
pub use server::{router, start_server, AppState};
pub use types::*;
