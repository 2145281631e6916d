//! # Quill Shared
//!
//! Types shared between the API server and any client.
//! In a full-stack Rust setup, this crate compiles for both server and WASM.

pub mod dto;
pub mod response;

pub use response::ResponseWrapper;
