//! Tinyserv - Single-Request HTTP File Server
//!
//! Core library for the per-connection request/response protocol handler.

pub mod config;
pub mod http;
pub mod server;
