//! HTTP protocol implementation.
//!
//! This module implements a minimal single-request HTTP/1.1 subset: one GET
//! request line in, one response out, connection closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses the request line into method and target tokens
//! - **`request`**: HTTP request representation
//! - **`resource`**: Maps a request target to a local file
//! - **`response`**: Response status and content-type types
//! - **`writer`**: Writes the response header block and templated body to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌──────────────────┐
//!        │  ReadingRequest  │ ← Wait for the request line
//!        └──────┬───────────┘
//!               │ Line parsed
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolved /    │ ← Classify the resource
//!        │    Unresolved    │
//!        └──────┬───────────┘
//!               │ Header sent
//!               ▼
//!        ┌──────────────────┐
//!        │  HeaderWritten   │ ← Send the body
//!        └──────┬───────────┘
//!               │ Body sent
//!               ▼
//!        ┌──────────────────┐
//!        │   BodyWritten    │ ← Flush
//!        └──────┬───────────┘
//!               └─ Close → Closed
//! ```
//!
//! No transition re-enters an earlier state; a failure in any state jumps
//! straight to `Closed`.
//!
//! # Example
//!
//! ```ignore
//! use tinyserv::config::Config;
//! use tinyserv::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load()?;
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = cfg.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, cfg);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod resource;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
