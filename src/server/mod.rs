//! Connection driver: accepts sockets and hands each one to the HTTP core.

pub mod listener;
