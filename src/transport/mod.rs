//! The `transport` module is responsible for network communication with
//! clients over raw TCP.
//!
//! It defines the line protocol spoken between clients and the server,
//! implements the per-connection session loop, and the accepting server
//! that owns the shared store and broadcast hub.

pub mod message;
pub mod session;
pub mod tcp;

pub use message::{Command, TERMINATOR};
pub use tcp::Server;
