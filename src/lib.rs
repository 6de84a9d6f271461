//! # Ideaboard
//!
//! `ideaboard` is a shared brainstorming bulletin board served over a raw
//! TCP line protocol. Clients append short text ideas and read back the
//! accumulated, deduplicated list; connected clients are notified when new
//! ideas arrive.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct
//! responsibility:
//!
//! - `store`: the append-only, deduplicated idea collection shared by all
//!   sessions.
//! - `broadcast`: the fan-out hub that pushes new-idea notifications to
//!   every live session.
//! - `transport`: the TCP server, the per-connection sessions, and the wire
//!   protocol itself.
//! - `client`: a client for the line protocol, used by the bundled
//!   binaries.
//! - `suggest`: an LLM-backed suggestion generator driving the AI client.
//! - `config`: handles loading and managing server configuration.
//! - `utils`: shared error types and logging setup.

pub mod broadcast;
pub mod client;
pub mod config;
pub mod store;
pub mod suggest;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;
