//! Client side of the idea-board line protocol.

pub mod client;

pub use client::Client;

#[cfg(test)]
mod tests;
