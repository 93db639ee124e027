//! clipsync - two-node clipboard sync over TCP
//!
//! This crate polls the local clipboard, pushes every change to a peer over a
//! raw TCP connection, and applies whatever the peer sends back.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (snapshot, fingerprint, peer address, timing, config) and errors
//! - **Application**: The poller, sender and receiver use cases and their port traits
//! - **Infrastructure**: Adapter implementations (arboard, wl-clipboard, TCP, XDG config)
//! - **CLI**: Argument parsing, logging, signal handling and the sync runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
