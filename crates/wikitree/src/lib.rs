//! # Wikitree Architecture
//!
//! Wikitree copies and deletes page trees in Confluence Cloud through its REST
//! API. Like most of our tools, it is a library that happens to have a CLI
//! client: the binaries in `wikitree-cli` only parse arguments, build clients
//! and print results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/wikitree-cli)                            │
//! │  - Flags, env vars, logging setup, rendering, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Config + API Layer (config.rs, api.rs)                     │
//! │  - Layered settings resolved into typed requests            │
//! │  - Thin facade dispatching to commands                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Tree discovery, transformation, copy and delete          │
//! │  - No terminal I/O, returns structured `CmdResult`          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - Abstract WikiClient trait                                │
//! │  - HttpClient (production), InMemoryWiki (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Copying Across Namespaces
//!
//! The source and destination are independent clients, possibly on different
//! accounts. A copy reads the whole source tree first, then recreates it
//! parent-first, wiring each new child to the ID the destination just assigned
//! to its parent. Titles only change when copying inside the same space (see
//! [`commands::transform`]).
//!
//! ## Execution Model
//!
//! Strictly sequential: one API call in flight, no retries, first error wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Discovery, transformation, copy and delete
//! - [`client`]: Wiki client trait and implementations
//! - [`model`]: Wire types and the in-memory page tree
//! - [`config`]: Layered configuration and validation
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
