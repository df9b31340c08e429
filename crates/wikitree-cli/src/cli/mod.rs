//! # CLI Layer
//!
//! This is **one possible client** of the wikitree library. It is the only
//! place that:
//! - Parses arguments and environment variables (clap)
//! - Installs the log subscriber (tracing-subscriber)
//! - Prints to stdout
//!
//! ## Flow
//!
//! 1. Parse flags (`setup`), install logging (`logging`)
//! 2. Load the config file layer and apply flags/env on top
//! 3. Resolve into a typed plan (fails with `please provide ...`)
//! 4. Build HTTP clients and dispatch through `WikiApi`
//! 5. Render the `CmdResult` (`render`)
//!
//! ## Module Structure
//!
//! - `setup`: Argument definitions for both tools
//! - `copy`, `delete`: Per-tool entry points
//! - `logging`: Subscriber setup
//! - `render`: Output formatting
//! - `styles`: Terminal styling constants

pub mod copy;
pub mod delete;
mod logging;
mod render;
pub mod setup;
mod styles;
