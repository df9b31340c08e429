//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point used by the binaries.
//!
//! ## Generic Over WikiClient
//!
//! `WikiApi<S, D>` holds a source and a destination client:
//! - Production: `WikiApi<HttpClient>` (one account) or two differently
//!   authenticated `HttpClient`s
//! - Testing: `WikiApi<&InMemoryWiki>`, possibly the same wiki on both sides
//!
//! Deletes act on the source client.

use crate::client::WikiClient;
use crate::commands;
use crate::error::Result;

pub struct WikiApi<S: WikiClient, D: WikiClient = S> {
    source: S,
    dest: D,
}

impl<S: WikiClient, D: WikiClient> WikiApi<S, D> {
    pub fn new(source: S, dest: D) -> Self {
        Self { source, dest }
    }

    /// Copy the tree rooted at `request.source_page_id` to the destination.
    pub fn copy_tree(&self, request: &CopyRequest) -> Result<commands::CmdResult> {
        commands::copy::run(&self.source, &self.dest, request)
    }

    /// Delete `request.page_id` and every page beneath it.
    pub fn delete_tree(&self, request: &DeleteRequest) -> Result<commands::CmdResult> {
        commands::delete::run(&self.source, request)
    }
}

impl<C: WikiClient + Clone> WikiApi<C, C> {
    /// One client for both sides.
    pub fn single(client: C) -> Self {
        Self::new(client.clone(), client)
    }
}

pub use crate::commands::copy::CopyRequest;
pub use crate::commands::delete::DeleteRequest;
pub use commands::{CmdMessage, CmdResult, CreatedPage, DeletedPage, MessageLevel};
