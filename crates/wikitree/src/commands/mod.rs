//! # Command Layer
//!
//! This module contains the **core logic** of wikitree. Each step of a run lives
//! in its own submodule and is a plain function generic over
//! [`WikiClient`](crate::client::WikiClient).
//!
//! ## Role and Responsibilities
//!
//! - Read a page tree from the source ([`fetch`], [`walk`])
//! - Turn source records into destination records ([`transform`])
//! - Recreate a tree at the destination ([`copy`]) or remove one ([`delete`])
//! - Return structured [`CmdResult`] values with affected pages and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout or stderr; logging goes through `tracing`
//! - **Argument parsing or config loading**: That's the CLI's and `config`'s job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Failure Policy
//!
//! Every client error is fatal. The first failure stops the run and is returned
//! wrapped with the page it concerns. Nothing is retried, nothing is rolled back.
//!
//! ## Testing Strategy
//!
//! Command tests run against [`InMemoryWiki`](crate::client::memory::InMemoryWiki),
//! asserting both the resulting wiki state and the exact sequence of API calls.

use serde::Serialize;

pub mod copy;
pub mod delete;
pub mod fetch;
pub mod transform;
pub mod walk;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A page created at the destination.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreatedPage {
    pub source_id: String,
    pub id: String,
    pub title: String,
    pub parent_id: Option<String>,
}

/// A page removed by the delete tool.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeletedPage {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub created_pages: Vec<CreatedPage>,
    pub deleted_pages: Vec<DeletedPage>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_created_pages(mut self, pages: Vec<CreatedPage>) -> Self {
        self.created_pages = pages;
        self
    }

    pub fn with_deleted_pages(mut self, pages: Vec<DeletedPage>) -> Self {
        self.deleted_pages = pages;
        self
    }
}
