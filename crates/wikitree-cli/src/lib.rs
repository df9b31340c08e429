//! # Wikitree CLI
//!
//! Two small binaries share this crate:
//!
//! - `wikitree-copy`: copy a page, or a whole page tree, to another space or account
//! - `wikitree-delete`: delete a page and everything beneath it
//!
//! Both are thin: `src/bin/*.rs` only call into [`cli`] and turn an error into
//! `Error: ...` on stderr with exit code 1. All tree logic lives in the
//! `wikitree` library.

pub mod cli;
