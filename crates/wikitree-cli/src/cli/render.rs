//! Plain-text rendering of command results.
//!
//! Renderers return strings; the command modules decide where they go.

use super::styles;
use std::collections::HashMap;
use std::fmt::Write;
use wikitree::api::{CmdMessage, CreatedPage, DeletedPage, MessageLevel};

/// One line per created page, nested under the page it was created beneath.
pub fn render_created(pages: &[CreatedPage]) -> String {
    let mut depths: HashMap<&str, usize> = HashMap::new();
    let mut out = String::new();
    for page in pages {
        let depth = page
            .parent_id
            .as_deref()
            .and_then(|parent| depths.get(parent))
            .map_or(0, |d| d + 1);
        depths.insert(page.id.as_str(), depth);

        let _ = writeln!(
            out,
            "{}{} {} {}",
            "  ".repeat(depth),
            styles::created_marker().apply_to("+"),
            styles::title().apply_to(&page.title),
            styles::dimmed().apply_to(format!("({} from {})", page.id, page.source_id)),
        );
    }
    out
}

pub fn render_deleted(pages: &[DeletedPage]) -> String {
    let mut out = String::new();
    for page in pages {
        let _ = writeln!(
            out,
            "{} {} {}",
            styles::deleted_marker().apply_to("-"),
            styles::title().apply_to(&page.title),
            styles::dimmed().apply_to(format!("({})", page.id)),
        );
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Success => styles::success().apply_to(&message.content),
            MessageLevel::Warning => styles::warning().apply_to(&message.content),
        };
        let _ = writeln!(out, "{styled}");
    }
    out
}
