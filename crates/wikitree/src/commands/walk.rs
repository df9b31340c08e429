//! # Tree Discovery
//!
//! Builds a [`ContentNode`] tree by depth-first descent from a root page.
//!
//! For every node: list its children, keep the `page`-typed ones, fetch each in
//! listing order, descend into it, then append it. The source service keeps
//! pages in a strict tree, so no cycle detection is done.
//!
//! Any read failure aborts the whole walk; no partial tree is ever returned.

use super::fetch;
use crate::client::WikiClient;
use crate::error::Result;
use crate::model::{ContentNode, ContentQuery};
use tracing::debug;

/// Fetch `root_id` and, when `recursive`, every page beneath it.
pub fn discover_tree<C: WikiClient>(
    client: &C,
    query: &ContentQuery,
    root_id: &str,
    recursive: bool,
) -> Result<ContentNode> {
    let mut root = ContentNode::new(fetch::content(client, query, root_id, None)?);
    debug!(page_id = root_id, title = %root.content.title, "fetched root page");
    if recursive {
        collect_children(client, query, &mut root)?;
    }
    Ok(root)
}

fn collect_children<C: WikiClient>(
    client: &C,
    query: &ContentQuery,
    node: &mut ContentNode,
) -> Result<()> {
    let parent_id = node.content.id.clone();
    for child_id in fetch::child_page_ids(client, &parent_id)? {
        let content = fetch::content(client, query, &child_id, Some(&parent_id))?;
        debug!(page_id = %child_id, parent_id = %parent_id, title = %content.title, "fetched child page");
        let mut child = ContentNode::new(content);
        collect_children(client, query, &mut child)?;
        node.children.push(child);
    }
    Ok(())
}
