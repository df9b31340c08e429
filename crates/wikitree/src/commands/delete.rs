//! # Tree Delete
//!
//! Deleting always discovers the complete tree under the root, whatever the
//! copy tool's recursion setting would be. Descendants are removed first, each
//! one before its own ancestors, and the root goes last: the service refuses to
//! delete a page that still has children.

use super::walk::discover_tree;
use super::{CmdMessage, CmdResult, DeletedPage};
use crate::client::WikiClient;
use crate::error::{Result, WikiError};
use crate::model::{ContentNode, ContentQuery};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub page_id: String,
    /// Space used for reads; may be empty.
    pub space_key: String,
}

pub fn run<C: WikiClient>(client: &C, request: &DeleteRequest) -> Result<CmdResult> {
    let query = ContentQuery::pages_in(&request.space_key);
    let tree = discover_tree(client, &query, &request.page_id, true)?;
    info!(pages = tree.len(), root = %tree.content.title, "discovered tree to delete");

    let deleted = delete_tree(client, &tree)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {} page(s) under and including {}",
        deleted.len(),
        request.page_id
    )));
    Ok(result.with_deleted_pages(deleted))
}

/// Delete every node of `tree`, descendants before ancestors, root last.
pub fn delete_tree<C: WikiClient>(client: &C, tree: &ContentNode) -> Result<Vec<DeletedPage>> {
    let mut deleted = Vec::with_capacity(tree.len());
    for node in tree.descendants_post_order().into_iter().chain(std::iter::once(tree)) {
        client
            .delete_content(node.id())
            .map_err(|source| WikiError::Delete {
                page_id: node.id().to_string(),
                source,
            })?;
        info!(id = node.id(), title = %node.content.title, "deleted page");
        deleted.push(DeletedPage {
            id: node.id().to_string(),
            title: node.content.title.clone(),
        });
    }
    Ok(deleted)
}
