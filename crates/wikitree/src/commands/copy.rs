//! # Tree Copy
//!
//! A copy runs in two phases:
//!
//! 1. **Read**: the source tree is discovered in full (or just the root when
//!    not recursive). A read failure here means nothing is written.
//! 2. **Write**: the tree is recreated depth-first. Each page is created before
//!    any of its children, and every child is placed under the identifier the
//!    destination just assigned to its parent, never the source parent's ID.
//!
//! When a destination parent is given it is fetched first, and must live in the
//! destination space.
//!
//! ## Partial Failures
//!
//! There is no rollback. If a create fails after others succeeded, the pages
//! already created stay at the destination; their IDs are logged at `warn`.

use super::fetch;
use super::transform::transform;
use super::walk::discover_tree;
use super::{CmdMessage, CmdResult, CreatedPage};
use crate::client::WikiClient;
use crate::error::{ClientError, Result, WikiError};
use crate::model::{Ancestry, ContentNode, ContentQuery};
use tracing::{info, warn};

/// Everything a copy needs once credentials are settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source_page_id: String,
    pub source_space_key: String,
    pub dest_space_key: String,
    /// Parent page at the destination. `None` copies to the top level of the space.
    pub dest_parent_id: Option<String>,
    pub recursive: bool,
    pub conflict_suffix: String,
}

pub fn run<S: WikiClient, D: WikiClient>(
    source: &S,
    dest: &D,
    request: &CopyRequest,
) -> Result<CmdResult> {
    let root_ancestry = match &request.dest_parent_id {
        Some(parent_id) => {
            check_destination_parent(dest, parent_id, &request.dest_space_key)?;
            Ancestry::under(parent_id.clone())
        }
        None => Ancestry::top_level(),
    };

    let source_query = ContentQuery::pages_in(&request.source_space_key);
    let tree = discover_tree(
        source,
        &source_query,
        &request.source_page_id,
        request.recursive,
    )?;
    info!(pages = tree.len(), root = %tree.content.title, "discovered source tree");

    let mut created = Vec::new();
    if let Err(err) = materialize(
        dest,
        &tree,
        root_ancestry,
        &request.dest_space_key,
        &request.conflict_suffix,
        &mut created,
    ) {
        if !created.is_empty() {
            let ids: Vec<&str> = created.iter().map(|p| p.id.as_str()).collect();
            warn!(
                created = ?ids,
                "copy aborted; pages already created at the destination were left in place"
            );
        }
        return Err(err);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Copied {} page(s) to space {}",
        created.len(),
        request.dest_space_key
    )));
    if request.dest_space_key == request.source_space_key {
        result.add_message(CmdMessage::warning(format!(
            "Copied within space {}: titles were suffixed with {:?}",
            request.dest_space_key, request.conflict_suffix
        )));
    }
    Ok(result.with_created_pages(created))
}

/// The destination parent must exist and belong to the destination space.
fn check_destination_parent<D: WikiClient>(
    dest: &D,
    parent_id: &str,
    dest_space_key: &str,
) -> Result<()> {
    let query = ContentQuery::pages_in(dest_space_key);
    let parent = fetch::content(dest, &query, parent_id, None)?;
    if parent.space.key != dest_space_key {
        return Err(WikiError::DestinationMismatch {
            found: parent.space.key,
            expected: dest_space_key.to_string(),
        });
    }
    Ok(())
}

/// Create `node` under `ancestry`, then each of its children under the new page.
///
/// Every page created is pushed onto `created`, so the caller can report them
/// even when a later create fails.
pub fn materialize<C: WikiClient>(
    client: &C,
    node: &ContentNode,
    ancestry: Ancestry,
    dest_space_key: &str,
    conflict_suffix: &str,
    created: &mut Vec<CreatedPage>,
) -> Result<()> {
    let parent_id = ancestry.parent_id().map(str::to_string);
    let new_content = transform(&node.content, ancestry, dest_space_key, conflict_suffix);

    let create_error = |source: ClientError| WikiError::Create {
        title: new_content.title.clone(),
        parent_id: parent_id.clone(),
        source,
    };
    let response = client.create_content(&new_content).map_err(create_error)?;
    if response.id.is_empty() {
        return Err(create_error(ClientError::Other(
            "server response carried no page id".to_string(),
        )));
    }
    info!(id = %response.id, title = %new_content.title, parent = ?parent_id, "created page");

    created.push(CreatedPage {
        source_id: node.content.id.clone(),
        id: response.id.clone(),
        title: new_content.title.clone(),
        parent_id: parent_id.clone(),
    });

    for child in &node.children {
        materialize(
            client,
            child,
            Ancestry::under(response.id.clone()),
            dest_space_key,
            conflict_suffix,
            created,
        )?;
    }
    Ok(())
}
