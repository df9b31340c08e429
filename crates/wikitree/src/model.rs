//! # Domain Model: Pages, Ancestry and Trees
//!
//! This module defines the wire types exchanged with the wiki REST API
//! ([`Content`], [`Space`], [`Body`], [`Version`], [`ContentList`]) and the
//! in-memory tree built from them ([`ContentNode`]).
//!
//! ## Ancestry
//!
//! The API places a new page by its `ancestors` array: an ordered chain of page
//! IDs from the space root down to the immediate parent. When creating pages we
//! only ever send a single entry (the parent), or none for a top-level page.
//! [`Ancestry`] wraps that chain.
//!
//! ## Write Snapshots
//!
//! Records are read and written as complete snapshots. On write, an empty `id`
//! and the `version` block are never serialized: the server assigns both.
//!
//! ## Content Trees
//!
//! A [`ContentNode`] owns its children outright. Children keep the order in
//! which the child-page listing returned them, and every child is a `page`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content type of regular wiki pages. Anything else is skipped during traversal.
pub const PAGE_TYPE: &str = "page";

/// Expansions requested on every read, so a fetched page can be re-created verbatim.
pub const DEFAULT_EXPAND: [&str; 5] = ["space", "body.storage", "version", "ancestors", "descendants"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestor {
    pub id: String,
}

/// Ordered ancestor chain, root first, immediate parent last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ancestry(Vec<Ancestor>);

impl Ancestry {
    /// No ancestors: the page is created at the top level of its space.
    pub fn top_level() -> Self {
        Self::default()
    }

    /// A single-entry chain placing a page directly under `parent_id`.
    pub fn under(parent_id: impl Into<String>) -> Self {
        Self(vec![Ancestor {
            id: parent_id.into(),
        }])
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(|id| Ancestor { id: id.into() }).collect())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| a.id.as_str())
    }

    /// The immediate parent, if any.
    pub fn parent_id(&self) -> Option<&str> {
        self.0.last().map(|a| a.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    pub value: String,
    pub representation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub number: u32,
    #[serde(default)]
    pub when: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub minor_edit: bool,
}

/// One wiki content record, as returned by `GET /content/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub space: Space,
    #[serde(default, skip_serializing_if = "Ancestry::is_empty")]
    pub ancestors: Ancestry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    // Read-only: the server owns versioning.
    #[serde(default, skip_serializing)]
    pub version: Option<Version>,
}

impl Content {
    pub fn is_page(&self) -> bool {
        self.content_type == PAGE_TYPE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
}

/// One page of results from a listing endpoint such as `/content/{id}/child/page`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentList {
    #[serde(default)]
    pub results: Vec<Content>,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub size: usize,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl ContentList {
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }
}

/// Read parameters shared by every fetch in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub space_key: String,
    pub content_type: String,
    pub expand: Vec<String>,
}

impl ContentQuery {
    /// Query for full `page` records in `space_key`, with all expansions needed to copy them.
    pub fn pages_in(space_key: impl Into<String>) -> Self {
        Self {
            space_key: space_key.into(),
            content_type: PAGE_TYPE.to_string(),
            expand: DEFAULT_EXPAND.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Query-string pairs as sent to `GET /content/{id}`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.space_key.is_empty() {
            params.push(("spaceKey", self.space_key.clone()));
        }
        if !self.content_type.is_empty() {
            params.push(("type", self.content_type.clone()));
        }
        if !self.expand.is_empty() {
            params.push(("expand", self.expand.join(",")));
        }
        params
    }
}

/// A fetched page and the page-typed subtree beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    pub content: Content,
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.content.id
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(ContentNode::len).sum::<usize>()
    }

    /// Every node below `self` ordered so that each one precedes its ancestors.
    pub fn descendants_post_order(&self) -> Vec<&ContentNode> {
        let mut out = Vec::new();
        for child in &self.children {
            collect_post_order(child, &mut out);
        }
        out
    }
}

fn collect_post_order<'a>(node: &'a ContentNode, out: &mut Vec<&'a ContentNode>) {
    for child in &node.children {
        collect_post_order(child, out);
    }
    out.push(node);
}
