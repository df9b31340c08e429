use super::{ClientResult, WikiClient};
use crate::error::ClientError;
use crate::model::{Ancestry, Body, Content, ContentList, ContentQuery, Space, Storage, PAGE_TYPE};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// One recorded call against an [`InMemoryWiki`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WikiCall {
    Get(String),
    ListChildren(String),
    Create {
        title: String,
        space_key: String,
        ancestors: Vec<String>,
    },
    Delete(String),
}

impl WikiCall {
    pub fn is_write(&self) -> bool {
        matches!(self, WikiCall::Create { .. } | WikiCall::Delete(_))
    }
}

/// In-memory wiki for testing.
///
/// Uses `RefCell` for interior mutability since the tools are single-threaded.
/// Every call is recorded in order, and reads, creates or deletes can be made
/// to fail for specific pages.
///
/// Like the real service, it refuses to delete a page that still has children.
pub struct InMemoryWiki {
    pages: RefCell<HashMap<String, Content>>,
    children: RefCell<HashMap<String, Vec<String>>>,
    calls: RefCell<Vec<WikiCall>>,
    next_id: RefCell<u64>,
    fail_get: RefCell<HashSet<String>>,
    fail_list: RefCell<HashSet<String>>,
    fail_create: RefCell<HashSet<String>>,
    fail_delete: RefCell<HashSet<String>>,
}

impl Default for InMemoryWiki {
    fn default() -> Self {
        Self {
            pages: RefCell::new(HashMap::new()),
            children: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            next_id: RefCell::new(1000),
            fail_get: RefCell::new(HashSet::new()),
            fail_list: RefCell::new(HashSet::new()),
            fail_create: RefCell::new(HashSet::new()),
            fail_delete: RefCell::new(HashSet::new()),
        }
    }
}

impl InMemoryWiki {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record as-is, registering it under its immediate ancestor.
    pub fn insert(&self, content: Content) {
        if let Some(parent) = content.ancestors.parent_id() {
            self.children
                .borrow_mut()
                .entry(parent.to_string())
                .or_default()
                .push(content.id.clone());
        }
        self.pages.borrow_mut().insert(content.id.clone(), content);
    }

    pub fn page(&self, id: &str) -> Option<Content> {
        self.pages.borrow().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pages.borrow().contains_key(id)
    }

    pub fn page_count(&self) -> usize {
        self.pages.borrow().len()
    }

    /// IDs of the direct children of `id`, in listing order.
    pub fn child_ids(&self, id: &str) -> Vec<String> {
        self.children.borrow().get(id).cloned().unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<WikiCall> {
        self.calls.borrow().clone()
    }

    pub fn creates(&self) -> Vec<WikiCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, WikiCall::Create { .. }))
            .collect()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                WikiCall::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    /// Make `get_content_by_id(id)` fail.
    pub fn fail_get(&self, id: &str) {
        self.fail_get.borrow_mut().insert(id.to_string());
    }

    /// Make `get_child_pages(id)` fail.
    pub fn fail_list(&self, id: &str) {
        self.fail_list.borrow_mut().insert(id.to_string());
    }

    /// Make creating a page with this exact title fail.
    pub fn fail_create(&self, title: &str) {
        self.fail_create.borrow_mut().insert(title.to_string());
    }

    pub fn fail_delete(&self, id: &str) {
        self.fail_delete.borrow_mut().insert(id.to_string());
    }

    fn record(&self, call: WikiCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate_id(&self) -> String {
        let mut next = self.next_id.borrow_mut();
        let id = next.to_string();
        *next += 1;
        id
    }
}

impl WikiClient for InMemoryWiki {
    fn get_content_by_id(&self, id: &str, _query: &ContentQuery) -> ClientResult<Content> {
        self.record(WikiCall::Get(id.to_string()));
        if self.fail_get.borrow().contains(id) {
            return Err(ClientError::Other(format!("simulated read error for {id}")));
        }
        self.page(id)
            .ok_or_else(|| ClientError::PageNotFound(id.to_string()))
    }

    fn get_child_pages(&self, id: &str) -> ClientResult<ContentList> {
        self.record(WikiCall::ListChildren(id.to_string()));
        if self.fail_list.borrow().contains(id) {
            return Err(ClientError::Other(format!("simulated list error for {id}")));
        }
        if !self.contains(id) {
            return Err(ClientError::PageNotFound(id.to_string()));
        }
        let pages = self.pages.borrow();
        let results: Vec<Content> = self
            .child_ids(id)
            .iter()
            .filter_map(|child| pages.get(child))
            .map(|c| Content {
                id: c.id.clone(),
                content_type: c.content_type.clone(),
                status: c.status.clone(),
                title: c.title.clone(),
                ..Default::default()
            })
            .collect();
        Ok(ContentList {
            size: results.len(),
            limit: results.len(),
            results,
            ..Default::default()
        })
    }

    fn create_content(&self, content: &Content) -> ClientResult<Content> {
        self.record(WikiCall::Create {
            title: content.title.clone(),
            space_key: content.space.key.clone(),
            ancestors: content.ancestors.ids().map(str::to_string).collect(),
        });
        if self.fail_create.borrow().contains(&content.title) {
            return Err(ClientError::Status {
                method: "POST",
                url: "memory://content".to_string(),
                status: 400,
                body: format!("A page with this title already exists: {}", content.title),
            });
        }
        if let Some(parent) = content.ancestors.parent_id() {
            if !self.contains(parent) {
                return Err(ClientError::PageNotFound(parent.to_string()));
            }
        }
        let mut created = content.clone();
        created.id = self.allocate_id();
        if created.status.is_empty() {
            created.status = "current".to_string();
        }
        self.insert(created.clone());
        Ok(created)
    }

    fn delete_content(&self, id: &str) -> ClientResult<()> {
        self.record(WikiCall::Delete(id.to_string()));
        if self.fail_delete.borrow().contains(id) {
            return Err(ClientError::Other(format!("simulated delete error for {id}")));
        }
        let content = self
            .pages
            .borrow_mut()
            .remove(id)
            .ok_or_else(|| ClientError::PageNotFound(id.to_string()))?;
        let pages = self.pages.borrow();
        let has_children = self
            .child_ids(id)
            .iter()
            .any(|child| pages.get(child).is_some_and(Content::is_page));
        drop(pages);
        if has_children {
            self.pages.borrow_mut().insert(id.to_string(), content);
            return Err(ClientError::Status {
                method: "DELETE",
                url: format!("memory://content/{id}"),
                status: 400,
                body: "page still has children".to_string(),
            });
        }
        if let Some(parent) = content.ancestors.parent_id() {
            if let Some(siblings) = self.children.borrow_mut().get_mut(parent) {
                siblings.retain(|s| s != id);
            }
        }
        self.children.borrow_mut().remove(id);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for source trees in an [`InMemoryWiki`].
    ///
    /// Ancestry is derived from the parent's own ancestry, so fixtures look like
    /// what the API returns.
    #[derive(Default)]
    pub struct WikiFixture {
        pub wiki: InMemoryWiki,
    }

    impl WikiFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_page(self, id: &str, space: &str, title: &str, parent: Option<&str>) -> Self {
            self.with_typed(id, PAGE_TYPE, space, title, parent)
        }

        /// Any content type, e.g. `"attachment"` or `"comment"` children.
        pub fn with_typed(
            self,
            id: &str,
            content_type: &str,
            space: &str,
            title: &str,
            parent: Option<&str>,
        ) -> Self {
            let ancestors = match parent.and_then(|p| self.wiki.page(p)) {
                Some(parent) => {
                    let mut ids: Vec<String> =
                        parent.ancestors.ids().map(str::to_string).collect();
                    ids.push(parent.id);
                    Ancestry::from_ids(ids)
                }
                None => Ancestry::top_level(),
            };
            self.wiki.insert(Content {
                id: id.to_string(),
                content_type: content_type.to_string(),
                status: "current".to_string(),
                title: title.to_string(),
                space: Space {
                    key: space.to_string(),
                },
                ancestors,
                body: Some(Body {
                    storage: Some(Storage {
                        value: format!("<p>{title}</p>"),
                        representation: "storage".to_string(),
                    }),
                }),
                version: None,
            });
            self
        }

        pub fn build(self) -> InMemoryWiki {
            self.wiki
        }
    }

    /// `Home` (1) with children `A` (2) and `B` (3), all in `space`.
    pub fn home_tree(space: &str) -> InMemoryWiki {
        WikiFixture::new()
            .with_page("1", space, "Home", None)
            .with_page("2", space, "A", Some("1"))
            .with_page("3", space, "B", Some("1"))
            .build()
    }
}
