//! # Client Layer
//!
//! The [`WikiClient`] trait is the only door to the wiki service. Commands are
//! generic over it, so the same traversal code runs against the real REST API
//! or an in-memory wiki.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: Production implementation over the Confluence Cloud REST API.
//! - [`memory::InMemoryWiki`]: For testing command logic without network I/O.
//!
//! All methods take `&self`; the tools issue one request at a time.

use crate::error::ClientError;
use crate::model::{Content, ContentList, ContentQuery};

pub mod http;
pub mod memory;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

pub trait WikiClient {
    /// Fetch one content record with the expansions listed in `query`.
    fn get_content_by_id(&self, id: &str, query: &ContentQuery) -> ClientResult<Content>;

    /// List the direct children of `id`.
    /// Entries carry at least `id` and `type`; listing order is preserved.
    fn get_child_pages(&self, id: &str) -> ClientResult<ContentList>;

    /// Create `content`; the returned record carries the server-assigned `id`.
    fn create_content(&self, content: &Content) -> ClientResult<Content>;

    fn delete_content(&self, id: &str) -> ClientResult<()>;
}

impl<T: WikiClient + ?Sized> WikiClient for &T {
    fn get_content_by_id(&self, id: &str, query: &ContentQuery) -> ClientResult<Content> {
        (**self).get_content_by_id(id, query)
    }

    fn get_child_pages(&self, id: &str) -> ClientResult<ContentList> {
        (**self).get_child_pages(id)
    }

    fn create_content(&self, content: &Content) -> ClientResult<Content> {
        (**self).create_content(content)
    }

    fn delete_content(&self, id: &str) -> ClientResult<()> {
        (**self).delete_content(id)
    }
}
