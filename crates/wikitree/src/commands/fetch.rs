//! Page reads with the failing page attached to the error.

use crate::client::WikiClient;
use crate::error::{Result, WikiError};
use crate::model::{Content, ContentQuery};

/// Fetch the full record of `page_id`. `parent_id` is only used to locate failures.
pub fn content<C: WikiClient>(
    client: &C,
    query: &ContentQuery,
    page_id: &str,
    parent_id: Option<&str>,
) -> Result<Content> {
    client
        .get_content_by_id(page_id, query)
        .map_err(|source| WikiError::Fetch {
            page_id: page_id.to_string(),
            parent_id: parent_id.map(str::to_string),
            source,
        })
}

/// IDs of the `page`-typed children of `page_id`, in listing order.
pub fn child_page_ids<C: WikiClient>(client: &C, page_id: &str) -> Result<Vec<String>> {
    let listing = client
        .get_child_pages(page_id)
        .map_err(|source| WikiError::ListChildren {
            page_id: page_id.to_string(),
            source,
        })?;
    Ok(listing
        .results
        .into_iter()
        .filter(Content::is_page)
        .map(|c| c.id)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::fixtures::WikiFixture;

    #[test]
    fn read_failure_names_page_and_parent() {
        let wiki = WikiFixture::new()
            .with_page("1", "SRC", "Root", None)
            .with_page("2", "SRC", "Child", Some("1"))
            .build();
        wiki.fail_get("2");

        let err = content(&wiki, &ContentQuery::pages_in("SRC"), "2", Some("1")).unwrap_err();
        match err {
            WikiError::Fetch {
                page_id, parent_id, ..
            } => {
                assert_eq!(page_id, "2");
                assert_eq!(parent_id.as_deref(), Some("1"));
            }
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }

    #[test]
    fn child_listing_skips_non_pages() {
        let wiki = WikiFixture::new()
            .with_page("1", "SRC", "Root", None)
            .with_typed("2", "attachment", "SRC", "diagram.png", Some("1"))
            .with_page("3", "SRC", "Child", Some("1"))
            .with_typed("4", "comment", "SRC", "Nice", Some("1"))
            .build();

        assert_eq!(child_page_ids(&wiki, "1").unwrap(), vec!["3"]);
    }

    #[test]
    fn listing_failure_is_wrapped() {
        let wiki = WikiFixture::new().with_page("1", "SRC", "Root", None).build();
        wiki.fail_list("1");

        let err = child_page_ids(&wiki, "1").unwrap_err();
        assert!(matches!(err, WikiError::ListChildren { ref page_id, .. } if page_id == "1"));
        assert!(err.is_fetch());
    }
}
