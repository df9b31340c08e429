use wikitree::api::{CopyRequest, WikiApi};
use wikitree::client::memory::fixtures::{home_tree, WikiFixture};
use wikitree::client::memory::{InMemoryWiki, WikiCall};

fn copy_request(dest_space: &str) -> CopyRequest {
    CopyRequest {
        source_page_id: "1".to_string(),
        source_space_key: "SRC".to_string(),
        dest_space_key: dest_space.to_string(),
        dest_parent_id: None,
        recursive: true,
        conflict_suffix: "- import".to_string(),
    }
}

#[test]
fn test_copy_home_tree_to_other_space() {
    let source = home_tree("SRC");
    let dest = InMemoryWiki::new();
    let api = WikiApi::new(&source, &dest);

    let result = api.copy_tree(&copy_request("DST")).unwrap();

    assert_eq!(dest.creates().len(), 3);
    let home = &result.created_pages[0];
    assert_eq!(home.title, "Home");
    assert_eq!(home.parent_id, None);
    for child in &result.created_pages[1..] {
        assert_eq!(child.parent_id.as_deref(), Some(home.id.as_str()));
    }
    let titles: Vec<String> = dest
        .child_ids(&home.id)
        .iter()
        .map(|id| dest.page(id).unwrap().title)
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn test_copy_within_space_uses_suffix() {
    let wiki = home_tree("SRC");
    let api = WikiApi::single(&wiki);

    let mut request = copy_request("SRC");
    request.conflict_suffix = " (copy)".to_string();
    let result = api.copy_tree(&request).unwrap();

    let titles: Vec<&str> = result
        .created_pages
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Home (copy)", "A (copy)", "B (copy)"]);
}

#[test]
fn test_copy_body_is_verbatim() {
    let source = home_tree("SRC");
    let dest = InMemoryWiki::new();
    let api = WikiApi::new(&source, &dest);

    let result = api.copy_tree(&copy_request("DST")).unwrap();

    for page in &result.created_pages {
        let original = source.page(&page.source_id).unwrap();
        let copy = dest.page(&page.id).unwrap();
        assert_eq!(copy.body, original.body);
        assert_eq!(copy.space.key, "DST");
    }
}

#[test]
fn test_wide_and_deep_tree_create_count() {
    // Depth 3, fan-out 3: 1 + 3 + 9 pages.
    let mut fixture = WikiFixture::new().with_page("r", "SRC", "Root", None);
    for i in 0..3 {
        let child = format!("c{i}");
        fixture = fixture.with_page(&child, "SRC", &format!("Child {i}"), Some("r"));
        for j in 0..3 {
            let grandchild = format!("c{i}g{j}");
            fixture = fixture.with_page(
                &grandchild,
                "SRC",
                &format!("Grandchild {i}.{j}"),
                Some(child.as_str()),
            );
        }
    }
    let source = fixture.build();
    let dest = InMemoryWiki::new();
    let api = WikiApi::new(&source, &dest);

    let mut request = copy_request("DST");
    request.source_page_id = "r".to_string();
    let result = api.copy_tree(&request).unwrap();

    assert_eq!(result.created_pages.len(), 13);
    for call in dest.creates().iter().skip(1) {
        match call {
            WikiCall::Create { ancestors, .. } => assert_eq!(ancestors.len(), 1),
            _ => unreachable!(),
        }
    }
    // Parents are always created before their children.
    for (i, page) in result.created_pages.iter().enumerate() {
        if let Some(parent) = &page.parent_id {
            let parent_pos = result
                .created_pages
                .iter()
                .position(|p| &p.id == parent)
                .unwrap();
            assert!(parent_pos < i);
        }
    }
}

#[test]
fn test_grandchild_read_failure_issues_no_writes() {
    let source = WikiFixture::new()
        .with_page("1", "SRC", "Home", None)
        .with_page("2", "SRC", "A", Some("1"))
        .with_page("3", "SRC", "A.1", Some("2"))
        .build();
    source.fail_get("3");
    let dest = InMemoryWiki::new();
    let api = WikiApi::new(&source, &dest);

    let err = api.copy_tree(&copy_request("DST")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to get content from page 3, child of 2: Client error: simulated read error for 3"
    );
    assert!(dest.calls().is_empty());
}
