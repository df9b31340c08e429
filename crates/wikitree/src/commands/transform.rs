use crate::model::{Ancestry, Content, Space};

/// Build the record to send to the destination from a fetched source record.
///
/// Type, status and body are copied verbatim. The identifier is left empty for
/// the destination to assign, and `ancestry` replaces the source ancestry.
///
/// When `dest_space_key` is the source record's own space the copy is a
/// duplicate next to the original, so `conflict_suffix` is appended to the
/// title. No other collision check is made.
pub fn transform(
    source: &Content,
    ancestry: Ancestry,
    dest_space_key: &str,
    conflict_suffix: &str,
) -> Content {
    let title = if dest_space_key == source.space.key {
        format!("{}{}", source.title, conflict_suffix)
    } else {
        source.title.clone()
    };

    Content {
        id: String::new(),
        content_type: source.content_type.clone(),
        status: source.status.clone(),
        title,
        space: Space {
            key: dest_space_key.to_string(),
        },
        ancestors: ancestry,
        body: source.body.clone(),
        version: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Body, Storage, Version};

    fn source() -> Content {
        Content {
            id: "65538".into(),
            content_type: "page".into(),
            status: "current".into(),
            title: "Runbook".into(),
            space: Space { key: "SRC".into() },
            ancestors: Ancestry::from_ids(["1", "2"]),
            body: Some(Body {
                storage: Some(Storage {
                    value: "<h1>Steps</h1>".into(),
                    representation: "storage".into(),
                }),
            }),
            version: Some(Version {
                number: 7,
                when: None,
                message: Some("edited".into()),
                minor_edit: false,
            }),
        }
    }

    #[test]
    fn cross_space_keeps_title() {
        let new = transform(&source(), Ancestry::top_level(), "DST", "- import");
        assert_eq!(new.title, "Runbook");
        assert_eq!(new.space.key, "DST");
    }

    #[test]
    fn same_space_appends_suffix() {
        let new = transform(&source(), Ancestry::top_level(), "SRC", "- import");
        assert_eq!(new.title, "Runbook- import");

        let new = transform(&source(), Ancestry::top_level(), "SRC", " (copy)");
        assert_eq!(new.title, "Runbook (copy)");
    }

    #[test]
    fn clears_id_and_replaces_ancestry() {
        let new = transform(&source(), Ancestry::under("900"), "DST", "- import");
        assert!(new.id.is_empty());
        assert_eq!(new.ancestors, Ancestry::under("900"));

        let new = transform(&source(), Ancestry::top_level(), "DST", "- import");
        assert!(new.ancestors.is_empty());
    }

    #[test]
    fn copies_type_status_and_body_but_not_version() {
        let src = source();
        let new = transform(&src, Ancestry::top_level(), "DST", "- import");
        assert_eq!(new.content_type, "page");
        assert_eq!(new.status, "current");
        assert_eq!(new.body, src.body);
        assert!(new.version.is_none());
    }
}
