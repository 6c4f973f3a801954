//! Which containers belong in a listing.
//!
//! The instance ships several system lists (CSS/JS file management and the
//! code template lists) that are never interesting to a caller browsing
//! content. Beyond those, only shared containers and dynamic page lists
//! are listed, and component-backed containers are skipped.

use crate::native::ContainerRecord;

/// Reference names of the system lists every instance carries.
pub const SYSTEM_CONTAINERS: [&str; 5] = [
    "AgilityCSSFiles",
    "AgilityJavascriptFiles",
    "AgilityGlobalCodeTemplates",
    "AgilityModuleCodeTemplates",
    "AgilityPageCodeTemplates",
];

/// Definition type id marking a component-backed container.
const COMPONENT_DEFINITION_TYPE_ID: i64 = 2;

/// Whether this is one of the fixed system lists.
pub fn is_system_container(record: &ContainerRecord) -> bool {
    let reference_name = record.reference_name.as_deref().unwrap_or("");
    SYSTEM_CONTAINERS.contains(&reference_name)
}

/// Whether a record belongs in the container listing.
pub fn is_listable(record: &ContainerRecord) -> bool {
    if is_system_container(record) {
        return false;
    }
    let shared_or_dynamic =
        record.is_shared.unwrap_or(false) || record.is_dynamic_page_list.unwrap_or(false);
    let definition_type_id = record.content_definition_type_id.unwrap_or(1);
    shared_or_dynamic && definition_type_id != COMPONENT_DEFINITION_TYPE_ID
}

/// Keep only the records a listing should show, preserving order.
pub fn filter_listable(records: Vec<ContainerRecord>) -> Vec<ContainerRecord> {
    records.into_iter().filter(is_listable).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_list(reference_name: &str) -> ContainerRecord {
        ContainerRecord {
            reference_name: Some(reference_name.to_string()),
            is_shared: Some(true),
            is_dynamic_page_list: Some(false),
            content_definition_type_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn system_lists_excluded_even_when_shared() {
        for name in SYSTEM_CONTAINERS {
            let record = shared_list(name);
            assert!(record.is_shared.unwrap());
            assert!(!is_listable(&record), "{name} must be excluded");
        }
    }

    #[test]
    fn shared_container_is_listed() {
        assert!(is_listable(&shared_list("posts")));
    }

    #[test]
    fn dynamic_page_list_is_listed_without_sharing() {
        let record = ContainerRecord {
            is_shared: Some(false),
            is_dynamic_page_list: Some(true),
            ..shared_list("blogposts")
        };
        assert!(is_listable(&record));
    }

    #[test]
    fn neither_shared_nor_dynamic_is_skipped() {
        let record = ContainerRecord {
            is_shared: Some(false),
            is_dynamic_page_list: Some(false),
            ..shared_list("internal")
        };
        assert!(!is_listable(&record));
    }

    #[test]
    fn component_containers_are_skipped() {
        let record = ContainerRecord {
            content_definition_type_id: Some(2),
            ..shared_list("heroblock")
        };
        assert!(!is_listable(&record));
    }

    #[test]
    fn missing_definition_type_id_is_treated_as_list() {
        let record = ContainerRecord {
            content_definition_type_id: None,
            ..shared_list("posts")
        };
        assert!(is_listable(&record));
    }

    #[test]
    fn filter_keeps_order_of_survivors() {
        let records = vec![
            shared_list("AgilityCSSFiles"),
            shared_list("posts"),
            ContainerRecord {
                content_definition_type_id: Some(2),
                ..shared_list("heroblock")
            },
            shared_list("authors"),
        ];
        let kept = filter_listable(records);
        let names: Vec<&str> = kept
            .iter()
            .map(|r| r.reference_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["posts", "authors"]);
    }
}
