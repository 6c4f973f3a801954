//! Fixed values the management API assigns special meaning to.

/// Content view identifier for nested content fields. A relation field whose
/// `ContentView` setting carries this value owns a newly created, non-shared
/// child container.
pub const NESTED_CONTENT_VIEW: &str = "_newcontent_agility_";

/// Default sort field for grid-rendered content fields.
pub const DEFAULT_SORT_FIELD: &str = "ItemOrder";

/// The `type` tags the field schema union recognizes.
pub const KNOWN_FIELD_KINDS: [&str; 12] = [
    "Text",
    "LongText",
    "Html",
    "Integer",
    "Decimal",
    "Boolean",
    "Date",
    "DropdownList",
    "FileAttachment",
    "ImageAttachment",
    "Link",
    "Content",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_are_distinct() {
        let mut kinds = KNOWN_FIELD_KINDS.to_vec();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), 12);
    }

    #[test]
    fn nested_sentinel_value() {
        assert_eq!(NESTED_CONTENT_VIEW, "_newcontent_agility_");
    }
}
