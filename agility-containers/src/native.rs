//! The management API's native container wire shape.
//!
//! Field names follow the API exactly, including its inconsistent `ID`
//! casing. Everything is optional on the wire; defaulting happens in the
//! domain conversion, not here.

use serde::{Deserialize, Serialize};

/// One column of a container's default grid, as the API sends it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRecord {
    pub sort_order: Option<i64>,
    pub field_name: Option<String>,
    pub label: Option<String>,
    pub is_default_sort: Option<bool>,
    pub sort_direction: Option<String>,
    pub type_name: Option<String>,
}

/// A container (content list or single item) as the API sends it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRecord {
    #[serde(rename = "contentViewID")]
    pub content_view_id: Option<i64>,
    #[serde(rename = "contentDefinitionID")]
    pub content_definition_id: Option<i64>,
    pub reference_name: Option<String>,
    pub content_view_name: Option<String>,
    /// 0 = single item, 1 = list. Maps to the domain `modelTypeID`.
    pub content_definition_type: Option<i64>,
    /// Definition type of the backing model; 2 marks a component. Read by
    /// the listing filter, never captured by the domain shape.
    #[serde(rename = "contentDefinitionTypeID")]
    pub content_definition_type_id: Option<i64>,
    pub requires_approval: Option<bool>,
    pub last_modified_date: Option<String>,
    pub last_modified_on: Option<String>,
    pub last_modified_by: Option<String>,
    pub is_shared: Option<bool>,
    pub is_dynamic_page_list: Option<bool>,
    #[serde(rename = "contentViewCategoryID")]
    pub content_view_category_id: Option<i64>,
    pub content_view_category_reference_name: Option<String>,
    pub content_view_category_name: Option<String>,
    pub default_listing_page: Option<String>,
    pub default_details_page: Option<String>,
    pub default_details_page_query_string: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnRecord>,
}
