//! The validated domain shape for containers.

use serde::{Deserialize, Serialize};

use crate::error::{ContainerError, Result};

/// Query string parameter used for details-page previews when the API
/// record carries none.
pub const DEFAULT_DETAILS_QUERY_STRING: &str = "ContentID";

/// One column of the container's default grid. Every attribute is
/// nullable on the wire and stays nullable here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    pub sort_order: Option<i64>,
    pub field_name: Option<String>,
    pub label: Option<String>,
    pub is_default_sort: Option<bool>,
    pub sort_direction: Option<String>,
    pub type_name: Option<String>,
}

/// A content list or single-item definition, validated.
///
/// Constructed from a native record at read time and converted back to the
/// native shape immediately before a save call; never mutated in place
/// across that boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    /// The model this container uses.
    #[serde(rename = "modelID")]
    pub model_id: Option<i64>,
    pub reference_name: Option<String>,
    pub display_name: Option<String>,
    /// 0 = single item, 1 = list.
    #[serde(rename = "modelTypeID")]
    pub model_type_id: i64,
    pub requires_approval: Option<bool>,
    pub last_modified_date: Option<String>,
    pub last_modified_on: Option<String>,
    pub last_modified_by: Option<String>,
    /// Containers only show up in the listing when shared or a dynamic
    /// page list.
    pub is_shared: Option<bool>,
    pub is_dynamic_page_list: Option<bool>,
    #[serde(rename = "categoryID")]
    pub category_id: Option<i64>,
    pub category_reference_name: Option<String>,
    pub category_name: Option<String>,
    /// Listing preview page, e.g. `~/blog`.
    pub default_listing_page: Option<String>,
    /// Details preview page, e.g. `~/blog/blog-details`.
    pub default_details_page: Option<String>,
    pub default_details_page_query_string: Option<String>,
    pub default_grid_columns: Vec<GridColumn>,
}

impl Container {
    /// Check the invariants the conversion layer guarantees. Programmatic
    /// construction goes through here before a save.
    pub fn validate(&self) -> Result<()> {
        if !(0..=2).contains(&self.model_type_id) {
            return Err(ContainerError::validation(
                "modelTypeID",
                format!("must be 0, 1 or 2, got {}", self.model_type_id),
            ));
        }
        if self.requires_approval.is_none() {
            return Err(ContainerError::validation(
                "requiresApproval",
                "must be present (defaults to true when converted)",
            ));
        }
        if self.default_details_page_query_string.is_none() {
            return Err(ContainerError::validation(
                "defaultDetailsPageQueryString",
                "must be present (defaults to ContentID when converted)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_container() -> Container {
        Container {
            id: Some(10),
            model_id: Some(4),
            reference_name: Some("posts".into()),
            display_name: Some("Posts".into()),
            model_type_id: 1,
            requires_approval: Some(true),
            last_modified_date: None,
            last_modified_on: None,
            last_modified_by: None,
            is_shared: Some(true),
            is_dynamic_page_list: Some(false),
            category_id: None,
            category_reference_name: None,
            category_name: None,
            default_listing_page: None,
            default_details_page: None,
            default_details_page_query_string: Some(DEFAULT_DETAILS_QUERY_STRING.into()),
            default_grid_columns: vec![],
        }
    }

    #[test]
    fn valid_container_passes() {
        assert!(valid_container().validate().is_ok());
    }

    #[test]
    fn out_of_range_model_type_rejected() {
        let container = Container {
            model_type_id: 7,
            ..valid_container()
        };
        let err = container.validate().unwrap_err();
        assert!(err.to_string().contains("modelTypeID"));
    }

    #[test]
    fn missing_requires_approval_rejected() {
        let container = Container {
            requires_approval: None,
            ..valid_container()
        };
        let err = container.validate().unwrap_err();
        assert!(err.to_string().contains("requiresApproval"));
    }

    #[test]
    fn serializes_upper_case_id_keys() {
        let value = serde_json::to_value(valid_container()).unwrap();
        assert_eq!(value["ID"], 10);
        assert_eq!(value["modelID"], 4);
        assert_eq!(value["modelTypeID"], 1);
        assert!(value.get("id").is_none());
    }
}
