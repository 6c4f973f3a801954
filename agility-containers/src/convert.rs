//! Bidirectional conversion between the native wire shape and the domain
//! shape.
//!
//! `to_domain` fills the defaults the API leaves implicit (approval
//! required, details query string) and validates before returning;
//! `to_native` is the structural inverse. For a record whose defaulted
//! fields are populated, `to_native(to_domain(record))` reproduces the
//! record on every field the domain shape captures.

use crate::error::Result;
use crate::native::{ColumnRecord, ContainerRecord};
use crate::types::{Container, GridColumn, DEFAULT_DETAILS_QUERY_STRING};

/// Convert a native record into the validated domain shape.
pub fn to_domain(native: &ContainerRecord) -> Result<Container> {
    let container = Container {
        id: native.content_view_id,
        model_id: native.content_definition_id,
        reference_name: native.reference_name.clone(),
        display_name: native.content_view_name.clone(),
        model_type_id: native.content_definition_type.unwrap_or(1),
        requires_approval: Some(native.requires_approval.unwrap_or(true)),
        last_modified_date: native.last_modified_date.clone(),
        last_modified_on: native.last_modified_on.clone(),
        last_modified_by: native.last_modified_by.clone(),
        is_shared: native.is_shared,
        is_dynamic_page_list: native.is_dynamic_page_list,
        category_id: native.content_view_category_id,
        category_reference_name: native.content_view_category_reference_name.clone(),
        category_name: native.content_view_category_name.clone(),
        default_listing_page: native.default_listing_page.clone(),
        default_details_page: native.default_details_page.clone(),
        default_details_page_query_string: Some(
            native
                .default_details_page_query_string
                .clone()
                .unwrap_or_else(|| DEFAULT_DETAILS_QUERY_STRING.to_string()),
        ),
        default_grid_columns: native.columns.iter().map(column_to_domain).collect(),
    };
    container.validate()?;
    Ok(container)
}

/// Convert a domain container back to the native wire shape for a save.
pub fn to_native(container: &Container) -> ContainerRecord {
    ContainerRecord {
        content_view_id: container.id,
        content_definition_id: container.model_id,
        reference_name: container.reference_name.clone(),
        content_view_name: container.display_name.clone(),
        content_definition_type: Some(container.model_type_id),
        // Not captured by the domain shape; the API recomputes it from the
        // backing model.
        content_definition_type_id: None,
        requires_approval: container.requires_approval,
        last_modified_date: container.last_modified_date.clone(),
        last_modified_on: container.last_modified_on.clone(),
        last_modified_by: container.last_modified_by.clone(),
        is_shared: container.is_shared,
        is_dynamic_page_list: container.is_dynamic_page_list,
        content_view_category_id: container.category_id,
        content_view_category_reference_name: container.category_reference_name.clone(),
        content_view_category_name: container.category_name.clone(),
        default_listing_page: container.default_listing_page.clone(),
        default_details_page: container.default_details_page.clone(),
        default_details_page_query_string: Some(
            container
                .default_details_page_query_string
                .clone()
                .unwrap_or_else(|| DEFAULT_DETAILS_QUERY_STRING.to_string()),
        ),
        columns: container
            .default_grid_columns
            .iter()
            .map(column_to_native)
            .collect(),
    }
}

/// Convert a whole listing.
pub fn containers_to_domain(natives: &[ContainerRecord]) -> Result<Vec<Container>> {
    natives.iter().map(to_domain).collect()
}

/// Convert domain containers back to wire records.
pub fn containers_to_native(containers: &[Container]) -> Vec<ContainerRecord> {
    containers.iter().map(to_native).collect()
}

fn column_to_domain(column: &ColumnRecord) -> GridColumn {
    GridColumn {
        sort_order: column.sort_order,
        field_name: column.field_name.clone(),
        label: column.label.clone(),
        is_default_sort: column.is_default_sort,
        sort_direction: column.sort_direction.clone(),
        type_name: column.type_name.clone(),
    }
}

fn column_to_native(column: &GridColumn) -> ColumnRecord {
    ColumnRecord {
        sort_order: column.sort_order,
        field_name: column.field_name.clone(),
        label: column.label.clone(),
        is_default_sort: column.is_default_sort,
        sort_direction: column.sort_direction.clone(),
        type_name: column.type_name.clone(),
    }
}
