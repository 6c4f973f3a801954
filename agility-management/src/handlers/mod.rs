//! Handler operations: one function per tool-facing action.
//!
//! Handlers own the orchestration — validate, convert, call the API —
//! and return structured errors; presenting those to a user belongs to
//! the caller.

mod get_containers;
mod get_models;
mod save_container;
mod save_model;

pub use get_containers::get_containers;
pub use get_models::{get_components, get_models};
pub use save_container::save_container;
pub use save_model::{save_component, save_model};
