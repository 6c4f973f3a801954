//! Management API layer for Agility instances
//!
//! Wraps the content management REST API behind the narrow
//! [`ManagementApi`] trait and provides the handler operations the tool
//! layer calls: save a model, list models/components, list containers
//! (filtered and converted to the validated domain shape), save a
//! container.
//!
//! Authentication is a caller-supplied bearer token; obtaining and
//! refreshing it is out of scope here, as are retries — a failed call
//! surfaces immediately as a [`ManagementError`].

pub mod client;
pub mod error;
pub mod handlers;
pub mod options;

pub use client::{HttpManagementApi, ManagementApi};
pub use error::{ManagementError, Result};
pub use handlers::{
    get_components, get_containers, get_models, save_component, save_container, save_model,
};
pub use options::{ClientOptions, DEFAULT_BASE_URL, ENV_PREFIX};
