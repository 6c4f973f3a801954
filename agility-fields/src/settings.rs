//! The flat settings representation the management API stores per field.
//!
//! The destination format only accepts string values, so the map's value
//! type is `String`: booleans are rendered `"true"`/`"false"`, numbers as
//! decimal text. Insertion order is preserved for stable output.

use indexmap::IndexMap;

/// String-keyed, string-valued field configuration.
pub type SettingsMap = IndexMap<String, String>;

/// Insert `key` when the value is present. Absent means the key is omitted
/// entirely, never emitted as an empty string.
pub(crate) fn put_bool(settings: &mut SettingsMap, key: &str, value: Option<bool>) {
    if let Some(v) = value {
        settings.insert(key.to_string(), v.to_string());
    }
}

/// Insert `key` when the value is present and non-empty.
pub(crate) fn put_str(settings: &mut SettingsMap, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        if !v.is_empty() {
            settings.insert(key.to_string(), v.to_string());
        }
    }
}
