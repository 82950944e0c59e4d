//! JSON Schema generation for the configuration file.

use crate::config::WallpaperConfig;

/// Generates the JSON Schema for [`WallpaperConfig`].
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(WallpaperConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!("https://desktop-wallpaper.github.io/desktop-wallpaper.schema.json"),
        );
    }

    schema
}

/// Generates the JSON Schema as a pretty-printed string.
#[must_use]
pub fn generate_schema_json() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}
