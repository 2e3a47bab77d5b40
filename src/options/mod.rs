//! Representation options with TOML preset support.
//!
//! Settings serialize to/from TOML so view presets can be stored on disk and
//! partially overridden. The geometry core only ever sees resolved values
//! (an RGB triple and a radius); everything else here feeds the buffer layer.

mod axes;

use std::path::Path;

pub use axes::{AxesOptions, Quality, Tessellation, MAX_RADIUS, MIN_RADIUS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AxesError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[axes]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Principal-axes representation parameters.
    pub axes: AxesOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, AxesError> {
        let content = std::fs::read_to_string(path).map_err(AxesError::Io)?;
        toml::from_str(&content)
            .map_err(|e| AxesError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), AxesError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AxesError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(AxesError::Io)?;
        }
        std::fs::write(path, content).map_err(AxesError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[axes]
radius = 1.25
quality = "high"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.axes.radius, 1.25);
        assert_eq!(opts.axes.quality, Quality::High);
        // Everything else should be default
        assert_eq!(opts.axes.color, AxesOptions::default().color);
        assert_eq!(opts.axes.radius_segments, 10);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("viso-axes-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.axes.radius = 2.0;
        opts.save(&dir.join("thick.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::load(&dir.join("thick.toml")).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "thick"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = std::env::temp_dir()
            .join(format!("viso-axes-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[axes]\nradius = \"wide\"\n").unwrap();

        assert!(matches!(
            Options::load(&path),
            Err(AxesError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(AxesError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("axes"));

        let axes = &props["axes"]["properties"];
        assert!(axes.get("radius").is_some());
        assert!(axes.get("quality").is_some());
        assert!(axes.get("radius_segments").is_some());
        assert!(axes.get("color").is_none());
    }
}
