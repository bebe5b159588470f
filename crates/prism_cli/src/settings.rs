//! Render settings file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prism_renderer::{OutputOptions, RenderConfig};
use serde::{Deserialize, Serialize};

/// Everything a render needs besides the scene.
///
/// Stored as JSON; omitted fields take their defaults:
///
/// ```json
/// { "render": { "width": 800, "samples_per_pixel": 16 }, "output": { "path": "out.png" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render: RenderConfig,
    pub output: OutputOptions,
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_renderer::Background;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{ "render": { "width": 32, "background": { "solid": [0, 0, 0] } } }"#,
        )
        .unwrap();

        assert_eq!(settings.render.width, 32);
        assert_eq!(settings.render.max_depth, 50);
        assert_eq!(settings.render.background, Background::Solid(prism_renderer::Color::ZERO));
        assert_eq!(settings.output, OutputOptions::default());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/prism.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/prism.json"));
    }

    #[test]
    fn test_load_round_trip() {
        let path = std::env::temp_dir().join(format!("prism_settings_{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.render.seed = 99;
        settings.output.gamma = 2.0;
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
        fs::remove_file(path).unwrap();
    }
}
