use std::path::Path;

use anyhow::{Context, Result};
use color_lib::color::parse_hex;
use hemicycle::{ChamberConfig, SkipSet};
use hemicycle_render::Background;
use serde::{Deserialize, Serialize};

/// Optional settings file. Anything left out falls back to the built-in
/// chamber. Parties are deliberately not part of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub skip: Option<SkipSet>,
    pub unaffiliated: Option<String>,
    pub chamber: Option<ChamberConfig>,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub background: String,
    pub transparent: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            transparent: false,
        }
    }
}

impl OutputSettings {
    pub fn background(&self) -> Result<Background> {
        if self.transparent {
            return Ok(Background::Transparent);
        }
        let color = parse_hex(&self.background)
            .with_context(|| format!("bad [output] background {:?}", self.background))?;
        Ok(Background::Solid(color))
    }
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Reads settings from `path`, or returns the defaults when there is none.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    parse_settings(&content).with_context(|| format!("parsing settings in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_file() {
        let settings = parse_settings(
            r##"
            skip = [0, 10, 570]
            unaffiliated = "#999999"

            [chamber]
            width = 400
            rows = 4
            seats_per_row = 20
            diameter = 6.0
            row_spacing = 12.0
            inset_degrees = 2.0

            [output]
            transparent = true
            "##,
        )
        .unwrap();
        assert_eq!(settings.skip, Some(SkipSet::from([0, 10, 570])));
        assert_eq!(settings.unaffiliated.as_deref(), Some("#999999"));
        let chamber = settings.chamber.unwrap();
        assert_eq!(chamber.seat_count(), 80);
        assert_eq!(settings.output.background().unwrap(), Background::Transparent);
    }

    #[test]
    fn test_invalid_chamber_is_rejected() {
        let result = parse_settings(
            r#"
            [chamber]
            width = 400
            rows = 4
            seats_per_row = 1
            diameter = 6.0
            row_spacing = 12.0
            inset_degrees = 2.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parties_are_not_settings() {
        assert!(parse_settings("[[parties]]\nseats = 3\ncolor = \"#FFFFFF\"\n").is_err());
    }

    #[test]
    fn test_background() {
        let output = OutputSettings {
            background: "#000000".to_string(),
            transparent: false,
        };
        assert_eq!(output.background().unwrap(), Background::Solid([0, 0, 0]));
        let output = OutputSettings {
            background: "black".to_string(),
            transparent: false,
        };
        assert!(output.background().is_err());
    }

    #[test]
    fn test_settings_roundtrip_through_toml() {
        let settings = Settings {
            skip: Some(SkipSet::from([1, 2])),
            unaffiliated: None,
            chamber: Some(ChamberConfig::for_width(500).unwrap()),
            output: OutputSettings::default(),
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let back = parse_settings(&text).unwrap();
        assert_eq!(back.skip, settings.skip);
        assert_eq!(back.chamber.unwrap().width(), 500);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(Some(dir.path().join("missing.toml").as_path())).is_err());
        assert_eq!(load_settings(None).unwrap(), Settings::default());
    }
}
