use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::font::FontName;
use crate::scene::FontBook;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Loaded before anything is built.
    pub default_font: FontName,
    pub log_filter: String,
    /// Fonts the in-memory scene can load. Empty means any font.
    pub fonts: Vec<FontName>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_font: FontName::default(),
            log_filter: "info".to_owned(),
            fonts: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, Error> {
        match std::fs::read(path) {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn font_book(&self) -> FontBook {
        if self.fonts.is_empty() {
            FontBook::open()
        } else {
            FontBook::with_fonts(self.fonts.iter().cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "logFilter": "docland=debug" }"#).unwrap();

        assert_eq!(settings.log_filter, "docland=debug");
        assert_eq!(settings.default_font, FontName::new("Roboto", "Regular"));
        assert!(settings.fonts.is_empty());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("docland-settings-that-does-not-exist.json");

        assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
        assert!(matches!(Settings::load(&path), Err(Error::Io(_))));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("docland-settings-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "defaultFont": { "family": "Inter", "style": "Regular" }, "fonts": [{ "family": "Inter", "style": "Regular" }] }"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.default_font, FontName::new("Inter", "Regular"));
        assert!(settings.font_book().is_available(&FontName::new("Inter", "Regular")));
        assert!(!settings.font_book().is_available(&FontName::default()));
    }

    #[test]
    fn invalid_json_is_reported() {
        let path = std::env::temp_dir().join(format!("docland-bad-settings-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_or_default(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Json(_))));
    }
}
