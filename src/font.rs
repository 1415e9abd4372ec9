use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Derives the style from a PostScript name such as `Inter-SemiBold`.
    ///
    /// The style is the second `-` separated segment, `Regular` when the name
    /// is absent or has no such segment.
    pub fn from_postscript(family: impl Into<String>, postscript_name: Option<&str>) -> Self {
        let style = postscript_name
            .and_then(|name| name.split('-').nth(1))
            .filter(|style| !style.is_empty())
            .unwrap_or("Regular");

        Self::new(family, style)
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::new("Roboto", "Regular")
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}
