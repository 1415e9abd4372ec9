use crate::font::FontName;

/// Typography applied to a text object in one step.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub font_name: FontName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
    pub font_size: f64,
    pub text_case: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_auto_resize: Option<String>,
    pub letter_spacing: LetterSpacing,
    pub line_height: LineHeight,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterSpacing {
    pub unit: String,
    pub value: f64,
}

impl LetterSpacing {
    pub fn pixels(value: f64) -> Self {
        Self {
            unit: "PIXELS".to_owned(),
            value,
        }
    }
}

/// Line height; `AUTO` carries no value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineHeight {
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl LineHeight {
    pub fn auto() -> Self {
        Self {
            unit: "AUTO".to_owned(),
            value: None,
        }
    }

    pub fn new(unit: impl Into<String>, value: f64) -> Self {
        Self {
            unit: unit.into(),
            value: Some(value),
        }
    }
}
