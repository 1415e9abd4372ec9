use tracing::debug;

use crate::descriptor::Descriptor;
use crate::error::Error;
use crate::font::FontName;
use crate::props::assign_basic_props;
use crate::scene::{LetterSpacing, LineHeight, SceneFactory, TextProps};

/// The `style` record of a TEXT descriptor.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    #[serde(default)]
    pub font_post_script_name: Option<String>,
    #[serde(default)]
    pub text_align_horizontal: Option<String>,
    #[serde(default)]
    pub text_align_vertical: Option<String>,
    pub font_size: f64,
    #[serde(default)]
    pub text_case: Option<String>,
    #[serde(default)]
    pub text_auto_resize: Option<String>,
    #[serde(default)]
    pub letter_spacing: f64,
    pub line_height_unit: String,
    #[serde(default)]
    pub line_height_px: Option<f64>,
    #[serde(default)]
    pub line_height_percent_font_size: Option<f64>,
}

impl TextStyle {
    pub fn font_name(&self) -> FontName {
        FontName::from_postscript(&self.font_family, self.font_post_script_name.as_deref())
    }

    /// `AUTO` carries no value; `PIXELS` uses the pixel height, any other unit
    /// the percentage of the font size.
    pub fn line_height(&self, data: &Descriptor) -> Result<LineHeight, Error> {
        if self.line_height_unit == "AUTO" {
            return Ok(LineHeight::auto());
        }

        let (value, field) = if self.line_height_unit == "PIXELS" {
            (self.line_height_px, "lineHeightPx")
        } else {
            (self.line_height_percent_font_size, "lineHeightPercentFontSize")
        };

        let value = value.ok_or_else(|| Error::MissingField {
            node: data.label(),
            field,
        })?;

        Ok(LineHeight::new(&self.line_height_unit, value))
    }

    pub fn text_props(&self, data: &Descriptor) -> Result<TextProps, Error> {
        Ok(TextProps {
            font_name: self.font_name(),
            text_align_horizontal: self.text_align_horizontal.clone(),
            text_align_vertical: self.text_align_vertical.clone(),
            font_size: self.font_size,
            text_case: self
                .text_case
                .clone()
                .unwrap_or_else(|| "ORIGINAL".to_owned()),
            text_auto_resize: self.text_auto_resize.clone(),
            letter_spacing: LetterSpacing::pixels(self.letter_spacing),
            line_height: self.line_height(data)?,
        })
    }
}

pub async fn create_text<F: SceneFactory>(
    factory: &mut F,
    data: &Descriptor,
) -> Result<F::Handle, Error> {
    let node = factory.create_text();

    // Geometry and content must be in place before the font is switched.
    assign_basic_props(factory, node, data)?;

    let style: TextStyle = data.field("style")?;
    let props = style.text_props(data)?;

    debug!(node = %data.label(), font = %props.font_name, "loading font");
    factory.load_font(&props.font_name).await?;

    factory.set_text_props(node, &props)?;

    Ok(node)
}
