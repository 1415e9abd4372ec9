//! Descriptor fixtures shared by the unit tests.

use serde_json::{json, Value};

/// A descriptor of `ty` carrying the geometry and paint every buildable node
/// needs, merged with `extra`.
pub fn node(ty: &str, extra: Value) -> Value {
    let mut value = json!({
        "type": ty,
        "size": { "x": 10.0, "y": 20.0 },
        "constraints": { "horizontal": "LEFT", "vertical": "TOP" },
        "fills": [],
        "strokes": []
    });

    if let (Some(target), Value::Object(extra)) = (value.as_object_mut(), extra) {
        target.extend(extra);
    }

    value
}

pub fn text(characters: &str, style: Value) -> Value {
    node("TEXT", json!({ "characters": characters, "style": style }))
}

pub fn style() -> Value {
    json!({
        "fontFamily": "Inter",
        "fontPostScriptName": "Inter-Bold",
        "textAlignHorizontal": "LEFT",
        "textAlignVertical": "TOP",
        "fontSize": 14.0,
        "textAutoResize": "WIDTH_AND_HEIGHT",
        "letterSpacing": 0.5,
        "lineHeightUnit": "PIXELS",
        "lineHeightPx": 20.0,
        "lineHeightPercentFontSize": 142.86
    })
}
