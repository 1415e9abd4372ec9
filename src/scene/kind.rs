use std::fmt;

/// The kinds of object the in-memory host can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKind {
    Component,
    Ellipse,
    Frame,
    Line,
    Page,
    Polygon,
    Rectangle,
    Slice,
    Star,
    Text,
    /// A frame holding the paths of an SVG document.
    Svg,
}

const BASE: &[&str] = &[
    "name",
    "visible",
    "locked",
    "opacity",
    "blendMode",
    "isMask",
    "effects",
    "effectStyleId",
    "exportSettings",
    "rotation",
    "constraints",
    "layoutAlign",
    "layoutGrow",
    "layoutPositioning",
    "relativeTransform",
    "x",
    "y",
];

const GEOMETRY: &[&str] = &[
    "fills",
    "fillStyleId",
    "strokes",
    "strokeStyleId",
    "strokeWeight",
    "strokeAlign",
    "strokeCap",
    "strokeJoin",
    "strokeMiterLimit",
    "dashPattern",
];

const CORNERS: &[&str] = &[
    "cornerRadius",
    "cornerSmoothing",
    "topLeftRadius",
    "topRightRadius",
    "bottomLeftRadius",
    "bottomRightRadius",
];

const FRAME: &[&str] = &[
    "layoutMode",
    "primaryAxisSizingMode",
    "counterAxisSizingMode",
    "primaryAxisAlignItems",
    "counterAxisAlignItems",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "paddingBottom",
    "itemSpacing",
    "itemReverseZIndex",
    "strokesIncludedInLayout",
    "clipsContent",
    "layoutGrids",
    "gridStyleId",
    "guides",
    "expanded",
];

const COMPONENT: &[&str] = &["description", "documentationLinks"];

const ELLIPSE: &[&str] = &["arcData"];

const POLYGON: &[&str] = &["pointCount"];

const STAR: &[&str] = &["pointCount", "innerRadius"];

/// Text attributes that can only be written once the current font is loaded.
pub(crate) const TEXT_FONT_BOUND: &[&str] = &[
    "characters",
    "paragraphIndent",
    "paragraphSpacing",
    "textDecoration",
    "hyperlink",
];

const TEXT: &[&str] = &["autoRename", "textStyleId"];

const PAGE: &[&str] = &["name", "backgrounds", "guides", "flowStartingPoints"];

const SLICE: &[&str] = &[
    "name",
    "visible",
    "locked",
    "rotation",
    "constraints",
    "exportSettings",
    "relativeTransform",
    "x",
    "y",
];

impl ObjectKind {
    /// Groups of attribute names that can be written on this kind.
    fn schema(self) -> &'static [&'static [&'static str]] {
        match self {
            ObjectKind::Component => &[BASE, GEOMETRY, CORNERS, FRAME, COMPONENT],
            ObjectKind::Frame | ObjectKind::Svg => &[BASE, GEOMETRY, CORNERS, FRAME],
            ObjectKind::Rectangle => &[BASE, GEOMETRY, CORNERS],
            ObjectKind::Ellipse => &[BASE, GEOMETRY, ELLIPSE],
            ObjectKind::Polygon => &[BASE, GEOMETRY, CORNERS, POLYGON],
            ObjectKind::Star => &[BASE, GEOMETRY, CORNERS, STAR],
            ObjectKind::Line => &[BASE, GEOMETRY],
            ObjectKind::Text => &[BASE, GEOMETRY, TEXT, TEXT_FONT_BOUND],
            ObjectKind::Page => &[PAGE],
            ObjectKind::Slice => &[SLICE],
        }
    }

    pub fn is_settable(self, key: &str) -> bool {
        self.schema().iter().any(|group| group.contains(&key))
    }

    pub fn has_size(self) -> bool {
        !matches!(self, ObjectKind::Page)
    }

    pub fn can_have_children(self) -> bool {
        matches!(
            self,
            ObjectKind::Component | ObjectKind::Frame | ObjectKind::Svg | ObjectKind::Page
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
