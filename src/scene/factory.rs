use std::fmt;

use serde_json::Value;

use crate::font::FontName;
use crate::scene::{HostError, TextProps};

/// The host capability a render pass builds objects through.
///
/// Creation methods always return a fresh object that is not attached to
/// anything yet. Loading a font that is already loaded must succeed.
#[allow(async_fn_in_trait)]
pub trait SceneFactory {
    type Handle: Copy + Eq + fmt::Debug;

    fn create_component(&mut self) -> Self::Handle;
    fn create_ellipse(&mut self) -> Self::Handle;
    fn create_frame(&mut self) -> Self::Handle;
    fn create_line(&mut self) -> Self::Handle;
    fn create_page(&mut self) -> Self::Handle;
    fn create_polygon(&mut self) -> Self::Handle;
    fn create_rectangle(&mut self) -> Self::Handle;
    fn create_slice(&mut self) -> Self::Handle;
    fn create_star(&mut self) -> Self::Handle;
    fn create_text(&mut self) -> Self::Handle;
    fn create_node_from_svg(&mut self, svg: &str) -> Result<Self::Handle, HostError>;

    async fn load_font(&mut self, font: &FontName) -> Result<(), HostError>;

    /// Font that text objects created from now on start out with.
    fn set_default_font(&mut self, font: &FontName);

    fn resize(&mut self, node: Self::Handle, width: f32, height: f32) -> Result<(), HostError>;

    /// Whether `key` names a writable attribute of `node`.
    fn is_settable(&self, node: Self::Handle, key: &str) -> bool;

    fn set_property(&mut self, node: Self::Handle, key: &str, value: Value) -> Result<(), HostError>;

    fn set_text_props(&mut self, node: Self::Handle, props: &TextProps) -> Result<(), HostError>;

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle) -> Result<(), HostError>;
}
