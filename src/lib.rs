pub mod builder;
pub mod descriptor;
pub mod error;
pub mod font;
pub mod props;
pub mod registry;
pub mod render;
pub mod scene;
pub mod settings;
pub mod traverse;

#[cfg(test)]
mod fixtures;

pub use glam as math;

pub use crate::descriptor::{Descriptor, DescriptorId, DocumentRef, NodeType};
pub use crate::error::Error;
pub use crate::font::FontName;
pub use crate::registry::Registry;
pub use crate::render::{render, render_blocking, render_json};
pub use crate::scene::{Scene, SceneFactory};
pub use crate::settings::Settings;
