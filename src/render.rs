//! One end-to-end pass from a descriptor tree to scene objects.

use tracing::{debug, info, warn};

use crate::builder::create_node;
use crate::descriptor::Descriptor;
use crate::error::Error;
use crate::registry::Registry;
use crate::scene::SceneFactory;
use crate::settings::Settings;
use crate::traverse::{traverse, Visitor};

struct RenderPass<'f, F: SceneFactory> {
    factory: &'f mut F,
    registry: Registry<F::Handle>,
}

impl<F: SceneFactory> Visitor for RenderPass<'_, F> {
    async fn visit(&mut self, node: &mut Descriptor) -> Result<(), Error> {
        let Some(ty) = node.node_type() else {
            return Ok(());
        };

        if ty.is_structural() {
            return Ok(());
        }

        // Children of a refused node have already been built and stay detached.
        let Some(object) = create_node(&mut *self.factory, node).await? else {
            return Ok(());
        };

        let id = match node.id() {
            Some(id) => id,
            None => node.assign_id(self.registry.len()),
        };

        debug!(node = %node.label(), ?object, "registered");

        if let Some(previous) = self.registry.insert(id.clone(), object) {
            warn!(%id, ?previous, "id already registered, replacing");
        }

        for child in node.children() {
            let Some(child_object) = child.id().and_then(|id| self.registry.get(&id)) else {
                continue;
            };

            self.factory.append_child(object, child_object)?;
        }

        Ok(())
    }
}

/// Builds every node of `root` through `factory`.
///
/// Descriptors without an id get one assigned in place. Returns the registry
/// of built objects.
pub async fn render<F: SceneFactory>(
    factory: &mut F,
    root: &mut Descriptor,
    settings: &Settings,
) -> Result<Registry<F::Handle>, Error> {
    info!(font = %settings.default_font, "loading default font");
    factory.load_font(&settings.default_font).await?;
    factory.set_default_font(&settings.default_font);

    let mut pass = RenderPass {
        factory,
        registry: Registry::new(),
    };

    traverse(root, &mut pass).await?;

    info!(objects = pass.registry.len(), "render pass finished");

    Ok(pass.registry)
}

pub fn render_blocking<F: SceneFactory>(
    factory: &mut F,
    root: &mut Descriptor,
    settings: &Settings,
) -> Result<Registry<F::Handle>, Error> {
    pollster::block_on(render(factory, root, settings))
}

pub fn render_json<F: SceneFactory>(
    factory: &mut F,
    json: &str,
    settings: &Settings,
) -> Result<Registry<F::Handle>, Error> {
    let mut root = Descriptor::from_json(json)?;
    render_blocking(factory, &mut root, settings)
}
