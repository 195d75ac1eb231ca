//! Pick adapter: pointer hits from the engine become chain selections.

use crate::backend::{RenderableHandle, SceneBackend};
use crate::state::chain::ModuleChain;
use crate::state::controls::{sync_controls_from_selection, ControlPanel};

/// Select the module owning `hit`, sync the sliders to it and relayout.
///
/// A miss (no hit, or a renderable that is not a module) changes nothing
/// and returns `None`.
pub fn handle_pick(
    chain: &mut ModuleChain,
    controls: &mut ControlPanel,
    backend: &mut impl SceneBackend,
    hit: Option<RenderableHandle>,
) -> Option<usize> {
    let Some(index) = hit.and_then(|h| chain.index_of(h)) else {
        tracing::trace!(?hit, "pick missed");
        return None;
    };

    chain.select(index, backend);
    sync_controls_from_selection(chain, controls);
    chain.relayout(backend);
    Some(index)
}

/// Hit-test the pointer against all modules and route the result through
/// [`handle_pick`].
pub fn pick_at(
    chain: &mut ModuleChain,
    controls: &mut ControlPanel,
    backend: &mut impl SceneBackend,
    pointer_ndc: [f32; 2],
) -> Option<usize> {
    let candidates = chain.renderables();
    let hit = backend.hit_test(pointer_ndc, &candidates);
    handle_pick(chain, controls, backend, hit)
}
