//! Input/Resize coordinator: the only path from slider values to chain
//! mutations.

use shared::{cm_to_m, truncate_cm, ControlKind, Dimensions, W_MAX, W_MAX_CM};

use crate::backend::SceneBackend;
use crate::state::chain::ModuleChain;
use crate::state::controls::ControlPanel;

/// What a control change did to the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// The selected module was resized in place
    Resized { index: usize },
    /// The selected tail module was capped and a new module appended
    Split { index: usize, appended: usize },
    /// Nothing is selected (empty chain)
    Ignored,
}

/// React to a change of one slider. All three slider values are read so
/// the model always matches the controls.
pub fn on_control_changed(
    chain: &mut ModuleChain,
    controls: &ControlPanel,
    backend: &mut impl SceneBackend,
    kind: ControlKind,
) -> ResizeOutcome {
    match kind {
        ControlKind::Width => apply_width(chain, controls, backend),
        ControlKind::Height | ControlKind::Depth => apply_cross_section(chain, controls, backend),
    }
}

/// Write a raw slider value (truncated to whole centimeters) and route it
/// through the coordinator, as a slider drag would.
pub fn set_control(
    chain: &mut ModuleChain,
    controls: &mut ControlPanel,
    backend: &mut impl SceneBackend,
    kind: ControlKind,
    raw_cm: f64,
) -> ResizeOutcome {
    controls.set_value(kind, truncate_cm(raw_cm));
    on_control_changed(chain, controls, backend, kind)
}

fn apply_width(
    chain: &mut ModuleChain,
    controls: &ControlPanel,
    backend: &mut impl SceneBackend,
) -> ResizeOutcome {
    let Some(index) = chain.selected_index() else {
        return ResizeOutcome::Ignored;
    };
    let [raw_width, height, depth] = controls.requested_cm();

    let clamped = raw_width.min(W_MAX_CM);
    chain.set_dimensions(index, Dimensions::from_cm(clamped, height, depth), backend);
    chain.relayout(backend);

    if !chain.width_cap_exceeded(index, raw_width) {
        return ResizeOutcome::Resized { index };
    }

    let appended = chain.append(Dimensions::new(W_MAX, cm_to_m(height), cm_to_m(depth)), backend);

    // The clamp above already pinned the width; keep it pinned regardless.
    if let Some(module) = chain.get(index) {
        if module.dims.width != W_MAX {
            let dims = Dimensions { width: W_MAX, ..module.dims };
            chain.set_dimensions(index, dims, backend);
        }
    }
    chain.relayout(backend);

    tracing::debug!(index, appended, raw_width, "width cap exceeded, chain grew");
    ResizeOutcome::Split { index, appended }
}

fn apply_cross_section(
    chain: &mut ModuleChain,
    controls: &ControlPanel,
    backend: &mut impl SceneBackend,
) -> ResizeOutcome {
    let Some(module) = chain.selected() else {
        return ResizeOutcome::Ignored;
    };
    let Some(index) = chain.selected_index() else {
        return ResizeOutcome::Ignored;
    };
    let [_, height, depth] = controls.requested_cm();
    let dims = Dimensions::new(module.dims.width, cm_to_m(height), cm_to_m(depth));

    chain.set_dimensions(index, dims, backend);
    chain.relayout(backend);
    ResizeOutcome::Resized { index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::controls::sync_controls_from_selection;
    use crate::state::settings::ControlSettings;
    use crate::viewport::scene::SceneGraph;

    fn setup() -> (ModuleChain, ControlPanel, SceneGraph) {
        let mut scene = SceneGraph::new();
        let mut chain = ModuleChain::with_seed(9);
        chain.append(Dimensions::default(), &mut scene);
        chain.relayout(&mut scene);
        let mut controls = ControlPanel::new(&ControlSettings::default());
        sync_controls_from_selection(&chain, &mut controls);
        (chain, controls, scene)
    }

    #[test]
    fn test_width_below_cap_resizes() {
        let (mut chain, mut controls, mut scene) = setup();
        let out = set_control(&mut chain, &mut controls, &mut scene, ControlKind::Width, 45.0);
        assert_eq!(out, ResizeOutcome::Resized { index: 0 });
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.modules()[0].dims.width, 0.45);
    }

    #[test]
    fn test_width_over_cap_on_tail_splits() {
        let (mut chain, mut controls, mut scene) = setup();
        let out = set_control(&mut chain, &mut controls, &mut scene, ControlKind::Width, 75.0);
        assert_eq!(out, ResizeOutcome::Split { index: 0, appended: 1 });
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.modules()[0].dims.width, W_MAX);
        assert_eq!(chain.modules()[1].dims, Dimensions::new(W_MAX, 0.6, 0.6));
        assert_eq!(chain.selected_index(), Some(0));
    }

    #[test]
    fn test_width_exactly_cap_does_not_split() {
        let (mut chain, mut controls, mut scene) = setup();
        set_control(&mut chain, &mut controls, &mut scene, ControlKind::Width, 60.9);
        assert_eq!(controls.value(ControlKind::Width), 60);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_repeated_over_cap_events_grow_once() {
        let (mut chain, mut controls, mut scene) = setup();
        for w in [61.0, 70.0, 85.0, 120.0] {
            set_control(&mut chain, &mut controls, &mut scene, ControlKind::Width, w);
        }
        assert_eq!(chain.len(), 2);
        assert!(chain.modules().iter().all(|m| m.dims.width <= W_MAX));
    }

    #[test]
    fn test_split_uses_current_cross_section() {
        let (mut chain, mut controls, mut scene) = setup();
        set_control(&mut chain, &mut controls, &mut scene, ControlKind::Height, 80.0);
        set_control(&mut chain, &mut controls, &mut scene, ControlKind::Depth, 45.0);
        set_control(&mut chain, &mut controls, &mut scene, ControlKind::Width, 90.0);
        assert_eq!(chain.modules()[1].dims, Dimensions::new(W_MAX, 0.8, 0.45));
    }

    #[test]
    fn test_height_keeps_stored_width() {
        let (mut chain, mut controls, mut scene) = setup();
        set_control(&mut chain, &mut controls, &mut scene, ControlKind::Width, 40.0);
        let out = set_control(&mut chain, &mut controls, &mut scene, ControlKind::Height, 120.0);
        assert_eq!(out, ResizeOutcome::Resized { index: 0 });
        assert_eq!(chain.modules()[0].dims, Dimensions::new(0.4, 1.2, 0.6));
        let pos = scene.position(chain.modules()[0].renderable()).unwrap();
        assert_eq!(pos[1], 0.6);
    }

    #[test]
    fn test_height_over_width_cap_never_splits() {
        let (mut chain, mut controls, mut scene) = setup();
        set_control(&mut chain, &mut controls, &mut scene, ControlKind::Height, 200.0);
        set_control(&mut chain, &mut controls, &mut scene, ControlKind::Depth, 100.0);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_empty_chain_ignored() {
        let mut scene = SceneGraph::new();
        let mut chain = ModuleChain::with_seed(9);
        let controls = ControlPanel::new(&ControlSettings::default());
        for kind in ControlKind::all() {
            let out = on_control_changed(&mut chain, &controls, &mut scene, *kind);
            assert_eq!(out, ResizeOutcome::Ignored);
        }
        assert!(chain.is_empty());
    }

    #[test]
    fn test_geometry_not_leaked_across_resizes() {
        let (mut chain, mut controls, mut scene) = setup();
        for w in 20..60 {
            set_control(&mut chain, &mut controls, &mut scene, ControlKind::Width, f64::from(w));
        }
        assert_eq!(scene.live_geometry_count(), chain.len());
    }
}
