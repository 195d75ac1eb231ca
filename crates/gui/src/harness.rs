//! Headless test harness for driving a configurator session programmatically.
//!
//! Wraps a [`Session`] with a fixed color seed and default slider ranges so
//! tests and scripts can do exactly what a user does with sliders and clicks.

use shared::{ChainSnapshot, ControlKind, Dimensions};

use crate::command::{self, CommandResponse};
use crate::coordinator::ResizeOutcome;
use crate::state::settings::ControlSettings;
use crate::state::Session;

/// Headless test harness: one session, no window
pub struct TestHarness {
    pub session: Session,
}

impl TestHarness {
    /// Fresh session: one 60 × 60 × 60 cm module, selected.
    pub fn new() -> Self {
        Self::with_seed(0x5eed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            session: Session::with_seed(&ControlSettings::default(), seed),
        }
    }

    // ── Controls ──────────────────────────────────────────────

    /// Move the width slider to `cm`
    pub fn set_width_cm(&mut self, cm: f64) -> ResizeOutcome {
        self.session.set_control(ControlKind::Width, cm)
    }

    /// Move the height slider to `cm`
    pub fn set_height_cm(&mut self, cm: f64) -> ResizeOutcome {
        self.session.set_control(ControlKind::Height, cm)
    }

    /// Move the depth slider to `cm`
    pub fn set_depth_cm(&mut self, cm: f64) -> ResizeOutcome {
        self.session.set_control(ControlKind::Depth, cm)
    }

    /// Current slider values (width, height, depth) in centimeters
    pub fn controls_cm(&self) -> [i32; 3] {
        self.session.controls.requested_cm()
    }

    // ── Picking ───────────────────────────────────────────────

    /// Click on module `index`
    pub fn pick(&mut self, index: usize) -> Option<usize> {
        self.session.pick_index(index)
    }

    /// Click at normalized device coordinates
    pub fn pick_at(&mut self, ndc: [f32; 2]) -> Option<usize> {
        self.session.pick_at(ndc)
    }

    /// Click that hits nothing
    pub fn pick_nothing(&mut self) -> Option<usize> {
        crate::pick::handle_pick(
            &mut self.session.chain,
            &mut self.session.controls,
            &mut self.session.scene,
            None,
        )
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn module_count(&self) -> usize {
        self.session.chain.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.session.chain.selected_index()
    }

    /// Stored extents of module `index`
    pub fn dims(&self, index: usize) -> Option<Dimensions> {
        self.session.chain.get(index).map(|m| m.dims)
    }

    /// Position last pushed to the scene for module `index`
    pub fn position(&self, index: usize) -> Option<[f64; 3]> {
        let module = self.session.chain.get(index)?;
        self.session.scene.position(module.renderable())
    }

    /// Color currently displayed for module `index`
    pub fn displayed_color(&self, index: usize) -> Option<shared::Color> {
        let module = self.session.chain.get(index)?;
        self.session.scene.color(module.renderable())
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        self.session.snapshot()
    }

    // ── Commands ──────────────────────────────────────────────

    /// Parse and execute one JSON command
    pub fn execute_json(&mut self, json: &str) -> Result<CommandResponse, command::CommandError> {
        command::execute_json(&mut self.session, json)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_has_one_module() {
        let h = TestHarness::new();
        assert_eq!(h.module_count(), 1);
        assert_eq!(h.selected_index(), Some(0));
        assert_eq!(h.controls_cm(), [60, 60, 60]);
    }

    #[test]
    fn test_position_of_first_module() {
        let h = TestHarness::new();
        assert_eq!(h.position(0), Some([0.3, 0.3, 0.3]));
        assert_eq!(h.position(1), None);
    }

    #[test]
    fn test_pick_nothing_is_none() {
        let mut h = TestHarness::new();
        assert_eq!(h.pick_nothing(), None);
        assert_eq!(h.selected_index(), Some(0));
    }

    #[test]
    fn test_same_seed_same_colors() {
        let a = TestHarness::with_seed(3);
        let b = TestHarness::with_seed(3);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
