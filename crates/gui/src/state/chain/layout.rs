//! Contiguous placement of modules along the growth axis (X)

use shared::W_MAX_CM;

use super::ModuleChain;
use crate::backend::SceneBackend;

impl ModuleChain {
    /// World-space center of every module.
    ///
    /// Module `i` starts where the widths of modules `0..i` end and sits on
    /// the ground plane, offset by its own half height and half depth.
    pub fn layout_positions(&self) -> Vec<[f64; 3]> {
        let mut x_offset = 0.0;
        self.modules
            .iter()
            .map(|m| {
                let [hw, hh, hd] = m.dims.half_extents();
                let position = [x_offset + hw, hh, hd];
                x_offset += m.dims.width;
                position
            })
            .collect()
    }

    /// Push positions to the engine and make sure every module is in the scene
    pub fn relayout(&mut self, backend: &mut impl SceneBackend) {
        let positions = self.layout_positions();
        for (module, position) in self.modules.iter().zip(positions) {
            backend.set_position(module.renderable, position);
            backend.attach_to_scene(module.renderable);
        }
    }

    /// Sum of all module widths (meters)
    pub fn total_width(&self) -> f64 {
        self.modules.iter().map(|m| m.dims.width).sum()
    }

    /// True when `index` is the tail of the chain and the raw requested
    /// width (before clamping) is over the cap.
    pub fn width_cap_exceeded(&self, index: usize, requested_width_cm: i32) -> bool {
        !self.modules.is_empty()
            && index == self.modules.len() - 1
            && requested_width_cm > W_MAX_CM
    }
}
