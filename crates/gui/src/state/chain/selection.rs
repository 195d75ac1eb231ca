//! Active module tracking and highlight repaint

use shared::HIGHLIGHT_COLOR;

use super::{Module, ModuleChain};
use crate::backend::SceneBackend;

impl ModuleChain {
    /// Index of the active module. `None` only while the chain is empty.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Module> {
        self.selected.and_then(|i| self.modules.get(i))
    }

    /// Whether the active module is the tail of the chain
    pub fn is_last_selected(&self) -> bool {
        matches!(self.selected, Some(i) if i + 1 == self.modules.len())
    }

    /// Make `index` the active module and repaint every module: highlight
    /// for the selection, original color for the rest.
    ///
    /// Panics if `index` is out of range.
    pub fn select(&mut self, index: usize, backend: &mut impl SceneBackend) {
        assert!(
            index < self.modules.len(),
            "select: module index {index} out of range (chain length {})",
            self.modules.len()
        );

        self.selected = Some(index);
        for (i, module) in self.modules.iter().enumerate() {
            let color = if i == index {
                HIGHLIGHT_COLOR
            } else {
                module.original_color
            };
            backend.set_color(module.renderable, color);
        }
        self.version += 1;

        tracing::debug!(index, "module selected");
    }
}
