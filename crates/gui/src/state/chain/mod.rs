//! Module chain: an append-only row of box modules laid out along X.
//!
//! Mutation is split across files the same way the responsibilities are:
//! creation and resizing live here, placement in `layout`, highlight
//! state in `selection`.

mod layout;
mod selection;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{Color, Dimensions};

use crate::backend::{GeometryHandle, RenderableHandle, SceneBackend};

/// One box unit of the chain. Its identity is its index in the chain.
#[derive(Debug, Clone)]
pub struct Module {
    pub dims: Dimensions,
    /// Color assigned at creation, restored whenever the module is deselected
    pub original_color: Color,
    renderable: RenderableHandle,
    geometry: GeometryHandle,
}

impl Module {
    pub fn renderable(&self) -> RenderableHandle {
        self.renderable
    }

    pub fn geometry(&self) -> GeometryHandle {
        self.geometry
    }
}

/// Ordered sequence of modules plus the active selection
pub struct ModuleChain {
    modules: Vec<Module>,
    selected: Option<usize>,
    rng: StdRng,
    /// Monotonically increasing version counter, bumped on every mutation
    version: u64,
}

impl ModuleChain {
    /// Empty chain with colors drawn from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Empty chain with a reproducible color sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            modules: Vec::new(),
            selected: None,
            rng,
            version: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Module at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Renderables of all modules, in chain order (pick candidates)
    pub fn renderables(&self) -> Vec<RenderableHandle> {
        self.modules.iter().map(|m| m.renderable).collect()
    }

    /// Index of the module owning `handle` (linear search by identity)
    pub fn index_of(&self, handle: RenderableHandle) -> Option<usize> {
        self.modules.iter().position(|m| m.renderable == handle)
    }

    /// Append a module with a fresh random color. The first module becomes
    /// the selection.
    pub fn append(&mut self, dims: Dimensions, backend: &mut impl SceneBackend) -> usize {
        let color = Color(self.rng.random_range(0..=0xff_ffff));
        let geometry = backend.create_geometry(dims);
        let renderable = backend.create_renderable(geometry, color);

        self.modules.push(Module {
            dims,
            original_color: color,
            renderable,
            geometry,
        });
        let index = self.modules.len() - 1;

        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.version += 1;

        tracing::debug!(
            index,
            width = dims.width,
            height = dims.height,
            depth = dims.depth,
            color = %color.to_hex(),
            "module appended"
        );
        index
    }

    /// Replace the extents of module `index`. Old geometry is disposed and
    /// new geometry requested; color and position are left alone.
    ///
    /// Panics if `index` is out of range.
    pub fn set_dimensions(
        &mut self,
        index: usize,
        dims: Dimensions,
        backend: &mut impl SceneBackend,
    ) {
        let len = self.modules.len();
        let Some(module) = self.modules.get_mut(index) else {
            panic!("set_dimensions: module index {index} out of range (chain length {len})");
        };

        backend.dispose_geometry(module.geometry);
        let geometry = backend.create_geometry(dims);
        backend.set_geometry(module.renderable, geometry);

        module.geometry = geometry;
        module.dims = dims;
        self.version += 1;

        tracing::debug!(
            index,
            width = dims.width,
            height = dims.height,
            depth = dims.depth,
            "module resized"
        );
    }
}

impl Default for ModuleChain {
    fn default() -> Self {
        Self::new()
    }
}
