//! Capability contract between the module chain and the rendering engine.
//!
//! The chain never looks inside engine objects. It only asks for geometry,
//! places renderables, paints them and asks what lies under the pointer.

use shared::{Color, Dimensions};

/// Opaque reference to box geometry owned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryHandle(pub u64);

/// Opaque reference to a drawable object owned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderableHandle(pub u64);

pub trait SceneBackend {
    /// Create box geometry with the given extents (meters)
    fn create_geometry(&mut self, dims: Dimensions) -> GeometryHandle;

    /// Release geometry. The handle must not be used afterwards.
    fn dispose_geometry(&mut self, handle: GeometryHandle);

    /// Create a drawable object for `geometry` painted with `color`
    fn create_renderable(&mut self, geometry: GeometryHandle, color: Color) -> RenderableHandle;

    /// Swap the geometry a renderable draws
    fn set_geometry(&mut self, handle: RenderableHandle, geometry: GeometryHandle);

    /// Place the renderable's center in world space
    fn set_position(&mut self, handle: RenderableHandle, position: [f64; 3]);

    fn set_color(&mut self, handle: RenderableHandle, color: Color);

    /// Add the renderable to the scene. No-op if it is already attached.
    fn attach_to_scene(&mut self, handle: RenderableHandle);

    /// Nearest candidate under a pointer given in normalized device
    /// coordinates (-1..1, y up), or `None` on a miss.
    fn hit_test(
        &self,
        pointer_ndc: [f32; 2],
        candidates: &[RenderableHandle],
    ) -> Option<RenderableHandle>;
}
