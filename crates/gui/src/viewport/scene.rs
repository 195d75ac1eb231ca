//! CPU-side scene graph: the engine collaborator the module chain talks to.
//!
//! Holds geometry extents and per-renderable placement/color. The GL
//! renderer reads it through [`SceneGraph::draw_list`]; picking casts a
//! ray from the orbit camera.

use std::collections::BTreeMap;

use glam::Vec3;
use shared::{Color, Dimensions};

use super::camera::ArcBallCamera;
use super::picking::{pick_nearest, Aabb};
use crate::backend::{GeometryHandle, RenderableHandle, SceneBackend};

#[derive(Debug, Clone)]
struct Renderable {
    geometry: GeometryHandle,
    position: [f64; 3],
    color: Color,
}

/// Everything the renderer needs to draw one renderable
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub renderable: RenderableHandle,
    pub geometry: GeometryHandle,
    pub dims: Dimensions,
    pub position: [f64; 3],
    pub color: Color,
}

pub struct SceneGraph {
    geometries: BTreeMap<GeometryHandle, Dimensions>,
    renderables: BTreeMap<RenderableHandle, Renderable>,
    /// Attached renderables in attach order
    attached: Vec<RenderableHandle>,
    next_id: u64,
    /// Bumped on every change, so the GPU side can skip unchanged frames
    version: u64,
    pub camera: ArcBallCamera,
    /// Viewport width / height used for hit testing
    aspect: f32,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::with_camera(ArcBallCamera::new())
    }

    pub fn with_camera(camera: ArcBallCamera) -> Self {
        Self {
            geometries: BTreeMap::new(),
            renderables: BTreeMap::new(),
            attached: Vec::new(),
            next_id: 1,
            version: 0,
            camera,
            aspect: 16.0 / 9.0,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn geometry_dims(&self, handle: GeometryHandle) -> Option<Dimensions> {
        self.geometries.get(&handle).copied()
    }

    pub fn geometry_of(&self, handle: RenderableHandle) -> Option<GeometryHandle> {
        self.renderables.get(&handle).map(|r| r.geometry)
    }

    pub fn position(&self, handle: RenderableHandle) -> Option<[f64; 3]> {
        self.renderables.get(&handle).map(|r| r.position)
    }

    /// Color currently displayed for `handle`
    pub fn color(&self, handle: RenderableHandle) -> Option<Color> {
        self.renderables.get(&handle).map(|r| r.color)
    }

    pub fn is_attached(&self, handle: RenderableHandle) -> bool {
        self.attached.contains(&handle)
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn live_geometry_count(&self) -> usize {
        self.geometries.len()
    }

    /// World-space bounds of a renderable
    pub fn bounds(&self, handle: RenderableHandle) -> Option<Aabb> {
        let r = self.renderables.get(&handle)?;
        let dims = self.geometries.get(&r.geometry)?;
        let [hx, hy, hz] = dims.half_extents();
        Some(Aabb::from_center_half_extents(
            to_vec3(r.position),
            Vec3::new(hx as f32, hy as f32, hz as f32),
        ))
    }

    /// Attached renderables with live geometry, in attach order
    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.attached
            .iter()
            .filter_map(|handle| {
                let r = self.renderables.get(handle)?;
                let dims = *self.geometries.get(&r.geometry)?;
                Some(DrawItem {
                    renderable: *handle,
                    geometry: r.geometry,
                    dims,
                    position: r.position,
                    color: r.color,
                })
            })
            .collect()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBackend for SceneGraph {
    fn create_geometry(&mut self, dims: Dimensions) -> GeometryHandle {
        let handle = GeometryHandle(self.next_id());
        self.geometries.insert(handle, dims);
        self.version += 1;
        handle
    }

    fn dispose_geometry(&mut self, handle: GeometryHandle) {
        if self.geometries.remove(&handle).is_none() {
            tracing::warn!(?handle, "dispose of unknown geometry");
        }
        self.version += 1;
    }

    fn create_renderable(&mut self, geometry: GeometryHandle, color: Color) -> RenderableHandle {
        let handle = RenderableHandle(self.next_id());
        self.renderables.insert(
            handle,
            Renderable {
                geometry,
                position: [0.0; 3],
                color,
            },
        );
        self.version += 1;
        handle
    }

    fn set_geometry(&mut self, handle: RenderableHandle, geometry: GeometryHandle) {
        if let Some(r) = self.renderables.get_mut(&handle) {
            r.geometry = geometry;
            self.version += 1;
        }
    }

    fn set_position(&mut self, handle: RenderableHandle, position: [f64; 3]) {
        if let Some(r) = self.renderables.get_mut(&handle) {
            if r.position != position {
                r.position = position;
                self.version += 1;
            }
        }
    }

    fn set_color(&mut self, handle: RenderableHandle, color: Color) {
        if let Some(r) = self.renderables.get_mut(&handle) {
            if r.color != color {
                r.color = color;
                self.version += 1;
            }
        }
    }

    fn attach_to_scene(&mut self, handle: RenderableHandle) {
        if self.renderables.contains_key(&handle) && !self.attached.contains(&handle) {
            self.attached.push(handle);
            self.version += 1;
        }
    }

    fn hit_test(
        &self,
        pointer_ndc: [f32; 2],
        candidates: &[RenderableHandle],
    ) -> Option<RenderableHandle> {
        let ray = self.camera.ndc_ray(pointer_ndc, self.aspect);
        let boxes = candidates
            .iter()
            .filter(|h| self.is_attached(**h))
            .filter_map(|h| Some((*h, self.bounds(*h)?)));
        pick_nearest(&ray, boxes)
    }
}

fn to_vec3(p: [f64; 3]) -> Vec3 {
    Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32)
}
