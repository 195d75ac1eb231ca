use std::collections::{BTreeSet, HashMap};

use glow::HasContext;

use super::camera::ArcBallCamera;
use super::mesh::{self, MeshData, VERTEX_STRIDE};
use super::scene::DrawItem;
use modchain_gui_lib::backend::GeometryHandle;

// ── Render parameters ────────────────────────────────────────

/// Parameters for rendering the viewport
#[derive(Clone, Copy)]
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
    /// Background color RGB
    pub bg_color: [u8; 3],
    /// Ground plane color RGB
    pub ground_color: [u8; 3],
    /// Ground plane edge length, m
    pub ground_size: f32,
    /// Direction towards the light (world space, not normalized)
    pub light_direction: [f32; 3],
}

// ── GPU mesh handles ─────────────────────────────────────────

struct GpuMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ibo: glow::Buffer,
    index_count: i32,
}

impl GpuMesh {
    unsafe fn delete(&self, gl: &glow::Context) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.vbo);
        gl.delete_buffer(self.ibo);
    }
}

// ── Main GL renderer ─────────────────────────────────────────

pub struct GlRenderer {
    mesh_program: glow::Program,
    ground: Option<GpuMesh>,
    /// Cached ground size to detect changes
    cached_ground_size: Option<f32>,
    /// Box meshes keyed by scene geometry
    geometry_meshes: HashMap<GeometryHandle, GpuMesh>,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context) -> Result<Self, String> {
        let mesh_program = compile_program(gl, MESH_VERT, MESH_FRAG)?;

        Ok(Self {
            mesh_program,
            ground: None,
            cached_ground_size: None,
            geometry_meshes: HashMap::new(),
        })
    }

    /// Rebuild the ground plane when its size changes
    pub fn update_ground(&mut self, gl: &glow::Context, size: f32) {
        if self.cached_ground_size == Some(size) {
            return;
        }

        if let Some(old) = self.ground.take() {
            unsafe { old.delete(gl) };
        }

        match upload_mesh(gl, &mesh::ground_plane(size)) {
            Ok(ground) => {
                self.ground = Some(ground);
                self.cached_ground_size = Some(size);
            }
            Err(e) => tracing::error!("Ground upload failed: {e}"),
        }
    }

    /// Upload box meshes for new geometry and free meshes of disposed geometry
    pub fn sync_geometries(&mut self, gl: &glow::Context, items: &[DrawItem]) {
        let live: BTreeSet<GeometryHandle> = items.iter().map(|item| item.geometry).collect();

        self.geometry_meshes.retain(|handle, gpu| {
            let keep = live.contains(handle);
            if !keep {
                unsafe { gpu.delete(gl) };
            }
            keep
        });

        for item in items {
            if self.geometry_meshes.contains_key(&item.geometry) {
                continue;
            }
            let data = mesh::cube(
                item.dims.width as f32,
                item.dims.height as f32,
                item.dims.depth as f32,
            );
            match upload_mesh(gl, &data) {
                Ok(gpu) => {
                    self.geometry_meshes.insert(item.geometry, gpu);
                }
                Err(e) => tracing::error!("Mesh upload failed for {:?}: {e}", item.geometry),
            }
        }
    }

    /// Render the scene
    pub fn paint(
        &self,
        gl: &glow::Context,
        camera: &ArcBallCamera,
        items: &[DrawItem],
        params: &RenderParams,
    ) {
        let aspect = params.viewport[2] / params.viewport[3].max(1.0);
        let vp = camera.view_projection(aspect);
        let light_dir = glam::Vec3::from(params.light_direction).normalize_or_zero();

        unsafe {
            gl.viewport(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.scissor(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.enable(glow::SCISSOR_TEST);

            // Clear viewport area with configured background color
            let [r, g, b] = rgb_f32(params.bg_color);
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);

            gl.use_program(Some(self.mesh_program));
            set_uniform_mat4(gl, self.mesh_program, "u_mvp", &vp);
            set_uniform_vec3(gl, self.mesh_program, "u_light_dir", &light_dir);

            if let Some(ref ground) = self.ground {
                set_uniform_mat4(gl, self.mesh_program, "u_model", &glam::Mat4::IDENTITY);
                set_uniform_vec3(
                    gl,
                    self.mesh_program,
                    "u_color",
                    &glam::Vec3::from(rgb_f32(params.ground_color)),
                );
                draw_mesh(gl, ground);
            }

            for item in items {
                let Some(gpu) = self.geometry_meshes.get(&item.geometry) else {
                    continue;
                };
                let [x, y, z] = item.position;
                let model = glam::Mat4::from_translation(glam::Vec3::new(x as f32, y as f32, z as f32));
                set_uniform_mat4(gl, self.mesh_program, "u_model", &model);
                set_uniform_vec3(
                    gl,
                    self.mesh_program,
                    "u_color",
                    &glam::Vec3::from(item.color.to_f32()),
                );
                draw_mesh(gl, gpu);
            }

            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    /// Free every GL object (called once, on exit)
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.mesh_program);
            if let Some(ref ground) = self.ground {
                ground.delete(gl);
            }
            for gpu in self.geometry_meshes.values() {
                gpu.delete(gl);
            }
        }
    }
}

fn rgb_f32(c: [u8; 3]) -> [f32; 3] {
    [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0]
}

// ── GPU upload ───────────────────────────────────────────────

fn upload_mesh(gl: &glow::Context, data: &MeshData) -> Result<GpuMesh, String> {
    unsafe {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer()?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck_cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = (VERTEX_STRIDE * 4) as i32;
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // normal: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * 4);

        let ibo = gl.create_buffer()?;
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck_cast_slice(&data.indices),
            glow::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);

        Ok(GpuMesh {
            vao,
            vbo,
            ibo,
            index_count: data.indices.len() as i32,
        })
    }
}

// ── Draw calls ───────────────────────────────────────────────

unsafe fn draw_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    gl.bind_vertex_array(Some(mesh.vao));
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.ibo));
    gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
    gl.bind_vertex_array(None);
}

// ── Shader compilation ───────────────────────────────────────

fn compile_program(gl: &glow::Context, vert_src: &str, frag_src: &str) -> Result<glow::Program, String> {
    unsafe {
        let program = gl.create_program()?;

        let vert = gl.create_shader(glow::VERTEX_SHADER)?;
        gl.shader_source(vert, vert_src);
        gl.compile_shader(vert);
        if !gl.get_shader_compile_status(vert) {
            let log = gl.get_shader_info_log(vert);
            tracing::error!("Vertex shader error: {log}");
        }

        let frag = gl.create_shader(glow::FRAGMENT_SHADER)?;
        gl.shader_source(frag, frag_src);
        gl.compile_shader(frag);
        if !gl.get_shader_compile_status(frag) {
            let log = gl.get_shader_info_log(frag);
            tracing::error!("Fragment shader error: {log}");
        }

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        let linked = gl.get_program_link_status(program);

        gl.delete_shader(vert);
        gl.delete_shader(frag);

        if !linked {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(format!("program link error: {log}"));
        }

        Ok(program)
    }
}

// ── Uniform setters ──────────────────────────────────────────

fn set_uniform_mat4(gl: &glow::Context, program: glow::Program, name: &str, mat: &glam::Mat4) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_matrix_4_f32_slice(loc.as_ref(), false, &mat.to_cols_array());
    }
}

fn set_uniform_vec3(gl: &glow::Context, program: glow::Program, name: &str, v: &glam::Vec3) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_3_f32(loc.as_ref(), v.x, v.y, v.z);
    }
}

// ── Byte cast helper ─────────────────────────────────────────

fn bytemuck_cast_slice<T: Copy>(slice: &[T]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            slice.as_ptr() as *const u8,
            std::mem::size_of_val(slice),
        )
    }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;
uniform mat4 u_model;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;

out vec3 v_normal;

void main() {
    gl_Position = u_mvp * u_model * vec4(a_position, 1.0);
    v_normal = a_normal;
}
"#;

// Lambert: ambient plus one directional light
const MESH_FRAG: &str = r#"#version 330 core
uniform vec3 u_light_dir;
uniform vec3 u_color;

in vec3 v_normal;

out vec4 frag_color;

void main() {
    vec3 n = normalize(v_normal);
    float diffuse = max(dot(n, u_light_dir), 0.0);
    float light = 0.35 + diffuse * 0.65;
    frag_color = vec4(u_color * light, 1.0);
}
"#;
