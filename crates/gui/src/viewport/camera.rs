use glam::{Mat4, Vec3, Vec4};

use super::picking::Ray;

/// Orbit camera for the 3D viewport
#[derive(Debug, Clone, Copy)]
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl ArcBallCamera {
    pub fn new() -> Self {
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            target: Vec3::ZERO,
            fov: 75.0_f32.to_radians(),
        };
        camera.look_at_from(Vec3::new(1.0, 2.0, 5.0), Vec3::ZERO);
        camera
    }

    /// Camera with the eye and field of view from settings, looking at the origin
    pub fn from_settings(eye: [f32; 3], fov_degrees: f32) -> Self {
        let mut camera = Self::new();
        camera.fov = fov_degrees.to_radians();
        camera.look_at_from(Vec3::from(eye), Vec3::ZERO);
        camera
    }

    /// Place the eye at `eye`, orbiting around `target`
    pub fn look_at_from(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        self.target = target;
        self.distance = offset.length().max(1e-3);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin().clamp(-1.5, 1.5);
        self.yaw = offset.x.atan2(offset.z);
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(0.5, 100.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        let offset = right * dx + up * dy;
        self.target += offset;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 200.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// World-space ray through a point in normalized device coordinates
    pub fn ndc_ray(&self, ndc: [f32; 2], aspect: f32) -> Ray {
        let vp_inv = self.view_projection(aspect).inverse();

        // Unproject near and far points
        let near_world = vp_inv * Vec4::new(ndc[0], ndc[1], -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc[0], ndc[1], 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen position inside `rect` → normalized device coordinates (y up)
pub fn screen_to_ndc(screen_pos: egui::Pos2, rect: egui::Rect) -> [f32; 2] {
    [
        (screen_pos.x - rect.center().x) / (rect.width() * 0.5),
        -(screen_pos.y - rect.center().y) / (rect.height() * 0.5),
    ]
}
