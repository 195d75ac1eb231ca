// Library crate: the module chain model and everything testable headlessly.
// Window, egui panels and GL rendering remain in the binary crate.

pub mod backend;
pub mod command;
pub mod coordinator;
pub mod harness;
pub mod i18n;
pub mod pick;
pub mod state;

/// CPU side of the viewport: meshes, picking, camera and the scene graph.
/// GL upload and the egui panel stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod picking;
    pub mod scene;
}
