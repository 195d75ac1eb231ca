pub mod chain;
pub mod controls;
pub mod settings;

use shared::{m_to_cm, ChainSnapshot, ControlKind, Dimensions, ModuleSnapshot};

use crate::coordinator::{self, ResizeOutcome};
use crate::pick;
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::scene::SceneGraph;
use chain::ModuleChain;
use controls::{sync_controls_from_selection, ControlPanel};
pub use settings::AppSettings;
use settings::{ControlSettings, RangeError};

/// One configurator session: the chain, its sliders and the scene it
/// renders into. Every entry point runs to completion and leaves the
/// chain laid out.
pub struct Session {
    pub chain: ModuleChain,
    pub controls: ControlPanel,
    pub scene: SceneGraph,
}

impl Session {
    /// Fresh session with random module colors
    pub fn new(settings: &AppSettings) -> Self {
        let camera = ArcBallCamera::from_settings(
            settings.viewport.camera_eye,
            settings.viewport.fov_degrees,
        );
        Self::start(
            ModuleChain::new(),
            &settings.controls,
            SceneGraph::with_camera(camera),
        )
    }

    /// Fresh session with a reproducible color sequence
    pub fn with_seed(controls: &ControlSettings, seed: u64) -> Self {
        Self::start(ModuleChain::with_seed(seed), controls, SceneGraph::new())
    }

    fn start(mut chain: ModuleChain, ranges: &ControlSettings, mut scene: SceneGraph) -> Self {
        chain.append(Dimensions::default(), &mut scene);
        chain.relayout(&mut scene);
        let mut controls = ControlPanel::new(&ranges.or_defaults(&extents_cm(&chain)));
        sync_controls_from_selection(&chain, &mut controls);
        Self {
            chain,
            controls,
            scene,
        }
    }

    /// A slider was moved in the UI (its value is already in `controls`)
    pub fn on_control_changed(&mut self, kind: ControlKind) -> ResizeOutcome {
        coordinator::on_control_changed(&mut self.chain, &self.controls, &mut self.scene, kind)
    }

    /// Programmatic slider change with a raw (possibly fractional) value
    pub fn set_control(&mut self, kind: ControlKind, raw_cm: f64) -> ResizeOutcome {
        coordinator::set_control(
            &mut self.chain,
            &mut self.controls,
            &mut self.scene,
            kind,
            raw_cm,
        )
    }

    /// Switch the sliders to new ranges. Ranges that would clamp a slider
    /// away from a module's extents are refused and nothing changes.
    pub fn apply_control_ranges(&mut self, ranges: &ControlSettings) -> Result<(), RangeError> {
        ranges.validate(&extents_cm(&self.chain))?;
        self.controls.apply_settings(ranges);
        Ok(())
    }

    /// Pointer click at normalized device coordinates
    pub fn pick_at(&mut self, pointer_ndc: [f32; 2]) -> Option<usize> {
        pick::pick_at(&mut self.chain, &mut self.controls, &mut self.scene, pointer_ndc)
    }

    /// Pick the module at `index` as if its renderable had been clicked
    pub fn pick_index(&mut self, index: usize) -> Option<usize> {
        let hit = self.chain.get(index).map(|m| m.renderable());
        pick::handle_pick(&mut self.chain, &mut self.controls, &mut self.scene, hit)
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        let positions = self.chain.layout_positions();
        let modules = self
            .chain
            .modules()
            .iter()
            .zip(positions)
            .enumerate()
            .map(|(index, (m, position))| ModuleSnapshot {
                index,
                dimensions: m.dims,
                original_color: m.original_color,
                displayed_color: self.scene.color(m.renderable()).unwrap_or(m.original_color),
                position,
            })
            .collect();

        ChainSnapshot {
            modules,
            selected_index: self.chain.selected_index(),
            total_width: self.chain.total_width(),
            controls_cm: self.controls.requested_cm(),
        }
    }
}

/// Extents of every module in whole centimeters
fn extents_cm(chain: &ModuleChain) -> Vec<[i32; 3]> {
    chain
        .modules()
        .iter()
        .map(|m| [m_to_cm(m.dims.width), m_to_cm(m.dims.height), m_to_cm(m.dims.depth)])
        .collect()
}

/// Combined application state
pub struct AppState {
    pub session: Session,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    /// Why the last range edit was refused
    pub settings_error: Option<String>,
}

impl AppState {
    pub fn new(mut settings: AppSettings) -> Self {
        let session = Session::new(&settings);
        // Show the ranges actually in effect
        settings.controls = session.controls.ranges();
        Self {
            session,
            settings,
            show_settings_window: false,
            settings_error: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppSettings::load())
    }
}
