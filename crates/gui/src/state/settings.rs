//! Application settings

use serde::{Deserialize, Serialize};
use shared::{ControlKind, W_MAX_CM};

use crate::i18n::Lang;

/// Inclusive slider range in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCm {
    pub min: i32,
    pub max: i32,
}

impl RangeCm {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max.max(self.min))
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A slider range the chain cannot live with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("{control:?} range {min}..={max} is empty")]
    Empty { control: ControlKind, min: i32, max: i32 },

    #[error("width range must reach above the 60 cm cap (max is {max})")]
    CapUnreachable { max: i32 },

    #[error("{control:?} range {min}..={max} excludes module {index} ({value_cm} cm)")]
    ExcludesModule {
        control: ControlKind,
        index: usize,
        value_cm: i32,
        min: i32,
        max: i32,
    },
}

/// Slider ranges for the three dimension controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSettings {
    pub width: RangeCm,
    pub height: RangeCm,
    pub depth: RangeCm,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            width: RangeCm::new(10, 300),
            height: RangeCm::new(10, 250),
            depth: RangeCm::new(10, 120),
        }
    }
}

impl ControlSettings {
    pub fn range(&self, kind: ControlKind) -> RangeCm {
        match kind {
            ControlKind::Width => self.width,
            ControlKind::Height => self.height,
            ControlKind::Depth => self.depth,
        }
    }

    fn range_mut(&mut self, kind: ControlKind) -> &mut RangeCm {
        match kind {
            ControlKind::Width => &mut self.width,
            ControlKind::Height => &mut self.height,
            ControlKind::Depth => &mut self.depth,
        }
    }

    /// Check one slider range against the extents (width, height, depth in
    /// cm) of every module. The width range must also allow going over the
    /// cap, or the chain could never grow.
    pub fn check(&self, kind: ControlKind, extents_cm: &[[i32; 3]]) -> Result<(), RangeError> {
        let range = self.range(kind);
        if range.min > range.max {
            return Err(RangeError::Empty {
                control: kind,
                min: range.min,
                max: range.max,
            });
        }
        if kind == ControlKind::Width && range.max <= W_MAX_CM {
            return Err(RangeError::CapUnreachable { max: range.max });
        }

        let axis = kind as usize;
        for (index, extents) in extents_cm.iter().enumerate() {
            if !range.contains(extents[axis]) {
                return Err(RangeError::ExcludesModule {
                    control: kind,
                    index,
                    value_cm: extents[axis],
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Check all three ranges
    pub fn validate(&self, extents_cm: &[[i32; 3]]) -> Result<(), RangeError> {
        ControlKind::all()
            .iter()
            .try_for_each(|&kind| self.check(kind, extents_cm))
    }

    /// Replace every unusable range with its default
    pub fn or_defaults(&self, extents_cm: &[[i32; 3]]) -> ControlSettings {
        let defaults = ControlSettings::default();
        let mut usable = self.clone();
        for &kind in ControlKind::all() {
            if let Err(e) = self.check(kind, extents_cm) {
                tracing::warn!("{e}; using the default range");
                *usable.range_mut(kind) = defaults.range(kind);
            }
        }
        usable
    }
}

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Ground plane color RGB
    pub ground_color: [u8; 3],
    /// Ground plane edge length (meters)
    pub ground_size: f32,
    /// Direction towards the sun light
    pub light_direction: [f32; 3],
    /// Initial camera position
    pub camera_eye: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [0xe0, 0xf7, 0xff],
            ground_color: [0x88, 0x88, 0x88],
            ground_size: 20.0,
            light_direction: [5.0, 10.0, 7.0],
            camera_eye: [1.0, 2.0, 5.0],
            fov_degrees: 75.0,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    /// Interface language
    #[serde(default)]
    pub language: Lang,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Lang::default(),
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Slider ranges
    #[serde(default)]
    pub controls: ControlSettings,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "modchain", "modchain") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {}", config_path.display());
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring malformed settings {}: {e}", config_path.display());
                    }
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "modchain", "modchain") {
            let config_dir = dirs.config_dir();
            if let Err(e) = std::fs::create_dir_all(config_dir) {
                tracing::warn!("Cannot create config dir {}: {e}", config_dir.display());
                return;
            }
            let config_path = config_dir.join("settings.json");
            if let Ok(json) = serde_json::to_string_pretty(self) {
                if let Err(e) = std::fs::write(&config_path, json) {
                    tracing::warn!("Cannot write {}: {e}", config_path.display());
                }
            }
        }
    }
}
