//! Dimension sliders as seen by the model: integer centimeters with a label.

use shared::{m_to_cm, ControlKind};

use super::chain::ModuleChain;
use super::settings::{ControlSettings, RangeCm};

/// One integer-valued slider
#[derive(Debug, Clone)]
pub struct Slider {
    value_cm: i32,
    range: RangeCm,
}

impl Slider {
    pub fn new(value_cm: i32, range: RangeCm) -> Self {
        Self {
            value_cm: range.clamp(value_cm),
            range,
        }
    }

    pub fn value(&self) -> i32 {
        self.value_cm
    }

    pub fn range(&self) -> RangeCm {
        self.range
    }

    /// Text shown next to the slider
    pub fn label(&self) -> String {
        format!("{} cm", self.value_cm)
    }

    /// Reflect a value on the slider, clamped to its range.
    /// Returns whether the displayed value changed.
    pub fn set_value(&mut self, value_cm: i32) -> bool {
        let value_cm = self.range.clamp(value_cm);
        if value_cm == self.value_cm {
            return false;
        }
        self.value_cm = value_cm;
        true
    }

    /// Direct access for UI widgets that edit the value in place
    pub fn value_mut(&mut self) -> &mut i32 {
        &mut self.value_cm
    }

    pub fn set_range(&mut self, range: RangeCm) {
        self.range = range;
        self.value_cm = range.clamp(self.value_cm);
    }
}

/// Width, height and depth sliders
#[derive(Debug, Clone)]
pub struct ControlPanel {
    width: Slider,
    height: Slider,
    depth: Slider,
}

impl ControlPanel {
    pub fn new(settings: &ControlSettings) -> Self {
        let default_cm = m_to_cm(shared::DEFAULT_DIMENSIONS.width);
        Self {
            width: Slider::new(default_cm, settings.width),
            height: Slider::new(default_cm, settings.height),
            depth: Slider::new(default_cm, settings.depth),
        }
    }

    pub fn slider(&self, kind: ControlKind) -> &Slider {
        match kind {
            ControlKind::Width => &self.width,
            ControlKind::Height => &self.height,
            ControlKind::Depth => &self.depth,
        }
    }

    pub fn slider_mut(&mut self, kind: ControlKind) -> &mut Slider {
        match kind {
            ControlKind::Width => &mut self.width,
            ControlKind::Height => &mut self.height,
            ControlKind::Depth => &mut self.depth,
        }
    }

    pub fn value(&self, kind: ControlKind) -> i32 {
        self.slider(kind).value()
    }

    pub fn set_value(&mut self, kind: ControlKind, value_cm: i32) -> bool {
        self.slider_mut(kind).set_value(value_cm)
    }

    /// Current (width, height, depth) in centimeters
    pub fn requested_cm(&self) -> [i32; 3] {
        [self.width.value(), self.height.value(), self.depth.value()]
    }

    /// Ranges currently in effect
    pub fn ranges(&self) -> ControlSettings {
        ControlSettings {
            width: self.width.range(),
            height: self.height.range(),
            depth: self.depth.range(),
        }
    }

    /// Apply new ranges after a settings change
    pub fn apply_settings(&mut self, settings: &ControlSettings) {
        self.width.set_range(settings.width);
        self.height.set_range(settings.height);
        self.depth.set_range(settings.depth);
    }
}

/// Push the selected module's extents to the sliders, writing only the
/// sliders whose value differs. Returns how many sliders were written.
pub fn sync_controls_from_selection(chain: &ModuleChain, controls: &mut ControlPanel) -> usize {
    let Some(module) = chain.selected() else {
        return 0;
    };

    let targets = [
        (ControlKind::Width, module.dims.width),
        (ControlKind::Height, module.dims.height),
        (ControlKind::Depth, module.dims.depth),
    ];

    targets
        .into_iter()
        .filter(|&(kind, meters)| controls.set_value(kind, m_to_cm(meters)))
        .count()
}

#[cfg(test)]
mod tests {
    use shared::Dimensions;

    use super::*;
    use crate::viewport::scene::SceneGraph;

    #[test]
    fn test_panel_defaults() {
        let panel = ControlPanel::new(&ControlSettings::default());
        assert_eq!(panel.requested_cm(), [60, 60, 60]);
        assert_eq!(panel.slider(ControlKind::Width).label(), "60 cm");
    }

    #[test]
    fn test_set_value_reports_change() {
        let mut panel = ControlPanel::new(&ControlSettings::default());
        assert!(!panel.set_value(ControlKind::Height, 60));
        assert!(panel.set_value(ControlKind::Height, 75));
        assert_eq!(panel.slider(ControlKind::Height).label(), "75 cm");
    }

    #[test]
    fn test_set_value_clamps_to_range() {
        let mut panel = ControlPanel::new(&ControlSettings::default());
        panel.set_value(ControlKind::Depth, 1000);
        assert_eq!(panel.value(ControlKind::Depth), 120);
        panel.set_value(ControlKind::Depth, -5);
        assert_eq!(panel.value(ControlKind::Depth), 10);
    }

    #[test]
    fn test_sync_writes_only_differing() {
        let mut scene = SceneGraph::new();
        let mut chain = ModuleChain::with_seed(5);
        chain.append(Dimensions::from_cm(45, 60, 30), &mut scene);

        let mut panel = ControlPanel::new(&ControlSettings::default());
        assert_eq!(sync_controls_from_selection(&chain, &mut panel), 2);
        assert_eq!(panel.requested_cm(), [45, 60, 30]);
        assert_eq!(sync_controls_from_selection(&chain, &mut panel), 0);
    }

    #[test]
    fn test_sync_empty_chain_noop() {
        let chain = ModuleChain::with_seed(5);
        let mut panel = ControlPanel::new(&ControlSettings::default());
        assert_eq!(sync_controls_from_selection(&chain, &mut panel), 0);
        assert_eq!(panel.requested_cm(), [60, 60, 60]);
    }

    #[test]
    fn test_narrower_range_clamps_current_value() {
        let mut panel = ControlPanel::new(&ControlSettings::default());
        let mut settings = ControlSettings::default();
        settings.height = RangeCm::new(10, 50);
        panel.apply_settings(&settings);
        assert_eq!(panel.value(ControlKind::Height), 50);
    }
}
