use serde::{Deserialize, Serialize};

/// Максимальная ширина одного модуля, м
pub const W_MAX: f64 = 0.6;

/// Максимальная ширина одного модуля, см (значение ползунка)
pub const W_MAX_CM: i32 = 60;

/// Размеры модуля по умолчанию (60 × 60 × 60 см)
pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions {
    width: 0.6,
    height: 0.6,
    depth: 0.6,
};

/// Цвет подсветки выбранного модуля
pub const HIGHLIGHT_COLOR: Color = Color(0xff9900);

/// Сантиметры ползунка → метры модели
pub fn cm_to_m(cm: i32) -> f64 {
    f64::from(cm) / 100.0
}

/// Метры модели → сантиметры ползунка (ближайшее целое)
pub fn m_to_cm(m: f64) -> i32 {
    (m * 100.0).round() as i32
}

/// Сырое значение ползунка → целые сантиметры.
///
/// Дробная часть отбрасывается (усечение к нулю): 60.9 см ведёт себя как 60 см.
pub fn truncate_cm(raw: f64) -> i32 {
    raw.trunc() as i32
}

/// Габариты модуля в метрах
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Построить из значений ползунков в сантиметрах
    pub fn from_cm(width: i32, height: i32, depth: i32) -> Self {
        Self::new(cm_to_m(width), cm_to_m(height), cm_to_m(depth))
    }

    /// Половины габаритов
    pub fn half_extents(&self) -> [f64; 3] {
        [self.width / 2.0, self.height / 2.0, self.depth / 2.0]
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        DEFAULT_DIMENSIONS
    }
}

/// RGB-цвет, упакованный в 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }

    pub fn rgb(&self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }

    /// Компоненты в диапазоне 0.0..=1.0 (для шейдеров)
    pub fn to_f32(&self) -> [f32; 3] {
        let [r, g, b] = self.rgb();
        [f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0]
    }

    /// Строка вида `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

/// Ползунок габарита
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Width,
    Height,
    Depth,
}

impl ControlKind {
    pub fn all() -> &'static [ControlKind] {
        &[ControlKind::Width, ControlKind::Height, ControlKind::Depth]
    }
}

/// Снимок одного модуля цепочки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub index: usize,
    pub dimensions: Dimensions,
    /// Собственный цвет модуля (восстанавливается при снятии выделения)
    pub original_color: Color,
    /// Цвет, отображаемый сейчас
    pub displayed_color: Color,
    /// Центр модуля в мировых координатах
    pub position: [f64; 3],
}

/// Снимок всей цепочки модулей и ползунков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub modules: Vec<ModuleSnapshot>,
    pub selected_index: Option<usize>,
    /// Общая длина цепочки вдоль оси роста, м
    pub total_width: f64,
    /// Текущие значения ползунков, см: [ширина, высота, глубина]
    pub controls_cm: [i32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_conversions() {
        assert_eq!(cm_to_m(60), W_MAX);
        assert_eq!(cm_to_m(W_MAX_CM), W_MAX);
        assert_eq!(m_to_cm(0.6), 60);
        assert_eq!(m_to_cm(0.07), 7);
        assert_eq!(m_to_cm(0.29), 29);
    }

    #[test]
    fn test_truncate_cm_toward_zero() {
        assert_eq!(truncate_cm(60.9), 60);
        assert_eq!(truncate_cm(60.0), 60);
        assert_eq!(truncate_cm(-3.7), -3);
        assert_eq!(truncate_cm(f64::NAN), 0);
    }

    #[test]
    fn test_dimensions_default() {
        let d = Dimensions::default();
        assert_eq!(d, Dimensions::from_cm(60, 60, 60));
        assert_eq!(d.half_extents(), [0.3, 0.3, 0.3]);
    }

    #[test]
    fn test_color_components() {
        let c = Color::from_rgb(0xff, 0x99, 0x00);
        assert_eq!(c, HIGHLIGHT_COLOR);
        assert_eq!(c.rgb(), [255, 153, 0]);
        assert_eq!(c.to_hex(), "#ff9900");
        let f = c.to_f32();
        assert_eq!(f[0], 1.0);
        assert_eq!(f[2], 0.0);
    }

    #[test]
    fn test_control_kind_serde() {
        let json = serde_json::to_string(&ControlKind::Width).unwrap();
        assert_eq!(json, r#""width""#);
        let back: ControlKind = serde_json::from_str(r#""depth""#).unwrap();
        assert_eq!(back, ControlKind::Depth);
    }

    #[test]
    fn test_color_serializes_as_number() {
        let json = serde_json::to_string(&Color(0xe0f7ff)).unwrap();
        assert_eq!(json, "14743551");
    }
}
