use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.language" => if ru { "Язык" } else { "Language" },
        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        // ── Control panel ───────────────────────────────────
        "controls.title" => if ru { "Модуль" } else { "Module" },
        "controls.width" => if ru { "Ширина" } else { "Width" },
        "controls.height" => if ru { "Высота" } else { "Height" },
        "controls.depth" => if ru { "Глубина" } else { "Depth" },
        "controls.hint" => if ru {
            "Ширина больше 60 см у последнего модуля добавляет новый модуль."
        } else {
            "Width over 60 cm on the last module appends a new module."
        },
        "controls.click_hint" => if ru { "Щёлкните модуль, чтобы выбрать его." } else { "Click a module to select it." },

        // ── Status bar ──────────────────────────────────────
        "status.modules" => if ru { "Модулей" } else { "Modules" },
        "status.selected" => if ru { "Выбран" } else { "Selected" },
        "status.total" => if ru { "Общая длина" } else { "Total length" },
        "status.none" => if ru { "нет" } else { "none" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },
        "settings.ground_color" => if ru { "Цвет пола" } else { "Ground color" },
        "settings.ranges" => if ru { "Диапазоны ползунков (см)" } else { "Slider ranges (cm)" },
        "settings.min" => if ru { "мин" } else { "min" },
        "settings.max" => if ru { "макс" } else { "max" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
