//! Vision компоненты: cone config, spotted set, презентация, spotlight

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Конфигурация vision cone детектора
///
/// Цель видима iff:
/// (a) угол к forward СТРОГО < view_angle/2
/// (b) дистанция <= view_radius (включительно)
/// (c) отрезок детектор→цель не перекрыт препятствием
/// (d) дистанция <= light_range (цель должна быть освещена)
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[require(SpottedTargets)]
pub struct VisionCone {
    /// Радиус обзора (метры)
    pub view_radius: f32,
    /// Полный угол конуса (градусы, симметричный)
    pub view_angle_deg: f32,
    /// Дальность освещения основного spotlight (метры)
    pub light_range: f32,
}

impl Default for VisionCone {
    fn default() -> Self {
        Self {
            view_radius: 5.0,
            view_angle_deg: 90.0,
            light_range: 10.0,
        }
    }
}

/// Множество видимых целей последнего scan'а
///
/// Заменяется ЦЕЛИКОМ на каждом scan (никакого инкрементального diff):
/// исключает устаревшие "ghost visible" записи.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct SpottedTargets {
    pub targets: Vec<Entity>,
}

impl SpottedTargets {
    pub fn contains(&self, entity: Entity) -> bool {
        self.targets.contains(&entity)
    }
}

/// Marker: entity детектируется vision cone
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(RenderToggle)]
pub struct VisionTarget;

/// Презентационная видимость (renderer enabled/disabled)
///
/// Симуляция владеет состоянием, клиентский bridge применяет его
/// к реальному renderer'у. Vision scan ресинхронизирует флаг у ВСЕХ
/// целей против нового spotted-множества.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct RenderToggle {
    pub enabled: bool,
}

impl Default for RenderToggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl RenderToggle {
    /// Скрыт при спавне (деревья прячутся до триггера)
    pub fn hidden() -> Self {
        Self { enabled: false }
    }
}

/// Вторичный spotlight, следующий за направлением игрока
///
/// Каждый Update-тик (независимо от scan-цикла):
/// позиция = player_pos - forward * offset, высота прибита к
/// fixed_height, ориентация yaw-only (pitch/roll из forward отбрасываются).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TrailingSpotlight {
    /// Отступ позади игрока вдоль forward (метры)
    pub offset: f32,
    /// Фиксированная высота (внешний референс, не высота игрока)
    pub fixed_height: f32,
}

impl Default for TrailingSpotlight {
    fn default() -> Self {
        Self {
            offset: 1.0,
            fixed_height: 3.0,
        }
    }
}
