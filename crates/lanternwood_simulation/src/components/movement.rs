//! Movement компоненты: slope-контроллер, input, per-tick snapshot

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Конфигурация slope-контроллера персонажа
///
/// Required components добавляют runtime-состояние автоматически:
/// достаточно заспавнить `SlopeController` + Transform + rapier body
/// (см. `physics::spawn_player`) — полуразобранный актор непредставим.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[require(
    crate::components::Orientation,
    MoveInput,
    MoveSpeed,
    MovementState,
    JumpState,
    GroundSnapshot
)]
pub struct SlopeController {
    /// Скорость ходьбы (m/s)
    pub walk_speed: f32,
    /// Скорость спринта (m/s)
    pub sprint_speed: f32,
    /// Linear damping на земле (в воздухе drag = 0)
    pub ground_drag: f32,
    /// Вертикальная скорость прыжка (масса тела нормализована к 1.0,
    /// импульс численно равен Δv)
    pub jump_force: f32,
    /// Cooldown прыжка (секунды); заодно длительность grace-окна exiting_slope
    pub jump_cooldown: f32,
    /// Множитель управляемости в воздухе
    pub air_multiplier: f32,
    /// Максимальный walkable угол склона (градусы, строгая верхняя граница)
    pub max_slope_angle_deg: f32,
    /// Полная высота капсулы персонажа (метры); probe-дистанции считаются от неё
    pub height: f32,
}

impl Default for SlopeController {
    fn default() -> Self {
        Self {
            walk_speed: 7.0,
            sprint_speed: 10.0,
            ground_drag: 5.0,
            jump_force: 12.0,
            jump_cooldown: 0.25,
            air_multiplier: 0.4,
            max_slope_angle_deg: 40.0,
            height: 2.0,
        }
    }
}

/// Входные данные движения
///
/// Для headless тестов — mock input через этот компонент.
/// Для игры — заполняется клиентом из реального input polling.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MoveInput {
    /// Оси движения в [-1, 1]: x = strafe, y = вперёд
    pub axes: Vec2,
    /// Jump key held (семплится на input-тике, не на физическом)
    pub jump_held: bool,
    /// Sprint key held
    pub sprint_held: bool,
}

/// Текущая move speed (m/s)
///
/// Walking/Sprinting перезаписывают значение каждый тик. Airborne
/// скорость НЕ назначает — остаётся последняя наземная (осознанное
/// воспроизведение наблюдаемого поведения, не «чинить»).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MoveSpeed {
    pub speed: f32,
}

impl Default for MoveSpeed {
    fn default() -> Self {
        Self { speed: 7.0 } // = SlopeController::default().walk_speed
    }
}

/// Состояние движения — чистая функция (grounded, sprint_held) каждый тик
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum MovementState {
    Walking,
    Sprinting,
    Airborne,
}

impl Default for MovementState {
    fn default() -> Self {
        Self::Walking
    }
}

/// Состояние прыжка + grace-окно подавления slope-прилипания
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct JumpState {
    /// Готовность к прыжку; сбрасывается триггером, восстанавливается
    /// только когда (elapsed >= cooldown) И (grounded) одновременно
    pub ready: bool,
    /// Grace state: после прыжка подавляет slope-силу и full-3D clamp,
    /// чтобы прыжок «сквозь склон» не гасился
    pub exiting_slope: bool,
    /// Секунд с момента последнего прыжка
    pub since_jump: f32,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            ready: true,
            exiting_slope: false,
            since_jump: 0.0,
        }
    }
}

/// Immutable per-tick snapshot опоры
///
/// Пересчитывается probe-системой каждый кадр из raycast'ов,
/// НИКОГДА не кэшируется между тиками (нет скрытой staleness).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct GroundSnapshot {
    /// Результат ground probe (луч вниз от верха тела до чуть ниже ног)
    pub grounded: bool,
    /// Нормаль поверхности под центром тела (None = slope probe промахнулся)
    pub slope_normal: Option<Vec3>,
    /// Угол нормали к world-up (градусы); 0.0 при промахе probe
    pub slope_angle_deg: f32,
}
