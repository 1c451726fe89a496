//! Чистая decision-логика slope-контроллера
//!
//! Вся векторная математика движения без ECS и без физдвижка:
//! системы в movement.rs только собирают входы (probes, input) и
//! применяют результат к rapier-телу. Тестируется напрямую.

use crate::components::{GroundSnapshot, MovementState};
use bevy::prelude::*;

/// Множитель силы вдоль склона (move_speed * 20)
pub const SLOPE_FORCE_MULTIPLIER: f32 = 20.0;

/// Множитель силы по плоскому направлению (move_speed * 10)
pub const FLAT_FORCE_MULTIPLIER: f32 = 10.0;

/// Фиксированная прижимная сила на склоне при положительной
/// вертикальной скорости (гасит "взлёт" с выпуклых склонов)
pub const SLOPE_STICK_FORCE: f32 = 80.0;

/// Walkable slope: угол СТРОГО между 0 и максимумом
///
/// Ровно 0° (плоский пол) исключён намеренно — плоская земля идёт
/// по non-slope ветке движения.
pub fn is_walkable_slope(angle_deg: f32, max_slope_deg: f32) -> bool {
    angle_deg > 0.0 && angle_deg < max_slope_deg
}

/// Стоит ли тело на walkable-склоне по данным snapshot'а
pub fn on_walkable_slope(snapshot: &GroundSnapshot, max_slope_deg: f32) -> bool {
    snapshot.slope_normal.is_some() && is_walkable_slope(snapshot.slope_angle_deg, max_slope_deg)
}

/// Input-направление, спроецированное на плоскость склона (unit)
pub fn slope_move_direction(move_dir: Vec3, normal: Vec3) -> Vec3 {
    (move_dir - normal * move_dir.dot(normal)).normalize_or_zero()
}

/// Результат разрешения сил за один физический тик
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveForces {
    /// Суммарная continuous-сила на тик
    pub force: Vec3,
    /// Гравитация включена iff тело НЕ на walkable-склоне
    /// (иначе тело либо сползает, либо "прилипает" с артефактами)
    pub gravity_enabled: bool,
}

/// Разрешение сил движения — точно воспроизводит ветвление контроллера:
///
/// 1. На walkable-склоне вне grace-окна: сила вдоль склона
///    (`move_speed * 20`) + прижимная 80 вниз при vy > 0.
/// 2. АДДИТИВНО (не взаимоисключающе): сила по плоскому направлению
///    `move_speed * 10`, в воздухе домноженная на air_multiplier.
/// 3. Гравитация выключена только на walkable-склоне (grace-окно
///    на неё не влияет).
pub fn resolve_move_forces(
    move_dir: Vec3,
    snapshot: &GroundSnapshot,
    exiting_slope: bool,
    move_speed: f32,
    air_multiplier: f32,
    vertical_velocity: f32,
    max_slope_deg: f32,
) -> MoveForces {
    let on_slope = on_walkable_slope(snapshot, max_slope_deg);
    let mut force = Vec3::ZERO;

    if on_slope && !exiting_slope {
        if let Some(normal) = snapshot.slope_normal {
            force += slope_move_direction(move_dir, normal) * move_speed * SLOPE_FORCE_MULTIPLIER;
        }
        if vertical_velocity > 0.0 {
            force += Vec3::NEG_Y * SLOPE_STICK_FORCE;
        }
    }

    // Вклад по плоскому направлению применяется всегда, в дополнение
    // к slope-силе (компаундинг намеренный)
    let flat = move_dir.normalize_or_zero() * move_speed * FLAT_FORCE_MULTIPLIER;
    force += if snapshot.grounded {
        flat
    } else {
        flat * air_multiplier
    };

    MoveForces {
        force,
        gravity_enabled: !on_slope,
    }
}

/// Clamp скорости после интеграции сил (тот же тик)
///
/// На walkable-склоне (вне grace-окна) ограничивается ПОЛНАЯ 3D-величина;
/// иначе только горизонтальная компонента, вертикальная не трогается.
pub fn clamp_velocity(velocity: Vec3, move_speed: f32, on_slope: bool) -> Vec3 {
    if on_slope {
        if velocity.length() > move_speed {
            velocity.normalize() * move_speed
        } else {
            velocity
        }
    } else {
        let flat = Vec3::new(velocity.x, 0.0, velocity.z);
        if flat.length() > move_speed {
            let limited = flat.normalize() * move_speed;
            Vec3::new(limited.x, velocity.y, limited.z)
        } else {
            velocity
        }
    }
}

/// Классификация состояния — чистая функция (grounded, sprint_held)
pub fn classify_state(grounded: bool, sprint_held: bool) -> MovementState {
    if grounded && sprint_held {
        MovementState::Sprinting
    } else if grounded {
        MovementState::Walking
    } else {
        MovementState::Airborne
    }
}

/// Триггер прыжка: key held И ready И grounded — всё на input-тике
pub fn should_jump(jump_held: bool, ready: bool, grounded: bool) -> bool {
    jump_held && ready && grounded
}

/// Восстановление готовности: только когда cooldown истёк И тело
/// grounded В ЭТОТ момент — прыжок нельзя "забанковать" в воздухе
pub fn jump_ready_after(since_jump: f32, cooldown: f32, grounded: bool) -> bool {
    since_jump >= cooldown && grounded
}

/// Скорость после прыжка: вертикальная компонента обнуляется ДО
/// импульса, затем мгновенный импульс вверх (масса нормализована,
/// импульс == Δv)
pub fn apply_jump_velocity(velocity: Vec3, jump_force: f32) -> Vec3 {
    let mut velocity = Vec3::new(velocity.x, 0.0, velocity.z);
    velocity.y += jump_force;
    velocity
}
