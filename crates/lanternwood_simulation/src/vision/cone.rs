//! Чистый visibility-предикат vision cone
//!
//! Окклюзия инжектится замыканием: решение не знает про физдвижок,
//! ECS-слой подставляет rapier LOS raycast (см. systems.rs).

use crate::components::VisionCone;
use bevy::prelude::*;

/// Видимость цели из точки `origin` с направлением взгляда `forward`
///
/// Порядок проверок как у детектора: угол (строго < view_angle/2) и
/// радиус (включительно), затем окклюзия, затем освещённость
/// (дистанция <= light_range).
pub fn target_visible(
    origin: Vec3,
    forward: Vec3,
    target_pos: Vec3,
    cone: &VisionCone,
    segment_blocked: impl FnOnce(Vec3, Vec3) -> bool,
) -> bool {
    let to_target = target_pos - origin;
    let distance = to_target.length();

    // Радиус: включительная граница (== view_radius проходит)
    if distance > cone.view_radius {
        return false;
    }

    // Цель в точке детектора считается "прямо по курсу"
    let dir_to_target = if distance > 0.0 {
        to_target / distance
    } else {
        forward
    };

    // Угол: строгая граница (== view_angle/2 НЕ проходит)
    let angle_deg = forward.angle_between(dir_to_target).to_degrees();
    if !(angle_deg < cone.view_angle_deg / 2.0) {
        return false;
    }

    // Окклюзия: препятствие на отрезке детектор→цель гасит видимость
    // независимо от освещённости
    if segment_blocked(origin, target_pos) {
        return false;
    }

    // Освещённость: цель должна быть в пределах light_range
    distance <= cone.light_range
}
