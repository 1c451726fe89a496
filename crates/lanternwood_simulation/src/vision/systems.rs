//! Vision ECS systems: периодический re-scan + trailing spotlight

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::cone;
use crate::collision;
use crate::components::{
    Orientation, Player, RenderToggle, SpottedTargets, TrailingSpotlight, VisionCone,
    VisionTarget,
};
use crate::logger;

/// Система: периодический re-scan видимых целей (schedule VisionScan)
///
/// Повторно энумерирует цели в радиусе (явный distance-цикл по
/// Query), собирает новое множество и заменяет SpottedTargets ЦЕЛИКОМ.
/// Затем презентация ВСЕХ целей ресинхронизируется против нового
/// множества — включая цели, которые раньше не трекались (нет
/// "застрявших видимых").
///
/// LOS: rapier raycast по obstacle-группе. Без rapier-контекста
/// окклюдеров нет — отрезок считается свободным.
pub fn scan_visible_targets(
    rapier: ReadRapierContext,
    mut observers: Query<(Entity, &Transform, &Orientation, &VisionCone, &mut SpottedTargets)>,
    targets: Query<(Entity, &Transform), With<VisionTarget>>,
    mut toggles: Query<&mut RenderToggle, With<VisionTarget>>,
) {
    let ctx = rapier.single().ok();

    for (observer, transform, orientation, vision, mut spotted) in observers.iter_mut() {
        let origin = transform.translation;
        let forward = orientation.forward;

        let mut visible = Vec::new();
        for (target, target_transform) in targets.iter() {
            if target == observer {
                continue;
            }

            let segment_blocked = |from: Vec3, to: Vec3| -> bool {
                let Some(ctx) = ctx.as_ref() else {
                    return false;
                };
                let segment = to - from;
                let length = segment.length();
                if length <= 0.0 {
                    return false;
                }
                ctx.cast_ray(from, segment / length, length, true, collision::los_filter())
                    .is_some()
            };

            if cone::target_visible(
                origin,
                forward,
                target_transform.translation,
                vision,
                segment_blocked,
            ) {
                visible.push(target);
            }
        }

        if visible.len() != spotted.targets.len() {
            logger::log(&format!(
                "Vision scan: {:?} sees {} target(s)",
                observer,
                visible.len()
            ));
        }

        // Атомарная замена множества (без инкрементального diff)
        spotted.targets = visible;

        // Resync презентации всех целей против нового множества
        for (target, _) in targets.iter() {
            if let Ok(mut toggle) = toggles.get_mut(target) {
                let now_visible = spotted.contains(target);
                if toggle.enabled != now_visible {
                    toggle.enabled = now_visible;
                }
            }
        }
    }
}

/// Система: trailing spotlight следует за направлением игрока
///
/// Каждый Update-тик, независимо от scan-цикла: позиция позади игрока
/// вдоль forward, высота прибита к fixed_height, ориентация yaw-only
/// (pitch/roll исходного forward отбрасываются).
pub fn trailing_spotlight_follow(
    players: Query<(&Transform, &Orientation), With<Player>>,
    mut spotlights: Query<(&TrailingSpotlight, &mut Transform), Without<Player>>,
) {
    let Ok((player_transform, orientation)) = players.single() else {
        return;
    };
    let forward = orientation.forward;

    for (spotlight, mut transform) in spotlights.iter_mut() {
        let mut position = player_transform.translation - forward * spotlight.offset;
        position.y = spotlight.fixed_height;
        transform.translation = position;

        let flat_forward = Vec3::new(forward.x, 0.0, forward.z);
        if flat_forward.length_squared() > 0.0 {
            transform.look_to(flat_forward, Vec3::Y);
        }
    }
}

/// Spawn helper: детектируемая цель
///
/// Required components дотягивают RenderToggle (по умолчанию видима —
/// первый scan ресинхронизирует).
pub fn spawn_vision_target(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            VisionTarget,
            Collider::ball(0.5),
            Sensor,
            collision::target_groups(),
        ))
        .id()
}

/// Spawn helper: стена-препятствие (блокирует line-of-sight)
pub fn spawn_obstacle_wall(
    commands: &mut Commands,
    transform: Transform,
    half_extents: Vec3,
) -> Entity {
    commands
        .spawn((
            transform,
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            collision::obstacle_groups(),
        ))
        .id()
}

/// Spawn helper: trailing spotlight на фиксированной высоте
pub fn spawn_trailing_spotlight(commands: &mut Commands, fixed_height: f32) -> Entity {
    commands
        .spawn((
            Transform::from_xyz(0.0, fixed_height, 0.0),
            TrailingSpotlight {
                fixed_height,
                ..Default::default()
            },
        ))
        .id()
}
