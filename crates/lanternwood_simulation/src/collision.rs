//! Collision Groups Constants
//!
//! Rapier collision groups — centralised константы для всего проекта.
//!
//! ## Архитектура:
//! - **Memberships (битовая маска):** В какой группе находится collider
//! - **Filters (битовая маска):** С какими группами collider взаимодействует
//!
//! ## Группы:
//! - GROUP_1: Actors (player dynamic body)
//! - GROUP_2: Ground (walkable поверхности: пол, склоны)
//! - GROUP_3: Obstacles (стены — блокируют line-of-sight)
//! - GROUP_4: Vision targets (детектируемые объекты)
//!
//! Probe/LOS фильтры используют membership `Group::ALL`: статическая
//! геометрия держит filter `Group::ALL`, поэтому совместимость групп
//! проходит в обе стороны.

use bevy_rapier3d::prelude::*;

/// Группа: актор (player dynamic body)
pub const GROUP_ACTORS: Group = Group::GROUP_1;

/// Группа: ground-поверхности (пол, склоны) — цель ground probe
pub const GROUP_GROUND: Group = Group::GROUP_2;

/// Группа: препятствия (стены) — блокируют vision raycast
pub const GROUP_OBSTACLES: Group = Group::GROUP_3;

/// Группа: vision targets (детектируемые объекты)
pub const GROUP_TARGETS: Group = Group::GROUP_4;

/// Actor collider: коллидит с ground, препятствиями и другими акторами
pub fn actor_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_ACTORS, GROUP_GROUND | GROUP_OBSTACLES | GROUP_ACTORS)
}

/// Ground collider (static): коллидит со всем
pub fn ground_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_GROUND, Group::ALL)
}

/// Obstacle collider (static): коллидит со всем
pub fn obstacle_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_OBSTACLES, Group::ALL)
}

/// Target collider: чисто для опознания, активно ни с чем не коллидит
pub fn target_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_TARGETS, Group::NONE)
}

/// Фильтр ground probe: только ground-поверхности
pub fn ground_probe_filter() -> QueryFilter<'static> {
    QueryFilter::new().groups(CollisionGroups::new(Group::ALL, GROUP_GROUND))
}

/// Фильтр slope probe: любая опорная геометрия (ground + препятствия)
pub fn slope_probe_filter() -> QueryFilter<'static> {
    QueryFilter::new().groups(CollisionGroups::new(Group::ALL, GROUP_GROUND | GROUP_OBSTACLES))
}

/// Фильтр line-of-sight: только препятствия (цели/акторы луч не блокируют)
pub fn los_filter() -> QueryFilter<'static> {
    QueryFilter::new().groups(CollisionGroups::new(Group::ALL, GROUP_OBSTACLES))
}
