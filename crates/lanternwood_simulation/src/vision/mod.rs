//! Vision cone detector module
//!
//! cone.rs — чистый visibility-предикат, systems.rs — ECS-обвязка
//! (периодический scan в schedule VisionScan, spotlight follow).

use bevy::prelude::*;

pub mod cone;
pub mod systems;

#[cfg(test)]
mod cone_tests;

// Re-export основных типов
pub use systems::{
    scan_visible_targets, spawn_obstacle_wall, spawn_trailing_spotlight, spawn_vision_target,
    trailing_spotlight_follow,
};

use crate::schedules::VisionScan;

/// Vision Plugin
///
/// - VisionScan (5 Hz, tick-based): re-scan целей + атомарная замена
///   spotted-множества + resync презентации
/// - Update (каждый тик): trailing spotlight follow
pub struct VisionPlugin;

impl Plugin for VisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(VisionScan, scan_visible_targets)
            .add_systems(Update, trailing_spotlight_follow);
    }
}
