//! Physics module: slope-aware контроллер через Rapier
//!
//! slope.rs — чистая decision-математика, movement.rs — ECS-обвязка
//! (probes, системы, plugin, spawn helpers).

pub mod movement;
pub mod slope;

#[cfg(test)]
mod slope_tests;

// Re-export основных типов
pub use movement::{spawn_ground_slab, spawn_player, SlopeMovementPlugin};
