//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - player: player control marker + orientation basis
//! - movement: slope-контроллер (config, input, per-tick snapshot, jump/state)
//! - vision: vision cone детектор (config, spotted set, презентация, spotlight)
//! - foliage: деревья с transparency-триггером (canopy, material variant)

pub mod foliage;
pub mod movement;
pub mod player;
pub mod vision;

// Re-exports для удобного импорта
pub use foliage::*;
pub use movement::*;
pub use player::*;
pub use vision::*;
