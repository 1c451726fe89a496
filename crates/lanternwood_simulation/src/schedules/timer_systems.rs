//! Timer systems для tick-based schedules
//!
//! Запускаются в FixedUpdate (60 Hz) и управляют запуском
//! low-frequency VisionScan schedule через tick counter.

use super::{FixedTickCounter, VisionScan, VISION_SCAN_INTERVAL_TICKS};
use bevy::prelude::{ResMut, World};

/// System: increment tick counter (FixedUpdate, запускается ПЕРВЫМ)
pub fn increment_tick_counter(mut counter: ResMut<FixedTickCounter>) {
    counter.tick = counter.tick.wrapping_add(1); // Wraparound safe
}

/// System: run VisionScan schedule каждые 12 ticks (5 Hz @ 60 Hz fixed)
///
/// Exclusive system (требует &mut World для run_schedule).
pub fn run_vision_scan_timer(world: &mut World) {
    let tick = world.resource::<FixedTickCounter>().tick;

    if tick % VISION_SCAN_INTERVAL_TICKS == 0 {
        world.run_schedule(VisionScan);
    }
}
