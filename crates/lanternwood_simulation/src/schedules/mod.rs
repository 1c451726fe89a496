//! Custom schedules and tick counter
//!
//! Tick-based scheduling для детерминистичного low-frequency re-scan.
//!
//! # Архитектура
//!
//! **FixedUpdate (60 Hz)** → increment_tick_counter
//!   └─ tick % 12 == 0 → VisionScan (5 Hz = период 0.2 s)
//!
//! # Почему tick-based, а не timer += delta?
//!
//! - **Детерминизм:** counter инкрементируется в FixedUpdate (не зависит от FPS)
//! - **Точность:** modulo не дрейфует
//! - **Single in-flight:** scan выполняется внутри fixed-тика, конкурентных
//!   scan'ов не бывает by construction

use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::Resource;

pub mod timer_systems;

/// Период vision re-scan в fixed-тиках (12 тиков @ 60 Hz = 0.2 s)
pub const VISION_SCAN_INTERVAL_TICKS: u64 = 12;

/// Глобальный tick counter (детерминистичный, wraparound safe)
///
/// Инкрементируется каждый FixedUpdate tick (60 Hz).
/// u64::MAX / 60 / 60 / 60 / 24 / 365 ≈ 9.7 миллиардов лет.
#[derive(Resource, Default)]
pub struct FixedTickCounter {
    pub tick: u64,
}

/// Custom schedule: VisionScan (5 Hz = 60/12)
///
/// Периодический re-scan vision cone детектора: повторная энумерация
/// целей в радиусе + атомарная замена spotted-множества. Явного
/// stop-условия нет — живёт вместе с владеющим App (teardown = хост).
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisionScan;
