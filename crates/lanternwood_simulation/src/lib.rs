//! Lanternwood Simulation Core
//!
//! ECS-симуляция прототипа на Bevy 0.16 (headless core):
//! - Slope-aware контроллер персонажа (forces через Rapier dynamic body)
//! - Vision cone детектор с периодическим re-scan
//! - Foliage transparency триггеры (прятки за деревьями)
//!
//! Rendering/input — ответственность клиентского bridge-слоя:
//! симуляция держит презентационное состояние как plain components
//! (RenderToggle, MaterialVariant), клиент синхронизирует их в renderer.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod collision;
pub mod components;
pub mod foliage;
pub mod logger;
pub mod physics;
pub mod schedules;
pub mod vision;

// Re-export базовых компонентов для удобства
pub use components::*;
pub use foliage::{spawn_tree, FoliagePlugin};
pub use physics::{spawn_ground_slab, spawn_player, SlopeMovementPlugin};
pub use schedules::{FixedTickCounter, VisionScan, VISION_SCAN_INTERVAL_TICKS};
pub use vision::{
    scan_visible_targets, spawn_obstacle_wall, spawn_trailing_spotlight, spawn_vision_target,
    trailing_spotlight_follow, VisionPlugin,
};

// Re-export logger shortcuts (как crate::log в системах)
pub use logger::{log, log_error, log_info, log_warning};

/// Частота fixed-rate тика симуляции (Hz)
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Порядок внутри кадра: Update (fast tick: probes, input-решения,
/// clamp) полностью завершается до FixedUpdate (физический тик, силы).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            // Детерминистичный RNG (seed по умолчанию, create_headless_app перекрывает)
            .init_resource::<DeterministicRng>()
            // Tick-based scheduling (VisionScan = low-frequency re-scan)
            .init_resource::<FixedTickCounter>()
            .init_schedule(VisionScan)
            .add_systems(
                FixedUpdate,
                (
                    schedules::timer_systems::increment_tick_counter,
                    schedules::timer_systems::run_vision_scan_timer,
                )
                    .chain(),
            )
            // Подсистемы
            .add_plugins((SlopeMovementPlugin, VisionPlugin, FoliagePlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_console();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает компоненты типа T в детерминированный байтовый формат
/// (сортировка по Entity index, сериализация через Debug).
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
