//! Headless симуляция Lanternwood
//!
//! Запускает Bevy App без рендера: игрок бежит по склону мимо деревьев,
//! детектор периодически пересканирует цели

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use lanternwood_simulation::{
    create_headless_app, spawn_ground_slab, spawn_obstacle_wall, spawn_player,
    spawn_trailing_spotlight, spawn_tree, spawn_vision_target, MoveInput, Player,
    SimulationPlugin, VisionCone,
};

fn main() {
    let seed = 42;
    println!("Starting Lanternwood headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
        SimulationPlugin,
    ));

    {
        let world = app.world_mut();
        let mut commands = world.commands();

        // Пологий склон (~20°) и плоская площадка рядом
        spawn_ground_slab(
            &mut commands,
            Transform::from_xyz(0.0, -0.5, 0.0)
                .with_rotation(Quat::from_rotation_x(20f32.to_radians())),
            Vec3::new(20.0, 0.5, 20.0),
        );

        let player = spawn_player(&mut commands, Vec3::new(0.0, 2.0, 0.0));
        commands.entity(player).insert(VisionCone::default());

        spawn_trailing_spotlight(&mut commands, 3.0);

        spawn_vision_target(&mut commands, Vec3::new(0.0, 1.0, 4.0));
        spawn_vision_target(&mut commands, Vec3::new(3.0, 1.0, 8.0));
        spawn_obstacle_wall(
            &mut commands,
            Transform::from_xyz(0.0, 1.0, 6.0),
            Vec3::new(2.0, 1.0, 0.2),
        );

        spawn_tree(&mut commands, Vec3::new(1.5, 0.0, 2.0));
        spawn_tree(&mut commands, Vec3::new(-4.0, 0.0, 5.0));
    }
    app.world_mut().flush();

    // Игрок бежит вперёд
    {
        let world = app.world_mut();
        let mut players = world.query_filtered::<&mut MoveInput, With<Player>>();
        for mut input in players.iter_mut(world) {
            input.axes = Vec2::new(0.0, 1.0);
            input.sprint_held = true;
        }
    }

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            println!("Tick {}: {} entities", tick, entity_count);
        }
    }

    println!("Simulation complete!");
}
