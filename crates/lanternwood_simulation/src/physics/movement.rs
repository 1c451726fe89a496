//! Slope-aware контроллер персонажа
//!
//! Архитектура:
//! - Rapier dynamic body (Body-коллаборатор: Velocity, ExternalForce,
//!   GravityScale, Damping)
//! - Probes через rapier raycasts (ground probe + slope probe)
//! - Вся decision-математика в slope.rs (чистые функции)
//!
//! Порядок за кадр: fast tick (Update, строгая цепочка probe → state →
//! jump → clamp → drag) полностью завершается до физического тика
//! (FixedUpdate: силы до rapier step).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::slope;
use crate::collision;
use crate::components::{
    GroundSnapshot, JumpState, MoveInput, MoveSpeed, MovementState, Orientation, Player,
    SlopeController,
};

/// Отступ ground probe от краёв тела (метры)
pub const GROUND_PROBE_SKIN: f32 = 0.1;

/// Запас длины slope probe ниже ног (метры)
pub const SLOPE_PROBE_MARGIN: f32 = 0.3;

/// Радиус капсулы персонажа (метры)
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.5;

/// Система: per-tick probes опоры (ground + slope)
///
/// Snapshot пересчитывается каждый кадр целиком — никакого кэша между
/// тиками. Без rapier-контекста (headless без физики) опоры нет.
pub fn probe_ground(
    rapier: ReadRapierContext,
    mut bodies: Query<(Entity, &Transform, &SlopeController, &mut GroundSnapshot)>,
) {
    let Ok(ctx) = rapier.single() else {
        for (_, _, _, mut snapshot) in bodies.iter_mut() {
            *snapshot = GroundSnapshot::default();
        }
        return;
    };

    for (entity, transform, controller, mut snapshot) in bodies.iter_mut() {
        let half_height = controller.height * 0.5;
        // translation = позиция ног (пивот капсулы внизу, см. spawn_player)
        let feet = transform.translation;

        // Ground probe: от верха тела вниз, до чуть ниже ног
        let origin = feet + Vec3::Y * (half_height - GROUND_PROBE_SKIN);
        let grounded = ctx
            .cast_ray(
                origin,
                Vec3::NEG_Y,
                half_height + GROUND_PROBE_SKIN,
                true,
                collision::ground_probe_filter().exclude_collider(entity),
            )
            .is_some();

        // Slope probe: от ног вниз с запасом, нормаль поверхности → угол
        let slope_hit = ctx.cast_ray_and_get_normal(
            feet,
            Vec3::NEG_Y,
            half_height + SLOPE_PROBE_MARGIN,
            true,
            collision::slope_probe_filter().exclude_collider(entity),
        );

        *snapshot = match slope_hit {
            Some((_, intersection)) => GroundSnapshot {
                grounded,
                slope_normal: Some(intersection.normal),
                slope_angle_deg: Vec3::Y.angle_between(intersection.normal).to_degrees(),
            },
            None => GroundSnapshot {
                grounded,
                slope_normal: None,
                slope_angle_deg: 0.0,
            },
        };
    }
}

/// Система: классификация состояния + назначение move speed
///
/// Airborne скорость НЕ назначает — остаётся последняя наземная.
pub fn update_movement_state(
    mut bodies: Query<(
        &GroundSnapshot,
        &MoveInput,
        &SlopeController,
        &mut MovementState,
        &mut MoveSpeed,
    )>,
) {
    for (snapshot, input, controller, mut state, mut speed) in bodies.iter_mut() {
        let next = slope::classify_state(snapshot.grounded, input.sprint_held);
        match next {
            MovementState::Sprinting => speed.speed = controller.sprint_speed,
            MovementState::Walking => speed.speed = controller.walk_speed,
            MovementState::Airborne => {}
        }
        if *state != next {
            *state = next;
        }
    }
}

/// Система: триггер прыжка + восстановление cooldown'а
///
/// Всё семплится на input-тике (не на физическом). Ready
/// восстанавливается только когда cooldown истёк И тело grounded
/// в тот же тик.
pub fn handle_jump(
    time: Res<Time>,
    mut bodies: Query<(
        &GroundSnapshot,
        &MoveInput,
        &SlopeController,
        &mut JumpState,
        &mut Velocity,
    )>,
) {
    let delta = time.delta_secs();

    for (snapshot, input, controller, mut jump, mut velocity) in bodies.iter_mut() {
        if !jump.ready {
            jump.since_jump += delta;
            if slope::jump_ready_after(jump.since_jump, controller.jump_cooldown, snapshot.grounded)
            {
                jump.ready = true;
                jump.exiting_slope = false;
            }
        }

        if slope::should_jump(input.jump_held, jump.ready, snapshot.grounded) {
            jump.exiting_slope = true;
            jump.ready = false;
            jump.since_jump = 0.0;
            velocity.linvel = slope::apply_jump_velocity(velocity.linvel, controller.jump_force);
        }
    }
}

/// Система: clamp скорости (тот же тик, после интеграции сил)
pub fn clamp_speed(
    mut bodies: Query<(
        &GroundSnapshot,
        &SlopeController,
        &JumpState,
        &MoveSpeed,
        &mut Velocity,
    )>,
) {
    for (snapshot, controller, jump, speed, mut velocity) in bodies.iter_mut() {
        let on_slope = slope::on_walkable_slope(snapshot, controller.max_slope_angle_deg)
            && !jump.exiting_slope;
        let clamped = slope::clamp_velocity(velocity.linvel, speed.speed, on_slope);
        if clamped != velocity.linvel {
            velocity.linvel = clamped;
        }
    }
}

/// Система: linear drag по состоянию опоры (на земле drag, в воздухе 0)
pub fn update_ground_drag(
    mut bodies: Query<(&GroundSnapshot, &SlopeController, &mut Damping)>,
) {
    for (snapshot, controller, mut damping) in bodies.iter_mut() {
        damping.linear_damping = if snapshot.grounded {
            controller.ground_drag
        } else {
            0.0
        };
    }
}

/// Система: разрешение и применение сил движения (физический тик)
///
/// ExternalForce перезаписывается каждый тик целиком (continuous force),
/// GravityScale — флаг гравитации Body-коллаборатора.
pub fn apply_move_forces(
    mut bodies: Query<(
        &MoveInput,
        &Orientation,
        &GroundSnapshot,
        &JumpState,
        &MoveSpeed,
        &SlopeController,
        &Velocity,
        &mut ExternalForce,
        &mut GravityScale,
    )>,
) {
    for (input, orientation, snapshot, jump, speed, controller, velocity, mut force, mut gravity) in
        bodies.iter_mut()
    {
        let move_dir = orientation.move_direction(input.axes);
        let forces = slope::resolve_move_forces(
            move_dir,
            snapshot,
            jump.exiting_slope,
            speed.speed,
            controller.air_multiplier,
            velocity.linvel.y,
            controller.max_slope_angle_deg,
        );

        force.force = forces.force;
        gravity.0 = if forces.gravity_enabled { 1.0 } else { 0.0 };
    }
}

/// Plugin slope-контроллера
///
/// Fast tick (Update) строго упорядочен: probe → state → jump → clamp →
/// drag. Силы применяются в FixedUpdate до rapier physics step.
pub struct SlopeMovementPlugin;

impl Plugin for SlopeMovementPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app.add_systems(
            Update,
            (
                probe_ground,
                update_movement_state,
                handle_jump,
                clamp_speed,
                update_ground_drag,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            apply_move_forces.before(PhysicsSet::SyncBackend),
        );
    }
}

/// Spawn helper: персонаж со slope-контроллером
///
/// Required components SlopeController'а дотягивают runtime-состояние
/// (Orientation, MoveInput, MoveSpeed, MovementState, JumpState,
/// GroundSnapshot) — отсутствующий коллаборатор непредставим.
/// `position` — позиция ног.
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    let controller = SlopeController::default();

    commands
        .spawn((
            Transform::from_translation(position),
            Player,
            controller,
            // Rapier dynamic body (Body-коллаборатор)
            RigidBody::Dynamic,
            // Капсула с пивотом в ногах (probes считают от ног)
            Collider::capsule(
                Vec3::Y * PLAYER_CAPSULE_RADIUS,
                Vec3::Y * (controller.height - PLAYER_CAPSULE_RADIUS),
                PLAYER_CAPSULE_RADIUS,
            ),
            Velocity::default(),
            ExternalForce::default(),
            GravityScale(1.0),
            Damping {
                linear_damping: controller.ground_drag,
                angular_damping: 0.0,
            },
            // freeze rotation: ориентацией владеет контроллер, не физика
            LockedAxes::ROTATION_LOCKED,
            // Масса нормализована к 1.0: силы/импульсы читаются как ускорения/Δv
            ColliderMassProperties::Density(0.0),
            AdditionalMassProperties::Mass(1.0),
            collision::actor_groups(),
        ))
        .id()
}

/// Spawn helper: статическая ground-плита (пол или наклонённый склон)
pub fn spawn_ground_slab(
    commands: &mut Commands,
    transform: Transform,
    half_extents: Vec3,
) -> Entity {
    commands
        .spawn((
            transform,
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            collision::ground_groups(),
        ))
        .id()
}
