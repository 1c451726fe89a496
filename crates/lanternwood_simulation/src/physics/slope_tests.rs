//! Tests for slope movement decision logic.

#[cfg(test)]
mod tests {
    use crate::components::{GroundSnapshot, MovementState};
    use crate::physics::slope::*;
    use bevy::prelude::*;

    const MAX_SLOPE: f32 = 40.0;

    fn snapshot_on_slope(angle_deg: f32) -> GroundSnapshot {
        // Нормаль, отклонённая от world-up на angle_deg (вокруг X)
        let normal = Quat::from_rotation_x(angle_deg.to_radians()) * Vec3::Y;
        GroundSnapshot {
            grounded: true,
            slope_normal: Some(normal),
            slope_angle_deg: angle_deg,
        }
    }

    fn snapshot_flat_ground() -> GroundSnapshot {
        GroundSnapshot {
            grounded: true,
            slope_normal: Some(Vec3::Y),
            slope_angle_deg: 0.0,
        }
    }

    fn snapshot_airborne() -> GroundSnapshot {
        GroundSnapshot {
            grounded: false,
            slope_normal: None,
            slope_angle_deg: 0.0,
        }
    }

    #[test]
    fn test_walkable_slope_strict_bounds() {
        // 0° — плоский пол, НЕ склон (строгая нижняя граница)
        assert!(!is_walkable_slope(0.0, MAX_SLOPE));
        // ровно max — слишком круто (строгая верхняя граница)
        assert!(!is_walkable_slope(MAX_SLOPE, MAX_SLOPE));
        assert!(!is_walkable_slope(55.0, MAX_SLOPE));
        // внутри интервала — walkable
        assert!(is_walkable_slope(0.01, MAX_SLOPE));
        assert!(is_walkable_slope(20.0, MAX_SLOPE));
        assert!(is_walkable_slope(39.99, MAX_SLOPE));
    }

    #[test]
    fn test_horizontal_clamp_preserves_vertical() {
        let move_speed = 5.0;
        let velocity = Vec3::new(6.0, -3.0, 8.0); // горизонталь 10.0 > 5.0

        let clamped = clamp_velocity(velocity, move_speed, false);

        let flat = Vec3::new(clamped.x, 0.0, clamped.z);
        // горизонтальная величина ровно move_speed
        assert!((flat.length() - move_speed).abs() < 1e-4, "flat = {}", flat.length());
        // вертикальная компонента не тронута
        assert_eq!(clamped.y, -3.0);
    }

    #[test]
    fn test_full_3d_clamp_on_slope() {
        let move_speed = 5.0;
        let velocity = Vec3::new(6.0, 4.0, 3.0);

        let clamped = clamp_velocity(velocity, move_speed, true);

        assert!((clamped.length() - move_speed).abs() < 1e-4);
        // направление сохранено
        assert!(clamped.normalize().dot(velocity.normalize()) > 0.9999);
    }

    #[test]
    fn test_clamp_noop_under_limit() {
        let velocity = Vec3::new(1.0, -2.0, 1.5);
        assert_eq!(clamp_velocity(velocity, 5.0, false), velocity);
        assert_eq!(clamp_velocity(velocity, 5.0, true), velocity);
    }

    #[test]
    fn test_slope_force_additive_with_flat_force() {
        let snapshot = snapshot_on_slope(20.0);
        let move_dir = Vec3::NEG_Z;
        let move_speed = 7.0;

        let forces = resolve_move_forces(move_dir, &snapshot, false, move_speed, 0.4, 0.0, MAX_SLOPE);

        // оба вклада присутствуют одновременно (компаундинг)
        let normal = snapshot.slope_normal.unwrap();
        let expected = slope_move_direction(move_dir, normal) * move_speed * SLOPE_FORCE_MULTIPLIER
            + move_dir.normalize() * move_speed * FLAT_FORCE_MULTIPLIER;
        assert!((forces.force - expected).length() < 1e-4);
        // гравитация выключена на walkable-склоне
        assert!(!forces.gravity_enabled);
    }

    #[test]
    fn test_slope_stick_force_when_ascending() {
        let snapshot = snapshot_on_slope(20.0);
        let move_dir = Vec3::NEG_Z;

        let rising = resolve_move_forces(move_dir, &snapshot, false, 7.0, 0.4, 1.0, MAX_SLOPE);
        let flat_vy = resolve_move_forces(move_dir, &snapshot, false, 7.0, 0.4, 0.0, MAX_SLOPE);

        // при vy > 0 добавлена прижимная сила ровно 80 вниз
        let diff = rising.force - flat_vy.force;
        assert!((diff - Vec3::NEG_Y * SLOPE_STICK_FORCE).length() < 1e-4);
    }

    #[test]
    fn test_exiting_slope_suppresses_slope_force_only() {
        let snapshot = snapshot_on_slope(20.0);
        let move_dir = Vec3::NEG_Z;
        let move_speed = 7.0;

        let forces = resolve_move_forces(move_dir, &snapshot, true, move_speed, 0.4, 1.0, MAX_SLOPE);

        // grace-окно: остаётся только flat-вклад (grounded)
        let expected = move_dir.normalize() * move_speed * FLAT_FORCE_MULTIPLIER;
        assert!((forces.force - expected).length() < 1e-4);
        // гравитацию grace-окно НЕ включает обратно
        assert!(!forces.gravity_enabled);
    }

    #[test]
    fn test_flat_ground_force() {
        let snapshot = snapshot_flat_ground();
        let move_dir = Vec3::new(1.0, 0.0, -1.0);
        let move_speed = 7.0;

        let forces = resolve_move_forces(move_dir, &snapshot, false, move_speed, 0.4, 0.0, MAX_SLOPE);

        // 0° — не склон: только flat-ветка, гравитация включена
        let expected = move_dir.normalize() * move_speed * FLAT_FORCE_MULTIPLIER;
        assert!((forces.force - expected).length() < 1e-4);
        assert!(forces.gravity_enabled);
    }

    #[test]
    fn test_airborne_force_uses_air_multiplier() {
        let snapshot = snapshot_airborne();
        let move_dir = Vec3::X;
        let move_speed = 7.0;
        let air_multiplier = 0.4;

        let forces =
            resolve_move_forces(move_dir, &snapshot, false, move_speed, air_multiplier, -2.0, MAX_SLOPE);

        let expected = move_dir * move_speed * FLAT_FORCE_MULTIPLIER * air_multiplier;
        assert!((forces.force - expected).length() < 1e-4);
        assert!(forces.gravity_enabled);
    }

    #[test]
    fn test_too_steep_slope_uses_flat_branch() {
        let snapshot = snapshot_on_slope(55.0); // > max

        let forces = resolve_move_forces(Vec3::NEG_Z, &snapshot, false, 7.0, 0.4, 0.0, MAX_SLOPE);

        // слишком круто: slope-силы нет, гравитация включена
        let expected = Vec3::NEG_Z * 7.0 * FLAT_FORCE_MULTIPLIER;
        assert!((forces.force - expected).length() < 1e-4);
        assert!(forces.gravity_enabled);
    }

    #[test]
    fn test_state_classification() {
        assert_eq!(classify_state(true, true), MovementState::Sprinting);
        assert_eq!(classify_state(true, false), MovementState::Walking);
        assert_eq!(classify_state(false, false), MovementState::Airborne);
        // sprint key в воздухе состояние не меняет
        assert_eq!(classify_state(false, true), MovementState::Airborne);
    }

    #[test]
    fn test_jump_trigger_conditions() {
        assert!(should_jump(true, true, true));
        assert!(!should_jump(false, true, true)); // key не зажат
        assert!(!should_jump(true, false, true)); // не ready
        assert!(!should_jump(true, true, false)); // в воздухе
    }

    #[test]
    fn test_jump_velocity_resets_vertical_before_impulse() {
        let falling = Vec3::new(3.0, -5.0, 1.0);

        let jumped = apply_jump_velocity(falling, 12.0);

        // vy обнулён до импульса: итог ровно jump_force, падение не вычитается
        assert_eq!(jumped.y, 12.0);
        // горизонтальные компоненты сохранены
        assert_eq!(jumped.x, 3.0);
        assert_eq!(jumped.z, 1.0);
    }

    #[test]
    fn test_jump_ready_requires_grounded_and_cooldown() {
        let cooldown = 0.25;

        // cooldown истёк, но в воздухе — НЕ ready (нельзя банковать прыжок)
        assert!(!jump_ready_after(0.25, cooldown, false));
        assert!(!jump_ready_after(1.0, cooldown, false));
        // grounded, но cooldown не истёк — НЕ ready
        assert!(!jump_ready_after(0.1, cooldown, true));
        // оба условия одновременно — ready (включая elapsed == cooldown)
        assert!(jump_ready_after(0.25, cooldown, true));
        assert!(jump_ready_after(0.3, cooldown, true));
    }

    #[test]
    fn test_slope_move_direction_stays_on_plane() {
        let normal = Quat::from_rotation_x(30f32.to_radians()) * Vec3::Y;
        let projected = slope_move_direction(Vec3::NEG_Z, normal);

        // лежит в плоскости склона и нормализовано
        assert!(projected.dot(normal).abs() < 1e-5);
        assert!((projected.length() - 1.0).abs() < 1e-5);
    }
}
