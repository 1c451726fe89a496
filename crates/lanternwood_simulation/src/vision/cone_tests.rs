//! Tests for the vision cone visibility predicate.

#[cfg(test)]
mod tests {
    use crate::components::VisionCone;
    use crate::vision::cone::target_visible;
    use bevy::prelude::*;

    const NOT_BLOCKED: fn(Vec3, Vec3) -> bool = |_, _| false;
    const BLOCKED: fn(Vec3, Vec3) -> bool = |_, _| true;

    fn cone(view_radius: f32, view_angle_deg: f32, light_range: f32) -> VisionCone {
        VisionCone {
            view_radius,
            view_angle_deg,
            light_range,
        }
    }

    /// Направление под углом angle_deg от forward (+Z), поворот вокруг Y
    fn dir_at_angle(angle_deg: f32) -> Vec3 {
        Quat::from_rotation_y(angle_deg.to_radians()) * Vec3::Z
    }

    #[test]
    fn test_scenario_visible_within_all_limits() {
        // radius 5, угол 90°, цель на 3 м под 40° от forward, свет 10 → видима
        let target = dir_at_angle(40.0) * 3.0;
        let visible = target_visible(Vec3::ZERO, Vec3::Z, target, &cone(5.0, 90.0, 10.0), NOT_BLOCKED);
        assert!(visible);
    }

    #[test]
    fn test_scenario_outside_light_range() {
        // та же цель, но свет достаёт только на 2 м → НЕ видима
        let target = dir_at_angle(40.0) * 3.0;
        let visible = target_visible(Vec3::ZERO, Vec3::Z, target, &cone(5.0, 90.0, 2.0), NOT_BLOCKED);
        assert!(!visible);
    }

    #[test]
    fn test_radius_boundary_inclusive() {
        // дистанция РОВНО view_radius (axis-aligned, считается точно) → видима
        let visible = target_visible(
            Vec3::ZERO,
            Vec3::Z,
            Vec3::new(0.0, 0.0, 5.0),
            &cone(5.0, 90.0, 10.0),
            NOT_BLOCKED,
        );
        assert!(visible);

        // чуть дальше радиуса → нет
        let visible = target_visible(
            Vec3::ZERO,
            Vec3::Z,
            Vec3::new(0.0, 0.0, 5.001),
            &cone(5.0, 90.0, 10.0),
            NOT_BLOCKED,
        );
        assert!(!visible);
    }

    #[test]
    fn test_angle_boundary_strict() {
        // угол заметно внутри половинного → видима
        let inside = dir_at_angle(44.0) * 3.0;
        assert!(target_visible(Vec3::ZERO, Vec3::Z, inside, &cone(5.0, 90.0, 10.0), NOT_BLOCKED));

        // угол за половинным → нет
        let outside = dir_at_angle(46.0) * 3.0;
        assert!(!target_visible(Vec3::ZERO, Vec3::Z, outside, &cone(5.0, 90.0, 10.0), NOT_BLOCKED));

        // строгость на точном равенстве: угол 0 при view_angle 0 → 0 < 0 ложь,
        // цель прямо по курсу исключается
        let dead_ahead = Vec3::new(0.0, 0.0, 2.0);
        assert!(!target_visible(Vec3::ZERO, Vec3::Z, dead_ahead, &cone(5.0, 0.0, 10.0), NOT_BLOCKED));
    }

    #[test]
    fn test_obstacle_blocks_regardless_of_light() {
        // в радиусе и в конусе, свет с запасом — но за препятствием → нет
        let target = dir_at_angle(10.0) * 3.0;
        assert!(!target_visible(Vec3::ZERO, Vec3::Z, target, &cone(5.0, 90.0, 100.0), BLOCKED));
    }

    #[test]
    fn test_behind_detector_excluded() {
        let behind = Vec3::new(0.0, 0.0, -3.0);
        assert!(!target_visible(Vec3::ZERO, Vec3::Z, behind, &cone(5.0, 90.0, 10.0), NOT_BLOCKED));
    }

    #[test]
    fn test_light_range_boundary_inclusive() {
        // дистанция == light_range → освещена, видима
        let target = Vec3::new(0.0, 0.0, 3.0);
        assert!(target_visible(Vec3::ZERO, Vec3::Z, target, &cone(5.0, 90.0, 3.0), NOT_BLOCKED));
    }
}
