//! Player marker + orientation basis

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Vision detector и foliage-триггеры используют `With<Player>` filter,
/// чтобы реагировать только на игрока.
///
/// # Single-player
/// В прототипе ровно один entity несёт этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Базис ориентации (model forward/right)
///
/// Источник направления для movement input и vision cone.
/// Пишется хостом (camera/mouse-look принадлежат клиенту), симуляция
/// только читает. Соглашение Bevy: forward = -Z.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Orientation {
    /// Unit vector: куда смотрит модель
    pub forward: Vec3,
    /// Unit vector: право модели
    pub right: Vec3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl Orientation {
    /// Базис из yaw-угла (радианы, поворот вокруг Y)
    pub fn from_yaw(yaw: f32) -> Self {
        let rotation = Quat::from_rotation_y(yaw);
        Self {
            forward: rotation * Vec3::NEG_Z,
            right: rotation * Vec3::X,
        }
    }

    /// Плоское направление движения из input-осей (x = strafe, y = вперёд)
    pub fn move_direction(&self, axes: Vec2) -> Vec3 {
        self.forward * axes.y + self.right * axes.x
    }
}
