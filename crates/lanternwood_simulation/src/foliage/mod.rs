//! Foliage transparency module
//!
//! Деревья спавнятся скрытыми. Overlap-триггер (явный distance-цикл,
//! per fixed tick) трекает переходы enter/exit игрока:
//! enter → дерево показывается + материал Transparent,
//! exit → материал обратно Opaque (дерево остаётся видимым).

use bevy::prelude::*;

use crate::components::{MaterialVariant, Player, RenderToggle, TreeCanopy, CANOPY_FADE_ALPHA};
use crate::logger;

/// Система: overlap enter/exit триггеры canopy (FixedUpdate)
///
/// player_inside трекает ПЕРЕХОД, а не состояние — каждая граница
/// срабатывает ровно один раз, без спама переключений материала.
pub fn update_canopy_triggers(
    players: Query<&Transform, With<Player>>,
    mut trees: Query<
        (
            Entity,
            &Transform,
            &mut TreeCanopy,
            &mut RenderToggle,
            &mut MaterialVariant,
        ),
        Without<Player>,
    >,
) {
    let Ok(player_transform) = players.single() else {
        return;
    };
    let player_pos = player_transform.translation;

    for (tree, transform, mut canopy, mut toggle, mut variant) in trees.iter_mut() {
        let inside = transform.translation.distance(player_pos) <= canopy.trigger_radius;

        if inside && !canopy.player_inside {
            // enter: показать дерево и перевести материал в transparent
            toggle.enabled = true;
            *variant = MaterialVariant::Transparent {
                alpha: CANOPY_FADE_ALPHA,
            };
            logger::log(&format!("Canopy enter: tree {:?} faded", tree));
        } else if !inside && canopy.player_inside {
            // exit: материал обратно в opaque, видимость не трогаем
            *variant = MaterialVariant::Opaque;
            logger::log(&format!("Canopy exit: tree {:?} restored", tree));
        }

        canopy.player_inside = inside;
    }
}

/// Foliage Plugin
pub struct FoliagePlugin;

impl Plugin for FoliagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, update_canopy_triggers);
    }
}

/// Spawn helper: дерево с transparency-триггером (скрыто при спавне)
pub fn spawn_tree(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            TreeCanopy::default(),
            RenderToggle::hidden(),
            MaterialVariant::Opaque,
        ))
        .id()
}
