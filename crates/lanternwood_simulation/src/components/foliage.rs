//! Foliage компоненты: canopy-триггер и material variant

use bevy::prelude::*;

/// Alpha прозрачного canopy-материала
pub const CANOPY_FADE_ALPHA: f32 = 0.5;

/// Дерево с transparency-триггером
///
/// Спавнится скрытым (RenderToggle::hidden). Когда игрок входит в
/// триггер-радиус: дерево показывается и материал переводится в
/// Transparent; на выходе материал возвращается в Opaque (дерево
/// остаётся видимым).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(MaterialVariant, crate::components::RenderToggle)]
pub struct TreeCanopy {
    /// Радиус overlap-триггера (метры)
    pub trigger_radius: f32,
    /// Флаг "игрок внутри" — трекает ПЕРЕХОД enter/exit, не состояние
    /// презентации (one-shot transition, без спама переключений)
    pub player_inside: bool,
}

impl Default for TreeCanopy {
    fn default() -> Self {
        Self {
            trigger_radius: 2.5,
            player_inside: false,
        }
    }
}

/// Вариант материала (симуляция владеет, bridge применяет к renderer'у)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub enum MaterialVariant {
    Opaque,
    Transparent {
        alpha: f32,
    },
}

impl Default for MaterialVariant {
    fn default() -> Self {
        Self::Opaque
    }
}

/// Скалярные/int параметры материала для пайплайна хоста
///
/// Индексы blend-факторов — стандартная таблица blend-режимов
/// renderer'а; очереди — geometry/transparent render queues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendParams {
    /// 0 = opaque surface, 1 = transparent surface
    pub surface: f32,
    pub src_blend: i32,
    pub dst_blend: i32,
    /// Запись в depth-буфер (1 = on, 0 = off)
    pub z_write: i32,
    pub render_queue: i32,
    pub alpha: f32,
}

const BLEND_ZERO: i32 = 0;
const BLEND_ONE: i32 = 1;
const BLEND_SRC_ALPHA: i32 = 5;
const BLEND_ONE_MINUS_SRC_ALPHA: i32 = 10;
const QUEUE_GEOMETRY: i32 = 2000;
const QUEUE_TRANSPARENT: i32 = 3000;

impl MaterialVariant {
    /// Параметры материала для текущего варианта
    pub fn blend_params(&self) -> BlendParams {
        match *self {
            MaterialVariant::Opaque => BlendParams {
                surface: 0.0,
                src_blend: BLEND_ONE,
                dst_blend: BLEND_ZERO,
                z_write: 1,
                render_queue: QUEUE_GEOMETRY,
                alpha: 1.0,
            },
            MaterialVariant::Transparent { alpha } => BlendParams {
                surface: 1.0,
                src_blend: BLEND_SRC_ALPHA,
                dst_blend: BLEND_ONE_MINUS_SRC_ALPHA,
                z_write: 0,
                render_queue: QUEUE_TRANSPARENT,
                alpha,
            },
        }
    }
}
