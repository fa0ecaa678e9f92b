// ============================================
// Rule Families - Пять семейств правил вращения
// ============================================
// Контракт rotate(state, steps): тотальная функция, период 4,
// неизвестный state возвращается как есть

mod door;
mod four;
mod pillar;
mod stairs;
mod trapdoor;

pub use door::*;
pub use four::*;
pub use pillar::*;
pub use stairs::*;
pub use trapdoor::*;

use ultraviolet::Vec3;

use crate::math::AffineTransform;

/// Канонические единичные направления: север, восток, юг, запад
pub(crate) fn directions() -> [Vec3; 4] {
    [
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(-1.0, 0.0, 0.0),
    ]
}

/// Проекция transform на число шагов по 90 градусов.
/// Поворот по часовой стрелке вокруг вертикали = положительные шаги.
pub(crate) fn steps_from_transform(transform: &AffineTransform) -> i32 {
    (-transform.y_rotation_degrees() / 90.0).round() as i32
}
