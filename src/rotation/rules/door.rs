// ============================================
// Door Rule - Фиксированное 2-битное поле направления
// ============================================
// Нижняя половина двери: биты 0-1 = направление, бит 2 = открыта.
// Верхняя половина (бит 3) хранит сторону петли, не ориентацию,
// поэтому вращением не трогается

use crate::math::AffineTransform;

use super::steps_from_transform;

/// Бит выбора половины двери (верх/низ)
pub const DOOR_HALF_BIT: u16 = 0x8;
/// Маска направления
pub const DOOR_DIR_MASK: u16 = 0x3;

/// Правило вращения дверей; данных не несёт, поведение фиксировано
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoorRule;

impl DoorRule {
    pub fn new() -> Self {
        Self
    }

    pub fn rotate(&self, state: u16, steps: i32) -> u16 {
        if state & DOOR_HALF_BIT != 0 {
            return state;
        }
        let s = steps.rem_euclid(4) as u16;
        let extra = state & !DOOR_DIR_MASK;
        let dir = state & DOOR_DIR_MASK;
        ((dir + s) & DOOR_DIR_MASK) | extra
    }

    pub fn transform(&self, state: u16, transform: &AffineTransform) -> u16 {
        self.rotate(state, steps_from_transform(transform))
    }
}
