// ============================================
// Stairs Rule - Две таблицы направлений (низ/верх)
// ============================================
// Старший бит (>= 8) выбирает "верхнее" пространство кодов;
// внутри таблицы индекс = сторона света (N, E, S, W)

use serde::{Deserialize, Serialize};

use crate::math::AffineTransform;

use super::steps_from_transform;

/// Нижняя таблица по умолчанию в порядке север/восток/юг/запад
pub const DEFAULT_STAIRS_BOTTOM: [u16; 4] = [0, 2, 1, 3];
/// Верхняя (перевёрнутые ступени) таблица по умолчанию
pub const DEFAULT_STAIRS_TOP: [u16; 4] = [4, 6, 5, 7];

/// Правило вращения ступеней
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StairsRule {
    bottom: [u16; 4],
    top: [u16; 4],
}

impl StairsRule {
    pub fn new(bottom: [u16; 4], top: [u16; 4]) -> Self {
        Self { bottom, top }
    }

    pub fn bottom(&self) -> &[u16; 4] {
        &self.bottom
    }

    pub fn top(&self) -> &[u16; 4] {
        &self.top
    }

    fn find(&self, low: u16) -> Option<(&[u16; 4], usize)> {
        if let Some(i) = self.bottom.iter().position(|&v| v == low) {
            return Some((&self.bottom, i));
        }
        self.top
            .iter()
            .position(|&v| v == low)
            .map(|i| (&self.top, i))
    }

    pub fn rotate(&self, state: u16, steps: i32) -> u16 {
        let top_space = state >= 8;
        let low = if top_space { state - 8 } else { state };
        let Some((table, idx)) = self.find(low) else {
            return state;
        };
        let s = steps.rem_euclid(4) as usize;
        let out = table[(idx + s) % 4];
        if top_space {
            out + 8
        } else {
            out
        }
    }

    pub fn transform(&self, state: u16, transform: &AffineTransform) -> u16 {
        self.rotate(state, steps_from_transform(transform))
    }
}

impl Default for StairsRule {
    fn default() -> Self {
        Self::new(DEFAULT_STAIRS_BOTTOM, DEFAULT_STAIRS_TOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bottom_step() {
        let rule = StairsRule::default();
        // код 3 стоит последним в таблице, один шаг возвращает в начало
        assert_eq!(rule.rotate(3, 1), 0);
        assert_eq!(rule.rotate(0, 1), 2);
    }

    #[test]
    fn test_top_space_stays_top() {
        let rule = StairsRule::default();
        for state in 8u16..12 {
            for steps in -4..=4 {
                assert!(rule.rotate(state, steps) >= 8);
            }
        }
    }

    #[test]
    fn test_periodicity_and_roundtrip() {
        let rule = StairsRule::default();
        for state in 0u16..8 {
            for steps in -5..=5 {
                assert_eq!(rule.rotate(state, steps), rule.rotate(state, steps + 4));
                assert_eq!(rule.rotate(rule.rotate(state, steps), -steps), state);
            }
            assert_eq!(rule.rotate(state, 0), state);
        }
    }

    #[test]
    fn test_unknown_state_passthrough() {
        let rule = StairsRule::new([0, 2, 1, 3], [0, 2, 1, 3]);
        assert_eq!(rule.rotate(7, 1), 7);
    }
}
