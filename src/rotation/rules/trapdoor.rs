// ============================================
// Trapdoor Rule - Четыре таблицы (низ/верх x закрыт/открыт)
// ============================================
// Порядок внутри таблицы = стороны света; перестановка 90° по часовой
// для legacy-метадаты запечена в порядок кодов

use crate::math::AffineTransform;
use crate::rotation::mask::{extract_extra, extract_orientation, recombine};

use super::steps_from_transform;

/// Таблицы по умолчанию в порядке север/восток/юг/запад
pub const DEFAULT_TRAPDOOR_BOTTOM_CLOSED: [u16; 4] = [0, 3, 1, 2];
pub const DEFAULT_TRAPDOOR_BOTTOM_OPEN: [u16; 4] = [4, 7, 5, 6];
pub const DEFAULT_TRAPDOOR_TOP_CLOSED: [u16; 4] = [8, 11, 9, 10];
pub const DEFAULT_TRAPDOOR_TOP_OPEN: [u16; 4] = [12, 15, 13, 14];

/// Правило вращения люков
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapdoorRule {
    bottom_closed: [u16; 4],
    bottom_open: [u16; 4],
    top_closed: [u16; 4],
    top_open: [u16; 4],
    /// Объединение бит всех 16 кодов
    mask: u16,
}

impl TrapdoorRule {
    pub fn new(
        bottom_closed: [u16; 4],
        bottom_open: [u16; 4],
        top_closed: [u16; 4],
        top_open: [u16; 4],
    ) -> Self {
        let mut mask = 0;
        for table in [&bottom_closed, &bottom_open, &top_closed, &top_open] {
            for &v in table {
                mask |= v;
            }
        }
        Self {
            bottom_closed,
            bottom_open,
            top_closed,
            top_open,
            mask,
        }
    }

    pub fn bottom_closed(&self) -> &[u16; 4] {
        &self.bottom_closed
    }

    pub fn bottom_open(&self) -> &[u16; 4] {
        &self.bottom_open
    }

    pub fn top_closed(&self) -> &[u16; 4] {
        &self.top_closed
    }

    pub fn top_open(&self) -> &[u16; 4] {
        &self.top_open
    }

    pub fn mask(&self) -> u16 {
        self.mask
    }

    pub fn rotate(&self, state: u16, steps: i32) -> u16 {
        let extras = extract_extra(state, self.mask);
        let data = extract_orientation(state, self.mask);
        let s = steps.rem_euclid(4) as usize;
        for table in [
            &self.bottom_closed,
            &self.bottom_open,
            &self.top_closed,
            &self.top_open,
        ] {
            if let Some(i) = table.iter().position(|&v| v == data) {
                return recombine(table[(i + s) % 4], extras);
            }
        }
        state
    }

    pub fn transform(&self, state: u16, transform: &AffineTransform) -> u16 {
        self.rotate(state, steps_from_transform(transform))
    }
}

impl Default for TrapdoorRule {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRAPDOOR_BOTTOM_CLOSED,
            DEFAULT_TRAPDOOR_BOTTOM_OPEN,
            DEFAULT_TRAPDOOR_TOP_CLOSED,
            DEFAULT_TRAPDOOR_TOP_OPEN,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_single_steps() {
        let rule = TrapdoorRule::default();
        assert_eq!(rule.rotate(0, 1), 3);
        assert_eq!(rule.rotate(0, -1), 2);
        // два шага дают противоположное направление по таблице
        assert_eq!(rule.rotate(0, 2), 1);
    }

    #[test]
    fn test_open_and_top_tables() {
        let rule = TrapdoorRule::default();
        // открытый низ вращается внутри своей таблицы
        assert_eq!(rule.rotate(4, 1), 7);
        // верхний закрытый
        assert_eq!(rule.rotate(8, 1), 11);
        // верхний открытый
        assert_eq!(rule.rotate(12, 1), 15);
    }

    #[test]
    fn test_periodicity_and_roundtrip() {
        let rule = TrapdoorRule::default();
        for state in 0u16..16 {
            for steps in -5..=5 {
                assert_eq!(rule.rotate(state, steps), rule.rotate(state, steps + 4));
                assert_eq!(rule.rotate(rule.rotate(state, steps), -steps), state);
            }
            assert_eq!(rule.rotate(state, 0), state);
        }
    }

    #[test]
    fn test_extra_bits_preserved() {
        let rule = TrapdoorRule::default();
        // бит 4 (0x10) вне маски 0xF
        assert_eq!(rule.rotate(0x10, 1), 0x13);
        assert_eq!(rule.rotate(0x10, 1) & 0x10, 0x10);
    }
}
