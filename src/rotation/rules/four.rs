// ============================================
// Four-Direction Rule - Одна таблица из четырёх кодов
// ============================================
// Калитки, кнопки и прочие блоки с четырьмя направлениями.
// Единственное семейство с полноценной геометрией transform:
// направление прогоняется через матрицу, что корректно
// обрабатывает отражения, а не только повороты

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::math::AffineTransform;

use super::directions;

/// Таблица калиток по умолчанию
pub const DEFAULT_GATE_METAS: [u16; 4] = [0, 1, 2, 3];

/// Правило вращения четырёхнаправленных блоков
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourRule {
    /// Коды в порядке север/восток/юг/запад; могут нести запечённые флаги
    metas: [u16; 4],
}

impl FourRule {
    pub fn new(metas: [u16; 4]) -> Self {
        Self { metas }
    }

    pub fn metas(&self) -> &[u16; 4] {
        &self.metas
    }

    /// Объединение бит всех четырёх кодов
    pub fn mask(&self) -> u16 {
        self.metas.iter().fold(0, |acc, &v| acc | v)
    }

    fn find(&self, state: u16) -> Option<usize> {
        // сравнение по полному коду, согласовано с transform
        self.metas.iter().position(|&v| v == state)
    }

    pub fn rotate(&self, state: u16, steps: i32) -> u16 {
        let Some(idx) = self.find(state) else {
            return state;
        };
        let s = steps.rem_euclid(4) as usize;
        self.metas[(idx + s) % 4]
    }

    pub fn transform(&self, state: u16, transform: &AffineTransform) -> u16 {
        let Some(idx) = self.find(state) else {
            return state;
        };
        let dirs = directions();
        // перенос сокращается вычитанием образа начала координат
        let out = (transform.apply(dirs[idx]) - transform.apply(Vec3::zero())).normalized();
        let mut best = -2.0f32;
        let mut best_idx = idx;
        for (i, dir) in dirs.iter().enumerate() {
            let dot = dir.dot(out);
            if dot > best {
                best = dot;
                best_idx = i;
            }
        }
        self.metas[best_idx]
    }
}

impl Default for FourRule {
    fn default() -> Self {
        Self::new(DEFAULT_GATE_METAS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::rules::steps_from_transform;

    #[test]
    fn test_rotate_cycles_table() {
        let rule = FourRule::default();
        assert_eq!(rule.rotate(0, 1), 1);
        assert_eq!(rule.rotate(3, 1), 0);
        assert_eq!(rule.rotate(0, -1), 3);
        assert_eq!(rule.rotate(9, 1), 9);
    }

    #[test]
    fn test_transform_matches_rotate_for_pure_rotations() {
        let rule = FourRule::new([4, 1, 3, 2]);
        for deg in [-270.0f32, -180.0, -90.0, 0.0, 90.0, 180.0, 270.0] {
            let t = AffineTransform::rotation_y(deg);
            let steps = steps_from_transform(&t);
            for &state in rule.metas() {
                assert_eq!(
                    rule.transform(state, &t),
                    rule.rotate(state, steps),
                    "deg={} state={}",
                    deg,
                    state
                );
            }
        }
    }

    #[test]
    fn test_reflection_swaps_east_west() {
        let rule = FourRule::default();
        let mirror_x = AffineTransform::scale(-1.0, 1.0, 1.0);
        // восток <-> запад, север/юг на месте
        assert_eq!(rule.transform(1, &mirror_x), 3);
        assert_eq!(rule.transform(3, &mirror_x), 1);
        assert_eq!(rule.transform(0, &mirror_x), 0);
        assert_eq!(rule.transform(2, &mirror_x), 2);
    }

    #[test]
    fn test_baked_flag_bits_travel_with_code() {
        // коды с запечённым битом 8
        let rule = FourRule::new([8, 9, 10, 11]);
        assert_eq!(rule.rotate(8, 2), 10);
        assert_eq!(rule.rotate(11, 1), 8);
    }

    #[test]
    fn test_mask_is_union_of_codes() {
        assert_eq!(FourRule::default().mask(), 0x3);
        assert_eq!(FourRule::new([4, 1, 3, 2]).mask(), 0x7);
        assert_eq!(FourRule::new([8, 9, 10, 11]).mask(), 0xB);
    }
}
