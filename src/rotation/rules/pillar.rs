// ============================================
// Pillar Rule - Блоки с осью (брёвна, колонны)
// ============================================
// Группа [vertical, x, z]: вертикаль инвариантна,
// x и z меняются местами при нечётном числе шагов

use crate::math::AffineTransform;
use crate::rotation::mask::{extract_extra, extract_orientation, recombine};

use super::steps_from_transform;

/// Группа по умолчанию [y, x, z]
pub const DEFAULT_PILLAR_GROUP: [u16; 3] = [0, 4, 8];

/// Правило вращения осевых блоков
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillarRule {
    /// Группы кодов в порядке [vertical, x, z]
    groups: Vec<[u16; 3]>,
    /// Маска ориентации, вычисляется из групп
    mask: u16,
}

impl PillarRule {
    pub fn new(groups: Vec<[u16; 3]>) -> Self {
        let mask = compute_mask(&groups);
        Self { groups, mask }
    }

    /// Legacy конфигурация с одной группой
    pub fn single(y: u16, x: u16, z: u16) -> Self {
        Self::new(vec![[y, x, z]])
    }

    pub fn groups(&self) -> &[[u16; 3]] {
        &self.groups
    }

    pub fn mask(&self) -> u16 {
        self.mask
    }

    pub fn rotate(&self, state: u16, steps: i32) -> u16 {
        let s = steps.unsigned_abs() % 4;
        if s == 0 {
            return state;
        }
        let extras = extract_extra(state, self.mask);
        for g in &self.groups {
            if state == g[0] {
                // вертикаль не меняется
                return recombine(g[0], extras);
            }
            if state == g[1] {
                let out = if s % 2 == 1 { g[2] } else { g[1] };
                return recombine(extract_orientation(out, self.mask), extras);
            }
            if state == g[2] {
                let out = if s % 2 == 1 { g[1] } else { g[2] };
                return recombine(extract_orientation(out, self.mask), extras);
            }
        }
        state
    }

    pub fn transform(&self, state: u16, transform: &AffineTransform) -> u16 {
        // поворот/отражение вокруг Y затрагивает только оси x/z
        self.rotate(state, steps_from_transform(transform))
    }
}

impl Default for PillarRule {
    fn default() -> Self {
        Self::new(vec![DEFAULT_PILLAR_GROUP])
    }
}

fn compute_mask(groups: &[[u16; 3]]) -> u16 {
    groups
        .iter()
        .map(|g| g[0] | g[1] | g[2])
        .reduce(|acc, bits| acc & bits)
        .unwrap_or(0)
}
