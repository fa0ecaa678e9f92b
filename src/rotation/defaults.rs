// ============================================
// Default-Rule Generator - Канонические правила без конфига
// ============================================
// Один проход по внешнему реестру блоков; встроенный namespace
// пропускается (для него есть отдельный нативный путь)

use std::collections::HashMap;

use crate::blocks::{BlockIndex, BlockShape};
use crate::rotation::mapping::{RotationMapping, RotationRule};
use crate::rotation::rules::{FourRule, PillarRule, StairsRule, TrapdoorRule};

/// Кнопки стартуют с кода "север" (4), а не с нуля как калитки
pub const DEFAULT_BUTTON_METAS: [u16; 4] = [4, 1, 3, 2];

pub fn default_stairs() -> StairsRule {
    StairsRule::default()
}

pub fn default_pillar() -> PillarRule {
    PillarRule::default()
}

pub fn default_trapdoor() -> TrapdoorRule {
    TrapdoorRule::default()
}

pub fn default_four(button: bool) -> FourRule {
    if button {
        FourRule::new(DEFAULT_BUTTON_METAS)
    } else {
        FourRule::default()
    }
}

/// Синтезировать маппинги для всех блоков реестра с известной категорией
pub fn generate_defaults(index: &dyn BlockIndex) -> HashMap<String, RotationMapping> {
    let mut mappings = HashMap::new();
    for info in index.all_blocks() {
        if index.is_builtin(&info.name) {
            continue;
        }
        let mapping = match info.shape {
            BlockShape::Stairs => RotationMapping::stairs(default_stairs()),
            BlockShape::Pillar => RotationMapping::pillar(default_pillar()),
            BlockShape::Door => RotationMapping::door(),
            BlockShape::TrapDoor => RotationMapping::trap_door(default_trapdoor()),
            BlockShape::FenceGate => RotationMapping::four(default_four(false)),
            // кнопки уходят в catch-all документ
            BlockShape::Button => {
                RotationMapping::other(RotationRule::Four(default_four(true)))
            }
            BlockShape::Other => continue,
        };
        mappings.insert(info.name, mapping);
    }
    mappings
}
