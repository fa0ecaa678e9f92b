// ============================================
// Rotation Mapping - Семейство + правило для типа блока
// ============================================
// Tagged union вместо иерархии классов: сериализация матчится
// по вариантам исчерпывающе, тег и payload не могут разъехаться

use crate::math::AffineTransform;
use crate::rotation::rules::{DoorRule, FourRule, PillarRule, StairsRule, TrapdoorRule};

/// Закрытый список семейств; определяет, в какой документ пишется правило
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationFamily {
    Stairs,
    Pillar,
    Door,
    TrapDoor,
    FourDirection,
    /// Catch-all документ; форма правила хранится inline через "type"
    Other,
}

impl RotationFamily {
    pub const ALL: [RotationFamily; 6] = [
        RotationFamily::Stairs,
        RotationFamily::Pillar,
        RotationFamily::Door,
        RotationFamily::TrapDoor,
        RotationFamily::FourDirection,
        RotationFamily::Other,
    ];

    /// Тег для имени файла документа
    pub fn tag(&self) -> &'static str {
        match self {
            RotationFamily::Stairs => "stairs",
            RotationFamily::Pillar => "pillar",
            RotationFamily::Door => "door",
            RotationFamily::TrapDoor => "trap_door",
            RotationFamily::FourDirection => "four_direction",
            RotationFamily::Other => "other",
        }
    }
}

/// Правило вращения, полиморфное по семейству
#[derive(Debug, Clone, PartialEq)]
pub enum RotationRule {
    Stairs(StairsRule),
    Pillar(PillarRule),
    Door(DoorRule),
    TrapDoor(TrapdoorRule),
    Four(FourRule),
}

impl RotationRule {
    /// Поворот на целое число шагов по 90 градусов
    pub fn rotate(&self, state: u16, steps: i32) -> u16 {
        match self {
            RotationRule::Stairs(rule) => rule.rotate(state, steps),
            RotationRule::Pillar(rule) => rule.rotate(state, steps),
            RotationRule::Door(rule) => rule.rotate(state, steps),
            RotationRule::TrapDoor(rule) => rule.rotate(state, steps),
            RotationRule::Four(rule) => rule.rotate(state, steps),
        }
    }

    /// Применение произвольного аффинного преобразования
    pub fn transform(&self, state: u16, transform: &AffineTransform) -> u16 {
        match self {
            RotationRule::Stairs(rule) => rule.transform(state, transform),
            RotationRule::Pillar(rule) => rule.transform(state, transform),
            RotationRule::Door(rule) => rule.transform(state, transform),
            RotationRule::TrapDoor(rule) => rule.transform(state, transform),
            RotationRule::Four(rule) => rule.transform(state, transform),
        }
    }
}

/// Пара (семейство, правило) для одного типа блока
#[derive(Debug, Clone, PartialEq)]
pub struct RotationMapping {
    family: RotationFamily,
    rule: RotationRule,
}

impl RotationMapping {
    pub fn stairs(rule: StairsRule) -> Self {
        Self {
            family: RotationFamily::Stairs,
            rule: RotationRule::Stairs(rule),
        }
    }

    pub fn pillar(rule: PillarRule) -> Self {
        Self {
            family: RotationFamily::Pillar,
            rule: RotationRule::Pillar(rule),
        }
    }

    pub fn door() -> Self {
        Self {
            family: RotationFamily::Door,
            rule: RotationRule::Door(DoorRule::new()),
        }
    }

    pub fn trap_door(rule: TrapdoorRule) -> Self {
        Self {
            family: RotationFamily::TrapDoor,
            rule: RotationRule::TrapDoor(rule),
        }
    }

    pub fn four(rule: FourRule) -> Self {
        Self {
            family: RotationFamily::FourDirection,
            rule: RotationRule::Four(rule),
        }
    }

    /// Запись в catch-all документ; форма правила любая, кроме Door
    /// (дверь не имеет inline-дискриминатора в формате)
    pub fn other(rule: RotationRule) -> Self {
        Self {
            family: RotationFamily::Other,
            rule,
        }
    }

    /// Сборка при декодировании документа: семейство задаёт файл,
    /// форма правила - содержимое записи
    pub(crate) fn from_parts(family: RotationFamily, rule: RotationRule) -> Self {
        Self { family, rule }
    }

    pub fn family(&self) -> RotationFamily {
        self.family
    }

    pub fn rule(&self) -> &RotationRule {
        &self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_keep_tag_in_sync() {
        assert_eq!(
            RotationMapping::stairs(StairsRule::default()).family(),
            RotationFamily::Stairs
        );
        assert_eq!(RotationMapping::door().family(), RotationFamily::Door);
        assert_eq!(
            RotationMapping::other(RotationRule::Four(FourRule::default())).family(),
            RotationFamily::Other
        );
    }

    #[test]
    fn test_dispatch_matches_inner_rule() {
        let mapping = RotationMapping::trap_door(TrapdoorRule::default());
        assert_eq!(mapping.rule().rotate(0, 1), 3);

        let mapping = RotationMapping::stairs(StairsRule::default());
        assert_eq!(mapping.rule().rotate(3, 1), 0);
    }

    #[test]
    fn test_family_tags() {
        let tags: Vec<&str> = RotationFamily::ALL.iter().map(|f| f.tag()).collect();
        assert_eq!(
            tags,
            ["stairs", "pillar", "door", "trap_door", "four_direction", "other"]
        );
    }
}
