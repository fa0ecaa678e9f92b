// ============================================
// Transform Hook - Входная точка пайплайна трансформаций
// ============================================
// Горячий путь: массовые операции над регионом зовут transform_block
// миллионы раз, поэтому разрешение id -> правило кэшируется в реестре

use std::path::PathBuf;

use crate::blocks::BlockIndex;
use crate::math::AffineTransform;
use crate::rotation::registry::RotationMappings;

/// Хук вращения блоков с конфигурируемыми правилами
pub struct BlockTransformHook<I: BlockIndex> {
    index: I,
    working_dir: PathBuf,
    mappings: RotationMappings,
}

impl<I: BlockIndex> BlockTransformHook<I> {
    pub fn new(working_dir: impl Into<PathBuf>, index: I) -> Self {
        let working_dir = working_dir.into();
        let mappings = RotationMappings::init(&working_dir, &index);
        Self {
            index,
            working_dir,
            mappings,
        }
    }

    /// Пересчитать метадату блока под transform.
    /// Тотальная функция: нет правила - метадата возвращается как есть
    pub fn transform_block(&mut self, id: u16, state: u16, transform: &AffineTransform) -> u16 {
        match self.mappings.lookup_by_id(id, &self.index) {
            Some(mapping) => mapping.rule().transform(state, transform),
            None => state,
        }
    }

    /// Перечитать маппинги с диска (команда администратора).
    /// Новый экземпляр реестра стартует с пустым кэшем id
    pub fn reload(&mut self) {
        self.mappings = RotationMappings::init(&self.working_dir, &self.index);
        log::info!("Rotation mappings reloaded, {} entries", self.mappings.len());
    }

    pub fn mappings(&self) -> &RotationMappings {
        &self.mappings
    }

    pub fn mappings_mut(&mut self) -> &mut RotationMappings {
        &mut self.mappings
    }
}
