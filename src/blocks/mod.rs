// ============================================
// Block Index - Интерфейс внешнего реестра блоков
// ============================================
// Сам реестр живёт снаружи движка; здесь только то,
// что нужно генератору дефолтов и кэшу id -> имя

use std::collections::HashMap;

/// Namespace встроенных блоков; для них правила не генерируются
pub const VANILLA_NAMESPACE: &str = "minecraft:";

/// Структурная категория блока, определяет семейство правила по умолчанию
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockShape {
    Stairs,
    Pillar,
    Door,
    TrapDoor,
    FenceGate,
    Button,
    Other,
}

/// Описание одного типа блока во внешнем реестре
#[derive(Debug, Clone)]
pub struct BlockInfo {
    /// Runtime числовой ID
    pub id: u16,
    /// Стабильный namespaced идентификатор ("mod:block")
    pub name: String,
    pub shape: BlockShape,
}

impl BlockInfo {
    pub fn new(id: u16, name: impl Into<String>, shape: BlockShape) -> Self {
        Self {
            id,
            name: name.into(),
            shape,
        }
    }
}

/// Интерфейс внешнего реестра блоков
pub trait BlockIndex {
    /// Все известные типы блоков
    fn all_blocks(&self) -> Vec<BlockInfo>;

    /// Runtime ID -> стабильный идентификатор
    fn name_of(&self, id: u16) -> Option<String>;

    fn is_builtin(&self, name: &str) -> bool {
        name.starts_with(VANILLA_NAMESPACE)
    }
}

/// Простая in-memory реализация (тесты, standalone инструменты)
#[derive(Debug, Default)]
pub struct MemoryBlockIndex {
    blocks: Vec<BlockInfo>,
    by_id: HashMap<u16, usize>,
}

impl MemoryBlockIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, info: BlockInfo) {
        self.by_id.insert(info.id, self.blocks.len());
        self.blocks.push(info);
    }

    pub fn count(&self) -> usize {
        self.blocks.len()
    }
}

impl BlockIndex for MemoryBlockIndex {
    fn all_blocks(&self) -> Vec<BlockInfo> {
        self.blocks.clone()
    }

    fn name_of(&self, id: u16) -> Option<String> {
        self.by_id
            .get(&id)
            .map(|&idx| self.blocks[idx].name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_index_lookup() {
        let mut index = MemoryBlockIndex::new();
        index.register(BlockInfo::new(210, "mod:copper_stairs", BlockShape::Stairs));
        index.register(BlockInfo::new(211, "minecraft:stone", BlockShape::Other));

        assert_eq!(index.name_of(210).as_deref(), Some("mod:copper_stairs"));
        assert_eq!(index.name_of(999), None);
        assert!(index.is_builtin("minecraft:stone"));
        assert!(!index.is_builtin("mod:copper_stairs"));
        assert_eq!(index.count(), 2);
    }
}
