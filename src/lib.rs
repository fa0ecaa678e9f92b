// ============================================
// metarot - Rotation Engine для блок-метадаты
// ============================================
// Пересчёт orientation-бит в метадате блока при повороте/отражении.
// Data-Driven Architecture: правила вращения загружаются из JSON

pub mod math;
pub mod blocks;
pub mod rotation;

// Реэкспорт основных типов
pub use math::AffineTransform;
pub use rotation::{BlockTransformHook, RotationMapping, RotationMappings};
