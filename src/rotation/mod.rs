// ============================================
// Rotation Engine - Правила вращения метадаты
// ============================================
// Пять семейств правил + реестр с JSON-персистентностью

mod defaults;
mod hook;
mod mapping;
mod mask;
mod registry;
pub mod rules;

pub use defaults::*;
pub use hook::*;
pub use mapping::*;
pub use mask::*;
pub use registry::*;
