// ============================================
// Math - Аффинные преобразования
// ============================================

mod transform;

pub use transform::*;
