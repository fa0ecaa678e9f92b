// ============================================
// BitMask Algebra - Разделение orientation/extra бит
// ============================================
// Маска выделяет биты ориентации; остальные биты (open/power флаги)
// переносятся через вращение без изменений

/// Биты ориентации внутри метадаты
#[inline]
pub fn extract_orientation(state: u16, mask: u16) -> u16 {
    state & mask
}

/// Биты вне маски (флаги, не зависящие от ориентации)
#[inline]
pub fn extract_extra(state: u16, mask: u16) -> u16 {
    state & !mask
}

/// Обратная операция: для любых state/mask
/// recombine(extract_orientation(s, m), extract_extra(s, m)) == s
#[inline]
pub fn recombine(orientation: u16, extra: u16) -> u16 {
    orientation | extra
}
