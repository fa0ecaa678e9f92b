// ============================================
// Affine Transform - Линейная часть + перенос
// ============================================
// Движку нужна только вращательная компонента вокруг вертикали,
// но transform умеет и отражения (scale с отрицательным фактором)

use ultraviolet::{Mat3, Vec3};

/// Аффинное преобразование пространства: p' = linear * p + translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    linear: Mat3,
    translation: Vec3,
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            linear: Mat3::identity(),
            translation: Vec3::zero(),
        }
    }

    /// Поворот вокруг оси Y (правосторонний, угол в градусах)
    pub fn rotation_y(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self {
            linear: Mat3::new(
                Vec3::new(c, 0.0, -s),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(s, 0.0, c),
            ),
            translation: Vec3::zero(),
        }
    }

    /// Масштабирование по осям; отрицательный фактор = отражение
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            linear: Mat3::new(
                Vec3::new(x, 0.0, 0.0),
                Vec3::new(0.0, y, 0.0),
                Vec3::new(0.0, 0.0, z),
            ),
            translation: Vec3::zero(),
        }
    }

    pub fn translation(offset: Vec3) -> Self {
        Self {
            linear: Mat3::identity(),
            translation: offset,
        }
    }

    /// Композиция: результат применяет `other`, затем `self`
    pub fn combine(&self, other: &AffineTransform) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.linear * other.translation + self.translation,
        }
    }

    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.linear * point + self.translation
    }

    /// Угол поворота вокруг Y в градусах (обратная операция к rotation_y).
    /// Для чистого rotation_y(d) возвращает d с точностью до float-ошибок.
    pub fn y_rotation_degrees(&self) -> f32 {
        self.linear.cols[2].x.atan2(self.linear.cols[0].x).to_degrees()
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
