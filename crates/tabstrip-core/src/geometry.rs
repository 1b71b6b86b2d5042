use std::ops::Mul;

use crate::math::Vec2;

/// Tolerance used when snapping sizes up to whole pixels.
const SNAP_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl Rect<f32> {
    pub const ZERO: Self = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl Size<f32> {
    pub const ZERO: Self = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Replace non-finite or negative components with zero.
    pub fn sanitized(self) -> Self {
        Size {
            width: sanitize_extent(self.width),
            height: sanitize_extent(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

/// Padding around a region, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const ZERO: Self = Insets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Insets {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn sanitized(self) -> Self {
        Insets {
            top: sanitize_extent(self.top),
            right: sanitize_extent(self.right),
            bottom: sanitize_extent(self.bottom),
            left: sanitize_extent(self.left),
        }
    }
}

/// Clamp `pref` into `[min, max]`.
///
/// When `min > max`, `min` wins: the result is never smaller than `min`.
pub fn bounded_size(min: f32, pref: f32, max: f32) -> f32 {
    let actual_max = if min > max { min } else { max };
    let with_min = if pref < min { min } else { pref };
    if with_min > actual_max { actual_max } else { with_min }
}

/// Map NaN, infinities and negative values to zero.
pub fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Like [`sanitize_extent`] but keeps `+inf`/`f32::MAX` as "unbounded".
pub fn sanitize_max(value: f32) -> f32 {
    if value.is_nan() {
        f32::MAX
    } else if value == f32::INFINITY {
        f32::MAX
    } else if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Map NaN and infinities to zero, keeping the sign of finite values.
pub fn sanitize_coord(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// Snap a size or distance up to the next whole pixel.
///
/// Values within a small tolerance of a whole pixel snap to it, so sums of
/// fractional widths do not gain a pixel from float noise.
pub fn snap_size(value: f32) -> f32 {
    if !value.is_finite() {
        return sanitize_coord(value);
    }
    (value - SNAP_EPSILON).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_size_clamps_into_range() {
        assert_eq!(bounded_size(10.0, 5.0, 20.0), 10.0);
        assert_eq!(bounded_size(10.0, 15.0, 20.0), 15.0);
        assert_eq!(bounded_size(10.0, 25.0, 20.0), 20.0);
    }

    #[test]
    fn bounded_size_min_wins_over_max() {
        assert_eq!(bounded_size(30.0, 5.0, 20.0), 30.0);
        assert_eq!(bounded_size(30.0, 50.0, 20.0), 30.0);
    }

    #[test]
    fn sanitize_rejects_garbage() {
        assert_eq!(sanitize_extent(f32::NAN), 0.0);
        assert_eq!(sanitize_extent(-4.0), 0.0);
        assert_eq!(sanitize_extent(f32::INFINITY), 0.0);
        assert_eq!(sanitize_extent(12.5), 12.5);
        assert_eq!(sanitize_max(f32::INFINITY), f32::MAX);
        assert_eq!(sanitize_max(f32::NAN), f32::MAX);
        assert_eq!(sanitize_coord(-3.0), -3.0);
        assert_eq!(sanitize_coord(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn snap_size_rounds_up_but_tolerates_noise() {
        assert_eq!(snap_size(100.0), 100.0);
        assert_eq!(snap_size(100.2), 101.0);
        assert_eq!(snap_size(100.0004), 100.0);
        assert_eq!(snap_size(-0.5), 0.0);
        assert_eq!(snap_size(-10.0), -10.0);
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(10.0, 0.0, 50.0, 20.0);
        assert!(rect.contains(Vec2::new(10.0, 0.0)));
        assert!(rect.contains(Vec2::new(60.0, 20.0)));
        assert!(!rect.contains(Vec2::new(61.0, 5.0)));
    }
}
