/// Vector math re-exported from [`glam`].
///
/// Pointer positions and header-area coordinates use [`Vec2`]. Only the
/// 2D types are needed by the header engine.
///
/// # Examples
///
/// ```
/// use tabstrip_core::math::Vec2;
///
/// let pointer = Vec2::new(120.0, 14.0);
/// let moved = pointer + Vec2::new(-20.0, 0.0);
/// assert_eq!(moved.x, 100.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::{Vec2, vec2};
}

pub use fast::*;
