//! Linear interpolation between two colors in a chosen color space.

use num_traits::Float;

use crate::color::{Color, Component, Space};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

impl Color {
    /// Linearly interpolate from this color to another in the color space
    /// specified using `t` as the progress between them.
    pub fn interpolate(&self, other: &Self, t: Component, space: Space) -> Color {
        let left = self.to_space(space);
        let right = other.to_space(space);

        Color::new(
            space,
            lerp(left.components.0, right.components.0, t),
            lerp(left.components.1, right.components.1, t),
            lerp(left.components.2, right.components.2, t),
        )
    }
}
