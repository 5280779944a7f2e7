//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components, HasSpace, Space};

/// The D65 standard illuminant, with Y normalized to 100.
///
/// This is the only reference white the engine supports; both the Lab
/// conversions and the sRGB matrices assume it.
pub const D65_WHITE_POINT: Components = Components(95.0489, 100.0, 108.8840);

tinct_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white point
    /// reference.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::Xyz;
}
