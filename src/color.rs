//! A [`Color`] represents a color sample in any of the supported color
//! spaces.

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color spaces and forms supported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// The gamma encoded sRGB color space, components in [0, 1].
    Srgb = 0,
    /// The CIE-XYZ color space with a D65 white point, Y normalized to 100.
    Xyz = 1,
    /// The CIE-Lab color space under D65.
    Lab = 2,
    /// The cylindrical polar form of CIE-Lab.
    Lch = 3,
}

/// Implemented by color models that belong to a fixed color space.
pub trait HasSpace {
    /// The color space the model belongs to.
    const SPACE: Space;
}

/// Struct that can hold a color of any color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`] with the given components interpreted in the
    /// given color space.
    pub fn new(space: Space, c0: Component, c1: Component, c2: Component) -> Self {
        Self {
            components: Components(c0, c1, c2),
            space,
        }
    }
}
