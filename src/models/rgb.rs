//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

/// Scale between the [0, 1] tristimulus range of the sRGB matrices and the
/// Y=100 normalization used by [`Xyz`].
const XYZ_SCALE: Component = 100.0;

tinct_macros::gen_model! {
    /// A color specified in the sRGB color space, gamma encoded.
    pub struct Srgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

tinct_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding. Only an
    /// intermediate on the way to and from CIE-XYZ, never exposed.
    pub(crate) struct SrgbLinear {
        red: Component,
        green: Component,
        blue: Component,
    }
}

impl HasSpace for Srgb {
    const SPACE: Space = Space::Srgb;
}

/// Remove the sRGB companding curve from each component.
fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        if value < 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    })
}

/// Apply the sRGB companding curve to each component.
fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        if value < 0.0031308 {
            12.92 * value
        } else {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        }
    })
}

/// Clamp each component into [0, 1]. NaN is passed through untouched.
fn clip(from: &Components) -> Components {
    from.map(|value| value.clamp(0.0, 1.0))
}

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    pub(crate) fn to_linear_light(&self) -> SrgbLinear {
        to_linear_light(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        self.to_linear_light().to_xyz()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded, clamping each
    /// component to the [0, 1] range sRGB can represent.
    pub(crate) fn to_gamma_encoded(&self) -> Srgb {
        clip(&to_gamma_encoded(&self.to_components())).into()
    }

    /// Convert this model to CIE-XYZ with a D65 white point.
    pub(crate) fn to_xyz(&self) -> Xyz {
        // The standard sRGB/D65 matrix.
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        transform(&TO_XYZ, self.to_components())
            .map(|v| v * XYZ_SCALE)
            .into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        // The inverse of the sRGB/D65 matrix, carried to full precision so
        // that a round trip through both matrices is exact to the last bit.
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404548360214083,   -0.96926638987565372,  0.055643419604213658,
            -1.5371388501025751,    1.8760109288424913,  -0.20402585426769815,
            -0.49853154686848089,   0.041556082346673524, 1.0572251624579287,
        );

        transform(&FROM_XYZ, value.to_components().map(|v| v / XYZ_SCALE)).into()
    }
}

impl Xyz {
    /// Convert a color specified in CIE-XYZ to the sRGB color space. Out of
    /// gamut components saturate at the range ends; the clamp is lossy and
    /// one-directional.
    pub fn to_srgb(&self) -> Srgb {
        SrgbLinear::from(*self).to_gamma_encoded()
    }
}
