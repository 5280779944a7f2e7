//! Models for the rectangular and cylindrical polar forms of CIE-Lab.

use crate::{
    color::{Component, Components, HasSpace, Space},
    models::xyz::{Xyz, D65_WHITE_POINT},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

tinct_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl HasSpace for Lab {
    const SPACE: Space = Space::Lab;
}

tinct_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// cylindrical polar form.
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, an angle in degrees in (-180, 180].
        pub hue: Component,
    }
}

impl HasSpace for Lch {
    const SPACE: Space = Space::Lch;
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. The hue angle lands in (-180, 180]; an achromatic color (a and
    /// b both zero) has a hue of 0 by convention.
    pub fn to_polar(&self) -> Lch {
        let chroma = self.a.hypot(self.b);
        let hue = if self.a == 0.0 && self.b == 0.0 {
            0.0
        } else {
            // atan2 lands on -180 for a negative zero b with a < 0; the
            // hue range is (-180, 180], so that angle belongs on the
            // positive edge.
            let degrees = self.b.atan2(self.a).to_degrees();
            if degrees == -180.0 {
                180.0
            } else {
                degrees
            }
        };

        Lch::new(self.lightness, chroma, hue)
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * D65_WHITE_POINT.0,
            y * D65_WHITE_POINT.1,
            z * D65_WHITE_POINT.2,
        )
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let scaled = Components(
            value.x / D65_WHITE_POINT.0,
            value.y / D65_WHITE_POINT.1,
            value.z / D65_WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = scaled.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

impl Xyz {
    /// Convert a color specified in CIE-XYZ to the CIE-Lab color space.
    pub fn to_lab(&self) -> Lab {
        Lab::from(*self)
    }
}
