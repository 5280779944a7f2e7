//! Conversions between any two supported color spaces.
//!
//! Adjacent conversions (sRGB↔XYZ, XYZ↔Lab, Lab↔LCh) live on the models
//! themselves; everything here is a pure composition of those, so the
//! numerical constants have a single source of truth.
//!
//! ```rust
//! use tinct::{Color, Space};
//! let lab = Color::new(Space::Srgb, 0.0, 0.0, 1.0).to_space(Space::Lab);
//! ```

use crate::{
    color::{Color, Space},
    models::{
        lab::{Lab, Lch},
        rgb::Srgb,
        xyz::Xyz,
        Model,
    },
};

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space.
    ///
    /// Conversions are total over finite inputs; out of gamut colors clamp
    /// on the way into sRGB and NaN propagates untouched.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return *self;
        }

        match (self.space, space) {
            (S::Srgb, S::Xyz) => Srgb::to_model(self).to_xyz().to_color(),
            (S::Srgb, S::Lab) => Srgb::to_model(self).to_lab().to_color(),
            (S::Srgb, S::Lch) => Srgb::to_model(self).to_lch().to_color(),
            (S::Xyz, S::Srgb) => Xyz::to_model(self).to_srgb().to_color(),
            (S::Xyz, S::Lab) => Xyz::to_model(self).to_lab().to_color(),
            (S::Xyz, S::Lch) => Xyz::to_model(self).to_lch().to_color(),
            (S::Lab, S::Srgb) => Lab::to_model(self).to_srgb().to_color(),
            (S::Lab, S::Xyz) => Lab::to_model(self).to_xyz().to_color(),
            (S::Lab, S::Lch) => Lab::to_model(self).to_polar().to_color(),
            (S::Lch, S::Srgb) => Lch::to_model(self).to_srgb().to_color(),
            (S::Lch, S::Xyz) => Lch::to_model(self).to_xyz().to_color(),
            (S::Lch, S::Lab) => Lch::to_model(self).to_rectangular().to_color(),
            // The remaining pairs have equal source and destination spaces.
            _ => *self,
        }
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Convert a color specified in the sRGB color space to CIE-LCh.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_polar()
    }
}

impl Xyz {
    /// Convert a color specified in CIE-XYZ to CIE-LCh.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_polar()
    }
}

impl Lab {
    /// Convert a color specified in CIE-Lab to the sRGB color space,
    /// clamping components that fall outside the sRGB gamut.
    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_srgb()
    }
}

impl Lch {
    /// Convert a color specified in CIE-LCh to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        self.to_rectangular().to_xyz()
    }

    /// Convert a color specified in CIE-LCh to the sRGB color space,
    /// clamping components that fall outside the sRGB gamut.
    pub fn to_srgb(&self) -> Srgb {
        self.to_rectangular().to_srgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(Space, Component, Component, Component, Space, Component, Component, Component)] = &[
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::Xyz, 31.867455, 23.902516, 4.163559),
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::Lab, 55.990059, 37.050256, 56.740915),
            (S::Srgb, 0.823529, 0.411765, 0.117647, S::Lch, 55.990059, 67.766163, 56.856569),
            (S::Xyz, 31.867455, 23.902516, 4.163559, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::Xyz, 31.867455, 23.902516, 4.163559, S::Xyz, 31.867455, 23.902516, 4.163559),
            (S::Xyz, 31.867455, 23.902516, 4.163559, S::Lab, 55.990059, 37.050256, 56.740915),
            (S::Xyz, 31.867455, 23.902516, 4.163559, S::Lch, 55.990059, 67.766163, 56.856569),
            (S::Lab, 55.990059, 37.050256, 56.740915, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::Lab, 55.990059, 37.050256, 56.740915, S::Xyz, 31.867455, 23.902516, 4.163559),
            (S::Lab, 55.990059, 37.050256, 56.740915, S::Lab, 55.990059, 37.050256, 56.740915),
            (S::Lab, 55.990059, 37.050256, 56.740915, S::Lch, 55.990059, 67.766163, 56.856569),
            (S::Lch, 55.990059, 67.766163, 56.856569, S::Srgb, 0.823529, 0.411765, 0.117647),
            (S::Lch, 55.990059, 67.766163, 56.856569, S::Xyz, 31.867455, 23.902516, 4.163559),
            (S::Lch, 55.990059, 67.766163, 56.856569, S::Lab, 55.990059, 37.050256, 56.740915),
            (S::Lch, 55.990059, 67.766163, 56.856569, S::Lch, 55.990059, 67.766163, 56.856569),
            (S::Srgb, 0.000000, 0.500000, 0.500000, S::Xyz, 11.515704, 16.852041, 22.891616),
            (S::Srgb, 0.000000, 0.500000, 0.500000, S::Lab, 48.073064, -28.766681, -8.452639),
            (S::Srgb, 0.000000, 0.500000, 0.500000, S::Lch, 48.073064, 29.982813, -163.625400),
            (S::Srgb, 0.392157, 0.945098, 0.007843, S::Xyz, 36.720397, 65.621025, 10.788471),
            (S::Srgb, 0.392157, 0.945098, 0.007843, S::Lab, 84.802737, -70.336356, 81.250910),
            (S::Srgb, 0.392157, 0.945098, 0.007843, S::Lch, 84.802737, 107.465871, 130.881708),
        ];

        for &(source_space, source_0, source_1, source_2, dest_space, dest_0, dest_1, dest_2) in
            TESTS
        {
            println!("{:?} -> {:?}", source_space, dest_space);
            let source = Color::new(source_space, source_0, source_1, source_2);
            let dest = source.to_space(dest_space);
            assert_component_eq!(dest.components.0, dest_0);
            assert_component_eq!(dest.components.1, dest_1);
            assert_component_eq!(dest.components.2, dest_2);
        }
    }

    #[test]
    fn full_chain_round_trip_is_stable() {
        const TOLERANCE: Component = 1.0e-6;

        for &(red, green, blue) in &[
            (0.823529, 0.411765, 0.117647),
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (0.003, 0.5, 0.997),
            (0.25, 0.75, 0.5),
        ] {
            let source = Srgb::new(red, green, blue);
            let result = source.to_xyz().to_lab().to_polar().to_srgb();
            assert!((result.red - red).abs() <= TOLERANCE);
            assert!((result.green - green).abs() <= TOLERANCE);
            assert!((result.blue - blue).abs() <= TOLERANCE);
        }
    }

    #[test]
    fn gamut_clamp_saturates_extreme_lab_values() {
        // Pure white and pure black map exactly onto the sRGB gamut corners.
        let white = Color::new(Space::Lab, 100.0, 0.0, 0.0).to_space(Space::Srgb);
        assert_component_eq!(white.components.0, 1.0);
        assert_component_eq!(white.components.1, 1.0);
        assert_component_eq!(white.components.2, 1.0);

        let black = Color::new(Space::Lab, 0.0, 0.0, 0.0).to_space(Space::Srgb);
        assert_eq!(black.components.0, 0.0);
        assert_eq!(black.components.1, 0.0);
        assert_eq!(black.components.2, 0.0);

        // A chroma no monitor can show saturates instead of wrapping.
        let vivid = Lch::new(50.0, 120.0, 40.0).to_srgb();
        assert_eq!(vivid.red, 1.0);
        assert_eq!(vivid.blue, 0.0);
    }

    #[test]
    fn conversion_to_the_same_space_is_identity() {
        let color = Color::new(Space::Lch, 50.0, 30.0, -120.0);
        assert_eq!(color.to_space(Space::Lch), color);
    }

    #[test]
    fn nan_propagates_through_conversions() {
        let color = Color::new(Space::Lab, Component::NAN, 10.0, 10.0);
        let srgb = color.to_space(Space::Srgb);
        assert!(srgb.components.0.is_nan());
    }
}
