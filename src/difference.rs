//! The CIEDE2000 color difference formula.
//!
//! Follows the implementation notes of Sharma, Wu and Dalal (2005); the
//! numbered comments refer to the equations in that paper. The parametric
//! weights kL, kC and kH are fixed at 1.

use crate::{
    color::{Color, Component, Space},
    math::normalize_hue,
    models::{lab::Lab, Model},
};

const POW7_25: Component = 25.0 * 25.0 * 25.0 * 25.0 * 25.0 * 25.0 * 25.0;

/// Hue angle of the adjusted a', b' pair, in degrees in [0, 360). Zero for
/// an achromatic pair.
fn hue_angle(a: Component, b: Component) -> Component {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    normalize_hue(b.atan2(a).to_degrees())
}

/// Calculate the perceptual distance between two CIE-Lab colors according
/// to CIEDE2000. The result is symmetric in its arguments and zero for
/// identical colors.
pub fn ciede2000(reference: &Lab, sample: &Lab) -> Component {
    let (l1, a1, b1) = (reference.lightness, reference.a, reference.b);
    let (l2, a2, b2) = (sample.lightness, sample.a, sample.b);

    // (2)
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    // (3) (additionally: to the power of 7)
    let c_avg7 = ((c1 + c2) / 2.0).powi(7);

    // (4)
    let g = 0.5 * (1.0 - (c_avg7 / (c_avg7 + POW7_25)).sqrt());

    // (5)
    let a1 = (1.0 + g) * a1;
    let a2 = (1.0 + g) * a2;

    // (6)
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    // (7)
    let h1 = hue_angle(a1, b1);
    let h2 = hue_angle(a2, b2);

    // (8)
    let dl = l2 - l1;

    // (9)
    let dc = c2 - c1;

    // (10)
    let dh = if c1 * c2 == 0.0 {
        0.0
    } else if (h2 - h1).abs() <= 180.0 {
        h2 - h1
    } else if h2 - h1 > 180.0 {
        h2 - h1 - 360.0
    } else {
        h2 - h1 + 360.0
    };

    // (11)
    let dh_term = 2.0 * (c1 * c2).sqrt() * (dh / 2.0).to_radians().sin();

    // (12)
    let l_avg = (l1 + l2) / 2.0;

    // (13) (additionally: to the power of 7)
    let c_avg = (c1 + c2) / 2.0;
    let c_avg7 = c_avg.powi(7);

    // (14)
    let h_avg = if c1 * c2 == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    // (15)
    let t = 1.0 - 0.17 * (h_avg - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_avg).to_radians().cos()
        + 0.32 * (3.0 * h_avg + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_avg - 63.0).to_radians().cos();

    // (16)
    let dtheta = 30.0 * (-((h_avg - 275.0) / 25.0) * ((h_avg - 275.0) / 25.0)).exp();

    // (17)
    let rc = 2.0 * (c_avg7 / (c_avg7 + POW7_25)).sqrt();

    // (18)
    let sl = 1.0 + 0.015 * (l_avg - 50.0) * (l_avg - 50.0)
        / (20.0 + (l_avg - 50.0) * (l_avg - 50.0)).sqrt();

    // (19)
    let sc = 1.0 + 0.045 * c_avg;

    // (20)
    let sh = 1.0 + 0.015 * c_avg * t;

    // (21)
    let rt = -(2.0 * dtheta).to_radians().sin() * rc;

    // (22)
    ((dl / sl) * (dl / sl)
        + (dc / sc) * (dc / sc)
        + (dh_term / sh) * (dh_term / sh)
        + rt * (dc / sc) * (dh_term / sh))
        .sqrt()
}

impl Color {
    /// Calculate the CIEDE2000 distance to another color. Both colors are
    /// converted to CIE-Lab first.
    pub fn difference(&self, other: &Self) -> Component {
        let reference = Lab::to_model(&self.to_space(Space::Lab));
        let sample = Lab::to_model(&other.to_space(Space::Lab));
        ciede2000(&reference, &sample)
    }
}
