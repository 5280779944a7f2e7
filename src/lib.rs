//! tinct provides exact, invertible conversions among the sRGB, CIE-XYZ,
//! CIE-Lab and CIE-LCh color representations, the CIEDE2000 perceptual
//! color difference, and the canonical hex and CSS `rgb()` text encodings.

#![deny(missing_docs)]

mod color;
mod convert;
mod difference;
mod interpolate;
mod math;
mod text;

pub mod models;


pub use color::{Color, Component, Components, HasSpace, Space};
pub use difference::ciede2000;
pub use models::{
    lab::{Lab, Lch},
    rgb::Srgb,
    xyz::Xyz,
    Model,
};
