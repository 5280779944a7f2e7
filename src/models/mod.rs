//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths accurate and
//! performant.

use crate::color::{Color, HasSpace};

pub mod lab;
pub mod rgb;
pub mod xyz;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Convert a generic [`Color`] to a model. The components are reused as
    /// is; the caller must make sure the color is in the model's space.
    fn to_model(color: &Color) -> Self;
}

macro_rules! impl_model {
    ($model:ty) => {
        impl Model for $model {
            fn to_color(&self) -> Color {
                Color {
                    components: self.to_components(),
                    space: <$model as HasSpace>::SPACE,
                }
            }

            fn to_model(color: &Color) -> Self {
                Self::from(color.components)
            }
        }
    };
}

impl_model!(rgb::Srgb);
impl_model!(xyz::Xyz);
impl_model!(lab::Lab);
impl_model!(lab::Lch);
