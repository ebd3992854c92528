//! Type aliases and numeric conversion traits.

use image::{ImageBuffer, Pixel};

/// An `ImageBuffer` containing pixels of type `P` with storage `Vec<P::Subpixel>`.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// A type to which we can clamp a value of type `T`.
///
/// Out-of-range values saturate to the bounds of `Self`. Float inputs are
/// truncated toward zero, NaN maps to zero.
pub trait Clamp<T> {
    /// Clamp `x` to a valid value for this type.
    fn clamp(x: T) -> Self;
}

/// Creates an implementation of `Clamp<$from>` for type `$to`.
macro_rules! implement_clamp {
    ($from:ty, $to:ty) => {
        impl Clamp<$from> for $to {
            fn clamp(x: $from) -> $to {
                if x < <$to>::MIN as $from {
                    <$to>::MIN
                } else if x > <$to>::MAX as $from {
                    <$to>::MAX
                } else {
                    x as $to
                }
            }
        }
    };
}

implement_clamp!(f32, u8);
implement_clamp!(i32, i16);
