use nalgebra as na;

use crate::error::CameraModelError;
use crate::image_point::ImagePoint;

/// Conversions between pixel space and the normalized image plane.
pub trait CameraModel {
    fn params(&self) -> na::DVector<f64>;

    /// Projects normalized-plane coordinates (x, y) to a pixel location.
    ///
    /// Total for finite input; distortion is applied on the way.
    fn meter_to_pixel(&self, x: f64, y: f64) -> ImagePoint;

    /// Inverts a pixel location to normalized-plane coordinates (x, y),
    /// correcting for distortion.
    ///
    /// Fails when the intrinsics do not admit an inverse.
    fn pixel_to_meter(&self, ip: &ImagePoint) -> Result<(f64, f64), CameraModelError>;
}
