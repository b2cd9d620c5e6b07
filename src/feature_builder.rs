//! Conversion between point sources and the point visual feature.
//!
//! Every operation writes into a caller-supplied [`FeaturePoint`] and
//! either fully succeeds or returns an error; after a failure the output
//! state is unspecified and must not be used.

use crate::camera_model::generic::CameraModel;
use crate::error::FeatureError;
use crate::feature::FeaturePoint;
use crate::image_point::ImagePoint;
use crate::point::Point3d;
use crate::tracker::Tracker;

/// Depth magnitude below which the interaction matrix degenerates.
const MIN_DEPTH: f64 = 1e-6;

/// Builds a feature from a tracker centroid and the camera intrinsics.
///
/// Only (x, y) are written. The depth Z cannot be recovered from a pixel
/// observation and must be set by the caller, typically from a pose
/// estimate:
///
/// ```
/// use visual_servo_features::{feature_builder, FeaturePoint, ImagePoint, Pinhole, Tracker};
///
/// struct Dot(ImagePoint);
/// impl Tracker for Dot {
///     fn cog(&self) -> ImagePoint {
///         self.0
///     }
/// }
///
/// let cam = Pinhole::new(600.0, 600.0, 320.0, 240.0);
/// let dot = Dot(ImagePoint::new(100.0, 200.0));
/// let mut s = FeaturePoint::new();
/// feature_builder::from_tracker(&mut s, &cam, &dot).unwrap();
/// s.set_z(1.0); // depth comes from elsewhere
/// ```
pub fn from_tracker<M: CameraModel, T: Tracker>(
    s: &mut FeaturePoint,
    cam: &M,
    tracker: &T,
) -> Result<(), FeatureError> {
    from_image_point(s, cam, &tracker.cog())
}

/// Builds a feature from a pixel location and the camera intrinsics.
///
/// Same contract as [`from_tracker`], taking the pixel location directly.
/// Z is left untouched.
pub fn from_image_point<M: CameraModel>(
    s: &mut FeaturePoint,
    cam: &M,
    ip: &ImagePoint,
) -> Result<(), FeatureError> {
    let (x, y) = cam.pixel_to_meter(ip).map_err(|e| {
        log::error!("pixel to meter inversion failed at ({}, {}): {}", ip.i, ip.j, e);
        e
    })?;
    s.set_x(x);
    s.set_y(y);
    Ok(())
}

/// Builds a fully specified feature from a 3D point.
///
/// (x, y) are copied from the point's normalized-plane projection and Z is
/// recovered from the homogeneous camera-frame coordinates as cP[2]/cP[3].
/// The point must be in front of the camera and off the camera plane.
pub fn from_point(s: &mut FeaturePoint, point: &Point3d) -> Result<(), FeatureError> {
    s.set_x(point.p[0]);
    s.set_y(point.p[1]);

    let z = point.c_p[2] / point.c_p[3];
    s.set_z(z);

    if z < 0.0 {
        log::error!("point is behind the camera, Z = {}", z);
        return Err(FeatureError::BehindCamera { z });
    }
    if z.abs() < MIN_DEPTH {
        log::error!("point Z coordinate is null, Z = {}", z);
        return Err(FeatureError::DegenerateDepth { z });
    }
    Ok(())
}

/// Builds a feature from a 3D point, injecting calibration noise.
///
/// The point's normalized coordinates are projected to pixels with
/// `good_cam` and inverted back with `wrong_cam`; the mismatch between the
/// two models lands in (x, y) exactly as a mis-estimated calibration would
/// on a real camera. Z is taken verbatim from the point and is not
/// validated, since it never passes through the noisy projection.
pub fn from_point_with_camera_noise<M: CameraModel>(
    s: &mut FeaturePoint,
    good_cam: &M,
    wrong_cam: &M,
    point: &Point3d,
) -> Result<(), FeatureError> {
    let x = point.p[0];
    let y = point.p[1];

    s.set_z(point.c_p[2] / point.c_p[3]);

    let pixel = good_cam.meter_to_pixel(x, y);
    let (x, y) = wrong_cam.pixel_to_meter(&pixel).map_err(|e| {
        log::error!("noisy pixel to meter inversion failed at ({}, {}): {}", pixel.i, pixel.j, e);
        e
    })?;

    s.set_x(x);
    s.set_y(y);
    Ok(())
}
