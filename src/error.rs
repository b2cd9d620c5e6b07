/// Errors raised by camera model conversions.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CameraModelError {
    /// Pixel to meter inversion is not computable with these intrinsics.
    #[error("singular intrinsics (fx = {fx}, fy = {fy})")]
    SingularIntrinsics { fx: f64, fy: f64 },
}

/// Errors raised while building a point visual feature.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// The camera model could not invert the pixel location.
    #[error("camera model inversion failed")]
    CameraModelInversion(#[from] CameraModelError),

    /// The 3D point lies behind the camera.
    #[error("point is behind the camera (Z = {z})")]
    BehindCamera { z: f64 },

    /// The 3D point depth is too close to zero to be usable downstream.
    #[error("point Z coordinate is null (Z = {z})")]
    DegenerateDepth { z: f64 },
}
