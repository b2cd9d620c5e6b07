use nalgebra as na;

/// A 3D point expressed in the camera frame, together with its projection
/// on the normalized image plane.
///
/// `c_p` holds homogeneous coordinates [X, Y, Z, W]; W is carried
/// explicitly and is not assumed to be 1. `p` holds the normalized-plane
/// projection [x, y], computed by an external pose/projection step and
/// assumed consistent with `c_p` by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3d {
    pub c_p: na::Vector4<f64>,
    pub p: na::Vector2<f64>,
}

impl Point3d {
    pub fn new(c_p: na::Vector4<f64>, p: na::Vector2<f64>) -> Point3d {
        Point3d { c_p, p }
    }

    /// Builds a point from euclidean camera-frame coordinates, setting
    /// W = 1 and projecting onto the normalized plane by perspective
    /// division.
    pub fn from_camera_frame(x: f64, y: f64, z: f64) -> Point3d {
        Point3d {
            c_p: na::Vector4::new(x, y, z, 1.0),
            p: na::Vector2::new(x / z, y / z),
        }
    }

    /// Depth along the optical axis, after the homogeneous divide.
    pub fn depth(&self) -> f64 {
        self.c_p[2] / self.c_p[3]
    }
}
