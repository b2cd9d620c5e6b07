use nalgebra as na;
use serde::{Deserialize, Serialize};

use super::generic::CameraModel;
use crate::error::CameraModelError;
use crate::image_point::ImagePoint;

const SINGULAR_FOCAL: f64 = 1e-12;

/// Pinhole model with paired radial distortion coefficients.
///
/// `kud` distorts on projection (undistorted to distorted), `kdu` corrects
/// on inversion (distorted to undistorted). The two are independent first
/// order coefficients, so the pixel/meter round trip is exact only when
/// both are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pinhole {
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
    pub kud: f64,
    pub kdu: f64,
}

impl Pinhole {
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Pinhole {
        Pinhole {
            fx,
            fy,
            cx,
            cy,
            kud: 0.0,
            kdu: 0.0,
        }
    }

    pub fn with_distortion(fx: f64, fy: f64, cx: f64, cy: f64, kud: f64, kdu: f64) -> Pinhole {
        Pinhole {
            fx,
            fy,
            cx,
            cy,
            kud,
            kdu,
        }
    }
}

impl CameraModel for Pinhole {
    fn params(&self) -> na::DVector<f64> {
        na::dvector![self.fx, self.fy, self.cx, self.cy, self.kud, self.kdu]
    }

    fn meter_to_pixel(&self, x: f64, y: f64) -> ImagePoint {
        let r2 = x * x + y * y;
        let d = 1.0 + self.kud * r2;
        let u = self.cx + self.fx * x * d;
        let v = self.cy + self.fy * y * d;
        ImagePoint::from_uv(u, v)
    }

    fn pixel_to_meter(&self, ip: &ImagePoint) -> Result<(f64, f64), CameraModelError> {
        if self.fx.abs() < SINGULAR_FOCAL || self.fy.abs() < SINGULAR_FOCAL {
            return Err(CameraModelError::SingularIntrinsics {
                fx: self.fx,
                fy: self.fy,
            });
        }
        let xd = (ip.u() - self.cx) / self.fx;
        let yd = (ip.v() - self.cy) / self.fy;
        let r2 = xd * xd + yd * yd;
        let d = 1.0 + self.kdu * r2;
        Ok((xd * d, yd * d))
    }
}
