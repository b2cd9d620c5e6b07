/// A point visual feature: normalized-plane coordinates (x, y) and depth Z.
///
/// (x, y) are always meaningful once a build operation succeeds. Z is only
/// meaningful when the feature was built from a 3D point, or when the
/// caller set it from an external pose estimate; pixel-only build
/// operations leave it untouched. All three are needed downstream to form
/// the interaction matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeaturePoint {
    x: f64,
    y: f64,
    z: f64,
}

impl FeaturePoint {
    pub fn new() -> FeaturePoint {
        FeaturePoint::default()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Sets the depth, typically the result of an external pose estimation.
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }
}
