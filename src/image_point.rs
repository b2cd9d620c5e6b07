/// A pixel location in an image, stored as (i, j) = (row, column).
///
/// The (u, v) accessors give the same location in the (column, row)
/// convention used by camera intrinsics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImagePoint {
    pub i: f64,
    pub j: f64,
}

impl ImagePoint {
    pub fn new(i: f64, j: f64) -> ImagePoint {
        ImagePoint { i, j }
    }

    /// Builds a point from (u, v) = (column, row) coordinates.
    pub fn from_uv(u: f64, v: f64) -> ImagePoint {
        ImagePoint { i: v, j: u }
    }

    pub fn u(&self) -> f64 {
        self.j
    }

    pub fn v(&self) -> f64 {
        self.i
    }
}
