use crate::image_point::ImagePoint;

/// Contract exposed by pixel trackers (dot trackers, blob trackers, ...).
///
/// The feature builder only needs the current centroid of the tracked
/// pattern; how the tracker finds it is its own business.
pub trait Tracker {
    /// Current center of gravity of the tracked pattern, in pixels.
    fn cog(&self) -> ImagePoint;
}
