pub mod camera_model;
pub mod error;
pub mod feature;
pub mod feature_builder;
pub mod image_point;
pub mod point;
pub mod tracker;

pub use camera_model::generic::CameraModel;
pub use camera_model::Pinhole;
pub use error::{CameraModelError, FeatureError};
pub use feature::FeaturePoint;
pub use image_point::ImagePoint;
pub use point::Point3d;
pub use tracker::Tracker;
