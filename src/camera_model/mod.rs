pub mod generic;
pub mod io;
pub mod pinhole;

pub use generic::CameraModel;
pub use io::*;
pub use pinhole::Pinhole;
