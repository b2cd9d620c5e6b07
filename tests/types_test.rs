use nalgebra as na;
use visual_servo_features::{FeaturePoint, ImagePoint, Point3d};

#[test]
fn test_image_point_conventions() {
    let ip = ImagePoint::new(240.0, 320.0);
    assert_eq!(ip.u(), 320.0);
    assert_eq!(ip.v(), 240.0);
    assert_eq!(ImagePoint::from_uv(320.0, 240.0), ip);
}

#[test]
fn test_point_from_camera_frame_projects() {
    let p = Point3d::from_camera_frame(0.2, -0.4, 2.0);
    assert_eq!(p.c_p, na::Vector4::new(0.2, -0.4, 2.0, 1.0));
    assert!((p.p[0] - 0.1).abs() < 1e-12);
    assert!((p.p[1] + 0.2).abs() < 1e-12);
    assert_eq!(p.depth(), 2.0);
}

#[test]
fn test_point_depth_divides_by_w() {
    let p = Point3d::new(na::Vector4::new(0.0, 0.0, 3.0, 1.5), na::Vector2::zeros());
    assert_eq!(p.depth(), 2.0);
}

#[test]
fn test_feature_point_accessors() {
    let mut s = FeaturePoint::new();
    assert_eq!((s.x(), s.y(), s.z()), (0.0, 0.0, 0.0));
    s.set_x(0.1);
    s.set_y(-0.2);
    s.set_z(1.5);
    assert_eq!((s.x(), s.y(), s.z()), (0.1, -0.2, 1.5));
}
