use glam::{Mat4, Vec3};

pub use std::f32::consts::*;

/// Distance of the near clipping plane
pub const Z_NEAR: f32 = 0.1;
/// Distance of the far clipping plane
pub const Z_FAR: f32 = 100.0;
/// Vertical field of view in degrees
pub const FOV: f32 = 45.0;

/// Moves the quad to the bottom right corner and spins it around the Z axis
pub fn spinning_transform(time: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0)) * Mat4::from_rotation_z(time)
}

/// Places an object at `position`, tilted by `degrees` around a fixed skewed axis
pub fn tilted_model(position: Vec3, degrees: f32) -> Mat4 {
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(position) * Mat4::from_axis_angle(axis, degrees.to_radians())
}

/// Camera three units behind the origin, looking down -Z
pub fn camera_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
}

pub fn perspective(aspect_ratio: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV.to_radians(), aspect_ratio, Z_NEAR, Z_FAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    #[test]
    fn transform_at_start_is_a_translation() {
        let m = spinning_transform(0.0);
        let p = m * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(1.0, 0.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn transform_rotates_before_translating() {
        // A quarter turn maps +X onto +Y, then the quad is moved
        let m = spinning_transform(FRAC_PI_2);
        let p = m * Vec4::new(0.5, 0.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(0.5, 0.0, 0.0, 1.0), EPS));
    }

    #[test]
    fn untilted_model_only_translates() {
        let m = tilted_model(Vec3::new(2.0, 5.0, -15.0), 0.0);
        assert!(m.abs_diff_eq(Mat4::from_translation(Vec3::new(2.0, 5.0, -15.0)), EPS));
    }

    #[test]
    fn tilt_keeps_the_axis_fixed() {
        let m = tilted_model(Vec3::ZERO, 60.0);
        let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
        assert!(m.transform_vector3(axis).abs_diff_eq(axis, EPS));
    }

    #[test]
    fn camera_pushes_the_scene_away() {
        let p = camera_view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(p.abs_diff_eq(Vec4::new(0.0, 0.0, -3.0, 1.0), EPS));
    }

    #[test]
    fn perspective_maps_clip_planes_to_ndc() {
        let proj = perspective(800.0 / 600.0);
        let near = proj * Vec4::new(0.0, 0.0, -Z_NEAR, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, -Z_FAR, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }
}
