// Host-side tests for constants and their mathematical relationships.

use app_core::*;
use glam::Vec3;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Smoothing is a per-tick fraction of the remaining distance.
    assert!(SMOOTHING > 0.0);
    assert!(SMOOTHING < 1.0);

    // Rates and durations are positive.
    assert!(SPIN_RATE > 0.0);
    assert!(DRAG_ROTATION_PER_PX > 0.0);
    assert!(SELECT_PULSE_SECS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_scale_exceeds_base_scale() {
    assert!(HOVER_SCALE > BASE_SCALE);
    assert!(BASE_SCALE > 0.0);
}

#[test]
fn home_offsets_are_mirrored() {
    assert_eq!(TEE_HOME_X, -HOODIE_HOME_X);
    assert!(HOODIE_HOME_X > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pick_radius_cannot_span_both_garments() {
    assert!(PICK_SPHERE_RADIUS > 0.0);
    // A parked garment must not be pickable at the center slot.
    assert!(PICK_SPHERE_RADIUS * 2.0 < HOODIE_HOME_X - TEE_HOME_X);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_parameters_are_sane() {
    assert!(CAMERA_Z > 0.0);
    assert!(CAMERA_FOV_DEG > 0.0);
    assert!(CAMERA_FOV_DEG < 180.0);
}

#[test]
fn urls_are_fixed_configuration() {
    for url in [TEE_MODEL_URL, HOODIE_MODEL_URL] {
        assert!(url.ends_with(".glb"));
    }
    for url in [TEE_SHOP_URL, HOODIE_SHOP_URL] {
        assert!(url.starts_with("https://"));
    }
    assert_ne!(TEE_SHOP_URL, HOODIE_SHOP_URL);
    assert_ne!(TEE_MODEL_URL, HOODIE_MODEL_URL);
}

#[test]
fn page_camera_looks_at_the_center_slot() {
    let cam = Camera::page_default(16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert_eq!(cam.target, Vec3::ZERO);

    // The view matrix maps the eye to the view-space origin.
    let eye_in_view = cam.view_matrix().transform_point3(cam.eye);
    assert!(eye_in_view.length() < 1e-5);

    let proj = cam.projection_matrix();
    assert!(proj.to_cols_array().iter().all(|v| v.is_finite()));
}

#[test]
fn approach_converges_and_holds_at_target() {
    let mut v = 8.0_f32;
    for _ in 0..200 {
        v = approach(v, 0.0, SMOOTHING);
    }
    assert!(v.abs() < 1e-3);
    assert_eq!(approach(3.0, 3.0, SMOOTHING), 3.0);
}
