// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use app_core::{Carousel, Garment};
use glam::Vec3;
use input::*;

fn loaded_carousel() -> Carousel {
    let mut c = Carousel::new();
    for g in Garment::ALL {
        c.set_loaded(g);
    }
    c
}

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let center = Vec3::new(0.0, 0.0, 5.0);
    let radius = 2.0;

    let result = ray_sphere(ray_origin, ray_dir, center, radius);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!(t > 0.0);
    assert!(t < 5.0);
}

#[test]
fn ray_sphere_intersection_miss() {
    // Ray in +X, sphere out along +Z
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_intersection_behind_origin() {
    // Sphere entirely behind the ray origin must not report a hit.
    let ray_origin = Vec3::new(0.0, 0.0, 4.0);
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::ZERO;

    assert!(ray_sphere(ray_origin, ray_dir, center, 1.0).is_none());
}

#[test]
fn pick_hits_the_centered_garment() {
    let c = loaded_carousel();
    // Straight down the camera axis: the tee sits at the center slot, the
    // hoodie is parked far off to the side.
    let ro = Vec3::new(0.0, 0.0, 4.0);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    assert_eq!(pick_garment(ro, rd, &c), Some(Garment::Tee));
}

#[test]
fn pick_misses_off_to_the_side() {
    let c = loaded_carousel();
    let ro = Vec3::new(0.0, 0.0, 4.0);
    let rd = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(pick_garment(ro, rd, &c), None);
}

#[test]
fn pick_ignores_unloaded_garments() {
    let mut c = Carousel::new();
    c.set_loaded(Garment::Hoodie);
    // The tee occupies the center slot but never loaded; the hoodie is off
    // at its home offset.
    let ro = Vec3::new(0.0, 0.0, 4.0);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    assert_eq!(pick_garment(ro, rd, &c), None);
}

#[test]
fn pick_prefers_the_nearest_hit() {
    let mut c = loaded_carousel();
    // Line the hoodie up behind the tee on the camera axis.
    c.garments[Garment::Hoodie.index()].position = Vec3::new(0.0, -0.5, -3.0);
    let ro = Vec3::new(0.0, 0.0, 4.0);
    let rd = Vec3::new(0.0, 0.0, -1.0);
    assert_eq!(pick_garment(ro, rd, &c), Some(Garment::Tee));
}
