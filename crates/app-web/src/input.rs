use app_core::{Carousel, Garment, PICK_SPHERE_RADIUS};
use glam::{Vec2, Vec3};
use web_sys as web;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Hit-tests the picking ray against each loaded garment's bounding sphere.
/// Nearest positive hit wins; unloaded garments are not interactable.
pub fn pick_garment(ray_origin: Vec3, ray_dir: Vec3, carousel: &Carousel) -> Option<Garment> {
    let mut best = None::<(Garment, f32)>;
    for g in Garment::ALL {
        let gs = carousel.garment(g);
        if !gs.loaded {
            continue;
        }
        if let Some(t) = ray_sphere(ray_origin, ray_dir, gs.position, PICK_SPHERE_RADIUS) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((g, t)),
            }
        }
    }
    best.map(|(g, _)| g)
}

// ---------------- Pointer helpers ----------------

/// Converts a pointer event's client coordinates into the canvas' backing
/// store pixel space.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
