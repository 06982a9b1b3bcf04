use crate::dom;
use crate::render;
use app_core::{Carousel, Garment};
use glam::{Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const NAV_PREV_ID: &str = "nav-prev";
pub const NAV_NEXT_ID: &str = "nav-next";

pub struct FrameContext<'a> {
    pub carousel: Rc<RefCell<Carousel>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.carousel.borrow_mut().tick(dt);

        // Arrow visibility follows the active garment: no "previous" while
        // the tee is centered, no "next" while the hoodie is.
        let active = self.carousel.borrow().active;
        dom::set_display(&self.document, NAV_PREV_ID, active != Garment::Tee);
        dom::set_display(&self.document, NAV_NEXT_ID, active != Garment::Hoodie);

        let draws = {
            let c = self.carousel.borrow();
            let mut draws = Vec::with_capacity(2);
            for g in Garment::ALL {
                let gs = c.garment(g);
                if !gs.loaded {
                    continue;
                }
                let model = Mat4::from_translation(gs.position)
                    * Mat4::from_rotation_y(gs.rotation_y)
                    * Mat4::from_scale(Vec3::splat(gs.scale));
                let highlight = if c.selected() == Some(g) {
                    c.selected_pulse()
                } else {
                    0.0
                };
                draws.push(render::GarmentDraw {
                    garment: g,
                    model,
                    highlight,
                });
            }
            draws
        };

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&draws) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
