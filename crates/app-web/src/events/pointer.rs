use crate::camera;
use crate::dom;
use crate::input;
use app_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub carousel: Rc<RefCell<Carousel>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
}

fn cursor_for(carousel: &Carousel) -> &'static str {
    if carousel.dragging() {
        "grabbing"
    } else if carousel.hovered.is_some() {
        "grab"
    } else {
        "default"
    }
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (ro, rd) = camera::screen_to_world_ray(&w.canvas, pos.x, pos.y);

        let cursor = {
            let mut c = w.carousel.borrow_mut();
            let hit = input::pick_garment(ro, rd, &c);
            c.set_hovered(hit);
            if c.dragging() {
                c.update_drag(ev.client_x() as f32);
            }
            cursor_for(&c)
        };
        dom::set_canvas_cursor(&w.canvas, cursor);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let cursor = {
            let mut c = w.carousel.borrow_mut();
            if let Some(g) = c.hovered {
                c.begin_drag(ev.client_x() as f32);
                log::info!("[mouse] begin drag on {}", g.label());
            }
            cursor_for(&c)
        };
        dom::set_canvas_cursor(&w.canvas, cursor);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (clicked, cursor) = {
            let mut c = w.carousel.borrow_mut();
            let clicked = if c.dragging() {
                c.end_drag();
                log::info!("[mouse] end drag");
                None
            } else {
                c.click()
            };
            (clicked, cursor_for(&c))
        };

        if let Some(g) = clicked {
            log::info!("[click] open shop page for {}", g.label());
            if let Some(wnd) = web::window() {
                if let Err(e) = wnd.open_with_url_and_target(g.shop_url(), "_blank") {
                    log::warn!("[click] window.open failed: {:?}", e);
                }
            }
        }
        dom::set_canvas_cursor(&w.canvas, cursor);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// Losing the pointer must not leave a drag stuck active.
fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        {
            let mut c = w.carousel.borrow_mut();
            c.end_drag();
            c.set_hovered(None);
        }
        dom::set_canvas_cursor(&w.canvas, "default");
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
