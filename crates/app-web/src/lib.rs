#![cfg(target_arch = "wasm32")]

mod camera;
mod dom;
mod events;
mod frame;
mod input;
mod model;
mod render;

use app_core::{Carousel, Garment};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use events::InputWiring;
use frame::{FrameContext, NAV_NEXT_ID, NAV_PREV_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let carousel = Rc::new(RefCell::new(Carousel::new()));

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        carousel: carousel.clone(),
        canvas: canvas.clone(),
        document: document.clone(),
        gpu,
        last_instant: Instant::now(),
    }));

    events::wire_input_handlers(InputWiring {
        canvas: canvas.clone(),
        carousel: carousel.clone(),
    });

    // Navigation arrows force one side each; pressing the arrow for the
    // already-active side is a no-op.
    {
        let c = carousel.clone();
        dom::add_click_listener(&document, NAV_PREV_ID, move || {
            c.borrow_mut().set_active(Garment::Tee);
            log::info!("[nav] previous -> tee");
        });
    }
    {
        let c = carousel.clone();
        dom::add_click_listener(&document, NAV_NEXT_ID, move || {
            c.borrow_mut().set_active(Garment::Hoodie);
            log::info!("[nav] next -> hoodie");
        });
    }

    // Fire-and-forget model loads; a garment only becomes interactable once
    // its mesh is on the GPU.
    for g in Garment::ALL {
        let carousel = carousel.clone();
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            match model::load_garment(g).await {
                Ok(mesh) => {
                    if let Some(gpu) = frame_ctx.borrow_mut().gpu.as_mut() {
                        gpu.set_mesh(g, &mesh);
                    }
                    carousel.borrow_mut().set_loaded(g);
                    log::info!(
                        "[load] {} model ready ({} vertices, {} triangles)",
                        g.label(),
                        mesh.positions.len(),
                        mesh.indices.len() / 3
                    );
                }
                Err(e) => log::error!("[load] {} model failed: {e:?}", g.label()),
            }
        });
    }

    frame::start_loop(frame_ctx);

    Ok(())
}
