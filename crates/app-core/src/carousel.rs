use glam::Vec3;
use std::time::Duration;

use crate::constants::{
    BASE_SCALE, DRAG_ROTATION_PER_PX, GARMENT_Y, HOODIE_HOME_X, HOODIE_MODEL_URL, HOODIE_SHOP_URL,
    HOVER_SCALE, SELECT_PULSE_SECS, SMOOTHING, SPIN_RATE, TEE_HOME_X, TEE_MODEL_URL, TEE_SHOP_URL,
};

/// One of the two garments shown on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Garment {
    Tee,
    Hoodie,
}

impl Garment {
    pub const ALL: [Garment; 2] = [Garment::Tee, Garment::Hoodie];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Garment::Tee => 0,
            Garment::Hoodie => 1,
        }
    }

    /// Parked X position while the other garment is centered.
    #[inline]
    pub fn home_offset_x(self) -> f32 {
        match self {
            Garment::Tee => TEE_HOME_X,
            Garment::Hoodie => HOODIE_HOME_X,
        }
    }

    pub fn model_url(self) -> &'static str {
        match self {
            Garment::Tee => TEE_MODEL_URL,
            Garment::Hoodie => HOODIE_MODEL_URL,
        }
    }

    pub fn shop_url(self) -> &'static str {
        match self {
            Garment::Tee => TEE_SHOP_URL,
            Garment::Hoodie => HOODIE_SHOP_URL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Garment::Tee => "tee",
            Garment::Hoodie => "hoodie",
        }
    }
}

/// Per-garment transform state, written back to the renderer every frame.
#[derive(Clone, Debug)]
pub struct GarmentState {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
    /// False until the model finishes loading; stays false on load failure.
    pub loaded: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    active: bool,
    target: Option<Garment>,
    last_pointer_x: f32,
}

/// The single mutable state object driving the page.
///
/// Created once at startup and shared between the pointer handlers, the
/// navigation buttons and the frame loop. All transitions are defensive
/// no-ops when their preconditions do not hold.
pub struct Carousel {
    pub garments: [GarmentState; 2],
    /// The garment currently centered on screen. Always exactly one.
    pub active: Garment,
    /// The garment under the pointer per the last hit test, if any.
    pub hovered: Option<Garment>,
    drag: DragState,
    selected: Option<Garment>,
    selected_remaining: f32,
}

impl Carousel {
    pub fn new() -> Self {
        let active = Garment::Tee;
        let garments = Garment::ALL.map(|g| {
            let x = if g == active { 0.0 } else { g.home_offset_x() };
            GarmentState {
                position: Vec3::new(x, GARMENT_Y, 0.0),
                rotation_y: 0.0,
                scale: BASE_SCALE,
                loaded: false,
            }
        });
        Self {
            garments,
            active,
            hovered: None,
            drag: DragState::default(),
            selected: None,
            selected_remaining: 0.0,
        }
    }

    #[inline]
    pub fn garment(&self, g: Garment) -> &GarmentState {
        &self.garments[g.index()]
    }

    /// Marks a garment's model as present in the scene.
    pub fn set_loaded(&mut self, g: Garment) {
        self.garments[g.index()].loaded = true;
    }

    /// Centers `g`. Idempotent; called by the navigation arrows.
    pub fn set_active(&mut self, g: Garment) {
        if self.active != g {
            log::debug!("active garment -> {}", g.label());
        }
        self.active = g;
    }

    /// Overwrites the hover state from the latest hit-test result.
    pub fn set_hovered(&mut self, hovered: Option<Garment>) {
        self.hovered = hovered;
    }

    #[inline]
    pub fn dragging(&self) -> bool {
        self.drag.active
    }

    #[inline]
    pub fn drag_target(&self) -> Option<Garment> {
        self.drag.target
    }

    /// Starts a drag on the hovered garment. No-op when nothing is hovered
    /// or a drag is already in progress.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        if self.drag.active {
            return;
        }
        let Some(g) = self.hovered else { return };
        self.drag = DragState {
            active: true,
            target: Some(g),
            last_pointer_x: pointer_x,
        };
    }

    /// Applies the horizontal pointer delta as rotation on the drag target.
    /// No-op when not dragging.
    pub fn update_drag(&mut self, pointer_x: f32) {
        if !self.drag.active {
            return;
        }
        let Some(g) = self.drag.target else { return };
        let delta = pointer_x - self.drag.last_pointer_x;
        self.garments[g.index()].rotation_y += delta * DRAG_ROTATION_PER_PX;
        self.drag.last_pointer_x = pointer_x;
    }

    /// Ends any drag. Invoked on pointer-up and on pointer-leave so a drag
    /// can never remain stuck.
    pub fn end_drag(&mut self) {
        self.drag = DragState::default();
    }

    /// Resolves a pointer release that was not the end of a drag.
    ///
    /// Returns the garment whose product page should open, arming its
    /// selected pulse. Returns `None` while dragging (a click must never
    /// fire on drag-release) or when nothing is hovered.
    pub fn click(&mut self) -> Option<Garment> {
        if self.drag.active {
            return None;
        }
        let g = self.hovered?;
        self.selected = Some(g);
        self.selected_remaining = SELECT_PULSE_SECS;
        log::debug!("selected {}", g.label());
        Some(g)
    }

    #[inline]
    pub fn selected(&self) -> Option<Garment> {
        self.selected
    }

    /// Remaining selected-pulse strength in [0, 1], for the renderer.
    #[inline]
    pub fn selected_pulse(&self) -> f32 {
        (self.selected_remaining / SELECT_PULSE_SECS).clamp(0.0, 1.0)
    }

    /// Per-frame animation driver.
    ///
    /// Advances auto-rotation (except on the drag target, which the pointer
    /// owns for the frame), eases each garment's X toward center or its home
    /// offset, and eases scale toward the hover target. Garments whose model
    /// has not loaded are skipped entirely. Also expires the selected pulse.
    pub fn tick(&mut self, dt: Duration) {
        let dt_sec = dt.as_secs_f32();

        if self.selected.is_some() {
            self.selected_remaining -= dt_sec;
            if self.selected_remaining <= 0.0 {
                self.selected = None;
                self.selected_remaining = 0.0;
            }
        }

        for g in Garment::ALL {
            let dragged = self.drag.active && self.drag.target == Some(g);
            let target_x = if self.active == g { 0.0 } else { g.home_offset_x() };
            let target_scale = if self.hovered == Some(g) {
                HOVER_SCALE
            } else {
                BASE_SCALE
            };

            let gs = &mut self.garments[g.index()];
            if !gs.loaded {
                continue;
            }
            if !dragged {
                gs.rotation_y += dt_sec * SPIN_RATE;
            }
            gs.position.x = approach(gs.position.x, target_x, SMOOTHING);
            gs.scale = approach(gs.scale, target_scale, SMOOTHING);
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

/// Exponential approach of `current` toward `target`, one step.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
