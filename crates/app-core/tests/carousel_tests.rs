// Host-side tests for the carousel state machine and its animation driver.

use std::time::Duration;

use app_core::{
    Carousel, Garment, BASE_SCALE, DRAG_ROTATION_PER_PX, GARMENT_Y, HOODIE_HOME_X, SPIN_RATE,
};

const TICK: Duration = Duration::from_millis(16);

fn loaded_carousel() -> Carousel {
    let mut c = Carousel::new();
    for g in Garment::ALL {
        c.set_loaded(g);
    }
    c
}

#[test]
fn initial_state_centers_the_tee() {
    let c = Carousel::new();
    assert_eq!(c.active, Garment::Tee);
    assert_eq!(c.hovered, None);
    assert!(!c.dragging());
    assert_eq!(c.drag_target(), None);
    assert_eq!(c.garment(Garment::Tee).position.x, 0.0);
    assert_eq!(c.garment(Garment::Hoodie).position.x, HOODIE_HOME_X);
    for g in Garment::ALL {
        let gs = c.garment(g);
        assert_eq!(gs.position.y, GARMENT_Y);
        assert_eq!(gs.scale, BASE_SCALE);
        assert_eq!(gs.rotation_y, 0.0);
        assert!(!gs.loaded);
    }
}

#[test]
fn active_is_always_exactly_one_garment() {
    let mut c = Carousel::new();
    let presses = [
        Garment::Hoodie,
        Garment::Hoodie,
        Garment::Tee,
        Garment::Hoodie,
        Garment::Tee,
        Garment::Tee,
    ];
    for g in presses {
        c.set_active(g);
        assert_eq!(c.active, g);
    }
}

#[test]
fn begin_drag_requires_hover() {
    let mut c = loaded_carousel();
    c.begin_drag(50.0);
    assert!(!c.dragging());
    assert_eq!(c.drag_target(), None);
}

#[test]
fn drag_target_is_the_garment_hovered_at_drag_start() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.begin_drag(100.0);
    assert!(c.dragging());
    assert_eq!(c.drag_target(), Some(Garment::Tee));

    // Hover moving elsewhere mid-drag must not re-target the drag.
    c.set_hovered(Some(Garment::Hoodie));
    c.update_drag(110.0);
    let expected = 10.0 * DRAG_ROTATION_PER_PX;
    assert!((c.garment(Garment::Tee).rotation_y - expected).abs() < 1e-6);
    assert_eq!(c.garment(Garment::Hoodie).rotation_y, 0.0);
}

#[test]
fn second_pointerdown_is_ignored_while_dragging() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.begin_drag(100.0);
    c.set_hovered(Some(Garment::Hoodie));
    c.begin_drag(200.0);
    assert_eq!(c.drag_target(), Some(Garment::Tee));

    // The drag anchor must still be the original pointer position.
    c.update_drag(110.0);
    let expected = 10.0 * DRAG_ROTATION_PER_PX;
    assert!((c.garment(Garment::Tee).rotation_y - expected).abs() < 1e-6);
}

#[test]
fn end_drag_clears_state_from_any_point() {
    let mut c = loaded_carousel();

    // Without a drag in progress it is a no-op.
    c.end_drag();
    assert!(!c.dragging());

    c.set_hovered(Some(Garment::Hoodie));
    c.begin_drag(10.0);
    c.update_drag(40.0);
    c.end_drag();
    assert!(!c.dragging());
    assert_eq!(c.drag_target(), None);
}

#[test]
fn drag_rotation_telescopes() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.begin_drag(100.0);
    for x in [103.0, 91.5, 130.0] {
        c.update_drag(x);
    }
    // Total applied rotation depends only on the end points.
    let expected = (130.0 - 100.0) * DRAG_ROTATION_PER_PX;
    assert!((c.garment(Garment::Tee).rotation_y - expected).abs() < 1e-5);
}

#[test]
fn pointer_moves_after_release_do_nothing() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.begin_drag(100.0);
    c.update_drag(130.0);
    let rotation = c.garment(Garment::Tee).rotation_y;
    c.end_drag();

    c.update_drag(500.0);
    assert_eq!(c.garment(Garment::Tee).rotation_y, rotation);
}

#[test]
fn tick_is_a_fixed_point_at_steady_state() {
    let mut c = loaded_carousel();
    // Tee is active at x = 0 with base scale, hoodie parked at its home
    // offset with base scale: both positions and scales already sit on
    // their targets.
    c.tick(TICK);
    assert_eq!(c.garment(Garment::Tee).position.x, 0.0);
    assert_eq!(c.garment(Garment::Tee).scale, BASE_SCALE);
    assert_eq!(c.garment(Garment::Hoodie).position.x, HOODIE_HOME_X);
    assert_eq!(c.garment(Garment::Hoodie).scale, BASE_SCALE);
}

#[test]
fn drag_pauses_auto_spin_only_for_the_drag_target() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.begin_drag(0.0);
    c.tick(TICK);

    let expected = TICK.as_secs_f32() * SPIN_RATE;
    assert_eq!(c.garment(Garment::Tee).rotation_y, 0.0);
    assert!((c.garment(Garment::Hoodie).rotation_y - expected).abs() < 1e-6);
}

#[test]
fn arrow_switch_moves_both_garments_toward_their_targets() {
    let mut c = loaded_carousel();
    c.set_active(Garment::Hoodie);

    let mut tee_x = c.garment(Garment::Tee).position.x;
    let mut hoodie_x = c.garment(Garment::Hoodie).position.x;
    for _ in 0..10 {
        c.tick(TICK);
        let new_tee_x = c.garment(Garment::Tee).position.x;
        let new_hoodie_x = c.garment(Garment::Hoodie).position.x;
        // Tee leaves center toward its home offset, hoodie approaches 0.
        assert!(new_tee_x < tee_x);
        assert!(new_hoodie_x < hoodie_x);
        assert!(new_hoodie_x > 0.0);
        tee_x = new_tee_x;
        hoodie_x = new_hoodie_x;
    }
}

#[test]
fn hover_grows_the_hovered_garment_only() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Hoodie));
    c.tick(TICK);
    assert!(c.garment(Garment::Hoodie).scale > BASE_SCALE);
    assert_eq!(c.garment(Garment::Tee).scale, BASE_SCALE);

    // Hover gone: scale eases back down.
    c.set_hovered(None);
    let grown = c.garment(Garment::Hoodie).scale;
    c.tick(TICK);
    assert!(c.garment(Garment::Hoodie).scale < grown);
}

#[test]
fn click_returns_the_hovered_garment() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Hoodie));
    assert_eq!(c.click(), Some(Garment::Hoodie));
    assert_eq!(c.selected(), Some(Garment::Hoodie));
    assert!((c.selected_pulse() - 1.0).abs() < 1e-6);
}

#[test]
fn click_with_nothing_hovered_is_a_no_op() {
    let mut c = loaded_carousel();
    assert_eq!(c.click(), None);
    assert_eq!(c.selected(), None);
}

#[test]
fn click_is_suppressed_while_dragging() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.begin_drag(100.0);
    assert_eq!(c.click(), None);
    assert_eq!(c.selected(), None);
}

#[test]
fn selected_pulse_expires() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.click();

    c.tick(Duration::from_millis(500));
    assert_eq!(c.selected(), Some(Garment::Tee));
    assert!((c.selected_pulse() - 0.5).abs() < 1e-3);

    c.tick(Duration::from_millis(600));
    assert_eq!(c.selected(), None);
    assert_eq!(c.selected_pulse(), 0.0);
}

#[test]
fn rapid_second_click_rearms_the_pulse() {
    let mut c = loaded_carousel();
    c.set_hovered(Some(Garment::Tee));
    c.click();
    c.tick(Duration::from_millis(900));
    c.click();
    c.tick(Duration::from_millis(500));
    // Still armed: the second click restarted the countdown.
    assert_eq!(c.selected(), Some(Garment::Tee));
}

#[test]
fn unloaded_garments_are_skipped_by_tick() {
    let mut c = Carousel::new();
    c.set_active(Garment::Hoodie);
    c.set_hovered(Some(Garment::Tee));
    for _ in 0..5 {
        c.tick(TICK);
    }
    // Nothing is loaded, so nothing moves, spins or grows.
    assert_eq!(c.garment(Garment::Tee).position.x, 0.0);
    assert_eq!(c.garment(Garment::Hoodie).position.x, HOODIE_HOME_X);
    for g in Garment::ALL {
        assert_eq!(c.garment(g).rotation_y, 0.0);
        assert_eq!(c.garment(g).scale, BASE_SCALE);
    }
}
