use approx::assert_relative_eq;
use mnemos::interaction::{Camera, CameraMetrics, KineticPanConfig, ZoomConfig};

const FRAME_MS: f64 = 1000.0 / 60.0;

/// 1700..=1705 on an 800 px surface with 60 px paddings.
fn metrics() -> CameraMetrics {
    CameraMetrics {
        padding_left: 60.0,
        view_width: 680.0,
        base_year_width: 136.0,
        year_count: 6,
    }
}

fn camera() -> Camera {
    Camera::new(ZoomConfig::default(), KineticPanConfig::default(), metrics())
}

fn settle_zoom(camera: &mut Camera, target: f64) {
    camera.set_zoom_target(target);
    for frame in 0..200 {
        camera.tick(f64::from(frame) * FRAME_MS);
    }
}

#[test]
fn fresh_camera_starts_at_min_zoom_without_pan() {
    let camera = camera();
    assert_eq!(camera.zoom_scale(), 1.0);
    assert_eq!(camera.pan_offset(), 0.0);
    assert_eq!(camera.max_pan(), 0.0);
    assert_relative_eq!(camera.year_to_screen_x(0.0), 60.0);
    assert_relative_eq!(camera.year_to_screen_x(5.0), 740.0);
    assert!(!camera.is_zooming());
}

#[test]
fn zoom_target_beyond_limits_is_clamped() {
    let mut camera = camera();
    let max = camera.zoom_config().max;
    camera.set_zoom_target(max * 10.0);
    assert_eq!(camera.zoom_target(), max);

    camera.set_zoom_target(0.01);
    assert_eq!(camera.zoom_target(), camera.zoom_config().min);

    camera.set_zoom_target(f64::NAN);
    assert_eq!(camera.zoom_target(), camera.zoom_config().min);
}

#[test]
fn zoom_eases_toward_target_and_settles() {
    let mut camera = camera();
    camera.set_zoom_target(4.0);
    camera.tick(0.0);
    assert_relative_eq!(camera.zoom_scale(), 1.0 + 3.0 * 0.12, epsilon = 1e-12);
    assert!(camera.is_zooming());

    settle_zoom(&mut camera, 4.0);
    assert!(!camera.is_zooming());
    assert_relative_eq!(camera.zoom_scale(), 4.0, epsilon = 1e-3);
    assert_relative_eq!(camera.year_width(), 136.0 * camera.zoom_scale());
}

#[test]
fn wheel_delta_scales_target_exponentially() {
    let mut camera = camera();
    camera.set_zoom_target(2.0);
    camera.apply_wheel_delta(-100.0);
    assert_relative_eq!(camera.zoom_target(), 2.0 * (0.15_f64).exp(), epsilon = 1e-12);
    camera.apply_wheel_delta(100.0);
    assert_relative_eq!(camera.zoom_target(), 2.0, epsilon = 1e-12);
}

#[test]
fn drag_moves_pan_by_pointer_delta_then_clamps() {
    let mut camera = camera();
    settle_zoom(&mut camera, 4.0);
    assert_eq!(camera.pan_offset(), 0.0);

    camera.begin_drag(500.0, 0.0);
    camera.update_drag(300.0, FRAME_MS);
    assert_relative_eq!(camera.pan_offset(), 200.0);

    camera.update_drag(900.0, 2.0 * FRAME_MS);
    assert_eq!(camera.pan_offset(), 0.0);

    camera.update_drag(-10_000.0, 3.0 * FRAME_MS);
    assert_relative_eq!(camera.pan_offset(), camera.max_pan());
    camera.end_drag();
}

#[test]
fn drag_at_min_zoom_cannot_pan() {
    let mut camera = camera();
    camera.begin_drag(500.0, 0.0);
    camera.update_drag(300.0, FRAME_MS);
    assert_eq!(camera.pan_offset(), 0.0);
}

#[test]
fn release_keeps_thirty_percent_of_velocity_and_inertia_decays() {
    let mut camera = camera();
    settle_zoom(&mut camera, 4.0);

    camera.begin_drag(500.0, 0.0);
    camera.update_drag(480.0, FRAME_MS);
    assert_relative_eq!(camera.pan_velocity(), 20.0, epsilon = 1e-9);
    camera.end_drag();
    assert_relative_eq!(camera.pan_velocity(), 6.0, epsilon = 1e-9);

    let before = camera.pan_offset();
    assert!(camera.tick_inertia(1.0 / 60.0));
    assert_relative_eq!(camera.pan_offset(), before + 6.0, epsilon = 1e-9);
    assert_relative_eq!(camera.pan_velocity(), 6.0 * 0.96, epsilon = 1e-9);

    let mut steps = 1;
    while camera.tick_inertia(1.0 / 60.0) {
        steps += 1;
        assert!(steps < 1_000, "inertia must stop");
    }
    assert_eq!(camera.pan_velocity(), 0.0);
    assert!(camera.pan_offset() > before + 100.0);
    assert!(camera.pan_offset() <= camera.max_pan());
}

#[test]
fn inertia_stops_at_bound() {
    let mut camera = camera();
    settle_zoom(&mut camera, 4.0);

    camera.begin_drag(500.0, 0.0);
    camera.update_drag(520.0, FRAME_MS);
    camera.end_drag();
    assert!(camera.pan_velocity() < 0.0);

    camera.tick_inertia(1.0 / 60.0);
    assert_eq!(camera.pan_offset(), 0.0);
    assert_eq!(camera.pan_velocity(), 0.0);
}

#[test]
fn zoom_gesture_holds_anchor_under_cursor() {
    let mut camera = camera();
    let anchor_x = 332.0;
    let anchor_index = camera.screen_x_to_year_index(anchor_x).expect("index");
    assert_relative_eq!(anchor_index, 2.0);

    camera.begin_zoom_gesture(anchor_x, 0.0);
    camera.apply_wheel_delta(-400.0);
    for frame in 1..=30 {
        camera.tick(f64::from(frame) * FRAME_MS);
        assert_relative_eq!(camera.year_to_screen_x(anchor_index), anchor_x, epsilon = 1e-6);
    }
    assert!(camera.is_zooming());

    for frame in 31..=400 {
        camera.tick(f64::from(frame) * FRAME_MS);
    }
    assert!(camera.gesture().is_none());
    assert!(!camera.is_zooming());
}

#[test]
fn repeated_wheel_extends_gesture_without_moving_anchor() {
    let mut camera = camera();
    camera.begin_zoom_gesture(200.0, 0.0);
    let first = camera.gesture().expect("gesture locked");

    camera.begin_zoom_gesture(600.0, 100.0);
    let extended = camera.gesture().expect("gesture still locked");
    assert_eq!(extended.anchor_screen_x, first.anchor_screen_x);
    assert_eq!(extended.anchor_year_index, first.anchor_year_index);
    assert!(extended.deadline_ms > first.deadline_ms);
}

#[test]
fn wheel_during_drag_does_not_lock_anchor() {
    let mut camera = camera();
    camera.begin_drag(400.0, 0.0);
    camera.begin_zoom_gesture(400.0, 0.0);
    assert!(camera.gesture().is_none());
}

#[test]
fn shrinking_viewport_reclamps_pan() {
    let mut camera = camera();
    settle_zoom(&mut camera, 4.0);
    camera.begin_drag(2_000.0, 0.0);
    camera.update_drag(0.0, FRAME_MS);
    camera.end_drag();
    let before = camera.pan_offset();
    assert!(before > 0.0);

    camera.set_metrics(CameraMetrics {
        base_year_width: 10.0,
        ..metrics()
    });
    assert!(camera.pan_offset() <= camera.max_pan());
    assert!(camera.pan_offset() < before);
}
