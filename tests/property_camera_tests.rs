use mnemos::interaction::{Camera, CameraMetrics, KineticPanConfig, ZoomConfig};
use proptest::prelude::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Clone, Copy)]
enum CameraOp {
    BeginDrag(f64),
    UpdateDrag(f64),
    EndDrag,
    Wheel { delta_y: f64, x: f64 },
    Target(f64),
    Tick,
    Inertia(f64),
}

fn camera_op() -> impl Strategy<Value = CameraOp> {
    prop_oneof![
        (0.0f64..1_200.0).prop_map(CameraOp::BeginDrag),
        (-2_000.0f64..3_000.0).prop_map(CameraOp::UpdateDrag),
        Just(CameraOp::EndDrag),
        (-800.0f64..800.0, 0.0f64..1_200.0).prop_map(|(delta_y, x)| CameraOp::Wheel { delta_y, x }),
        (-10.0f64..100.0).prop_map(CameraOp::Target),
        Just(CameraOp::Tick),
        (0.0f64..0.25).prop_map(CameraOp::Inertia),
    ]
}

fn camera(year_count: usize, view_width: f64) -> Camera {
    let metrics = CameraMetrics {
        padding_left: 60.0,
        view_width,
        base_year_width: view_width / (year_count - 1) as f64,
        year_count,
    };
    Camera::new(ZoomConfig::default(), KineticPanConfig::default(), metrics)
}

fn apply(camera: &mut Camera, op: CameraOp, now_ms: f64) {
    match op {
        CameraOp::BeginDrag(x) => camera.begin_drag(x, now_ms),
        CameraOp::UpdateDrag(x) => camera.update_drag(x, now_ms),
        CameraOp::EndDrag => camera.end_drag(),
        CameraOp::Wheel { delta_y, x } => {
            camera.begin_zoom_gesture(x, now_ms);
            camera.apply_wheel_delta(delta_y);
        }
        CameraOp::Target(target) => camera.set_zoom_target(target),
        CameraOp::Tick => camera.tick(now_ms),
        CameraOp::Inertia(dt) => {
            camera.tick_inertia(dt);
        }
    }
}

proptest! {
    #[test]
    fn pan_and_zoom_stay_in_bounds_after_every_mutation(
        year_count in 2usize..400,
        view_width in 100.0f64..2_000.0,
        ops in prop::collection::vec(camera_op(), 1..120)
    ) {
        let mut camera = camera(year_count, view_width);
        let zoom = camera.zoom_config();

        for (step, op) in ops.into_iter().enumerate() {
            apply(&mut camera, op, step as f64 * FRAME_MS);

            prop_assert!(camera.zoom_target() >= zoom.min && camera.zoom_target() <= zoom.max);
            prop_assert!(camera.zoom_scale() >= zoom.min && camera.zoom_scale() <= zoom.max);
            prop_assert!(camera.pan_offset() >= 0.0);
            prop_assert!(camera.pan_offset() <= camera.max_pan() + 1e-9);
        }
    }

    #[test]
    fn locked_anchor_does_not_drift_within_a_gesture(
        year_count in 10usize..300,
        start_zoom in 2.0f64..6.0,
        start_pan_ratio in 0.0f64..1.0,
        anchor_x in 80.0f64..700.0,
        deltas in prop::collection::vec(-300.0f64..300.0, 1..12)
    ) {
        let mut camera = camera(year_count, 680.0);
        camera.set_zoom_target(start_zoom);
        for frame in 0..300 {
            camera.tick(f64::from(frame) * FRAME_MS);
        }
        let target_pan = camera.max_pan() * start_pan_ratio;
        camera.begin_drag(target_pan, 0.0);
        camera.update_drag(0.0, FRAME_MS);
        camera.end_drag();
        camera.tick_inertia(0.0);

        let mut now_ms = 10_000.0;
        camera.begin_zoom_gesture(anchor_x, now_ms);
        let anchor_index = camera.gesture().expect("gesture locked").anchor_year_index;

        for delta_y in deltas {
            camera.begin_zoom_gesture(anchor_x, now_ms);
            camera.apply_wheel_delta(delta_y);
            for _ in 0..4 {
                now_ms += FRAME_MS;
                camera.tick(now_ms);
                if camera.gesture().is_none() {
                    break;
                }
                let at_bound = camera.pan_offset() <= 1e-9
                    || camera.pan_offset() >= camera.max_pan() - 1e-9;
                let drift = (camera.year_to_screen_x(anchor_index) - anchor_x).abs();
                prop_assert!(at_bound || drift <= 1e-6, "anchor drifted by {drift}");
            }
        }
    }
}
