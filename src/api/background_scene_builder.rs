use crate::core::{ParticleField, TimelineLayout};
use crate::render::{Color, GradientStop, Paint, RenderFrame};

const WARM_PARTICLE: (u8, u8, u8) = (200, 170, 120);
const COOL_PARTICLE: (u8, u8, u8) = (180, 180, 190);
const SCAN_SPEED_PX_PER_SECOND: f64 = 35.0;
const SCAN_RADIUS_PX: f64 = 70.0;

fn rgb8((r, g, b): (u8, u8, u8), alpha: f64) -> Color {
    Color::rgb8(r, g, b, alpha)
}

pub(super) fn append_particles(frame: &mut RenderFrame, particles: &ParticleField, time: f64) {
    for particle in particles.particles() {
        let tint = if particle.is_warm() {
            WARM_PARTICLE
        } else {
            COOL_PARTICLE
        };
        frame.fill_arc(
            particle.x,
            particle.y,
            particle.size,
            Paint::Solid(rgb8(tint, particle.alpha_at(time))),
        );
    }
}

/// Breathing central band plus cool (upper) and warm (lower) tinted regions.
pub(super) fn append_background_glow(frame: &mut RenderFrame, layout: &TimelineLayout, time: f64) {
    let axis = layout.axis_y;
    let extent = layout.extent;
    let breathe = 0.2 + (time * 0.25).sin() * 0.06;

    let band_top = axis - extent * 1.5;
    frame.fill_rect(
        0.0,
        band_top,
        layout.width,
        extent * 3.0,
        Paint::linear(
            0.0,
            band_top,
            0.0,
            axis + extent * 1.5,
            &[
                GradientStop::new(0.0, rgb8((12, 11, 10), 0.0)),
                GradientStop::new(0.15, rgb8((18, 16, 14), 0.0)),
                GradientStop::new(0.35, rgb8((28, 24, 18), breathe * 0.3)),
                GradientStop::new(0.5, rgb8((35, 30, 22), breathe * 0.6)),
                GradientStop::new(0.65, rgb8((28, 24, 18), breathe * 0.3)),
                GradientStop::new(0.85, rgb8((18, 16, 14), 0.0)),
                GradientStop::new(1.0, rgb8((12, 11, 10), 0.0)),
            ],
        ),
    );

    let upper_top = axis - extent * 1.2;
    frame.fill_rect(
        0.0,
        upper_top,
        layout.width,
        extent * 1.2,
        Paint::linear(
            0.0,
            upper_top,
            0.0,
            axis,
            &[
                GradientStop::new(0.0, rgb8(COOL_PARTICLE, 0.0)),
                GradientStop::new(0.4, rgb8(COOL_PARTICLE, 0.015)),
                GradientStop::new(1.0, rgb8(COOL_PARTICLE, 0.0)),
            ],
        ),
    );

    frame.fill_rect(
        0.0,
        axis,
        layout.width,
        extent * 1.2,
        Paint::linear(
            0.0,
            axis,
            0.0,
            axis + extent * 1.2,
            &[
                GradientStop::new(0.0, rgb8(WARM_PARTICLE, 0.0)),
                GradientStop::new(0.6, rgb8(WARM_PARTICLE, 0.015)),
                GradientStop::new(1.0, rgb8(WARM_PARTICLE, 0.0)),
            ],
        ),
    );
}

/// Layered glowing axis with a radial highlight sweeping left to right.
pub(super) fn append_main_axis(frame: &mut RenderFrame, layout: &TimelineLayout, time: f64) {
    let y = layout.axis_y;
    let width = layout.width;
    let pulse = 0.3 + (time * 0.4).sin() * 0.08;
    let fast_pulse = (time * 1.5).sin() * 0.03;
    let glow = pulse + fast_pulse;

    let horizontal = |alpha: f64| {
        Paint::linear(
            0.0,
            y,
            width,
            y,
            &[
                GradientStop::new(0.0, rgb8((200, 175, 130), 0.0)),
                GradientStop::new(0.05, rgb8((200, 175, 130), alpha)),
                GradientStop::new(0.5, rgb8((210, 185, 140), alpha)),
                GradientStop::new(0.95, rgb8((200, 175, 130), alpha)),
                GradientStop::new(1.0, rgb8((200, 175, 130), 0.0)),
            ],
        )
    };
    frame.stroke_line((0.0, y), (width, y), 14.0, horizontal(glow * 0.1));
    frame.stroke_line((0.0, y), (width, y), 5.0, horizontal(glow * 0.2));
    frame.stroke_line(
        (0.0, y),
        (width, y),
        1.0,
        Paint::linear(
            0.0,
            y,
            width,
            y,
            &[
                GradientStop::new(0.0, rgb8((230, 210, 170), 0.0)),
                GradientStop::new(0.04, rgb8((230, 210, 170), glow + 0.1)),
                GradientStop::new(0.5, rgb8((240, 220, 180), glow + 0.15)),
                GradientStop::new(0.96, rgb8((230, 210, 170), glow + 0.1)),
                GradientStop::new(1.0, rgb8((230, 210, 170), 0.0)),
            ],
        ),
    );

    let scan_x = (time * SCAN_SPEED_PX_PER_SECOND).rem_euclid(width + 200.0) - 100.0;
    frame.fill_rect(
        scan_x - SCAN_RADIUS_PX,
        y - 20.0,
        SCAN_RADIUS_PX * 2.0,
        40.0,
        Paint::radial(
            scan_x,
            y,
            SCAN_RADIUS_PX,
            &[
                GradientStop::new(0.0, rgb8((240, 220, 180), 0.15)),
                GradientStop::new(0.5, rgb8((220, 195, 150), 0.05)),
                GradientStop::new(1.0, rgb8((200, 175, 130), 0.0)),
            ],
        ),
    );
}
