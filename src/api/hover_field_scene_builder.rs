use crate::core::TimelineLayout;
use crate::render::{Color, GradientStop, Paint, RenderFrame};

const FIELD_HALF_WIDTH_PX: f64 = 40.0;

/// Soft vertical column and breathing ring around the hovered line.
pub(super) fn append_hover_energy_field(
    frame: &mut RenderFrame,
    layout: &TimelineLayout,
    x: f64,
    time: f64,
) {
    let gold = |a: f64| Color::rgb8(200, 170, 100, a);
    frame.fill_rect(
        x - FIELD_HALF_WIDTH_PX,
        layout.axis_y - layout.extent,
        FIELD_HALF_WIDTH_PX * 2.0,
        layout.extent * 2.0,
        Paint::linear(
            x - FIELD_HALF_WIDTH_PX,
            0.0,
            x + FIELD_HALF_WIDTH_PX,
            0.0,
            &[
                GradientStop::new(0.0, gold(0.0)),
                GradientStop::new(0.5, gold(0.04)),
                GradientStop::new(1.0, gold(0.0)),
            ],
        ),
    );

    frame.stroke_arc(
        x,
        layout.axis_y,
        15.0 + (time * 3.0).sin() * 4.0,
        1.5,
        Paint::Solid(Color::rgb8(220, 190, 130, 0.25 + (time * 4.0).sin() * 0.1)),
    );
}
