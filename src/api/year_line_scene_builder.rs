use crate::core::{EventKind, LineVisual, TimelineLayout, YearLine};
use crate::render::{Color, GradientStop, Paint, RenderFrame};

/// Share of `extent * scale` a line reaches on either side of the axis.
const LINE_REACH_RATIO: f64 = 0.6;
const NODE_BASE_OFFSET_PX: f64 = 35.0;
const NODE_EDGE_MARGIN_PX: f64 = 20.0;
/// Keeps every derived radius and width strictly positive.
const MIN_SCALE: f64 = 0.05;

#[derive(Debug, Clone, Copy)]
struct NodePalette {
    base: (u8, u8, u8),
    bright: (u8, u8, u8),
}

impl NodePalette {
    fn for_kind(kind: EventKind) -> Self {
        match kind {
            EventKind::Historical => Self {
                base: (170, 175, 190),
                bright: (200, 205, 220),
            },
            EventKind::Personal => Self {
                base: (210, 175, 120),
                bright: (240, 210, 160),
            },
        }
    }

    fn base(self, alpha: f64) -> Color {
        let (r, g, b) = self.base;
        Color::rgb8(r, g, b, alpha)
    }

    fn bright(self, alpha: f64) -> Color {
        let (r, g, b) = self.bright;
        Color::rgb8(r, g, b, alpha)
    }
}

/// One eventful year: glows, core stroke, axis dot, then its event nodes.
pub(super) fn append_year_line(
    frame: &mut RenderFrame,
    layout: &TimelineLayout,
    line: &YearLine,
    visual: LineVisual,
    x: f64,
    is_hovered: bool,
    time: f64,
) {
    let intensity = visual.intensity;
    let scale = visual.scale.max(MIN_SCALE);
    let line_width = scale * 1.2;
    let reach = layout.extent * scale * LINE_REACH_RATIO;
    let top = layout.axis_y - reach;
    let bottom = layout.axis_y + reach;

    let vertical = |stops: &[GradientStop]| Paint::linear(x, top, x, bottom, stops);

    if intensity > 0.15 {
        let c = |a: f64| Color::rgb8(200, 180, 140, a);
        frame.stroke_line(
            (x, top),
            (x, bottom),
            line_width * 10.0,
            vertical(&[
                GradientStop::new(0.0, c(0.0)),
                GradientStop::new(0.2, c(intensity * 0.04)),
                GradientStop::new(0.5, c(intensity * 0.06)),
                GradientStop::new(0.8, c(intensity * 0.04)),
                GradientStop::new(1.0, c(0.0)),
            ]),
        );
    }

    if intensity > 0.2 {
        let c = |a: f64| Color::rgb8(210, 190, 150, a);
        frame.stroke_line(
            (x, top),
            (x, bottom),
            line_width * 4.0,
            vertical(&[
                GradientStop::new(0.0, c(0.0)),
                GradientStop::new(0.15, c(intensity * 0.08)),
                GradientStop::new(0.5, c(intensity * 0.12)),
                GradientStop::new(0.85, c(intensity * 0.08)),
                GradientStop::new(1.0, c(0.0)),
            ]),
        );
    }

    frame.stroke_line(
        (x, top),
        (x, bottom),
        line_width,
        vertical(&[
            GradientStop::new(0.0, Color::rgb8(180, 175, 165, 0.0)),
            GradientStop::new(0.1, Color::rgb8(200, 190, 170, intensity * 0.15)),
            GradientStop::new(0.3, Color::rgb8(220, 200, 160, intensity * 0.5)),
            GradientStop::new(0.5, Color::rgb8(240, 220, 180, intensity * 0.8)),
            GradientStop::new(0.7, Color::rgb8(220, 200, 160, intensity * 0.5)),
            GradientStop::new(0.9, Color::rgb8(200, 190, 170, intensity * 0.15)),
            GradientStop::new(1.0, Color::rgb8(180, 175, 165, 0.0)),
        ]),
    );

    let cross_radius = (2.0 + intensity * 2.0 * scale).max(1.0);
    frame.fill_arc(
        x,
        layout.axis_y,
        cross_radius,
        Paint::Solid(Color::rgb8(240, 220, 180, intensity * 0.5)),
    );

    for kind in [EventKind::Historical, EventKind::Personal] {
        append_event_nodes(frame, layout, line, kind, intensity, scale, x, is_hovered, time);
    }
}

/// Node radius for a record; the default weight of 0.7 keeps the base size.
fn node_radius(weight: f64, is_hovered: bool, scale: f64) -> f64 {
    let base = if is_hovered { 5.0 } else { 3.0 };
    base * (0.65 + 0.5 * weight) * scale
}

#[allow(clippy::too_many_arguments)]
fn append_event_nodes(
    frame: &mut RenderFrame,
    layout: &TimelineLayout,
    line: &YearLine,
    kind: EventKind,
    intensity: f64,
    scale: f64,
    x: f64,
    is_hovered: bool,
    time: f64,
) {
    let palette = NodePalette::for_kind(kind);
    let axis = layout.axis_y;
    let direction = kind.direction();
    let limit = layout.extent * scale * LINE_REACH_RATIO - NODE_EDGE_MARGIN_PX;
    let spacing = (if is_hovered { 45.0 } else { 30.0 }) * scale;

    for (i, event) in line.events(kind).iter().enumerate() {
        let offset = NODE_BASE_OFFSET_PX * scale + i as f64 * spacing;
        if offset > limit {
            continue;
        }
        let y = axis + direction * offset;
        let i = i as f64;

        let event_intensity = event.effective_intensity();
        let node_intensity = if is_hovered {
            (event_intensity + 0.35).min(1.0)
        } else {
            let flicker1 = (time * (1.0 + i * 0.3) + line.phase).sin() * 0.15;
            let flicker2 = (time * (1.8 + i * 0.2) + line.phase * 1.5).sin() * 0.08;
            let pulse = (time * 0.6 + i).sin() * 0.1;
            intensity * event_intensity + (flicker1 + flicker2 + pulse) * 0.25
        };

        frame.stroke_line(
            (x, axis + direction * 4.0),
            (x, y),
            (if is_hovered { 1.5 } else { 0.8 }) * scale,
            Paint::linear(
                x,
                axis,
                x,
                y,
                &[
                    GradientStop::new(0.0, palette.base(node_intensity * 0.08)),
                    GradientStop::new(1.0, palette.base(node_intensity * 0.4)),
                ],
            ),
        );

        let node_radius = node_radius(event.effective_weight(), is_hovered, scale);
        let glow_radius = node_radius * 3.5;
        frame.fill_arc(
            x,
            y,
            glow_radius,
            Paint::radial(
                x,
                y,
                glow_radius,
                &[
                    GradientStop::new(0.0, palette.bright(node_intensity * 0.25)),
                    GradientStop::new(0.5, palette.base(node_intensity * 0.08)),
                    GradientStop::new(1.0, palette.base(0.0)),
                ],
            ),
        );
        frame.fill_arc(
            x,
            y,
            node_radius * 1.6,
            Paint::Solid(palette.bright(node_intensity * 0.18)),
        );
        frame.fill_arc(
            x,
            y,
            node_radius,
            Paint::radial(
                x,
                y,
                node_radius,
                &[
                    GradientStop::new(0.0, Color::rgb8(255, 250, 240, node_intensity * 0.9)),
                    GradientStop::new(0.4, palette.bright(node_intensity * 0.85)),
                    GradientStop::new(1.0, palette.base(node_intensity * 0.6)),
                ],
            ),
        );
        frame.fill_arc(
            x,
            y,
            node_radius * 0.25,
            Paint::Solid(Color::rgb8(255, 255, 250, node_intensity * 0.9)),
        );

        if is_hovered {
            let ring_phase = (time * 1.8 + i * 0.5).rem_euclid(1.0);
            frame.stroke_arc(
                x,
                y,
                node_radius + ring_phase * 12.0 * scale,
                1.2,
                Paint::Solid(palette.bright((1.0 - ring_phase) * 0.35 * node_intensity)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::node_radius;
    use approx::assert_relative_eq;

    #[test]
    fn node_radius_grows_with_record_weight() {
        assert_relative_eq!(node_radius(0.7, true, 1.0), 5.0);
        assert_relative_eq!(node_radius(0.7, false, 2.0), 6.0);
        assert!(node_radius(1.0, false, 1.0) > node_radius(0.0, false, 1.0));
        assert!(node_radius(0.0, false, 1.0) > 0.0);
    }
}
