use smallvec::SmallVec;

use crate::error::{TimelineError, TimelineResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// 8-bit channels plus an alpha that is clamped into `[0, 1]`.
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { alpha, ..self }
    }

    pub fn validate(self) -> TimelineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

pub type GradientStops = SmallVec<[GradientStop; 8]>;

/// Fill or stroke source.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: GradientStops,
    },
    RadialGradient {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        stops: GradientStops,
    },
}

impl Paint {
    #[must_use]
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64, stops: &[GradientStop]) -> Self {
        Self::LinearGradient {
            x0,
            y0,
            x1,
            y1,
            stops: stops.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn radial(cx: f64, cy: f64, outer_radius: f64, stops: &[GradientStop]) -> Self {
        Self::RadialGradient {
            cx,
            cy,
            inner_radius: 0.0,
            outer_radius,
            stops: stops.iter().copied().collect(),
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient {
                x0,
                y0,
                x1,
                y1,
                stops,
            } => {
                ensure_finite(&[*x0, *y0, *x1, *y1], "linear gradient coordinates")?;
                validate_stops(stops)
            }
            Self::RadialGradient {
                cx,
                cy,
                inner_radius,
                outer_radius,
                stops,
            } => {
                ensure_finite(&[*cx, *cy], "radial gradient center")?;
                if !inner_radius.is_finite()
                    || !outer_radius.is_finite()
                    || *inner_radius < 0.0
                    || *outer_radius <= 0.0
                {
                    return Err(TimelineError::InvalidData(
                        "radial gradient radii must be finite, inner >= 0, outer > 0".to_owned(),
                    ));
                }
                validate_stops(stops)
            }
        }
    }
}

/// One immediate-mode draw call in CSS pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    StrokeLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        paint: Paint,
    },
    FillArc {
        cx: f64,
        cy: f64,
        radius: f64,
        paint: Paint,
    },
    StrokeArc {
        cx: f64,
        cy: f64,
        radius: f64,
        stroke_width: f64,
        paint: Paint,
    },
}

impl DrawCommand {
    #[must_use]
    pub fn paint(&self) -> &Paint {
        match self {
            Self::FillRect { paint, .. }
            | Self::StrokeLine { paint, .. }
            | Self::FillArc { paint, .. }
            | Self::StrokeArc { paint, .. } => paint,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        match self {
            Self::FillRect {
                x,
                y,
                width,
                height,
                ..
            } => {
                ensure_finite(&[*x, *y, *width, *height], "rect geometry")?;
                if *width < 0.0 || *height < 0.0 {
                    return Err(TimelineError::InvalidData(
                        "rect size must be >= 0".to_owned(),
                    ));
                }
            }
            Self::StrokeLine {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                ..
            } => {
                ensure_finite(&[*x1, *y1, *x2, *y2], "line coordinates")?;
                ensure_positive(*stroke_width, "line stroke width")?;
            }
            Self::FillArc { cx, cy, radius, .. } => {
                ensure_finite(&[*cx, *cy], "arc center")?;
                ensure_positive(*radius, "arc radius")?;
            }
            Self::StrokeArc {
                cx,
                cy,
                radius,
                stroke_width,
                ..
            } => {
                ensure_finite(&[*cx, *cy], "arc center")?;
                ensure_positive(*radius, "arc radius")?;
                ensure_positive(*stroke_width, "arc stroke width")?;
            }
        }
        self.paint().validate()
    }
}

fn validate_stops(stops: &[GradientStop]) -> TimelineResult<()> {
    if stops.is_empty() {
        return Err(TimelineError::InvalidData(
            "gradient must have at least one stop".to_owned(),
        ));
    }
    for stop in stops {
        if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
            return Err(TimelineError::InvalidData(
                "gradient stop offset must be finite and in [0, 1]".to_owned(),
            ));
        }
        stop.color.validate()?;
    }
    Ok(())
}

fn ensure_finite(values: &[f64], what: &str) -> TimelineResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(TimelineError::InvalidData(format!("{what} must be finite")))
    }
}

fn ensure_positive(value: f64, what: &str) -> TimelineResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TimelineError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}
