use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::core::TimelineLayout;

/// One ambient particle drifting inside the timeline band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub alpha: f64,
    pub phase: f64,
    pub speed: f64,
}

impl Particle {
    fn spawn<G: Rng + ?Sized>(layout: &TimelineLayout, rng: &mut G) -> Self {
        Self {
            x: rng.gen_range(0.0..=layout.width.max(0.0)),
            y: layout.axis_y + rng.gen_range(-0.5..0.5) * layout.extent * 2.0,
            vx: rng.gen_range(-0.5..0.5) * 0.2,
            vy: rng.gen_range(-0.5..0.5) * 0.1,
            size: rng.gen_range(0.5..1.7),
            alpha: rng.gen_range(0.05..0.20),
            phase: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(0.3..1.1),
        }
    }

    /// Flickering alpha at `time_seconds`.
    #[must_use]
    pub fn alpha_at(&self, time_seconds: f64) -> f64 {
        let flicker = (time_seconds * self.speed + self.phase).sin() * 0.5 + 0.5;
        self.alpha * flicker
    }

    /// Second half of the phase circle gets the warm tint.
    #[must_use]
    pub fn is_warm(&self) -> bool {
        self.phase > PI
    }
}

/// Fixed-size particle field; advanced once per frame.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn<G: Rng + ?Sized>(count: usize, layout: &TimelineLayout, rng: &mut G) -> Self {
        let particles = (0..count).map(|_| Particle::spawn(layout, rng)).collect();
        Self { particles }
    }

    /// Respawns every particle inside new bounds, keeping the count.
    pub fn respawn<G: Rng + ?Sized>(&mut self, layout: &TimelineLayout, rng: &mut G) {
        for particle in &mut self.particles {
            *particle = Particle::spawn(layout, rng);
        }
    }

    /// Drifts particles, wrapping horizontally and bouncing off the band edges.
    pub fn step(&mut self, layout: &TimelineLayout) {
        let top = layout.axis_y - layout.extent;
        let bottom = layout.axis_y + layout.extent;
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;

            if particle.x < 0.0 {
                particle.x = layout.width;
            }
            if particle.x > layout.width {
                particle.x = 0.0;
            }
            if particle.y < top || particle.y > bottom {
                particle.vy = -particle.vy;
            }
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
