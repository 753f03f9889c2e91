use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core::{
    EventDataset, ParticleField, SmoothedStateTracker, TimelineLayout, Viewport, YearSeedTable,
    build_year_lines,
};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{Camera, CameraMetrics, InteractionState};
use crate::overlay::{LabelSink, OverlayResolver};
use crate::render::Renderer;

use super::{FrameClock, TimelineEngine, TimelineEngineConfig};

impl<R: Renderer, S: LabelSink> TimelineEngine<R, S> {
    /// Creates a fully initialized engine.
    ///
    /// Per-year animation seeds are drawn once here from `config.seed` and
    /// reused for the lifetime of the engine.
    pub fn new(
        renderer: R,
        sink: S,
        dataset: EventDataset,
        config: TimelineEngineConfig,
    ) -> TimelineResult<Self> {
        if !config.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        let config = config.validate()?;
        let range = dataset.time_range.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut seeds = YearSeedTable::generate(range, &mut rng);
        let lines = build_year_lines(&dataset, &mut seeds, &mut rng);
        let layout = TimelineLayout::compute(config.viewport, config.layout, range.year_count());
        let camera = Camera::new(config.zoom, config.kinetic_pan, CameraMetrics::from(&layout));
        let particles = ParticleField::spawn(config.max_particles, &layout, &mut rng);

        debug!(
            start = range.start(),
            end = range.end(),
            eventful_years = lines.iter().filter(|line| line.has_events).count(),
            width = config.viewport.width,
            height = config.viewport.height,
            "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            sink,
            config,
            dataset,
            seeds,
            visuals: Vec::with_capacity(lines.len()),
            lines,
            layout,
            camera,
            interaction: InteractionState::default(),
            smoothing: SmoothedStateTracker::new(config.smoothing),
            overlays: OverlayResolver::new(),
            particles,
            rng,
            clock: FrameClock::default(),
            disposed: false,
        })
    }

    /// Applies a new host surface size.
    ///
    /// Degenerate sizes are accepted; frames skip drawing until the surface
    /// becomes drawable again. Year lines are rebuilt from the stable seed
    /// table, so per-year animation does not change.
    pub fn resize(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
        let range = self.dataset.time_range;
        self.layout = TimelineLayout::compute(viewport, self.config.layout, range.year_count());
        self.camera.set_metrics(CameraMetrics::from(&self.layout));
        self.lines = build_year_lines(&self.dataset, &mut self.seeds, &mut self.rng);
        self.particles.respawn(&self.layout, &mut self.rng);
        debug!(
            width = viewport.width,
            height = viewport.height,
            drawable = self.layout.is_drawable(),
            pan_offset = self.camera.pan_offset(),
            "timeline resized"
        );
    }

    /// Destroys all overlays and stops the frame loop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.overlays.clear(&mut self.sink);
        self.interaction = InteractionState::default();
        self.disposed = true;
        debug!("timeline engine disposed");
    }
}
