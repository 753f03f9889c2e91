pub mod event;
pub mod layout;
pub mod line_target;
pub mod particles;
pub mod smoothing;
pub mod time_range;
pub mod types;
pub mod year_line;

pub use event::{DEFAULT_EVENT_INTENSITY, EventDataset, EventKind, EventRecord};
pub use layout::{LayoutConfig, TimelineLayout};
pub use line_target::{
    FLASH_BOOST, FLASH_PROBABILITY, FocusConfig, HoverRelation, LineTarget, LineTargetInput,
    ambient_intensity, compute_line_target,
};
pub use particles::{Particle, ParticleField};
pub use smoothing::{LineVisual, SmoothedStateTracker, SmoothingConfig};
pub use time_range::TimeRange;
pub use types::Viewport;
pub use year_line::{YearLine, YearSeedTable, YearSeeds, build_year_lines};
