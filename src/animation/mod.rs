//! Frame-driven animations: count-up counters and the particle background.
mod counter;
mod particles;
mod ticker;

pub use counter::{COUNTER_DURATION, CounterAnimation};
pub use particles::{LINK_DISTANCE, Link, PARTICLE_COUNT, Particle, ParticleField, REPEL_RADIUS};
pub use ticker::{Animation, Frame, Ticker, drive};
