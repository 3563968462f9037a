mod profile;
mod sampling;

pub use profile::{generate_curve, AirfoilProfile};
pub use sampling::{ChordSampling, DEFAULT_SAMPLE_COUNT};
