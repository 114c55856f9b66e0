//! Deterministic synthetic price series.
//!
//! Four shapes: random walk, sine-wave oscillation, flash crash, and
//! parabolic rise. Each generator returns a finished series with every
//! element already rounded to price precision. The random walk takes an
//! explicit seed and builds its own generator instance per call, so no
//! case's output depends on which cases ran before it.

pub mod flash_crash;
pub mod parabolic;
pub mod random_walk;
pub mod sine_wave;

pub use flash_crash::generate_flash_crash;
pub use parabolic::generate_parabolic;
pub use random_walk::generate_random_walk;
pub use sine_wave::generate_sine_wave;
