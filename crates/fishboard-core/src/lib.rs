pub mod board;
pub mod config;
pub mod equations;
pub mod fish;
pub mod geometry;
pub mod metrics;
pub mod placement;
pub mod simulate;
pub mod spatial;

pub use board::{Board, BoardInitError, StepCounts};
pub use config::{BoardConfig, BoardConfigError};
pub use metrics::{FishSnapshot, FrameSnapshot, RunSummary, StepRecord};
pub use simulate::{simulate, simulate_with_observer, SimulateError};
