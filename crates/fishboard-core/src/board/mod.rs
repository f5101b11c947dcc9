use crate::config::{BoardConfig, BoardConfigError};
use crate::fish::{Predator, Prey};
use crate::metrics::FrameSnapshot;
use crate::placement::{Placement, PlacementError};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::{error::Error, fmt};

/// Survivor counts returned by [`Board::step`]: fish that produced at least
/// one child this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounts {
    pub prey_survivors: u32,
    pub predator_survivors: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardInitError {
    Config(BoardConfigError),
    PreyPlacement(PlacementError),
    PredatorPlacement(PlacementError),
}

impl fmt::Display for BoardInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardInitError::Config(e) => write!(f, "invalid configuration: {e}"),
            BoardInitError::PreyPlacement(e) => write!(f, "prey do not fit the arena: {e}"),
            BoardInitError::PredatorPlacement(e) => {
                write!(f, "predators do not fit the arena: {e}")
            }
        }
    }
}

impl Error for BoardInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoardInitError::Config(e) => Some(e),
            BoardInitError::PreyPlacement(e) | BoardInitError::PredatorPlacement(e) => Some(e),
        }
    }
}

impl From<BoardConfigError> for BoardInitError {
    fn from(e: BoardConfigError) -> Self {
        BoardInitError::Config(e)
    }
}

/// The simulation core: owns one generation of prey and predators at a time.
///
/// Each [`step`](Board::step) replaces both populations wholesale; survival is
/// counted, never tracked by fish identity. Both population vectors start
/// empty, so the very first step bootstraps through the zero-children re-seed
/// branch without special-casing.
pub struct Board {
    config: BoardConfig,
    prey_placement: Placement,
    predator_placement: Placement,
    prey: Vec<Prey>,
    predators: Vec<Predator>,
    rng: ChaCha12Rng,
    step_index: usize,
}

impl Board {
    /// Validate the configuration and the footprint fits, then build an empty
    /// board. Every construction-time invariant is checked here; after this,
    /// stepping cannot fail.
    pub fn new(config: BoardConfig) -> Result<Self, BoardInitError> {
        config.validate()?;
        let prey_placement = Placement::new(config.arena, config.prey_size)
            .map_err(BoardInitError::PreyPlacement)?;
        let predator_placement = Placement::new(config.arena, config.predator_size)
            .map_err(BoardInitError::PredatorPlacement)?;
        let rng = ChaCha12Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            prey_placement,
            predator_placement,
            prey: Vec::new(),
            predators: Vec::new(),
            rng,
            step_index: 0,
        })
    }

    /// Advance one discrete tick: renew both populations from the previous
    /// generation's children, feed, apply fishery pressure, reproduce, and
    /// count survivors.
    ///
    /// Predators feed in spawn order; a prey touched by several predators is
    /// credited to the earliest-spawned one.
    pub fn step(&mut self) -> StepCounts {
        self.step_index += 1;
        self.renew_prey();
        self.renew_predators();
        self.feeding_phase();
        self.fishery_phase();
        self.reproduction_phase();
        self.count_survivors()
    }

    fn count_survivors(&self) -> StepCounts {
        StepCounts {
            prey_survivors: self.prey.iter().filter(|p| p.children() > 0).count() as u32,
            predator_survivors: self.predators.iter().filter(|p| p.children() > 0).count() as u32,
        }
    }

    /// Read-only view for the external rendering collaborator.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::of(self)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn prey(&self) -> &[Prey] {
        &self.prey
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    /// Number of completed steps (0 before the first tick).
    pub fn step_index(&self) -> usize {
        self.step_index
    }
}

mod phases;
