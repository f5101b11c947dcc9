use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Full parameter set for one board run.
///
/// Defaults reproduce the reference scenario: a 17x11 bay, 1x1 prey with a
/// carrying capacity of 75, 2.5x2.5 predators that need 3 meals to produce
/// one child, and re-seed floors of 3 prey and 1 predator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Deterministic seed for reproducible runs.
    pub seed: u64,
    /// Width/height of the rectangular arena in board units.
    pub arena: Size,
    /// Footprint of every prey fish.
    pub prey_size: Size,
    /// Footprint of every predator fish.
    pub predator_size: Size,
    /// Prey population spawned when the previous generation left no children.
    pub starting_prey: u32,
    /// Predator population spawned when the previous generation left no children.
    pub starting_predators: u32,
    /// Carrying capacity for prey, enforced by clamping the spawn count.
    pub prey_capacity: u32,
    /// Optional carrying capacity for predators. `None` leaves them unbounded.
    pub predator_capacity: Option<u32>,
    /// Probability that an uneaten prey has two children instead of one.
    pub prey_reproduction_rate: f64,
    /// Prey a predator must eat per child (integer floor division).
    pub predator_food_requirement: u32,
    /// Optional fishery pressure: each prey that survives the feeding phase
    /// is independently removed with this probability.
    pub fishery: Option<f64>,
    /// Shrink the prey reproduction rate as the population nears capacity
    /// (discrete logistic analogue). When false the base rate always applies.
    pub density_dependent_rate: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            arena: Size::new(17.0, 11.0),
            prey_size: Size::new(1.0, 1.0),
            predator_size: Size::new(2.5, 2.5),
            starting_prey: 3,
            starting_predators: 1,
            prey_capacity: 75,
            predator_capacity: None,
            prey_reproduction_rate: 0.5,
            predator_food_requirement: 3,
            fishery: None,
            density_dependent_rate: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardConfigError {
    InvalidArena,
    InvalidPreySize,
    InvalidPredatorSize,
    InvalidStartingPrey,
    InvalidStartingPredators,
    InvalidPreyCapacity,
    InvalidPredatorCapacity,
    InvalidReproductionRate { actual: f64 },
    InvalidFoodRequirement,
    InvalidFishery { actual: f64 },
}

impl fmt::Display for BoardConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardConfigError::InvalidArena => {
                write!(f, "arena dimensions must be positive and finite")
            }
            BoardConfigError::InvalidPreySize => {
                write!(f, "prey footprint dimensions must be positive and finite")
            }
            BoardConfigError::InvalidPredatorSize => {
                write!(f, "predator footprint dimensions must be positive and finite")
            }
            BoardConfigError::InvalidStartingPrey => {
                write!(f, "starting_prey must be positive")
            }
            BoardConfigError::InvalidStartingPredators => {
                write!(f, "starting_predators must be positive")
            }
            BoardConfigError::InvalidPreyCapacity => {
                write!(f, "prey_capacity must be positive")
            }
            BoardConfigError::InvalidPredatorCapacity => {
                write!(f, "predator_capacity must be positive when set")
            }
            BoardConfigError::InvalidReproductionRate { actual } => {
                write!(f, "prey_reproduction_rate must be in [0, 1], got {actual}")
            }
            BoardConfigError::InvalidFoodRequirement => {
                write!(f, "predator_food_requirement must be positive")
            }
            BoardConfigError::InvalidFishery { actual } => {
                write!(f, "fishery must be in [0, 1] when set, got {actual}")
            }
        }
    }
}

impl Error for BoardConfigError {}

impl BoardConfig {
    /// Check every construction-time invariant. All violations surface here,
    /// before any stepping occurs; `Board::step` itself is infallible.
    pub fn validate(&self) -> Result<(), BoardConfigError> {
        self.validate_geometry()?;
        self.validate_populations()?;
        self.validate_rules()?;
        Ok(())
    }

    fn validate_geometry(&self) -> Result<(), BoardConfigError> {
        if !self.arena.is_valid() {
            return Err(BoardConfigError::InvalidArena);
        }
        if !self.prey_size.is_valid() {
            return Err(BoardConfigError::InvalidPreySize);
        }
        if !self.predator_size.is_valid() {
            return Err(BoardConfigError::InvalidPredatorSize);
        }
        Ok(())
    }

    fn validate_populations(&self) -> Result<(), BoardConfigError> {
        if self.starting_prey == 0 {
            return Err(BoardConfigError::InvalidStartingPrey);
        }
        if self.starting_predators == 0 {
            return Err(BoardConfigError::InvalidStartingPredators);
        }
        if self.prey_capacity == 0 {
            return Err(BoardConfigError::InvalidPreyCapacity);
        }
        if self.predator_capacity == Some(0) {
            return Err(BoardConfigError::InvalidPredatorCapacity);
        }
        Ok(())
    }

    fn validate_rules(&self) -> Result<(), BoardConfigError> {
        let rate = self.prey_reproduction_rate;
        if !(rate.is_finite() && (0.0..=1.0).contains(&rate)) {
            return Err(BoardConfigError::InvalidReproductionRate { actual: rate });
        }
        if self.predator_food_requirement == 0 {
            return Err(BoardConfigError::InvalidFoodRequirement);
        }
        if let Some(fishery) = self.fishery {
            if !(fishery.is_finite() && (0.0..=1.0).contains(&fishery)) {
                return Err(BoardConfigError::InvalidFishery { actual: fishery });
            }
        }
        Ok(())
    }
}
