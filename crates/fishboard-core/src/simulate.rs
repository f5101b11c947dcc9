use crate::board::{Board, BoardInitError};
use crate::config::BoardConfig;
use crate::metrics::{FrameSnapshot, StepRecord};
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum SimulateError {
    /// `time_steps` must be at least 1.
    InvalidTimeSteps { actual: usize },
    Board(BoardInitError),
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulateError::InvalidTimeSteps { actual } => {
                write!(f, "must simulate for at least one time step, got {actual}")
            }
            SimulateError::Board(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SimulateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimulateError::InvalidTimeSteps { .. } => None,
            SimulateError::Board(e) => Some(e),
        }
    }
}

impl From<BoardInitError> for SimulateError {
    fn from(e: BoardInitError) -> Self {
        SimulateError::Board(e)
    }
}

/// Run one simulation: step a fresh board `time_steps` times and collect one
/// record per tick. Purely sequential; each step depends on the previous
/// generation's children.
pub fn simulate(config: BoardConfig, time_steps: usize) -> Result<Vec<StepRecord>, SimulateError> {
    simulate_with_observer(config, time_steps, |_| {})
}

/// Like [`simulate`], but hands a read-only frame to `observer` after every
/// tick — the hook for an external renderer. The observer cannot influence
/// simulation state.
pub fn simulate_with_observer(
    config: BoardConfig,
    time_steps: usize,
    mut observer: impl FnMut(&FrameSnapshot),
) -> Result<Vec<StepRecord>, SimulateError> {
    if time_steps < 1 {
        return Err(SimulateError::InvalidTimeSteps { actual: time_steps });
    }
    let mut board = Board::new(config)?;
    let mut records = Vec::with_capacity(time_steps);
    for step in 1..=time_steps {
        let counts = board.step();
        observer(&board.snapshot());
        records.push(StepRecord {
            step,
            prey_spawned: board.prey().len() as u32,
            predators_spawned: board.predators().len() as u32,
            prey_eaten: board.prey().iter().filter(|p| p.got_eaten()).count() as u32,
            prey_survivors: counts.prey_survivors,
            predator_survivors: counts.predator_survivors,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardInitError;
    use crate::config::BoardConfigError;

    #[test]
    fn rejects_zero_time_steps() {
        assert_eq!(
            simulate(BoardConfig::default(), 0),
            Err(SimulateError::InvalidTimeSteps { actual: 0 })
        );
    }

    #[test]
    fn propagates_board_construction_errors() {
        let config = BoardConfig {
            starting_prey: 0,
            ..BoardConfig::default()
        };
        assert!(matches!(
            simulate(config, 10),
            Err(SimulateError::Board(BoardInitError::Config(
                BoardConfigError::InvalidStartingPrey
            )))
        ));
    }

    #[test]
    fn produces_one_record_per_tick() {
        let records = simulate(BoardConfig::default(), 32).unwrap();
        assert_eq!(records.len(), 32);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.step, i + 1);
            assert!(record.prey_survivors <= record.prey_spawned);
            assert!(record.predator_survivors <= record.predators_spawned);
            assert!(record.prey_eaten <= record.prey_spawned);
        }
    }

    #[test]
    fn observer_sees_every_frame() {
        let mut frames = Vec::new();
        let records = simulate_with_observer(BoardConfig::default(), 8, |frame| {
            frames.push((frame.step, frame.prey.len(), frame.predators.len()));
        })
        .unwrap();
        assert_eq!(frames.len(), 8);
        for (record, (step, prey, predators)) in records.iter().zip(&frames) {
            assert_eq!(record.step, *step);
            assert_eq!(record.prey_spawned as usize, *prey);
            assert_eq!(record.predators_spawned as usize, *predators);
        }
    }

    #[test]
    fn same_config_is_reproducible() {
        let a = simulate(BoardConfig::default(), 64).unwrap();
        let b = simulate(BoardConfig::default(), 64).unwrap();
        assert_eq!(a, b);
    }
}
