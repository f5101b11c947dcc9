use crate::board::Board;
use crate::config::BoardConfig;
use serde::{Deserialize, Serialize};

/// Per-tick accounting collected by the simulation driver.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StepRecord {
    pub step: usize,
    pub prey_spawned: u32,
    pub predators_spawned: u32,
    pub prey_eaten: u32,
    pub prey_survivors: u32,
    pub predator_survivors: u32,
}

fn default_schema_version() -> u32 {
    1
}

/// Serializable result of a whole run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub config: BoardConfig,
    pub time_steps: usize,
    pub records: Vec<StepRecord>,
}

impl RunSummary {
    pub fn new(config: BoardConfig, records: Vec<StepRecord>) -> Self {
        Self {
            schema_version: default_schema_version(),
            config,
            time_steps: records.len(),
            records,
        }
    }
}

/// Read-only view of one fish, enough for a renderer to position and color a
/// rectangle. No image format is implied here.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FishSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub eaten: bool,
    pub children: u32,
}

/// Read-only view of the whole board after one step, handed to the external
/// rendering collaborator. Has no influence on simulation state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub step: usize,
    pub prey: Vec<FishSnapshot>,
    pub predators: Vec<FishSnapshot>,
}

impl FrameSnapshot {
    pub fn of(board: &Board) -> Self {
        Self {
            step: board.step_index(),
            prey: board
                .prey()
                .iter()
                .map(|p| FishSnapshot {
                    x: p.x(),
                    y: p.y(),
                    width: p.size().width,
                    height: p.size().height,
                    eaten: p.got_eaten(),
                    children: p.children(),
                })
                .collect(),
            predators: board
                .predators()
                .iter()
                .map(|p| FishSnapshot {
                    x: p.x(),
                    y: p.y(),
                    width: p.size().width,
                    height: p.size().height,
                    eaten: false,
                    children: p.children(),
                })
                .collect(),
        }
    }
}
