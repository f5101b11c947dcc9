use super::super::Board;
use crate::fish::{Predator, Prey};
use log::debug;

impl Board {
    /// Replace the prey population: the summed children of the outgoing
    /// generation, clamped to capacity, or the re-seed floor when the previous
    /// generation left no children at all.
    pub(in crate::board) fn renew_prey(&mut self) {
        let brood: u32 = self.prey.iter().map(|p| p.children()).sum();
        let count = if brood == 0 {
            self.config.starting_prey
        } else {
            brood.min(self.config.prey_capacity)
        };
        debug!(
            "step {}: spawning {count} prey (brood {brood})",
            self.step_index
        );
        let placement = self.prey_placement;
        let size = self.config.prey_size;
        self.prey = (0..count)
            .map(|_| Prey::at(placement.sample(&mut self.rng), size))
            .collect();
    }

    /// Replace the predator population. Unbounded unless a predator capacity
    /// is configured.
    pub(in crate::board) fn renew_predators(&mut self) {
        let brood: u32 = self.predators.iter().map(|p| p.children()).sum();
        let count = if brood == 0 {
            self.config.starting_predators
        } else {
            match self.config.predator_capacity {
                Some(capacity) => brood.min(capacity),
                None => brood,
            }
        };
        debug!(
            "step {}: spawning {count} predators (brood {brood})",
            self.step_index
        );
        let placement = self.predator_placement;
        let size = self.config.predator_size;
        self.predators = (0..count)
            .map(|_| Predator::at(placement.sample(&mut self.rng), size))
            .collect();
    }
}
