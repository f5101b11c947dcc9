use crate::config::BoardConfig;

/// Closed-form expected-population companion to the agent-based board.
///
/// Replaces the stochastic placement and feeding with their expectations: the
/// probability that one predator touches one freshly placed prey is the
/// product of the per-axis overlap fractions, and each prey escapes all
/// predators independently. Useful as an analytic cross-check of the agent
/// model's long-run behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifferenceModel {
    base_rate: f64,
    capacity: f64,
    /// Prey population above which the reproduction rate starts to fall.
    rate_margin: f64,
    /// Probability that a predator and a prey, both placed uniformly, touch.
    prey_predator_overlap: f64,
    /// Probability that two predators are close enough to contest prey.
    predator_predator_overlap: f64,
    food_requirement: f64,
    prey_floor: f64,
    predator_floor: f64,
}

impl DifferenceModel {
    /// Derive the model constants from a board configuration. The caller is
    /// expected to have validated the configuration first.
    pub fn from_config(config: &BoardConfig) -> Self {
        let overlap_x = (config.prey_size.width + config.predator_size.width) / config.arena.width;
        let overlap_y =
            (config.prey_size.height + config.predator_size.height) / config.arena.height;
        let prey_predator_overlap = (overlap_x * overlap_y).min(1.0);
        let base_rate = config.prey_reproduction_rate;
        let capacity = f64::from(config.prey_capacity);
        Self {
            base_rate,
            capacity,
            rate_margin: capacity / (1.0 + base_rate),
            prey_predator_overlap,
            predator_predator_overlap: prey_predator_overlap * prey_predator_overlap,
            food_requirement: f64::from(config.predator_food_requirement),
            prey_floor: f64::from(config.starting_prey),
            predator_floor: f64::from(config.starting_predators),
        }
    }

    pub fn prey_predator_overlap(&self) -> f64 {
        self.prey_predator_overlap
    }

    /// Expected prey population one tick ahead: density-adjusted growth times
    /// the probability of escaping every predator, floored at the re-seed
    /// population.
    pub fn next_prey(&self, prey: f64, predators: f64) -> f64 {
        let rate = if prey < self.rate_margin {
            self.base_rate
        } else {
            self.capacity / prey - 1.0
        };
        let survival = (1.0 - self.prey_predator_overlap).powf(predators);
        ((1.0 + rate) * prey * survival).max(self.prey_floor)
    }

    /// Expected predator population one tick ahead: expected catch divided by
    /// the food requirement, discounted by predator self-competition, floored
    /// at the re-seed population.
    pub fn next_predators(&self, prey: f64, predators: f64) -> f64 {
        let caught = prey * (1.0 - (1.0 - self.prey_predator_overlap).powf(predators));
        let self_competition = (1.0 - self.predator_predator_overlap).powf(predators);
        ((caught / self.food_requirement) * self_competition).max(self.predator_floor)
    }

    pub fn step(&self, populations: (f64, f64)) -> (f64, f64) {
        let (prey, predators) = populations;
        (
            self.next_prey(prey, predators),
            self.next_predators(prey, predators),
        )
    }

    /// Iterate from a starting population pair, returning the full trajectory
    /// including the starting point (`time_steps + 1` entries).
    pub fn iterate(&self, start: (f64, f64), time_steps: usize) -> Vec<(f64, f64)> {
        let mut trajectory = Vec::with_capacity(time_steps + 1);
        let mut current = start;
        trajectory.push(current);
        for _ in 0..time_steps {
            current = self.step(current);
            trajectory.push(current);
        }
        trajectory
    }
}
