use super::super::Board;

impl Board {
    /// Set `children` on every fish: prey with the density-adjusted rate,
    /// predators with the configured food requirement.
    pub(in crate::board) fn reproduction_phase(&mut self) {
        let rate = self.prey_rate();
        let food_requirement = self.config.predator_food_requirement;
        let Self {
            prey,
            predators,
            rng,
            ..
        } = self;
        for p in prey.iter_mut() {
            p.reproduce(rate, rng);
        }
        for p in predators.iter_mut() {
            p.reproduce(food_requirement);
        }
    }

    /// Effective prey reproduction rate for the current population density
    /// (discrete logistic analogue).
    ///
    /// Below `capacity / (1 + base)` the base rate applies; from there it
    /// falls as `capacity / count - 1`, reaching zero at capacity. The
    /// renewal clamp keeps the population at or below capacity, so the result
    /// stays within [0, base]; the lower clamp covers a re-seed floor that
    /// exceeds capacity.
    pub(in crate::board) fn prey_rate(&self) -> f64 {
        let base = self.config.prey_reproduction_rate;
        if !self.config.density_dependent_rate {
            return base;
        }
        let count = self.prey.len() as f64;
        let capacity = f64::from(self.config.prey_capacity);
        if count < capacity / (1.0 + base) {
            base
        } else {
            (capacity / count - 1.0).max(0.0)
        }
    }
}
