use super::super::Board;
use crate::spatial;
use log::debug;
use rand::Rng;

impl Board {
    /// Let every predator claim the not-yet-eaten prey it touches.
    ///
    /// Predators are processed in spawn order, so a contested prey always
    /// goes to the earliest-spawned predator that touches it. Candidate prey
    /// come from an R*-tree envelope query; the exact `touches` predicate
    /// stays authoritative.
    pub(in crate::board) fn feeding_phase(&mut self) {
        let tree = spatial::build_index(&self.prey);
        let Self {
            prey, predators, ..
        } = self;
        let mut total_eaten = 0u32;
        for predator in predators.iter_mut() {
            let mut eaten = 0u32;
            for index in spatial::overlapping(&tree, predator) {
                let target = &mut prey[index];
                if !target.got_eaten() && predator.touches(target) {
                    target.mark_eaten();
                    eaten += 1;
                }
            }
            predator.set_num_eaten(eaten);
            total_eaten += eaten;
        }
        debug!("step {}: predators ate {total_eaten} prey", self.step_index);
    }

    /// One Bernoulli draw per prey that survived the feeding phase; applied
    /// before reproduction, so fished prey leave no children.
    pub(in crate::board) fn fishery_phase(&mut self) {
        let Some(fraction) = self.config.fishery else {
            return;
        };
        let mut removed = 0u32;
        for prey in self.prey.iter_mut() {
            if !prey.got_eaten() && self.rng.random::<f64>() < fraction {
                prey.mark_eaten();
                removed += 1;
            }
        }
        debug!("step {}: fishery removed {removed} prey", self.step_index);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Board;
    use crate::config::BoardConfig;
    use crate::fish::{Predator, Prey};
    use crate::geometry::{Location, Size};

    fn empty_board(config: BoardConfig) -> Board {
        Board::new(config).unwrap()
    }

    fn prey_at(x: f64, y: f64) -> Prey {
        Prey::at(Location::new(x, y), Size::new(1.0, 1.0))
    }

    fn predator_at(x: f64, y: f64) -> Predator {
        Predator::at(Location::new(x, y), Size::new(2.5, 2.5))
    }

    #[test]
    fn predator_eats_every_touching_prey() {
        let mut board = empty_board(BoardConfig::default());
        board.prey = vec![prey_at(5.0, 5.0), prey_at(6.0, 5.0), prey_at(15.0, 5.0)];
        board.predators = vec![predator_at(5.5, 5.0)];

        board.feeding_phase();

        assert_eq!(board.predators[0].num_eaten(), 2);
        assert!(board.prey[0].got_eaten());
        assert!(board.prey[1].got_eaten());
        assert!(!board.prey[2].got_eaten());
    }

    #[test]
    fn contested_prey_goes_to_earliest_spawned_predator() {
        let mut board = empty_board(BoardConfig::default());
        board.prey = vec![prey_at(8.0, 5.0)];
        board.predators = vec![predator_at(7.5, 5.0), predator_at(8.5, 5.0)];

        board.feeding_phase();

        assert_eq!(board.predators[0].num_eaten(), 1);
        assert_eq!(board.predators[1].num_eaten(), 0);
        assert!(board.prey[0].got_eaten());
    }

    #[test]
    fn already_eaten_prey_is_not_counted_again() {
        let mut board = empty_board(BoardConfig::default());
        board.prey = vec![prey_at(8.0, 5.0), prey_at(9.0, 5.0)];
        board.prey[0].mark_eaten();
        board.predators = vec![predator_at(8.5, 5.0)];

        board.feeding_phase();

        assert_eq!(board.predators[0].num_eaten(), 1);
    }

    #[test]
    fn fishery_of_one_removes_all_survivors() {
        let config = BoardConfig {
            fishery: Some(1.0),
            ..BoardConfig::default()
        };
        let mut board = empty_board(config);
        board.prey = vec![prey_at(2.0, 2.0), prey_at(9.0, 9.0), prey_at(14.0, 3.0)];

        board.fishery_phase();

        assert!(board.prey.iter().all(|p| p.got_eaten()));
    }

    #[test]
    fn fishery_of_zero_removes_nothing() {
        let config = BoardConfig {
            fishery: Some(0.0),
            ..BoardConfig::default()
        };
        let mut board = empty_board(config);
        board.prey = vec![prey_at(2.0, 2.0), prey_at(9.0, 9.0)];

        board.fishery_phase();

        assert!(board.prey.iter().all(|p| !p.got_eaten()));
    }

    #[test]
    fn no_fishery_configured_is_a_no_op() {
        let mut board = empty_board(BoardConfig::default());
        board.prey = vec![prey_at(2.0, 2.0)];

        board.fishery_phase();

        assert!(!board.prey[0].got_eaten());
    }
}
