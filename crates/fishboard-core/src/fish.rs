use crate::geometry::{Location, Size};
use rand::Rng;

/// A fish that gets eaten.
///
/// Every generation is spawned fresh at the start of a step and discarded at
/// the end of it; only the survivor counts persist. `got_eaten` is monotone
/// within a step (false to true, never reset) and forces `children` to zero.
#[derive(Clone, Debug)]
pub struct Prey {
    size: Size,
    location: Location,
    children: u32,
    got_eaten: bool,
}

impl Prey {
    pub fn at(location: Location, size: Size) -> Self {
        Self {
            size,
            location,
            children: 0,
            got_eaten: false,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn x(&self) -> f64 {
        self.location.x
    }

    pub fn y(&self) -> f64 {
        self.location.y
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn got_eaten(&self) -> bool {
        self.got_eaten
    }

    pub(crate) fn mark_eaten(&mut self) {
        self.got_eaten = true;
    }

    /// One or two children depending on the reproduction rate, zero if eaten.
    ///
    /// P(children = 2) = `rate` for an uneaten prey. The rate is validated at
    /// board construction; the capacity clamp keeps the density-adjusted rate
    /// inside [0, 1] as well.
    pub(crate) fn reproduce(&mut self, rate: f64, rng: &mut impl Rng) {
        debug_assert!((0.0..=1.0).contains(&rate), "rate {rate} out of range");
        self.children = if self.got_eaten {
            0
        } else if rng.random::<f64>() < rate {
            2
        } else {
            1
        };
    }
}

/// A fish that eats.
#[derive(Clone, Debug)]
pub struct Predator {
    size: Size,
    location: Location,
    children: u32,
    num_eaten: u32,
}

impl Predator {
    pub fn at(location: Location, size: Size) -> Self {
        Self {
            size,
            location,
            children: 0,
            num_eaten: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn x(&self) -> f64 {
        self.location.x
    }

    pub fn y(&self) -> f64 {
        self.location.y
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn num_eaten(&self) -> u32 {
        self.num_eaten
    }

    /// Axis-aligned bounding-box overlap of the two centered rectangles.
    /// Shared edges count as touching.
    pub fn touches(&self, prey: &Prey) -> bool {
        let x_delta = (self.x() - prey.x()).abs();
        let x_margin = (self.size.width + prey.size().width) / 2.0;

        let y_delta = (self.y() - prey.y()).abs();
        let y_margin = (self.size.height + prey.size().height) / 2.0;

        x_delta <= x_margin && y_delta <= y_margin
    }

    pub(crate) fn set_num_eaten(&mut self, count: u32) {
        self.num_eaten = count;
    }

    /// One child per `food_requirement` prey eaten, rounded down.
    pub(crate) fn reproduce(&mut self, food_requirement: u32) {
        debug_assert!(food_requirement > 0, "food requirement must be positive");
        self.children = self.num_eaten / food_requirement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const UNIT: Size = Size::new(1.0, 1.0);
    const PREDATOR: Size = Size::new(2.5, 2.5);

    fn prey_at(x: f64, y: f64) -> Prey {
        Prey::at(Location::new(x, y), UNIT)
    }

    fn predator_at(x: f64, y: f64) -> Predator {
        Predator::at(Location::new(x, y), PREDATOR)
    }

    #[test]
    fn touches_overlapping_rectangles() {
        let predator = predator_at(5.0, 5.0);
        assert!(predator.touches(&prey_at(5.0, 5.0)));
        assert!(predator.touches(&prey_at(6.0, 5.5)));
    }

    #[test]
    fn touches_counts_shared_edges() {
        // Margins are (2.5 + 1.0) / 2 = 1.75 on both axes.
        let predator = predator_at(5.0, 5.0);
        assert!(predator.touches(&prey_at(6.75, 5.0)));
        assert!(predator.touches(&prey_at(5.0, 3.25)));
        assert!(predator.touches(&prey_at(6.75, 6.75)));
    }

    #[test]
    fn touches_false_beyond_margins() {
        let predator = predator_at(5.0, 5.0);
        assert!(!predator.touches(&prey_at(6.76, 5.0)));
        assert!(!predator.touches(&prey_at(5.0, 7.0)));
        assert!(!predator.touches(&prey_at(10.0, 10.0)));
    }

    #[test]
    fn touches_is_symmetric_in_coordinates() {
        // Swapping which fish sits where must not change the verdict.
        for (ax, ay, bx, by) in [(3.0, 4.0, 4.5, 4.2), (1.0, 1.0, 9.0, 9.0)] {
            let forward = predator_at(ax, ay).touches(&prey_at(bx, by));
            let swapped = predator_at(bx, by).touches(&prey_at(ax, ay));
            assert_eq!(forward, swapped);
        }
    }

    #[test]
    fn predator_children_is_floor_division() {
        let cases = [(0, 0), (2, 0), (3, 1), (5, 1), (8, 2), (9, 3)];
        for (eaten, expected) in cases {
            let mut predator = predator_at(5.0, 5.0);
            predator.set_num_eaten(eaten);
            predator.reproduce(3);
            assert_eq!(predator.children(), expected, "eaten = {eaten}");
        }
    }

    #[test]
    fn eaten_prey_has_zero_children() {
        let mut rng = ChaCha12Rng::seed_from_u64(0);
        for _ in 0..100 {
            let mut prey = prey_at(5.0, 5.0);
            prey.mark_eaten();
            prey.reproduce(1.0, &mut rng);
            assert_eq!(prey.children(), 0);
        }
    }

    #[test]
    fn uneaten_prey_has_one_or_two_children() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let mut saw_one = false;
        let mut saw_two = false;
        for _ in 0..200 {
            let mut prey = prey_at(5.0, 5.0);
            prey.reproduce(0.5, &mut rng);
            assert!(prey.children() == 1 || prey.children() == 2);
            saw_one |= prey.children() == 1;
            saw_two |= prey.children() == 2;
        }
        assert!(saw_one && saw_two, "rate 0.5 should produce both outcomes");
    }

    #[test]
    fn reproduction_rate_extremes_are_deterministic() {
        let mut rng = ChaCha12Rng::seed_from_u64(2);
        for _ in 0..50 {
            let mut prey = prey_at(5.0, 5.0);
            prey.reproduce(0.0, &mut rng);
            assert_eq!(prey.children(), 1);

            let mut prey = prey_at(5.0, 5.0);
            prey.reproduce(1.0, &mut rng);
            assert_eq!(prey.children(), 2);
        }
    }
}
