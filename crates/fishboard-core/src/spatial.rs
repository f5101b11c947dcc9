use crate::fish::{Predator, Prey};
use rstar::{RTree, RTreeObject, AABB};

/// Footprint rectangle of one prey, tagged with its index into the board's
/// prey vector. Owns its coordinates so the tree never aliases the fish.
#[derive(Clone, Debug)]
pub struct PreyFootprint {
    pub index: usize,
    lower: [f64; 2],
    upper: [f64; 2],
}

impl PreyFootprint {
    fn of(index: usize, prey: &Prey) -> Self {
        let half_w = prey.size().width / 2.0;
        let half_h = prey.size().height / 2.0;
        Self {
            index,
            lower: [prey.x() - half_w, prey.y() - half_h],
            upper: [prey.x() + half_w, prey.y() + half_h],
        }
    }
}

impl RTreeObject for PreyFootprint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.lower, self.upper)
    }
}

/// Build an R*-tree over prey footprints via bulk_load (O(n log n)).
pub fn build_index(prey: &[Prey]) -> RTree<PreyFootprint> {
    let footprints: Vec<PreyFootprint> = prey
        .iter()
        .enumerate()
        .map(|(index, p)| PreyFootprint::of(index, p))
        .collect();
    RTree::bulk_load(footprints)
}

/// Indices of all prey whose footprint overlaps the predator's, shared edges
/// included. Returned sorted so feeding credit does not depend on tree order.
pub fn overlapping(tree: &RTree<PreyFootprint>, predator: &Predator) -> Vec<usize> {
    let half_w = predator.size().width / 2.0;
    let half_h = predator.size().height / 2.0;
    let envelope = AABB::from_corners(
        [predator.x() - half_w, predator.y() - half_h],
        [predator.x() + half_w, predator.y() + half_h],
    );
    let mut indices: Vec<usize> = tree
        .locate_in_envelope_intersecting(&envelope)
        .map(|footprint| footprint.index)
        .collect();
    indices.sort_unstable();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Location, Size};

    const PREY_SIZE: Size = Size::new(1.0, 1.0);
    const PREDATOR_SIZE: Size = Size::new(2.5, 2.5);

    fn prey_row(xs: &[f64]) -> Vec<Prey> {
        xs.iter()
            .map(|&x| Prey::at(Location::new(x, 5.0), PREY_SIZE))
            .collect()
    }

    #[test]
    fn overlapping_matches_exact_touch_test() {
        let prey = prey_row(&[1.0, 3.0, 5.0, 6.7, 9.0, 14.0]);
        let tree = build_index(&prey);
        let predator = Predator::at(Location::new(5.0, 5.0), PREDATOR_SIZE);

        let from_tree = overlapping(&tree, &predator);
        let brute_force: Vec<usize> = prey
            .iter()
            .enumerate()
            .filter(|(_, p)| predator.touches(p))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(from_tree, brute_force);
        assert!(!from_tree.is_empty());
    }

    #[test]
    fn overlapping_includes_shared_edge() {
        // Margin on x is (2.5 + 1.0) / 2 = 1.75: centers exactly 1.75 apart touch.
        let prey = prey_row(&[6.75]);
        let tree = build_index(&prey);
        let predator = Predator::at(Location::new(5.0, 5.0), PREDATOR_SIZE);
        assert_eq!(overlapping(&tree, &predator), vec![0]);
    }

    #[test]
    fn overlapping_empty_for_distant_predator() {
        let prey = prey_row(&[1.0, 2.0]);
        let tree = build_index(&prey);
        let predator = Predator::at(Location::new(15.0, 5.0), PREDATOR_SIZE);
        assert!(overlapping(&tree, &predator).is_empty());
    }

    #[test]
    fn empty_index_yields_no_candidates() {
        let tree = build_index(&[]);
        let predator = Predator::at(Location::new(5.0, 5.0), PREDATOR_SIZE);
        assert!(overlapping(&tree, &predator).is_empty());
    }
}
