use crate::geometry::{Location, Size};
use rand::Rng;
use std::{error::Error, fmt};

/// Uniform sampler for fish centers that keeps the whole footprint inside
/// the arena: each axis draws from `[half_footprint, arena - half_footprint]`.
///
/// The fit check happens once, at construction; sampling is infallible and
/// consumes exactly two draws from the shared RNG, one per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    x_low: f64,
    x_high: f64,
    y_low: f64,
    y_high: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError {
    FootprintTooWide { footprint: f64, arena: f64 },
    FootprintTooTall { footprint: f64, arena: f64 },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::FootprintTooWide { footprint, arena } => {
                write!(f, "footprint width ({footprint}) exceeds arena width ({arena})")
            }
            PlacementError::FootprintTooTall { footprint, arena } => {
                write!(f, "footprint height ({footprint}) exceeds arena height ({arena})")
            }
        }
    }
}

impl Error for PlacementError {}

impl Placement {
    pub fn new(arena: Size, footprint: Size) -> Result<Self, PlacementError> {
        if footprint.width > arena.width {
            return Err(PlacementError::FootprintTooWide {
                footprint: footprint.width,
                arena: arena.width,
            });
        }
        if footprint.height > arena.height {
            return Err(PlacementError::FootprintTooTall {
                footprint: footprint.height,
                arena: arena.height,
            });
        }
        let x_margin = footprint.width / 2.0;
        let y_margin = footprint.height / 2.0;
        Ok(Self {
            x_low: x_margin,
            x_high: arena.width - x_margin,
            y_low: y_margin,
            y_high: arena.height - y_margin,
        })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Location {
        Location {
            x: rng.random_range(self.x_low..=self.x_high),
            y: rng.random_range(self.y_low..=self.y_high),
        }
    }
}
