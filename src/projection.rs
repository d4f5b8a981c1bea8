use crate::data::model::{Attribute, Domain, DomainBounds, Record};

// ---------------------------------------------------------------------------
// Projection – one attribute pair on screen
// ---------------------------------------------------------------------------

/// One scatter projection: which attribute is plotted on each axis. Axis
/// labels come from the attributes, axis domains from the dataset's cached
/// [`DomainBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub x: Attribute,
    pub y: Attribute,
}

impl Projection {
    /// A record's position under this projection.
    pub fn point(&self, record: &Record) -> [f64; 2] {
        [self.x.value(record), self.y.value(record)]
    }

    pub fn x_domain(&self, bounds: &DomainBounds) -> Domain {
        bounds.domain(self.x)
    }

    pub fn y_domain(&self, bounds: &DomainBounds) -> Domain {
        bounds.domain(self.y)
    }
}

/// The fixed tour of attribute pairs, in cycling order. Defined once, never
/// mutated.
pub const PROJECTIONS: [Projection; 4] = [
    Projection {
        x: Attribute::SepalWidth,
        y: Attribute::SepalLength,
    },
    Projection {
        x: Attribute::PetalWidth,
        y: Attribute::PetalLength,
    },
    Projection {
        x: Attribute::SepalWidth,
        y: Attribute::PetalWidth,
    },
    Projection {
        x: Attribute::SepalLength,
        y: Attribute::PetalLength,
    },
];

// ---------------------------------------------------------------------------
// ProjectionCycler – the cycle state
// ---------------------------------------------------------------------------

/// Cycles through [`PROJECTIONS`] on each trigger event. The index is always
/// a valid table index; the only mutator is [`ProjectionCycler::advance`].
#[derive(Debug, Clone, Default)]
pub struct ProjectionCycler {
    index: usize,
}

impl ProjectionCycler {
    /// Start at the first projection.
    pub fn new() -> Self {
        ProjectionCycler { index: 0 }
    }

    /// The active projection. Does not mutate.
    pub fn current(&self) -> Projection {
        PROJECTIONS[self.index]
    }

    /// Advance to the next projection, wrapping after the last, and return
    /// the new entry.
    pub fn advance(&mut self) -> Projection {
        self.index = (self.index + 1) % PROJECTIONS.len();
        self.current()
    }

    /// The raw cycle state, in `0..PROJECTIONS.len()`.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_advances_return_to_start() {
        let mut cycler = ProjectionCycler::new();
        assert_eq!(cycler.index(), 0);
        for _ in 0..4 {
            cycler.advance();
        }
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.current(), PROJECTIONS[0]);
    }

    #[test]
    fn current_is_idempotent() {
        let cycler = ProjectionCycler::new();
        assert_eq!(cycler.current(), cycler.current());
        assert_eq!(cycler.index(), 0);
    }

    #[test]
    fn first_advance_lands_on_petal_pair() {
        let mut cycler = ProjectionCycler::new();
        let entry = cycler.advance();
        assert_eq!(cycler.index(), 1);
        assert_eq!(entry.x, Attribute::PetalWidth);
        assert_eq!(entry.y, Attribute::PetalLength);
    }

    #[test]
    fn table_matches_the_fixed_tour() {
        let pairs: Vec<(Attribute, Attribute)> =
            PROJECTIONS.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            pairs,
            [
                (Attribute::SepalWidth, Attribute::SepalLength),
                (Attribute::PetalWidth, Attribute::PetalLength),
                (Attribute::SepalWidth, Attribute::PetalWidth),
                (Attribute::SepalLength, Attribute::PetalLength),
            ]
        );
    }

    #[test]
    fn domains_come_from_cached_bounds() {
        let records = vec![
            Record {
                sepal_length: 5.0,
                sepal_width: 2.0,
                petal_length: 1.0,
                petal_width: 0.5,
                species: "setosa".to_string(),
            },
            Record {
                sepal_length: 6.0,
                sepal_width: 3.0,
                petal_length: 4.0,
                petal_width: 1.5,
                species: "versicolor".to_string(),
            },
        ];
        let bounds = DomainBounds::compute(&records);

        let first = PROJECTIONS[0];
        let x = first.x_domain(&bounds);
        let y = first.y_domain(&bounds);
        assert_eq!((x.min, x.max), (2.0, 3.0));
        assert_eq!((y.min, y.max), (5.0, 6.0));
    }

    #[test]
    fn projection_point_selects_the_pair() {
        let record = Record {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
            species: "setosa".to_string(),
        };
        assert_eq!(PROJECTIONS[0].point(&record), [3.5, 5.1]);
        assert_eq!(PROJECTIONS[1].point(&record), [0.2, 1.4]);
    }
}
