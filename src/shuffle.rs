use rand::prelude::{SliceRandom, SeedableRng};
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::action::{PlacementError, ShuffleError};
use crate::audit::{self, ViolationReport};
use crate::grid::{Grid, Index};
use crate::model::condition::Condition;
use crate::model::entity::Person;
use crate::placer::GreedyPlacer;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone)]
pub struct Params {
    pub rows: Index,
    pub cols: Index,
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Params {
    pub fn new(rows: Index, cols: Index) -> Params {
        Params { rows, cols, max_attempts: DEFAULT_MAX_ATTEMPTS, seed: None }
    }
}

/// Fisher-Yates over one working copy of the roster. The generator is seeded
/// once and keeps advancing, so every call yields a fresh ordering.
pub struct OrderGenerator {
    people: Vec<Person>,
    rng: SmallRng,
    drawn: usize,
}

impl OrderGenerator {
    pub fn new(people: Vec<Person>, seed: u64) -> OrderGenerator {
        OrderGenerator { people, rng: SmallRng::seed_from_u64(seed), drawn: 0 }
    }

    pub fn next(&mut self) -> &[Person] {
        self.people.shuffle(&mut self.rng);
        self.drawn += 1;
        &self.people
    }

    /// Orderings handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

#[derive(Debug, Clone)]
pub struct Arrangement {
    pub grid: Grid,
    /// 1-based index of the attempt that produced `grid`.
    pub attempt: usize,
    /// Seed the whole run was driven by.
    pub seed: u64,
}

pub struct SeatingShuffler {
    params: Params,
    seed: u64,
    condition: Condition,
    generator: OrderGenerator,
    grid: Grid,
}

impl SeatingShuffler {
    pub fn new(params: Params, people: Vec<Person>, condition: Condition) -> SeatingShuffler {
        let seed = params.seed.unwrap_or_else(rand::random);
        let grid = Grid::new(params.rows, params.cols);
        let generator = OrderGenerator::new(people, seed);
        SeatingShuffler { params, seed, condition, generator, grid }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Attempts started so far, one shuffled ordering each.
    pub fn attempts_made(&self) -> usize {
        self.generator.drawn()
    }

    pub fn run(&mut self) -> Result<Arrangement, ShuffleError> {
        for attempt in 1..=self.params.max_attempts {
            match self.try_attempt() {
                Ok(()) => {
                    info!(attempt, seed = self.seed, "found valid arrangement");
                    return Ok(Arrangement { grid: self.grid.clone(), attempt, seed: self.seed });
                }
                Err(err) => debug!(attempt, error = %err, "attempt failed"),
            }
        }
        Err(ShuffleError::AttemptsExhausted { attempts: self.params.max_attempts })
    }

    pub fn report(&self, arrangement: &Arrangement) -> ViolationReport {
        audit::audit(&arrangement.grid, &self.condition)
    }

    fn try_attempt(&mut self) -> Result<(), PlacementError> {
        let people = self.generator.next();
        GreedyPlacer::new(&self.condition).place_all(&mut self.grid, people)
    }
}
