/// ----- RANDOM MOVE SELECTOR -----
/// Default elevator AI. Stateless apart from its random source: every call
/// picks one elevator and one destination floor uniformly at random. Only
/// the lengths of the floor and elevator collections are looked at, so the
/// element types stay opaque.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::elevator_move::Move;
use super::error::MoveError;
use super::index_base::IndexBase;

/// Anything that can decide which moves to make on a tick. A real
/// scheduler replaces `RandomMoveSelector` behind this trait.
pub trait MoveSelector {
    fn compute_next_move<F, E>(
        &mut self,
        floors: &[F],
        elevators: &[E],
    ) -> Result<Vec<Move>, MoveError>;

    /// Convention the returned moves are expressed in.
    fn index_base(&self) -> IndexBase;
}

pub fn compute_next_move<R, F, E>(
    rng: &mut R,
    floors: &[F],
    elevators: &[E],
    base: IndexBase,
) -> Result<Vec<Move>, MoveError>
where
    R: Rng + ?Sized,
{
    let num_floors = floors.len();
    let num_elevators = elevators.len();
    if num_floors == 0 {
        return Err(MoveError::NoFloors);
    }
    if num_elevators == 0 {
        return Err(MoveError::NoElevators);
    }

    let elevator = rng.gen_range(base.range(num_elevators));
    let floor = rng.gen_range(base.range(num_floors));
    trace!(num_floors, num_elevators, elevator, floor, "random move drawn");

    Ok(vec![Move::new(elevator, floor)])
}

#[derive(Debug, Clone)]
pub struct RandomMoveSelector<R = StdRng> {
    rng: R,
    base: IndexBase,
}

impl<R: Rng> RandomMoveSelector<R> {
    pub fn new(rng: R, base: IndexBase) -> Self {
        RandomMoveSelector { rng, base }
    }
}

impl RandomMoveSelector<StdRng> {
    pub fn seeded(seed: u64, base: IndexBase) -> Self {
        Self::new(StdRng::seed_from_u64(seed), base)
    }

    pub fn from_entropy(base: IndexBase) -> Self {
        Self::new(StdRng::from_entropy(), base)
    }
}

impl<R: Rng> MoveSelector for RandomMoveSelector<R> {
    fn compute_next_move<F, E>(
        &mut self,
        floors: &[F],
        elevators: &[E],
    ) -> Result<Vec<Move>, MoveError> {
        compute_next_move(&mut self.rng, floors, elevators, self.base)
    }

    fn index_base(&self) -> IndexBase {
        self.base
    }
}
