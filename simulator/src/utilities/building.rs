/// ----- BUILDING -----
/// Toy model of the building the AI is scheduling for. Moves are applied
/// instantly: the car jumps to the destination, everyone inside gets off and
/// as many waiting people as fit get on.

use rand::Rng;
use tracing::debug;

use shared_resources::{ElevatorState, FloorState, IndexBase, Move};

use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct Building {
    floors: Vec<FloorState>,
    elevators: Vec<ElevatorState>,
    delivered: u64,
}

impl Building {
    pub fn new(num_floors: usize, num_elevators: usize, capacity: u32) -> Self {
        Building {
            floors: vec![FloorState::default(); num_floors],
            elevators: vec![ElevatorState::new(capacity); num_elevators],
            delivered: 0,
        }
    }

    pub fn floors(&self) -> &[FloorState] {
        &self.floors
    }

    pub fn elevators(&self) -> &[ElevatorState] {
        &self.elevators
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn waiting(&self) -> u64 {
        self.floors.iter().map(|f| f.people_waiting as u64).sum()
    }

    pub fn riding(&self) -> u64 {
        self.elevators.iter().map(|e| e.occupants as u64).sum()
    }

    /// Every floor independently gets one new person with probability `probability`.
    pub fn spawn_passengers<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) -> u32 {
        let mut spawned = 0;
        for floor in self.floors.iter_mut() {
            if rng.gen_bool(probability) {
                floor.people_waiting += 1;
                spawned += 1;
            }
        }
        spawned
    }

    /// Applies a zero-based move and returns how many people boarded.
    pub fn apply_move(&mut self, mv: Move) -> Result<u32, SimError> {
        if !IndexBase::Zero.contains(self.elevators.len(), mv.elevator)
            || !IndexBase::Zero.contains(self.floors.len(), mv.floor)
        {
            return Err(SimError::MoveOutOfRange {
                mv,
                elevators: self.elevators.len(),
                floors: self.floors.len(),
            });
        }

        let elevator = &mut self.elevators[mv.elevator];
        let floor = &mut self.floors[mv.floor];

        elevator.floor = mv.floor;
        self.delivered += elevator.occupants as u64;
        let left = elevator.occupants;
        elevator.occupants = 0;

        let boarded = floor.people_waiting.min(elevator.free_space());
        floor.people_waiting -= boarded;
        elevator.occupants += boarded;
        if elevator.is_full() {
            debug!(elevator = mv.elevator, floor = mv.floor, "elevator full");
        }

        debug!(elevator = mv.elevator, floor = mv.floor, left, boarded, "move applied");
        Ok(boarded)
    }
}
